// AI JD endpoint: prompt construction, model call, response normalization.
// All LLM calls go through llm_client — no direct provider calls here.

pub mod handlers;
pub mod normalizer;
pub mod prompts;
