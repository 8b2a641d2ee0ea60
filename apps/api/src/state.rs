use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::LlmInvoke;

/// Shared application state injected into all route handlers via Axum
/// extractors. Requests share no mutable state; database connections are
/// opened per request from `config.db` rather than held here.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Model invocation seam. Production: `AnthropicClient`; tests swap in a
    /// canned implementation.
    pub llm: Arc<dyn LlmInvoke>,
}
