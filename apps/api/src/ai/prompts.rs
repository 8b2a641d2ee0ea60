// Prompt constants for the AI JD endpoint.

/// System prompt for JD-to-requirement extraction. Names the exact field set
/// the frontend form expects and shows a worked example.
pub const JD_EXTRACT_SYSTEM: &str = "You are an ATS assistant. \
    Extract structured information from the job description and return ONLY valid JSON \
    (no markdown, no code blocks) with these exact fields: \
    title, location, skills_required, experience_required, ctc_range, ectc_range, description. \
    Return the JSON object directly, for example: \
    {\"title\": \"Software Engineer\", \"location\": \"Remote\", \
    \"skills_required\": \"Python, React\", \"experience_required\": \"3-5 years\", \
    \"ctc_range\": \"10-15 LPA\", \"ectc_range\": \"12-18 LPA\", \
    \"description\": \"Job description here\"}";
