//! Response normalizer — coerces raw LLM text into a single JSON object.
//!
//! The model is asked for bare JSON but in practice wraps it in prose or
//! markdown fences. Normalization is a pure function: trim, strip fences,
//! take the first-`{`-to-last-`}` span, parse. A reply that still will not
//! parse is a soft failure carrying the raw text verbatim, never an error.

use serde_json::{Map, Value};

/// Outcome of normalizing one model reply.
#[derive(Debug, Clone, PartialEq)]
pub enum Normalized {
    /// The reply contained a parseable JSON object. Keys are whatever the
    /// model emitted; the requested fields are advisory, not enforced.
    Parsed(Map<String, Value>),
    /// No JSON object could be extracted. Carries the original reply
    /// verbatim so a human can read it downstream.
    Unparsed { raw: String },
}

impl Normalized {
    pub fn is_parsed(&self) -> bool {
        matches!(self, Normalized::Parsed(_))
    }
}

/// Extracts a JSON object from an arbitrary model reply.
///
/// Known limitation, kept on purpose: the candidate span runs from the very
/// first `{` to the very last `}`, so two sequential objects (or trailing
/// prose containing a brace) over-capture and fail to parse. With exactly
/// one object present the span always brackets it.
pub fn normalize(raw: &str) -> Normalized {
    let cleaned = strip_fences(raw.trim());

    let candidate = match (cleaned.find('{'), cleaned.rfind('}')) {
        (Some(start), Some(end)) if end > start => &cleaned[start..=end],
        _ => cleaned.as_str(),
    };

    match serde_json::from_str::<Value>(candidate) {
        Ok(Value::Object(map)) => Normalized::Parsed(map),
        _ => Normalized::Unparsed {
            raw: raw.to_string(),
        },
    }
}

/// Removes markdown code-fence markers when the reply starts fenced.
/// Both the ```json tagged form and the bare ``` form are stripped wherever
/// they occur in the text, matching how models close the fence they opened.
fn strip_fences(text: &str) -> String {
    if text.starts_with("```json") {
        text.replace("```json", "").replace("```", "").trim().to_string()
    } else if text.starts_with("```") {
        text.replace("```", "").trim().to_string()
    } else {
        text.to_string()
    }
}
