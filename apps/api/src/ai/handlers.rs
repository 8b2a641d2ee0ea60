use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::ai::normalizer::{normalize, Normalized};
use crate::ai::prompts::JD_EXTRACT_SYSTEM;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct JdToRequirementRequest {
    #[serde(default)]
    pub jd_text: String,
}

/// Response for the JD endpoint. `raw_output` and `error` appear only on a
/// soft parse failure; parse success carries just the extracted object.
#[derive(Debug, Serialize)]
pub struct JdToRequirementResponse {
    pub suggested_requirement: Map<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// POST /api/ai/jd-to-requirement
///
/// Forwards the JD text to the model and normalizes the reply. A reply that
/// cannot be structured is still a 200 with the raw text echoed back, so the
/// frontend can fall back to manual entry instead of showing an error.
pub async fn jd_to_requirement(
    State(state): State<AppState>,
    Json(req): Json<JdToRequirementRequest>,
) -> Result<Json<JdToRequirementResponse>, AppError> {
    if req.jd_text.is_empty() {
        return Err(AppError::Validation("jd_text is required".to_string()));
    }

    let raw = state
        .llm
        .call(JD_EXTRACT_SYSTEM, &json!({}), &req.jd_text)
        .await
        .map_err(|e| AppError::Llm(e.to_string()))?;

    let response = match normalize(&raw) {
        Normalized::Parsed(map) => JdToRequirementResponse {
            suggested_requirement: map,
            raw_output: None,
            error: None,
        },
        Normalized::Unparsed { raw } => JdToRequirementResponse {
            suggested_requirement: Map::new(),
            raw_output: Some(raw),
            error: Some("Could not parse JSON from AI response".to_string()),
        },
    };

    Ok(Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    use crate::config::{Config, DbConfig};
    use crate::llm_client::{LlmError, LlmInvoke};

    /// Canned LLM that replays a fixed reply, recording nothing.
    struct CannedLlm {
        reply: &'static str,
    }

    #[async_trait]
    impl LlmInvoke for CannedLlm {
        async fn call(&self, _: &str, _: &Value, _: &str) -> Result<String, LlmError> {
            Ok(self.reply.to_string())
        }
    }

    /// LLM that always fails at the transport level.
    struct FailingLlm;

    #[async_trait]
    impl LlmInvoke for FailingLlm {
        async fn call(&self, _: &str, _: &Value, _: &str) -> Result<String, LlmError> {
            Err(LlmError::EmptyContent)
        }
    }

    fn test_state(llm: Arc<dyn LlmInvoke>) -> AppState {
        AppState {
            config: Config {
                db: DbConfig::default(),
                anthropic_api_key: "test-key".to_string(),
                port: 8080,
                rust_log: "info".to_string(),
            },
            llm,
        }
    }

    fn request(jd_text: &str) -> Json<JdToRequirementRequest> {
        Json(JdToRequirementRequest {
            jd_text: jd_text.to_string(),
        })
    }

    #[tokio::test]
    async fn test_empty_jd_text_is_400() {
        let state = test_state(Arc::new(CannedLlm { reply: "{}" }));
        let result = jd_to_requirement(State(state), request("")).await;
        let err = result.expect_err("empty jd_text must be rejected");
        let resp = err.into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_nonempty_jd_text_is_never_400() {
        let state = test_state(Arc::new(CannedLlm {
            reply: r#"{"title": "Engineer"}"#,
        }));
        let result = jd_to_requirement(State(state), request("any jd text")).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_fenced_reply_yields_suggested_requirement() {
        let state = test_state(Arc::new(CannedLlm {
            reply: "Here is the result:\n```json\n{\"title\":\"Engineer\"}\n```",
        }));
        let Json(body) = jd_to_requirement(State(state), request("hiring an engineer"))
            .await
            .unwrap();
        assert_eq!(body.suggested_requirement["title"], "Engineer");
        assert!(body.raw_output.is_none());
        assert!(body.error.is_none());
    }

    #[tokio::test]
    async fn test_unparseable_reply_is_soft_200() {
        let state = test_state(Arc::new(CannedLlm {
            reply: "not json at all",
        }));
        let Json(body) = jd_to_requirement(State(state), request("hiring an engineer"))
            .await
            .unwrap();
        assert!(body.suggested_requirement.is_empty());
        assert_eq!(body.raw_output.as_deref(), Some("not json at all"));
        assert_eq!(
            body.error.as_deref(),
            Some("Could not parse JSON from AI response")
        );
    }

    #[tokio::test]
    async fn test_llm_transport_failure_is_500() {
        let state = test_state(Arc::new(FailingLlm));
        let err = jd_to_requirement(State(state), request("hiring an engineer"))
            .await
            .expect_err("transport failure must propagate");
        let resp = err.into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_soft_failure_body_shape() {
        let body = JdToRequirementResponse {
            suggested_requirement: Map::new(),
            raw_output: Some("raw".to_string()),
            error: Some("Could not parse JSON from AI response".to_string()),
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["suggested_requirement"], json!({}));
        assert_eq!(value["raw_output"], "raw");
    }

    #[test]
    fn test_success_body_omits_raw_output_and_error() {
        let mut map = Map::new();
        map.insert("title".to_string(), json!("Engineer"));
        let body = JdToRequirementResponse {
            suggested_requirement: map,
            raw_output: None,
            error: None,
        };
        let value = serde_json::to_value(&body).unwrap();
        assert!(value.get("raw_output").is_none());
        assert!(value.get("error").is_none());
    }
}
