//! Chat relay handler
//!
//! Forwards chat messages to the configured downstream agent endpoint and
//! returns whatever body and content type come back, unmodified. The
//! gateway performs no transformation, retries, or interpretation of the
//! conversation.

use axum::{
    body::Bytes,
    extract::State,
    http::{header, StatusCode},
    Json,
};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Inbound chat message to relay.
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(rename = "userId", default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<serde_json::Value>,
}

/// Shared state for the relay handler.
pub struct ChatRelayState {
    pub client: Client,
    /// Downstream agent endpoint; relaying fails with 500 when unset.
    pub endpoint: Option<String>,
}

impl ChatRelayState {
    pub fn new(endpoint: Option<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint,
        }
    }
}

type RelayResponse = (StatusCode, [(header::HeaderName, String); 1], Bytes);
type RelayError = (StatusCode, Json<serde_json::Value>);

fn relay_error(status: StatusCode, code: &str, message: String) -> RelayError {
    (
        status,
        Json(serde_json::json!({
            "success": false,
            "error": { "code": code, "message": message }
        })),
    )
}

/// Relay a chat message to the agent endpoint.
pub async fn relay_chat(
    State(state): State<Arc<ChatRelayState>>,
    Json(req): Json<ChatRequest>,
) -> Result<RelayResponse, RelayError> {
    let endpoint = state.endpoint.as_deref().ok_or_else(|| {
        relay_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "CHAT_NOT_CONFIGURED",
            "Agent endpoint is not configured.".to_string(),
        )
    })?;

    tracing::debug!(endpoint, user_id = ?req.user_id, "Relaying chat message");

    let response = state
        .client
        .post(endpoint)
        .json(&req)
        .send()
        .await
        .map_err(|e| {
            tracing::error!(%e, endpoint, "Agent endpoint unreachable");
            relay_error(StatusCode::BAD_GATEWAY, "AGENT_UNREACHABLE", e.to_string())
        })?;

    let status =
        StatusCode::from_u16(response.status().as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("application/json")
        .to_string();
    let body = response.bytes().await.map_err(|e| {
        tracing::error!(%e, endpoint, "Failed to read agent response");
        relay_error(StatusCode::BAD_GATEWAY, "AGENT_UNREACHABLE", e.to_string())
    })?;

    Ok((status, [(header::CONTENT_TYPE, content_type)], body))
}
