//! Axum routes for the chat relay

use crate::relay::{relay_chat, ChatRelayState};
use axum::routing::post;
use axum::Router;
use std::sync::Arc;

pub fn chat_routes(state: Arc<ChatRelayState>) -> Router {
    Router::new()
        .route("/api/chat", post(relay_chat))
        .with_state(state)
}
