//! Chat relay gateway for Closeline
//!
//! Forwards `{message, userId, context}` payloads from the UI to the
//! configured conversational agent service and returns the response
//! unmodified. The gateway holds no order state; it is a pure pass-through.

pub mod relay;
pub mod routes;

pub use relay::{ChatRelayState, ChatRequest};
pub use routes::chat_routes;
