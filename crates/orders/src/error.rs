//! Order service error types

use crate::types::OrderId;
use thiserror::Error;

/// Errors that can occur in the order service.
///
/// All failures are local and synchronous; nothing is retried internally.
#[derive(Error, Debug)]
pub enum OrdersError {
    /// Required header fields missing on create
    #[error("Validation error: {0}")]
    Validation(String),

    /// Referenced order id does not exist
    #[error("Order not found: {0}")]
    NotFound(OrderId),
}

/// Result type for order operations
pub type OrdersResult<T> = std::result::Result<T, OrdersError>;
