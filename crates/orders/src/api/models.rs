//! API models for the order HTTP endpoints
//!
//! Success bodies are the raw [`Order`](crate::types::Order) serialization;
//! only requests and error envelopes get dedicated models here.

use crate::types::{Charge, Deposit, Fee, Loan, NewOrder, Party, Service};
use serde::{Deserialize, Serialize};

/// Request to create a new order.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    #[serde(default)]
    pub organization: String,
    #[serde(default)]
    pub transaction_type: String,
    #[serde(default)]
    pub parties: Option<Vec<Party>>,
    #[serde(default)]
    pub services: Option<Vec<Service>>,
    #[serde(default)]
    pub charges: Option<Vec<Charge>>,
    #[serde(default)]
    pub deposits: Option<Vec<Deposit>>,
    #[serde(default)]
    pub loans: Option<Vec<Loan>>,
    #[serde(default)]
    pub fees: Option<Vec<Fee>>,
}

impl From<CreateOrderRequest> for NewOrder {
    fn from(req: CreateOrderRequest) -> Self {
        NewOrder {
            organization: req.organization,
            transaction_type: req.transaction_type,
            parties: req.parties,
            services: req.services,
            charges: req.charges,
            deposits: req.deposits,
            loans: req.loans,
            fees: req.fees,
        }
    }
}

/// Error detail
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(default)]
    pub details: Option<serde_json::Value>,
}

/// Generic error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: ErrorDetail,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: ErrorDetail {
                code: code.into(),
                message: message.into(),
                details: None,
            },
        }
    }
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
}
