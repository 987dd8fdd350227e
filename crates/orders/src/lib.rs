//! Closing order management for Closeline
//!
//! This crate owns the order aggregate: a header record (organization,
//! transaction type) plus six independently addressable sub-collections
//! (parties, services, charges, deposits, loans, fees), each mutated
//! through an atomic upsert-by-key protocol.
//!
//! # Modules
//!
//! - [`types`] - The order aggregate and sub-entity records
//! - [`store`] - The `OrderStore` trait and in-memory backend
//! - [`manager`] - Thin service layer (logging, metrics, delegation)
//! - [`api`] - Axum HTTP binding

pub mod api;
pub mod error;
pub mod manager;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use error::{OrdersError, OrdersResult};
pub use manager::OrderManager;
pub use types::{
    Charge, Deposit, Fee, Loan, NewOrder, Order, OrderElement, OrderId, Party, Service,
    DEFAULT_ID_SEED,
};

// Store exports
pub use store::memory::InMemoryOrderStore;
pub use store::traits::OrderStore;
