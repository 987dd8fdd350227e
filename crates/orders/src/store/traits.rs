//! OrderStore trait definition

use crate::error::OrdersResult;
use crate::types::{NewOrder, Order, OrderElement, OrderId};
use async_trait::async_trait;

/// OrderStore trait - the canonical owner of order identity and state.
///
/// All reads and writes go through the store; it is the only place
/// concurrency is reasoned about. Implementations must be safe under
/// arbitrary interleavings with no external locking by callers.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Create a new order.
    ///
    /// Allocates the next id atomically and inserts the initial snapshot.
    /// Fails with `OrdersError::Validation` if `organization` or
    /// `transaction_type` is blank; no state changes on failure.
    async fn create(&self, new_order: NewOrder) -> OrdersResult<Order>;

    /// Get the current snapshot of an order, if it exists.
    async fn get(&self, id: OrderId) -> OrdersResult<Option<Order>>;

    /// Remove an order. Returns whether it existed; removing a missing
    /// order is not an error.
    async fn delete(&self, id: OrderId) -> OrdersResult<bool>;

    /// Snapshot of all current orders. Iteration order is unspecified and
    /// not stable across concurrent mutation.
    async fn list_all(&self) -> OrdersResult<Vec<Order>>;

    /// Add or replace one element of a sub-collection, keyed by the
    /// element's key field (case-insensitive).
    ///
    /// The read-modify-publish sequence is atomic per order id: two
    /// concurrent upserts on the same id cannot lose an update, and
    /// upserts on different ids do not block each other.
    async fn upsert_element(&self, id: OrderId, element: OrderElement) -> OrdersResult<Order>;
}
