//! Order manager - the service layer over the order store
//!
//! The manager is deliberately thin: every call resolves to exactly one
//! store operation. Its job is logging, metrics, and owning the
//! `Arc<dyn OrderStore>` seam so the API layer never touches a backend
//! directly.

use crate::error::OrdersResult;
use crate::store::traits::OrderStore;
use crate::types::{NewOrder, Order, OrderElement, OrderId};
use std::sync::Arc;

pub struct OrderManager {
    store: Arc<dyn OrderStore>,
}

impl OrderManager {
    pub fn new(store: Arc<dyn OrderStore>) -> Self {
        Self { store }
    }

    /// Create a new order with the given header fields.
    pub async fn create_order(&self, new_order: NewOrder) -> OrdersResult<Order> {
        let order = self.store.create(new_order).await?;

        metrics::counter!("orders_created_total").increment(1);
        tracing::info!(
            order_id = order.id,
            organization = %order.organization,
            transaction_type = %order.transaction_type,
            "Order created"
        );

        Ok(order)
    }

    /// Get an order by id.
    pub async fn get_order(&self, id: OrderId) -> OrdersResult<Option<Order>> {
        self.store.get(id).await
    }

    /// Delete an order. Returns whether it existed.
    pub async fn delete_order(&self, id: OrderId) -> OrdersResult<bool> {
        let existed = self.store.delete(id).await?;
        if existed {
            tracing::info!(order_id = id, "Order deleted");
        } else {
            tracing::debug!(order_id = id, "Delete for unknown order");
        }
        Ok(existed)
    }

    /// List all orders.
    pub async fn list_orders(&self) -> OrdersResult<Vec<Order>> {
        self.store.list_all().await
    }

    /// Add or replace one sub-collection element on an order.
    pub async fn upsert_element(
        &self,
        id: OrderId,
        element: OrderElement,
    ) -> OrdersResult<Order> {
        let collection = element.collection();
        let order = self.store.upsert_element(id, element).await?;

        metrics::counter!("order_upserts_total", "collection" => collection).increment(1);
        tracing::info!(order_id = id, collection, "Order element upserted");

        Ok(order)
    }
}
