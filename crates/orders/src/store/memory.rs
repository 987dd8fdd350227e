//! In-memory order store implementation

use crate::error::{OrdersError, OrdersResult};
use crate::store::traits::OrderStore;
use crate::types::{NewOrder, Order, OrderElement, OrderId, DEFAULT_ID_SEED};
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};

/// In-memory order store.
///
/// Orders live in a sharded concurrent map keyed by id. Upserts take the
/// entry's exclusive guard for the whole read-modify-publish sequence, so
/// concurrent upserts on the same order serialize while orders on other
/// shards proceed unblocked. Ids come from a process-wide atomic counter;
/// state is discarded on shutdown.
pub struct InMemoryOrderStore {
    orders: DashMap<OrderId, Order>,
    next_id: AtomicU64,
}

impl InMemoryOrderStore {
    /// Create a store with the default id seed (first order gets id 5000).
    pub fn new() -> Self {
        Self::with_seed(DEFAULT_ID_SEED)
    }

    /// Create a store whose first allocated id is `seed + 1`.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            orders: DashMap::new(),
            next_id: AtomicU64::new(seed),
        }
    }

    /// Number of orders currently stored.
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

impl Default for InMemoryOrderStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn create(&self, new_order: NewOrder) -> OrdersResult<Order> {
        new_order.validate().map_err(OrdersError::Validation)?;

        // Allocation happens after validation so rejected requests burn no ids
        // and leave the store untouched.
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let order = Order::new(id, new_order);
        self.orders.insert(id, order.clone());

        Ok(order)
    }

    async fn get(&self, id: OrderId) -> OrdersResult<Option<Order>> {
        Ok(self.orders.get(&id).map(|entry| entry.value().clone()))
    }

    async fn delete(&self, id: OrderId) -> OrdersResult<bool> {
        Ok(self.orders.remove(&id).is_some())
    }

    async fn list_all(&self) -> OrdersResult<Vec<Order>> {
        Ok(self
            .orders
            .iter()
            .map(|entry| entry.value().clone())
            .collect())
    }

    async fn upsert_element(&self, id: OrderId, element: OrderElement) -> OrdersResult<Order> {
        // The entry guard is held across the whole read-modify-publish, which
        // makes the upsert linearizable per order id.
        let mut entry = self.orders.get_mut(&id).ok_or(OrdersError::NotFound(id))?;
        let updated = entry.value().clone().with_element(element);
        *entry.value_mut() = updated.clone();

        Ok(updated)
    }
}
