//! Order storage: trait definition and backends

pub mod memory;
pub mod traits;

pub use memory::InMemoryOrderStore;
pub use traits::OrderStore;
