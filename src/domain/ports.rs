use super::menu::MenuItem;
use super::order::{Order, OrderStatus};
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Shared handles: the confirmation timer task holds a second reference to
/// the order store, so the ports are passed around as `Arc` rather than `Box`.
pub type DynOrderStore = Arc<dyn OrderStore>;
pub type DynMenuStore = Arc<dyn MenuStore>;

#[async_trait]
pub trait OrderStore: Send + Sync {
    async fn append(&self, order: Order) -> Result<()>;
    async fn get(&self, id: u32) -> Result<Option<Order>>;
    /// All orders in creation order.
    async fn all(&self) -> Result<Vec<Order>>;
    /// Atomically applies `Order::settle` to the stored order, in one step
    /// with the status check. Returns the status the order held before the
    /// call, or `None` for an unknown id. This is the serialization point
    /// for the cancel/confirm race.
    async fn settle(&self, id: u32, next: OrderStatus) -> Result<Option<OrderStatus>>;
}

#[async_trait]
pub trait MenuStore: Send + Sync {
    async fn upsert(&self, item: MenuItem) -> Result<()>;
    async fn get(&self, id: &str) -> Result<Option<MenuItem>>;
    async fn find_by_name(&self, name: &str) -> Result<Option<MenuItem>>;
    /// Removes the item; returns whether it existed.
    async fn remove(&self, id: &str) -> Result<bool>;
    /// Flips availability without touching the rest of the record; returns
    /// whether the item existed.
    async fn set_available(&self, id: &str, available: bool) -> Result<bool>;
    /// All items in stable id order.
    async fn all(&self) -> Result<Vec<MenuItem>>;
}
