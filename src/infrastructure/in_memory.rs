use crate::domain::menu::MenuItem;
use crate::domain::order::{Order, OrderStatus};
use crate::domain::ports::{MenuStore, OrderStore};
use crate::error::Result;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory order ledger.
///
/// Orders are keyed by their monotonically assigned id, so `BTreeMap`
/// iteration yields them in creation order. `settle` does its status check
/// and write while holding the write lock, which makes each transition an
/// atomic step and serializes a user cancel against the confirmation timer.
#[derive(Default, Clone)]
pub struct InMemoryOrderStore {
    orders: Arc<RwLock<BTreeMap<u32, Order>>>,
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn append(&self, order: Order) -> Result<()> {
        let mut orders = self.orders.write().await;
        orders.insert(order.id, order);
        Ok(())
    }

    async fn get(&self, id: u32) -> Result<Option<Order>> {
        let orders = self.orders.read().await;
        Ok(orders.get(&id).cloned())
    }

    async fn all(&self) -> Result<Vec<Order>> {
        let orders = self.orders.read().await;
        Ok(orders.values().cloned().collect())
    }

    async fn settle(&self, id: u32, next: OrderStatus) -> Result<Option<OrderStatus>> {
        let mut orders = self.orders.write().await;
        Ok(orders.get_mut(&id).map(|order| order.settle(next)))
    }
}

/// In-memory menu catalog, keyed by item id.
#[derive(Default, Clone)]
pub struct InMemoryMenuStore {
    items: Arc<RwLock<BTreeMap<String, MenuItem>>>,
}

impl InMemoryMenuStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MenuStore for InMemoryMenuStore {
    async fn upsert(&self, item: MenuItem) -> Result<()> {
        let mut items = self.items.write().await;
        items.insert(item.id.clone(), item);
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Option<MenuItem>> {
        let items = self.items.read().await;
        Ok(items.get(id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<MenuItem>> {
        let items = self.items.read().await;
        Ok(items.values().find(|item| item.name == name).cloned())
    }

    async fn remove(&self, id: &str) -> Result<bool> {
        let mut items = self.items.write().await;
        Ok(items.remove(id).is_some())
    }

    async fn set_available(&self, id: &str, available: bool) -> Result<bool> {
        let mut items = self.items.write().await;
        match items.get_mut(id) {
            Some(item) => {
                item.available = available;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn all(&self) -> Result<Vec<MenuItem>> {
        let items = self.items.read().await;
        Ok(items.values().cloned().collect())
    }
}
