use crate::application::cart::Cart;
use crate::application::engine::OrderEngine;
use crate::application::payment::{PaymentMethod, PaymentReceipt, PaymentSimulator};
use crate::domain::menu::{Customization, MenuItem};
use crate::domain::money::Money;
use crate::domain::ports::DynMenuStore;
use crate::error::{ComandaError, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum SessionAction {
    Add,
    Checkout,
    Cancel,
    Wait,
    Pay,
}

/// One scripted customer action, as read from a session CSV.
///
/// Only `action` is always present; the other columns are filled per action
/// and left empty otherwise. `additions` and `removals` are `|`-separated.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct SessionRecord {
    pub action: SessionAction,
    pub item: Option<String>,
    pub quantity: Option<u32>,
    pub additions: Option<String>,
    pub removals: Option<String>,
    pub notes: Option<String>,
    pub order: Option<u32>,
    pub method: Option<PaymentMethod>,
    pub tendered: Option<Decimal>,
    pub wait_ms: Option<u64>,
}

/// Replays scripted customer actions against the catalog, cart, engine and
/// payment simulator, standing in for the interactive UI.
pub struct SessionRunner {
    engine: OrderEngine,
    menu: DynMenuStore,
    payments: PaymentSimulator,
    cart: Cart,
    receipts: Vec<PaymentReceipt>,
}

impl SessionRunner {
    pub fn new(engine: OrderEngine, menu: DynMenuStore, payments: PaymentSimulator) -> Self {
        Self {
            engine,
            menu,
            payments,
            cart: Cart::new(),
            receipts: Vec::new(),
        }
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn receipts(&self) -> &[PaymentReceipt] {
        &self.receipts
    }

    /// Applies a single record. Errors are per-record and recoverable: the
    /// session keeps its state and the caller decides whether to continue.
    pub async fn apply(&mut self, record: SessionRecord) -> Result<()> {
        match record.action {
            SessionAction::Add => {
                let key = record
                    .item
                    .ok_or_else(|| ComandaError::InvalidRecord("add needs an item".into()))?;
                let item = self.resolve_item(&key).await?;
                let customization = Customization {
                    additions: split_labels(record.additions.as_deref()),
                    removals: split_labels(record.removals.as_deref()),
                    notes: record.notes.unwrap_or_default(),
                };
                let quantity = record.quantity.unwrap_or(1);
                if quantity == 0 {
                    return Err(ComandaError::InvalidRecord(
                        "quantity must be at least 1".into(),
                    ));
                }
                debug!(item = %item.name, quantity, "line added to cart");
                self.cart.add_line(item, quantity, customization);
                Ok(())
            }
            SessionAction::Checkout => {
                self.engine.checkout_cart(&mut self.cart).await?;
                Ok(())
            }
            SessionAction::Cancel => {
                let id = record
                    .order
                    .ok_or_else(|| ComandaError::InvalidRecord("cancel needs an order id".into()))?;
                self.engine.cancel(id).await
            }
            SessionAction::Wait => {
                let wait_ms = record
                    .wait_ms
                    .ok_or_else(|| ComandaError::InvalidRecord("wait needs wait_ms".into()))?;
                tokio::time::sleep(Duration::from_millis(wait_ms)).await;
                Ok(())
            }
            SessionAction::Pay => {
                let bill = self.engine.bill().await?;
                let method = record.method.unwrap_or(PaymentMethod::Credit);
                let tendered = record.tendered.map(Money::new);
                let receipt = self.payments.settle(bill.total, method, tendered).await?;
                self.receipts.push(receipt);
                Ok(())
            }
        }
    }

    /// Items are addressed by id or, as scripts usually do, by display name.
    async fn resolve_item(&self, key: &str) -> Result<MenuItem> {
        let item = match self.menu.get(key).await? {
            Some(item) => item,
            None => self
                .menu
                .find_by_name(key)
                .await?
                .ok_or_else(|| ComandaError::UnknownItem(key.to_string()))?,
        };
        if !item.available {
            return Err(ComandaError::ItemUnavailable(item.name));
        }
        Ok(item)
    }
}

fn split_labels(raw: Option<&str>) -> Vec<String> {
    raw.map(|value| {
        value
            .split('|')
            .map(str::trim)
            .filter(|label| !label.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::engine::EngineConfig;
    use crate::domain::order::OrderStatus;
    use crate::domain::ports::MenuStore;
    use crate::infrastructure::in_memory::{InMemoryMenuStore, InMemoryOrderStore};
    use rust_decimal_macros::dec;
    use std::sync::Arc;

    async fn runner() -> SessionRunner {
        let menu = Arc::new(InMemoryMenuStore::new());
        menu.upsert(MenuItem {
            id: "1".into(),
            name: "Picanha Grelhada".into(),
            description: "Com farofa e vinagrete".into(),
            price: Money::new(dec!(20.00)),
            category: "Pratos Principais".into(),
            available: true,
        })
        .await
        .unwrap();
        menu.upsert(MenuItem {
            id: "2".into(),
            name: "Moqueca de Peixe".into(),
            description: String::new(),
            price: Money::new(dec!(50.00)),
            category: "Pratos Principais".into(),
            available: false,
        })
        .await
        .unwrap();

        let engine = OrderEngine::new(
            Arc::new(InMemoryOrderStore::new()),
            EngineConfig::default(),
        );
        SessionRunner::new(engine, menu, PaymentSimulator::default())
    }

    fn record(action: SessionAction) -> SessionRecord {
        SessionRecord {
            action,
            item: None,
            quantity: None,
            additions: None,
            removals: None,
            notes: None,
            order: None,
            method: None,
            tendered: None,
            wait_ms: None,
        }
    }

    #[tokio::test]
    async fn test_add_then_checkout_places_an_order() {
        let mut runner = runner().await;

        let mut add = record(SessionAction::Add);
        add.item = Some("Picanha Grelhada".into());
        add.quantity = Some(3);
        add.additions = Some("Bacon|Queijo".into());
        runner.apply(add).await.unwrap();
        assert_eq!(runner.cart().lines().len(), 1);

        runner.apply(record(SessionAction::Checkout)).await.unwrap();
        assert!(runner.cart().is_empty());

        let orders = runner.engine.orders().await.unwrap();
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].total, Money::new(dec!(90.00)));
        assert_eq!(orders[0].status, OrderStatus::Pending);
    }

    #[tokio::test]
    async fn test_add_resolves_by_id_as_well() {
        let mut runner = runner().await;
        let mut add = record(SessionAction::Add);
        add.item = Some("1".into());
        runner.apply(add).await.unwrap();
        assert_eq!(runner.cart().lines()[0].item.name, "Picanha Grelhada");
    }

    #[tokio::test]
    async fn test_add_unknown_item() {
        let mut runner = runner().await;
        let mut add = record(SessionAction::Add);
        add.item = Some("Feijoada".into());
        let result = runner.apply(add).await;
        assert!(matches!(result, Err(ComandaError::UnknownItem(_))));
        assert!(runner.cart().is_empty());
    }

    #[tokio::test]
    async fn test_add_unavailable_item() {
        let mut runner = runner().await;
        let mut add = record(SessionAction::Add);
        add.item = Some("Moqueca de Peixe".into());
        let result = runner.apply(add).await;
        assert!(matches!(result, Err(ComandaError::ItemUnavailable(_))));
    }

    #[tokio::test]
    async fn test_catalog_edits_do_not_touch_placed_orders() {
        let mut runner = runner().await;

        let mut add = record(SessionAction::Add);
        add.item = Some("Picanha Grelhada".into());
        runner.apply(add).await.unwrap();
        runner.apply(record(SessionAction::Checkout)).await.unwrap();

        // Reprice the dish on the catalog after the fact.
        let mut repriced = runner.menu.get("1").await.unwrap().unwrap();
        repriced.price = Money::new(dec!(99.00));
        runner.menu.upsert(repriced).await.unwrap();

        let orders = runner.engine.orders().await.unwrap();
        assert_eq!(orders[0].lines[0].unit_price, Money::new(dec!(20.00)));
        assert_eq!(orders[0].total, Money::new(dec!(20.00)));
    }

    #[tokio::test]
    async fn test_add_with_zero_quantity_is_invalid() {
        let mut runner = runner().await;
        let mut add = record(SessionAction::Add);
        add.item = Some("Picanha Grelhada".into());
        add.quantity = Some(0);
        let result = runner.apply(add).await;
        assert!(matches!(result, Err(ComandaError::InvalidRecord(_))));
        assert!(runner.cart().is_empty());
    }

    #[tokio::test]
    async fn test_cancel_without_order_id_is_invalid() {
        let mut runner = runner().await;
        let result = runner.apply(record(SessionAction::Cancel)).await;
        assert!(matches!(result, Err(ComandaError::InvalidRecord(_))));
    }

    #[tokio::test(start_paused = true)]
    async fn test_pay_records_a_receipt() {
        let mut runner = runner().await;

        let mut add = record(SessionAction::Add);
        add.item = Some("Picanha Grelhada".into());
        runner.apply(add).await.unwrap();
        runner.apply(record(SessionAction::Checkout)).await.unwrap();

        let mut pay = record(SessionAction::Pay);
        pay.method = Some(PaymentMethod::Cash);
        pay.tendered = Some(dec!(30.00));
        runner.apply(pay).await.unwrap();

        let receipts = runner.receipts();
        assert_eq!(receipts.len(), 1);
        // 20.00 + 10% service fee.
        assert_eq!(receipts[0].amount, Money::new(dec!(22.00)));
        assert_eq!(receipts[0].change, Money::new(dec!(8.00)));
    }

    #[test]
    fn test_split_labels() {
        assert_eq!(
            split_labels(Some("Bacon| Queijo |")),
            vec!["Bacon".to_string(), "Queijo".to_string()]
        );
        assert!(split_labels(Some("")).is_empty());
        assert!(split_labels(None).is_empty());
    }
}
