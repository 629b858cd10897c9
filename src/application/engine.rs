use crate::application::cart::{Cart, CartLine};
use crate::domain::money::Money;
use crate::domain::order::{Order, OrderLine, OrderStatus};
use crate::domain::ports::DynOrderStore;
use crate::error::{ComandaError, Result};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::{Duration, SystemTime};
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Tunable business constants of the tab engine.
#[derive(Debug, Clone, Copy)]
pub struct EngineConfig {
    /// Flat price increment per chosen addition, regardless of which.
    pub surcharge_per_addition: Money,
    /// How long a fresh order stays cancellable before the kitchen locks it.
    pub confirmation_delay: Duration,
    /// Fee applied on top of the subtotal at bill time; never stored on orders.
    pub service_fee_rate: Decimal,
    /// First id handed out; ids grow from here and are never reused.
    pub first_order_id: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            surcharge_per_addition: Money::new(dec!(5.00)),
            confirmation_delay: Duration::from_secs(10),
            service_fee_rate: dec!(0.10),
            first_order_id: 1001,
        }
    }
}

/// A customer's tab at a point in time: subtotal over non-cancelled orders,
/// the service fee on top, and the payable total.
#[derive(Debug, Serialize, PartialEq, Clone, Copy)]
pub struct Bill {
    pub subtotal: Money,
    pub service_fee: Money,
    pub total: Money,
}

impl Bill {
    /// Pure aggregation over an order collection. Cancelled orders do not
    /// count; everything else contributes its frozen total.
    pub fn for_orders(orders: &[Order], service_fee_rate: Decimal) -> Self {
        let subtotal = orders
            .iter()
            .filter(|order| order.status != OrderStatus::Cancelled)
            .fold(Money::ZERO, |acc, order| acc + order.total);
        let service_fee = Money::new((subtotal.0 * service_fee_rate).round_dp(2));
        Self {
            subtotal,
            service_fee,
            total: subtotal + service_fee,
        }
    }
}

/// The order lifecycle manager.
///
/// Owns id assignment, the pending -> confirmed/cancelled transition rules
/// and the per-order confirmation timer. All state lives behind the injected
/// store; the engine itself is a cheaply clonable handle, which is how the
/// spawned timer task reaches back into it.
#[derive(Clone)]
pub struct OrderEngine {
    orders: DynOrderStore,
    config: EngineConfig,
    next_id: Arc<AtomicU32>,
    timers: Arc<Mutex<HashMap<u32, JoinHandle<()>>>>,
}

impl OrderEngine {
    pub fn new(orders: DynOrderStore, config: EngineConfig) -> Self {
        let next_id = Arc::new(AtomicU32::new(config.first_order_id));
        Self {
            orders,
            config,
            next_id,
            timers: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Turns a finalized cart into a pending order.
    ///
    /// Prices each line as `base + surcharge * additions`, freezes the total,
    /// assigns the next id and arms the one-shot confirmation timer for it.
    pub async fn checkout(&self, lines: &[CartLine]) -> Result<Order> {
        if lines.is_empty() {
            return Err(ComandaError::EmptyCart);
        }

        let lines: Vec<OrderLine> = lines
            .iter()
            .map(|line| OrderLine {
                name: line.item.name.clone(),
                quantity: line.quantity,
                unit_price: line.item.price
                    + self.config.surcharge_per_addition * line.customization.addition_count(),
                customization: line.customization.clone(),
            })
            .collect();
        let total = lines
            .iter()
            .fold(Money::ZERO, |acc, line| acc + line.line_total());

        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let order = Order {
            id,
            lines,
            total,
            status: OrderStatus::Pending,
            placed_at: SystemTime::now(),
        };

        self.orders.append(order.clone()).await?;
        self.arm_confirmation(id).await;
        info!(order = id, total = %order.total, "order placed");
        Ok(order)
    }

    /// Checkout that also clears the cart, atomically from the caller's view:
    /// on any failure the cart is left exactly as it was.
    pub async fn checkout_cart(&self, cart: &mut Cart) -> Result<Order> {
        let order = self.checkout(cart.lines()).await?;
        cart.clear();
        Ok(order)
    }

    /// Customer-initiated cancellation, only honored inside the window.
    pub async fn cancel(&self, id: u32) -> Result<()> {
        match self.orders.settle(id, OrderStatus::Cancelled).await? {
            None => Err(ComandaError::OrderNotFound(id)),
            Some(OrderStatus::Pending) => {
                // The status transition above already won the race; dropping
                // the timer merely saves a wasted wake-up.
                if let Some(handle) = self.timers.lock().await.remove(&id) {
                    handle.abort();
                }
                info!(order = id, "order cancelled");
                Ok(())
            }
            Some(prior) => {
                debug!(order = id, status = ?prior, "cancellation refused");
                Err(ComandaError::CancellationNotAllowed(id))
            }
        }
    }

    /// Kitchen confirmation, normally invoked by the timer armed at checkout.
    ///
    /// Idempotent-safe: if the order already left `Pending` (a cancel won the
    /// race, or the timer somehow fired twice) this is a no-op and never
    /// overwrites a cancelled order.
    pub async fn confirm(&self, id: u32) -> Result<()> {
        match self.orders.settle(id, OrderStatus::Confirmed).await? {
            Some(OrderStatus::Pending) => {
                info!(order = id, "order confirmed");
                Ok(())
            }
            prior => {
                debug!(order = id, status = ?prior, "confirmation skipped");
                Ok(())
            }
        }
    }

    pub async fn order(&self, id: u32) -> Result<Option<Order>> {
        self.orders.get(id).await
    }

    /// All orders on the tab, in creation order.
    pub async fn orders(&self) -> Result<Vec<Order>> {
        self.orders.all().await
    }

    /// The current bill: non-cancelled totals plus the service fee.
    pub async fn bill(&self) -> Result<Bill> {
        let orders = self.orders.all().await?;
        Ok(Bill::for_orders(&orders, self.config.service_fee_rate))
    }

    async fn arm_confirmation(&self, id: u32) {
        let engine = self.clone();
        let delay = self.config.confirmation_delay;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if let Err(error) = engine.confirm(id).await {
                warn!(order = id, %error, "confirmation timer failed");
            }
            engine.timers.lock().await.remove(&id);
        });
        self.timers.lock().await.insert(id, handle);
    }
}
