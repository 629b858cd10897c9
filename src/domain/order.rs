use crate::domain::menu::Customization;
use crate::domain::money::Money;
use serde::{Deserialize, Serialize};
use std::time::SystemTime;

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Cancelled,
}

impl OrderStatus {
    /// Lowercase label, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

/// A single dish on an order, snapshotted at checkout time.
///
/// `unit_price` already includes the per-addition surcharge; it is never
/// recomputed from the live catalog.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct OrderLine {
    pub name: String,
    pub quantity: u32,
    pub unit_price: Money,
    pub customization: Customization,
}

impl OrderLine {
    pub fn line_total(&self) -> Money {
        self.unit_price * self.quantity
    }
}

/// A placed customer order, tracked through the cancellation window.
///
/// Orders are append-only: they are created by checkout, moved between
/// statuses by `settle`, and never deleted. A cancelled order stays on the
/// tab for display, it just stops counting toward the bill.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Order {
    pub id: u32,
    pub lines: Vec<OrderLine>,
    pub total: Money,
    pub status: OrderStatus,
    pub placed_at: SystemTime,
}

impl Order {
    /// Whether the customer can still back out: true only while pending.
    pub fn can_cancel(&self) -> bool {
        self.status == OrderStatus::Pending
    }

    /// Moves a pending order into a terminal status.
    ///
    /// Returns the status the order held before the call; an order that
    /// already left `Pending` is left untouched, so the first transition to
    /// execute wins and the second observes it lost.
    pub fn settle(&mut self, next: OrderStatus) -> OrderStatus {
        let prior = self.status;
        if prior == OrderStatus::Pending && next != OrderStatus::Pending {
            self.status = next;
        }
        prior
    }
}
