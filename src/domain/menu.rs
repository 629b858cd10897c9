use crate::domain::money::Money;
use serde::{Deserialize, Serialize};

/// A dish or drink on the menu catalog.
///
/// Catalog entries are owned by the menu store and are read-only to the order
/// lifecycle: cart lines snapshot the fields they need, so later catalog edits
/// never reach back into placed orders.
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: Money,
    pub category: String,
    pub available: bool,
}

/// Per-line customer customization.
///
/// Additions each carry a flat surcharge; removals are free; notes are free
/// text passed through to the kitchen.
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone, Default)]
pub struct Customization {
    pub additions: Vec<String>,
    pub removals: Vec<String>,
    pub notes: String,
}

impl Customization {
    pub fn addition_count(&self) -> u32 {
        self.additions.len() as u32
    }
}
