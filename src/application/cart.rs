use crate::domain::menu::{Customization, MenuItem};
use crate::domain::money::Money;

/// One cart entry: a catalog snapshot plus the customer's choices.
///
/// The same dish can appear on several lines with different customizations;
/// lines are never merged.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub item: MenuItem,
    pub quantity: u32,
    pub customization: Customization,
}

/// Accumulates the customer's selection before checkout.
///
/// Callers uphold the quantity contract: every line added has quantity >= 1.
/// The engine trusts cart lines as-is.
#[derive(Debug, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_line(&mut self, item: MenuItem, quantity: u32, customization: Customization) {
        debug_assert!(quantity > 0, "cart lines carry a positive quantity");
        self.lines.push(CartLine {
            item,
            quantity,
            customization,
        });
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Live subtotal shown while the customer is still browsing, priced the
    /// same way checkout will price it.
    pub fn subtotal(&self, surcharge_per_addition: Money) -> Money {
        self.lines.iter().fold(Money::ZERO, |acc, line| {
            let unit =
                line.item.price + surcharge_per_addition * line.customization.addition_count();
            acc + unit * line.quantity
        })
    }
}
