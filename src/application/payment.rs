use crate::domain::money::Money;
use crate::error::{ComandaError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::info;

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Credit,
    Debit,
    Pix,
    Cash,
}

/// Outcome of a simulated settlement. Orders are never marked as paid; the
/// receipt is the only artifact the payment flow produces.
#[derive(Debug, Serialize, PartialEq, Clone, Copy)]
pub struct PaymentReceipt {
    pub method: PaymentMethod,
    pub amount: Money,
    pub change: Money,
}

/// Cosmetic payment flow: waits out a fixed settlement delay and reports
/// success. It reads the bill and nothing else; order state is untouched.
#[derive(Debug, Clone, Copy)]
pub struct PaymentSimulator {
    settlement_delay: Duration,
}

impl Default for PaymentSimulator {
    fn default() -> Self {
        Self {
            settlement_delay: Duration::from_secs(2),
        }
    }
}

impl PaymentSimulator {
    pub fn new(settlement_delay: Duration) -> Self {
        Self { settlement_delay }
    }

    /// Settles `amount` with the chosen method.
    ///
    /// Cash requires the tendered value to cover the bill and hands back
    /// change; the other methods settle the exact amount and ignore
    /// `tendered`.
    pub async fn settle(
        &self,
        amount: Money,
        method: PaymentMethod,
        tendered: Option<Money>,
    ) -> Result<PaymentReceipt> {
        let change = match method {
            PaymentMethod::Cash => {
                let tendered = tendered.unwrap_or(Money::ZERO);
                if tendered < amount {
                    return Err(ComandaError::InsufficientCash {
                        tendered,
                        due: amount,
                    });
                }
                tendered - amount
            }
            _ => Money::ZERO,
        };

        tokio::time::sleep(self.settlement_delay).await;
        info!(%amount, ?method, %change, "payment settled");
        Ok(PaymentReceipt {
            method,
            amount,
            change,
        })
    }
}
