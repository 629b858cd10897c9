use crate::domain::money::Money;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ComandaError>;

#[derive(Error, Debug)]
pub enum ComandaError {
    #[error("cart is empty")]
    EmptyCart,
    #[error("order {0} not found")]
    OrderNotFound(u32),
    #[error("order {0} can no longer be cancelled")]
    CancellationNotAllowed(u32),
    #[error("unknown menu item: {0}")]
    UnknownItem(String),
    #[error("menu item is not available: {0}")]
    ItemUnavailable(String),
    #[error("cash tendered {tendered} does not cover the bill {due}")]
    InsufficientCash { tendered: Money, due: Money },
    #[error("invalid session record: {0}")]
    InvalidRecord(String),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
