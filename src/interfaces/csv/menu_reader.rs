use crate::domain::menu::MenuItem;
use crate::error::{ComandaError, Result};
use std::io::Read;

/// Reads a menu catalog from a CSV source.
///
/// This reader wraps `csv::Reader` and provides an iterator over
/// `Result<MenuItem>`. It handles whitespace trimming and flexible record
/// lengths automatically.
pub struct MenuReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> MenuReader<R> {
    /// Creates a new `MenuReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes menu items.
    pub fn items(self) -> impl Iterator<Item = Result<MenuItem>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(ComandaError::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::money::Money;
    use rust_decimal_macros::dec;

    #[test]
    fn test_reader_valid_stream() {
        let data = "id, name, description, price, category, available\n\
                    1, Picanha Grelhada, Com farofa, 20.00, Pratos Principais, true\n\
                    2, Caipirinha, Limao e cachaca, 12.00, Bebidas, false";
        let reader = MenuReader::new(data.as_bytes());
        let results: Vec<Result<MenuItem>> = reader.items().collect();

        assert_eq!(results.len(), 2);
        let item = results[0].as_ref().unwrap();
        assert_eq!(item.name, "Picanha Grelhada");
        assert_eq!(item.price, Money::new(dec!(20.00)));
        assert!(item.available);
        assert!(!results[1].as_ref().unwrap().available);
    }

    #[test]
    fn test_reader_malformed_price() {
        let data = "id, name, description, price, category, available\n\
                    1, Picanha Grelhada, , caro, Pratos Principais, true";
        let reader = MenuReader::new(data.as_bytes());
        let results: Vec<Result<MenuItem>> = reader.items().collect();

        assert!(results[0].is_err());
    }
}
