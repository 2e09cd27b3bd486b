//! Trade book: the validated, ordered collection of fills for one instrument.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::object::{TimeOfDay, TradeRecord};

/// Validation error raised while loading a trade book.
///
/// These are configuration errors: a book that fails validation is rejected
/// at startup rather than partially loaded.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BookError {
    /// Price must be finite and positive
    #[error("record {index}: invalid price {price}")]
    InvalidPrice { index: usize, price: f64 },

    /// Quantity must be positive
    #[error("record {index}: invalid quantity 0")]
    InvalidQuantity { index: usize },

    /// Time components must be in range
    #[error("record {index}: invalid time {time}")]
    InvalidTime { index: usize, time: TimeOfDay },

    /// Record belongs to another instrument
    #[error("record {index}: symbol {found} does not match book symbol {expected}")]
    SymbolMismatch {
        index: usize,
        expected: String,
        found: String,
    },
}

/// Ordered, immutable collection of fills for a single instrument.
///
/// Records keep their insertion order; duplicate times are allowed and
/// order-significant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradeBook {
    symbol: String,
    records: Vec<TradeRecord>,
}

impl TradeBook {
    /// Create a new TradeBook, validating every record
    pub fn new(symbol: String, records: Vec<TradeRecord>) -> Result<Self, BookError> {
        for (index, record) in records.iter().enumerate() {
            if record.symbol != symbol {
                return Err(BookError::SymbolMismatch {
                    index,
                    expected: symbol.clone(),
                    found: record.symbol.clone(),
                });
            }
            if !record.price.is_finite() || record.price <= 0.0 {
                return Err(BookError::InvalidPrice {
                    index,
                    price: record.price,
                });
            }
            if record.quantity == 0 {
                return Err(BookError::InvalidQuantity { index });
            }
            if !record.time.is_valid() {
                return Err(BookError::InvalidTime {
                    index,
                    time: record.time,
                });
            }
        }
        Ok(Self { symbol, records })
    }

    /// Get the instrument symbol
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Get all records in insertion order
    pub fn records(&self) -> &[TradeRecord] {
        &self.records
    }

    /// Get total number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check whether the book holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Merge fills sharing the same (time, side, price) by summing quantity.
    ///
    /// The first occurrence keeps its position; fills at the same second with
    /// distinct prices stay separate.
    pub fn consolidate(&self) -> TradeBook {
        let mut merged: Vec<TradeRecord> = Vec::with_capacity(self.records.len());
        for record in &self.records {
            let existing = merged.iter_mut().find(|kept| {
                kept.time == record.time && kept.side == record.side && kept.price == record.price
            });
            match existing {
                Some(kept) => kept.quantity += record.quantity,
                None => merged.push(record.clone()),
            }
        }
        Self {
            symbol: self.symbol.clone(),
            records: merged,
        }
    }

    /// Get (min, max) over record prices, or None for an empty book
    pub fn price_range(&self) -> Option<(f64, f64)> {
        let first = self.records.first()?;
        let mut min_price = first.price;
        let mut max_price = first.price;

        for record in self.records.iter().skip(1) {
            min_price = min_price.min(record.price);
            max_price = max_price.max(record.price);
        }

        Some((min_price, max_price))
    }

    /// Get (earliest, latest) record time, or None for an empty book
    pub fn time_range(&self) -> Option<(TimeOfDay, TimeOfDay)> {
        let first = self.records.first()?;
        let mut start = first.time;
        let mut end = first.time;

        for record in self.records.iter().skip(1) {
            start = start.min(record.time);
            end = end.max(record.time);
        }

        Some((start, end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trader::constant::TradeSide;

    fn create_test_record(time: &str, side: TradeSide, price: f64, quantity: u64) -> TradeRecord {
        TradeRecord::new(
            "TEST".to_string(),
            time.parse().unwrap(),
            side,
            price,
            quantity,
        )
    }

    #[test]
    fn test_book_rejects_foreign_symbol() {
        let mut record = create_test_record("08:24:01", TradeSide::Buy, 6.11, 500);
        record.symbol = "OTHER".to_string();

        let result = TradeBook::new("TEST".to_string(), vec![record]);
        assert_eq!(
            result.unwrap_err(),
            BookError::SymbolMismatch {
                index: 0,
                expected: "TEST".to_string(),
                found: "OTHER".to_string(),
            }
        );
    }

    #[test]
    fn test_book_rejects_bad_price() {
        let records = vec![
            create_test_record("08:24:01", TradeSide::Buy, 6.11, 500),
            create_test_record("08:24:02", TradeSide::Buy, 0.0, 500),
        ];
        let result = TradeBook::new("TEST".to_string(), records);
        assert!(matches!(
            result.unwrap_err(),
            BookError::InvalidPrice { index: 1, .. }
        ));

        let records = vec![create_test_record("08:24:01", TradeSide::Buy, f64::NAN, 500)];
        assert!(TradeBook::new("TEST".to_string(), records).is_err());
    }

    #[test]
    fn test_book_rejects_zero_quantity() {
        let records = vec![create_test_record("08:24:01", TradeSide::Sell, 6.21, 0)];
        let result = TradeBook::new("TEST".to_string(), records);
        assert_eq!(result.unwrap_err(), BookError::InvalidQuantity { index: 0 });
    }

    #[test]
    fn test_book_rejects_out_of_range_time() {
        let mut record = create_test_record("08:24:01", TradeSide::Buy, 6.11, 500);
        record.time = TimeOfDay {
            hour: 25,
            minute: 0,
            second: 0,
        };

        let result = TradeBook::new("TEST".to_string(), vec![record]);
        assert!(matches!(
            result.unwrap_err(),
            BookError::InvalidTime { index: 0, .. }
        ));
    }

    #[test]
    fn test_book_accessors() {
        let records = vec![
            create_test_record("08:24:01", TradeSide::Buy, 6.11, 500),
            create_test_record("08:25:43", TradeSide::Sell, 6.21, 700),
        ];
        let book = TradeBook::new("TEST".to_string(), records).unwrap();

        assert_eq!(book.symbol(), "TEST");
        assert_eq!(book.len(), 2);
        assert!(!book.is_empty());
        assert_eq!(book.records()[1].quantity, 700);
    }

    #[test]
    fn test_consolidate_merges_equal_fills() {
        let records = vec![
            create_test_record("08:24:01", TradeSide::Buy, 6.11, 500),
            create_test_record("08:25:43", TradeSide::Sell, 6.21, 700),
            create_test_record("08:24:01", TradeSide::Buy, 6.11, 200),
        ];
        let book = TradeBook::new("TEST".to_string(), records).unwrap();
        let merged = book.consolidate();

        assert_eq!(merged.len(), 2);
        assert_eq!(merged.records()[0].quantity, 700);
        assert_eq!(merged.records()[0].time, "08:24:01".parse().unwrap());
        assert_eq!(merged.records()[1].side, TradeSide::Sell);
    }

    #[test]
    fn test_consolidate_keeps_distinct_prices() {
        let records = vec![
            create_test_record("07:19:37", TradeSide::ShortSell, 12.05, 100),
            create_test_record("07:19:37", TradeSide::ShortSell, 12.06, 200),
        ];
        let book = TradeBook::new("TEST".to_string(), records).unwrap();

        assert_eq!(book.consolidate().len(), 2);
    }

    #[test]
    fn test_price_range() {
        let records = vec![
            create_test_record("08:24:01", TradeSide::Buy, 6.12, 500),
            create_test_record("08:25:43", TradeSide::Sell, 6.21, 700),
            create_test_record("08:24:01", TradeSide::Buy, 6.11, 500),
        ];
        let book = TradeBook::new("TEST".to_string(), records).unwrap();

        assert_eq!(book.price_range(), Some((6.11, 6.21)));

        let empty = TradeBook::new("TEST".to_string(), vec![]).unwrap();
        assert_eq!(empty.price_range(), None);
    }

    #[test]
    fn test_time_range() {
        let records = vec![
            create_test_record("08:25:43", TradeSide::Sell, 6.21, 700),
            create_test_record("08:24:01", TradeSide::Buy, 6.11, 500),
        ];
        let book = TradeBook::new("TEST".to_string(), records).unwrap();

        let (start, end) = book.time_range().unwrap();
        assert_eq!(format!("{}", start), "08:24:01");
        assert_eq!(format!("{}", end), "08:25:43");
    }
}
