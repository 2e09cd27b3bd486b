//! Compiled-in trade books.
//!
//! The overlay ships with its execution records baked in. Every book lives
//! behind one symbol key, so supporting another instrument means adding data
//! here rather than another engine.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use super::book::TradeBook;
use super::constant::TradeSide;
use super::object::{TimeOfDay, TradeRecord};

// ============================================================================
// Builtin symbols
// ============================================================================

/// Symbol of the NRXS book
pub const NRXS: &str = "NRXS";

/// Symbol of the SEPN book
pub const SEPN: &str = "SEPN";

fn record(
    symbol: &str,
    hour: u8,
    minute: u8,
    second: u8,
    side: TradeSide,
    price: f64,
    quantity: u64,
) -> TradeRecord {
    TradeRecord::new(
        symbol.to_string(),
        TimeOfDay {
            hour,
            minute,
            second,
        },
        side,
        price,
        quantity,
    )
}

// ============================================================================
// Books
// ============================================================================

fn nrxs_book() -> TradeBook {
    let records = vec![
        record(NRXS, 8, 24, 1, TradeSide::Buy, 6.11, 500),
        record(NRXS, 8, 24, 1, TradeSide::Buy, 6.12, 500),
        record(NRXS, 8, 25, 43, TradeSide::Sell, 6.21, 700),
        record(NRXS, 8, 25, 43, TradeSide::Sell, 6.22, 100),
        record(NRXS, 13, 45, 27, TradeSide::Sell, 6.35, 300),
    ];
    TradeBook::new(NRXS.to_string(), records).expect("Failed to validate builtin NRXS book")
}

fn sepn_book() -> TradeBook {
    let records = vec![
        // Burst of short fills in the same second at distinct prices
        record(SEPN, 7, 19, 37, TradeSide::ShortSell, 12.05, 100),
        record(SEPN, 7, 19, 37, TradeSide::ShortSell, 12.06, 100),
        record(SEPN, 7, 19, 37, TradeSide::ShortSell, 12.07, 200),
        record(SEPN, 7, 21, 14, TradeSide::ShortSell, 12.02, 300),
        record(SEPN, 9, 30, 0, TradeSide::Buy, 11.85, 500),
        record(SEPN, 9, 42, 51, TradeSide::Buy, 11.79, 200),
        record(SEPN, 9, 55, 3, TradeSide::Sell, 11.91, 100),
    ];
    TradeBook::new(SEPN.to_string(), records).expect("Failed to validate builtin SEPN book")
}

/// Builtin books keyed by symbol
pub static BOOKS: Lazy<HashMap<&'static str, TradeBook>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert(NRXS, nrxs_book());
    m.insert(SEPN, sepn_book());
    m
});

/// Get a clone of a builtin book
pub fn builtin_book(symbol: &str) -> Option<TradeBook> {
    BOOKS.get(symbol).cloned()
}

/// Symbols of all builtin books, sorted
pub fn builtin_symbols() -> Vec<&'static str> {
    let mut symbols: Vec<&'static str> = BOOKS.keys().copied().collect();
    symbols.sort_unstable();
    symbols
}
