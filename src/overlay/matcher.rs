//! Matching of chart bars against the trade book.

use crate::trader::book::TradeBook;
use crate::trader::object::{TimeOfDay, TradeRecord};

/// Find the fills hit by one bar.
///
/// The result is empty unless `active_symbol` equals the book symbol
/// exactly (case-sensitive). Matching compares hour, minute and second
/// only; on a chart spanning several sessions the same fills match once
/// per session. Matched records keep book insertion order.
pub fn match_bar<'a>(
    book: &'a TradeBook,
    active_symbol: &str,
    time: TimeOfDay,
) -> Vec<&'a TradeRecord> {
    if active_symbol != book.symbol() {
        return Vec::new();
    }

    book.records()
        .iter()
        .filter(|record| record.time == time)
        .collect()
}
