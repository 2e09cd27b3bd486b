//! General constant enums used in the overlay engine.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Side of an executed trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TradeSide {
    /// Buy fill
    Buy,
    /// Sell fill
    Sell,
    /// Short-sell fill
    ShortSell,
}

impl TradeSide {
    /// Get the side code used in execution records
    pub fn value(&self) -> &'static str {
        match self {
            TradeSide::Buy => "B",
            TradeSide::Sell => "S",
            TradeSide::ShortSell => "SS",
        }
    }

    /// Parse a record side code
    pub fn from_value(value: &str) -> Option<TradeSide> {
        match value {
            "B" => Some(TradeSide::Buy),
            "S" => Some(TradeSide::Sell),
            "SS" => Some(TradeSide::ShortSell),
            _ => None,
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            TradeSide::Buy => "Buy",
            TradeSide::Sell => "Sell",
            TradeSide::ShortSell => "Short",
        }
    }

    /// Get all sides in reporting order
    pub fn all() -> Vec<TradeSide> {
        vec![TradeSide::Buy, TradeSide::Sell, TradeSide::ShortSell]
    }
}

impl fmt::Display for TradeSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}
