//! Alert evaluation for matched fills.
//!
//! Alerts fire per trade category, not per fill: a bar that matches three
//! buy fills raises the buy flag once. Evaluation looks only at the matched
//! records, so display toggles never affect it.

use serde::{Deserialize, Serialize};

use crate::trader::constant::TradeSide;
use crate::trader::logger::Logger;
use crate::trader::object::TradeRecord;

/// Per-category alert flags raised by one bar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertFlags {
    pub any_buy: bool,
    pub any_sell: bool,
    pub any_short: bool,
}

impl AlertFlags {
    /// OR-reduce the matched fills into category flags
    pub fn evaluate(matches: &[&TradeRecord]) -> Self {
        let mut flags = Self::default();

        for record in matches {
            match record.side {
                TradeSide::Buy => flags.any_buy = true,
                TradeSide::Sell => flags.any_sell = true,
                TradeSide::ShortSell => flags.any_short = true,
            }
        }

        flags
    }

    /// Check if any category fired
    pub fn any(&self) -> bool {
        self.any_buy || self.any_sell || self.any_short
    }

    /// Build the alert events for the raised categories.
    ///
    /// Events come out in fixed Buy, Sell, Short order regardless of the
    /// order the fills matched in.
    pub fn events(&self, symbol: &str) -> Vec<AlertEvent> {
        let mut events = Vec::new();

        if self.any_buy {
            events.push(AlertEvent::new(symbol, TradeSide::Buy));
        }
        if self.any_sell {
            events.push(AlertEvent::new(symbol, TradeSide::Sell));
        }
        if self.any_short {
            events.push(AlertEvent::new(symbol, TradeSide::ShortSell));
        }

        events
    }
}

/// One named alert raised toward the host platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertEvent {
    pub side: TradeSide,
    pub title: String,
    pub message: String,
}

impl AlertEvent {
    /// Create a new AlertEvent for a trade category
    pub fn new(symbol: &str, side: TradeSide) -> Self {
        Self {
            side,
            title: format!("{} {} Trade", symbol, side.display_name()),
            message: format!("{} {} trade detected", symbol, side.display_name()),
        }
    }
}

/// Delivery channel for alert events.
///
/// The host decides what an alert becomes: a log line, a desktop
/// notification, a webhook call.
pub trait AlertSink {
    /// Handle one raised alert
    fn alert(&self, event: &AlertEvent);
}

/// Sink that writes alerts to the log.
pub struct LogAlertSink {
    logger: Logger,
}

impl LogAlertSink {
    pub fn new() -> Self {
        Self {
            logger: Logger::new("AlertSink"),
        }
    }
}

impl Default for LogAlertSink {
    fn default() -> Self {
        Self::new()
    }
}

impl AlertSink for LogAlertSink {
    fn alert(&self, event: &AlertEvent) {
        self.logger
            .info(&format!("{}: {}", event.title, event.message));
    }
}
