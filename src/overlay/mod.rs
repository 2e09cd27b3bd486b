//! Overlay module - Per-bar trade overlay evaluation.
//!
//! This module turns a trade book plus a stream of bar updates into the
//! render and alert state of the chart overlay, including:
//!
//! - **matcher**: Exact (symbol, time-of-day) matching of bars against the book
//! - **alert**: Alert flags, alert events and delivery sinks
//! - **report**: Trade summary and the terminal-bar panel
//! - **engine**: OverlayEngine orchestrating one bar into one output

pub mod alert;
pub mod engine;
pub mod matcher;
pub mod report;

// Re-exports for convenience
pub use alert::{AlertEvent, AlertFlags, AlertSink, LogAlertSink};
pub use engine::{BarOutput, OverlayEngine};
pub use matcher::match_bar;
pub use report::{panel_for, summarize, Panel, TradeSummary};
