//! Trade Overlay - A trade execution overlay engine written in Rust
//!
//! This crate turns a recorded book of trade executions into the state of
//! a chart overlay, including:
//!
//! - Per-bar matching of fills by time of day
//! - Marker and label render requests
//! - Key price level lines
//! - Per-category trade alerts
//! - A terminal-bar summary or wrong-symbol warning panel
//!
//! # Quick Start
//!
//! ```rust
//! use trade_overlay::trader::{builtin_book, BarUpdate, DisplaySettings, NRXS};
//! use trade_overlay::overlay::OverlayEngine;
//!
//! let book = builtin_book(NRXS).unwrap();
//! let engine = OverlayEngine::new(book, DisplaySettings::default());
//!
//! let bar = BarUpdate::new(NRXS.to_string(), 0, "08:24:01".parse().unwrap(), false);
//! let output = engine.on_bar(&bar);
//! assert_eq!(output.markers.len(), 2);
//! ```

pub mod chart;
pub mod overlay;
pub mod trader;

// Re-export commonly used types
pub use chart::{
    LabelAnchor, LabelRequest, LineStyle, MarkerRequest, MarkerShape, PriceLine, TableCell,
    TablePosition, TableRequest,
};
pub use overlay::{
    AlertEvent, AlertFlags, AlertSink, BarOutput, LogAlertSink, OverlayEngine, Panel,
    TradeSummary,
};
pub use trader::{
    // Constants
    TradeSide,
    // Data objects
    BarUpdate, TimeOfDay, TradeRecord,
    // Book
    BookError, TradeBook,
    // Dataset
    builtin_book, builtin_symbols,
    // Settings
    DisplaySettings, Settings,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
