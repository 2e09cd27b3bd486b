//! Chart module describing the overlay drawing vocabulary.
//!
//! This module provides:
//! - Color, size and line-style constants shared by all render requests
//! - `MarkerRequest` / `LabelRequest` - per-fill drawings
//! - `PriceLine` - key level reference lines
//! - `TableRequest` - summary and warning panels
//!
//! # Example
//!
//! ```
//! use trade_overlay::chart::PriceLine;
//!
//! let line = PriceLine::key_level(6.23);
//! assert_eq!(line.title, "Key Level $6.23");
//! ```

mod base;
mod request;

pub use base::*;
pub use request::{
    LabelAnchor, LabelRequest, MarkerRequest, MarkerShape, PriceLine, TableCell, TablePosition,
    TableRequest,
};
