//! Trader module - Core domain functionality.
//!
//! This module provides the building blocks the overlay engine works on,
//! including:
//!
//! - **constant**: Trade side constants and their wire codes
//! - **object**: Data structures for TimeOfDay, TradeRecord and BarUpdate
//! - **book**: Validated per-instrument trade book
//! - **dataset**: Compiled-in trade books for the supported symbols
//! - **setting**: Global settings management and display toggles
//! - **utility**: Utility functions and path helpers
//! - **logger**: Logging utilities

pub mod book;
pub mod constant;
pub mod dataset;
pub mod logger;
pub mod object;
pub mod setting;
pub mod utility;

// Re-exports for convenience
pub use book::{BookError, TradeBook};
pub use constant::TradeSide;
pub use dataset::{builtin_book, builtin_symbols, BOOKS, NRXS, SEPN};
pub use logger::{init_logger, Logger, CRITICAL, DEBUG, ERROR, INFO, WARNING};
pub use object::{BarUpdate, TimeOfDay, TradeRecord};
pub use setting::{DisplaySettings, SettingValue, Settings, SETTINGS, SETTING_FILENAME};
pub use utility::{
    get_file_path, get_folder_path, load_json, load_json_from, round_to, save_json, save_json_to,
    TEMP_DIR,
};
