//! Base constants and utility functions for the chart module.

use serde::{Deserialize, Serialize};

use crate::trader::constant::TradeSide;

/// RGBA color carried by render requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgb {
    /// Opaque color from components
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Color with explicit alpha
    pub const fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

// Overlay colors
pub const WHITE_COLOR: Rgb = Rgb::from_rgb(255, 255, 255);
pub const BLACK_COLOR: Rgb = Rgb::from_rgb(0, 0, 0);
pub const GRAY_COLOR: Rgb = Rgb::from_rgb(128, 128, 128);

// Trade marker colors
pub const BUY_COLOR: Rgb = Rgb::from_rgb(0, 128, 0); // Green for buys
pub const SELL_COLOR: Rgb = Rgb::from_rgb(255, 0, 0); // Red for sells
pub const SHORT_COLOR: Rgb = Rgb::from_rgb(255, 165, 0); // Orange for short sells

// Panel colors
pub const PANEL_BG_COLOR: Rgb = WHITE_COLOR;
pub const WARNING_BG_COLOR: Rgb = Rgb::from_rgba(255, 0, 0, 51); // Translucent red

/// Get the marker color for a trade side
pub fn side_color(side: TradeSide) -> Rgb {
    match side {
        TradeSide::Buy => BUY_COLOR,
        TradeSide::Sell => SELL_COLOR,
        TradeSide::ShortSell => SHORT_COLOR,
    }
}

/// Text and glyph size carried by render requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawSize {
    Small,
    Normal,
}

/// Line style for reference price lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineStyle {
    Solid,
    Dashed,
    Dotted,
}

/// Format price with appropriate precision
pub fn format_price(price: f64, decimals: usize) -> String {
    format!("{:.prec$}", price, prec = decimals)
}
