//! Render requests emitted toward the charting host.
//!
//! The engine never paints. Each request describes one drawing as plain data
//! and the host renders it with whatever toolkit it uses.

use serde::{Deserialize, Serialize};

use crate::trader::constant::TradeSide;
use crate::trader::object::TradeRecord;

use super::base::{
    format_price, side_color, DrawSize, LineStyle, Rgb, GRAY_COLOR, WHITE_COLOR,
};

/// Marker glyph drawn at a fill's price level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkerShape {
    TriangleUp,
    TriangleDown,
    Diamond,
}

impl MarkerShape {
    /// Get the glyph used for a trade side
    pub fn for_side(side: TradeSide) -> Self {
        match side {
            TradeSide::Buy => MarkerShape::TriangleUp,
            TradeSide::Sell => MarkerShape::TriangleDown,
            TradeSide::ShortSell => MarkerShape::Diamond,
        }
    }
}

/// Shape request anchored at (bar index, price).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerRequest {
    pub index: usize,
    pub price: f64,
    pub shape: MarkerShape,
    pub color: Rgb,
    pub size: DrawSize,
    pub title: String,
}

impl MarkerRequest {
    /// Build the marker for one matched fill
    pub fn for_trade(index: usize, record: &TradeRecord) -> Self {
        Self {
            index,
            price: record.price,
            shape: MarkerShape::for_side(record.side),
            color: side_color(record.side),
            size: DrawSize::Small,
            title: format!("{} {}", record.side.display_name(), record.price),
        }
    }
}

/// Anchor side of a text label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LabelAnchor {
    Left,
    Right,
}

/// Text label request anchored at (bar index, price).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelRequest {
    pub index: usize,
    pub price: f64,
    pub text: String,
    /// Label background, colored by trade side
    pub color: Rgb,
    pub text_color: Rgb,
    pub size: DrawSize,
    pub anchor: LabelAnchor,
}

impl LabelRequest {
    /// Build the detail label for one matched fill
    pub fn for_trade(index: usize, record: &TradeRecord) -> Self {
        Self {
            index,
            price: record.price,
            text: record.label_text(),
            color: side_color(record.side),
            text_color: WHITE_COLOR,
            size: DrawSize::Small,
            anchor: LabelAnchor::Left,
        }
    }
}

/// Horizontal reference line pinned at a price level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceLine {
    pub price: f64,
    pub title: String,
    pub color: Rgb,
    pub style: LineStyle,
}

impl PriceLine {
    /// Gray dashed key level line; the price is expected cent-rounded
    pub fn key_level(price: f64) -> Self {
        Self {
            price,
            title: format!("Key Level ${}", format_price(price, 2)),
            color: GRAY_COLOR,
            style: LineStyle::Dashed,
        }
    }
}

/// Corner of the chart a table docks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TablePosition {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// A single table cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableCell {
    pub col: usize,
    pub row: usize,
    pub text: String,
    pub text_color: Rgb,
    pub text_size: DrawSize,
}

/// Table request docked to a chart corner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRequest {
    pub position: TablePosition,
    pub columns: usize,
    pub rows: usize,
    pub bg_color: Rgb,
    pub border_width: u32,
    pub cells: Vec<TableCell>,
}

impl TableRequest {
    /// Create an empty table of the given dimensions
    pub fn new(
        position: TablePosition,
        columns: usize,
        rows: usize,
        bg_color: Rgb,
        border_width: u32,
    ) -> Self {
        Self {
            position,
            columns,
            rows,
            bg_color,
            border_width,
            cells: Vec::new(),
        }
    }

    /// Fill one cell
    pub fn add_cell(
        &mut self,
        col: usize,
        row: usize,
        text: impl Into<String>,
        text_color: Rgb,
        text_size: DrawSize,
    ) {
        self.cells.push(TableCell {
            col,
            row,
            text: text.into(),
            text_color,
            text_size,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::base::{BLACK_COLOR, BUY_COLOR, SHORT_COLOR};
    use crate::trader::object::TimeOfDay;

    fn create_test_record(side: TradeSide, price: f64) -> TradeRecord {
        TradeRecord::new(
            "NRXS".to_string(),
            TimeOfDay::new(8, 24, 1).unwrap(),
            side,
            price,
            500,
        )
    }

    #[test]
    fn test_shape_for_side() {
        assert_eq!(MarkerShape::for_side(TradeSide::Buy), MarkerShape::TriangleUp);
        assert_eq!(MarkerShape::for_side(TradeSide::Sell), MarkerShape::TriangleDown);
        assert_eq!(MarkerShape::for_side(TradeSide::ShortSell), MarkerShape::Diamond);
    }

    #[test]
    fn test_marker_for_trade() {
        let record = create_test_record(TradeSide::Buy, 6.11);
        let marker = MarkerRequest::for_trade(42, &record);

        assert_eq!(marker.index, 42);
        assert_eq!(marker.price, 6.11);
        assert_eq!(marker.shape, MarkerShape::TriangleUp);
        assert_eq!(marker.color, BUY_COLOR);
        assert_eq!(marker.size, DrawSize::Small);
        assert_eq!(marker.title, "Buy 6.11");
    }

    #[test]
    fn test_label_for_trade() {
        let record = create_test_record(TradeSide::ShortSell, 12.05);
        let label = LabelRequest::for_trade(7, &record);

        assert_eq!(label.text, "SS @ 12.05\nQty: 500\n08:24:01");
        assert_eq!(label.color, SHORT_COLOR);
        assert_eq!(label.text_color, WHITE_COLOR);
        assert_eq!(label.anchor, LabelAnchor::Left);
    }

    #[test]
    fn test_key_level_title() {
        let line = PriceLine::key_level(6.2);
        assert_eq!(line.title, "Key Level $6.20");
        assert_eq!(line.color, GRAY_COLOR);
        assert_eq!(line.style, LineStyle::Dashed);
    }

    #[test]
    fn test_table_cells() {
        let mut table = TableRequest::new(TablePosition::TopRight, 2, 5, WHITE_COLOR, 1);
        table.add_cell(0, 0, "NRXS Trades", BLACK_COLOR, DrawSize::Normal);
        table.add_cell(1, 0, "Count", BLACK_COLOR, DrawSize::Normal);

        assert_eq!(table.cells.len(), 2);
        assert_eq!(table.cells[0].text, "NRXS Trades");
        assert_eq!(table.cells[1].col, 1);
    }
}
