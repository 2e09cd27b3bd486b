//! Trade summary and the terminal-bar panel.

use serde::{Deserialize, Serialize};

use crate::chart::{
    DrawSize, Rgb, TablePosition, TableRequest, BLACK_COLOR, BUY_COLOR, PANEL_BG_COLOR,
    SELL_COLOR, SHORT_COLOR, WARNING_BG_COLOR, WHITE_COLOR,
};
use crate::trader::book::TradeBook;
use crate::trader::constant::TradeSide;

/// Fill counts per trade category over a whole book.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeSummary {
    pub buy_count: usize,
    pub sell_count: usize,
    pub short_count: usize,
    pub total: usize,
}

impl TradeSummary {
    /// Get the fill count of one trade category
    pub fn count(&self, side: TradeSide) -> usize {
        match side {
            TradeSide::Buy => self.buy_count,
            TradeSide::Sell => self.sell_count,
            TradeSide::ShortSell => self.short_count,
        }
    }
}

/// Count the fills of a book per trade category
pub fn summarize(book: &TradeBook) -> TradeSummary {
    let mut summary = TradeSummary::default();

    for record in book.records() {
        match record.side {
            TradeSide::Buy => summary.buy_count += 1,
            TradeSide::Sell => summary.sell_count += 1,
            TradeSide::ShortSell => summary.short_count += 1,
        }
    }
    summary.total = book.len();

    summary
}

/// Panel shown on the terminal bar.
///
/// The summary variant appears when the chart symbol matches the book,
/// the warning variant when it does not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Panel {
    Summary {
        symbol: String,
        summary: TradeSummary,
    },
    Warning {
        expected_symbol: String,
    },
}

/// Choose the panel for the terminal bar
pub fn panel_for(active_symbol: &str, book: &TradeBook) -> Panel {
    if active_symbol == book.symbol() {
        Panel::Summary {
            symbol: book.symbol().to_string(),
            summary: summarize(book),
        }
    } else {
        Panel::Warning {
            expected_symbol: book.symbol().to_string(),
        }
    }
}

impl Panel {
    /// Render the panel as a table request
    pub fn to_table(&self) -> TableRequest {
        match self {
            Panel::Summary { symbol, summary } => summary_table(symbol, summary),
            Panel::Warning { expected_symbol } => warning_table(expected_symbol),
        }
    }
}

/// Row color of one trade category in the summary table
fn side_color(side: TradeSide) -> Rgb {
    match side {
        TradeSide::Buy => BUY_COLOR,
        TradeSide::Sell => SELL_COLOR,
        TradeSide::ShortSell => SHORT_COLOR,
    }
}

fn summary_table(symbol: &str, summary: &TradeSummary) -> TableRequest {
    let mut table = TableRequest::new(TablePosition::TopRight, 2, 5, PANEL_BG_COLOR, 1);

    table.add_cell(0, 0, format!("{} Trades", symbol), BLACK_COLOR, DrawSize::Normal);
    table.add_cell(1, 0, "Count", BLACK_COLOR, DrawSize::Normal);

    for (offset, side) in TradeSide::all().into_iter().enumerate() {
        let row = offset + 1;
        table.add_cell(0, row, side.display_name(), side_color(side), DrawSize::Small);
        table.add_cell(1, row, summary.count(side).to_string(), BLACK_COLOR, DrawSize::Small);
    }

    table.add_cell(0, 4, "Total", BLACK_COLOR, DrawSize::Small);
    table.add_cell(1, 4, summary.total.to_string(), BLACK_COLOR, DrawSize::Small);

    table
}

fn warning_table(expected_symbol: &str) -> TableRequest {
    let mut table = TableRequest::new(TablePosition::TopRight, 1, 3, WARNING_BG_COLOR, 2);

    table.add_cell(0, 0, "⚠️ WARNING ⚠️", WHITE_COLOR, DrawSize::Normal);
    table.add_cell(0, 1, "This indicator is designed", WHITE_COLOR, DrawSize::Small);
    table.add_cell(
        0,
        2,
        format!("for {} symbol only!", expected_symbol),
        WHITE_COLOR,
        DrawSize::Small,
    );

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trader::object::{TimeOfDay, TradeRecord};

    fn create_test_book() -> TradeBook {
        let records = vec![
            TradeRecord::new(
                "NRXS".to_string(),
                TimeOfDay::new(8, 24, 1).unwrap(),
                TradeSide::Buy,
                6.11,
                500,
            ),
            TradeRecord::new(
                "NRXS".to_string(),
                TimeOfDay::new(8, 24, 1).unwrap(),
                TradeSide::Buy,
                6.12,
                500,
            ),
            TradeRecord::new(
                "NRXS".to_string(),
                TimeOfDay::new(8, 25, 43).unwrap(),
                TradeSide::Sell,
                6.21,
                700,
            ),
        ];
        TradeBook::new("NRXS".to_string(), records).unwrap()
    }

    #[test]
    fn test_summarize_counts() {
        let summary = summarize(&create_test_book());

        assert_eq!(summary.buy_count, 2);
        assert_eq!(summary.sell_count, 1);
        assert_eq!(summary.short_count, 0);
        assert_eq!(summary.total, 3);
        assert_eq!(
            summary.buy_count + summary.sell_count + summary.short_count,
            summary.total
        );
    }

    #[test]
    fn test_summarize_empty() {
        let book = TradeBook::new("NRXS".to_string(), vec![]).unwrap();
        assert_eq!(summarize(&book), TradeSummary::default());
    }

    #[test]
    fn test_summary_count_by_side() {
        let summary = summarize(&create_test_book());

        assert_eq!(summary.count(TradeSide::Buy), 2);
        assert_eq!(summary.count(TradeSide::Sell), 1);
        assert_eq!(summary.count(TradeSide::ShortSell), 0);
    }

    #[test]
    fn test_panel_selection() {
        let book = create_test_book();

        let panel = panel_for("NRXS", &book);
        assert!(matches!(panel, Panel::Summary { .. }));

        let panel = panel_for("nrxs", &book);
        assert!(matches!(panel, Panel::Warning { .. }));

        let panel = panel_for("SEPN", &book);
        match panel {
            Panel::Warning { expected_symbol } => assert_eq!(expected_symbol, "NRXS"),
            _ => panic!("expected warning panel"),
        }
    }

    #[test]
    fn test_summary_table_layout() {
        let panel = panel_for("NRXS", &create_test_book());
        let table = panel.to_table();

        assert_eq!(table.position, TablePosition::TopRight);
        assert_eq!(table.columns, 2);
        assert_eq!(table.rows, 5);
        assert_eq!(table.bg_color, PANEL_BG_COLOR);
        assert_eq!(table.border_width, 1);
        assert_eq!(table.cells.len(), 10);

        let header = &table.cells[0];
        assert_eq!((header.col, header.row), (0, 0));
        assert_eq!(header.text, "NRXS Trades");
        assert_eq!(header.text_color, BLACK_COLOR);
        assert_eq!(header.text_size, DrawSize::Normal);

        let buy_row = &table.cells[2];
        assert_eq!((buy_row.col, buy_row.row), (0, 1));
        assert_eq!(buy_row.text, "Buy");
        assert_eq!(buy_row.text_color, BUY_COLOR);
        assert_eq!(buy_row.text_size, DrawSize::Small);

        let buy_count = &table.cells[3];
        assert_eq!(buy_count.text, "2");
        assert_eq!(buy_count.text_color, BLACK_COLOR);

        let short_row = &table.cells[6];
        assert_eq!(short_row.text, "Short");
        assert_eq!(short_row.text_color, SHORT_COLOR);

        let total_count = &table.cells[9];
        assert_eq!((total_count.col, total_count.row), (1, 4));
        assert_eq!(total_count.text, "3");
    }

    #[test]
    fn test_warning_table_layout() {
        let panel = panel_for("SEPN", &create_test_book());
        let table = panel.to_table();

        assert_eq!(table.position, TablePosition::TopRight);
        assert_eq!(table.columns, 1);
        assert_eq!(table.rows, 3);
        assert_eq!(table.bg_color, WARNING_BG_COLOR);
        assert_eq!(table.border_width, 2);
        assert_eq!(table.cells.len(), 3);

        assert_eq!(table.cells[0].text, "⚠️ WARNING ⚠️");
        assert_eq!(table.cells[0].text_size, DrawSize::Normal);
        assert_eq!(table.cells[1].text, "This indicator is designed");
        assert_eq!(table.cells[2].text, "for NRXS symbol only!");
        for cell in &table.cells {
            assert_eq!(cell.text_color, WHITE_COLOR);
        }
    }
}
