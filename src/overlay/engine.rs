//! Overlay engine driving the per-bar evaluation.

use serde::{Deserialize, Serialize};

use crate::chart::{LabelRequest, MarkerRequest, PriceLine};
use crate::trader::book::TradeBook;
use crate::trader::constant::TradeSide;
use crate::trader::logger::Logger;
use crate::trader::object::BarUpdate;
use crate::trader::setting::DisplaySettings;
use crate::trader::utility::round_to;

use super::alert::{AlertEvent, AlertFlags, AlertSink};
use super::matcher::match_bar;
use super::report::{panel_for, Panel};

/// Everything derived from one bar update.
///
/// Markers and labels cover only the fills of this bar; price lines are
/// chart-wide and repeat on every output. The panel is present only on
/// the terminal bar.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BarOutput {
    pub markers: Vec<MarkerRequest>,
    pub labels: Vec<LabelRequest>,
    pub price_lines: Vec<PriceLine>,
    pub alerts: AlertFlags,
    pub events: Vec<AlertEvent>,
    pub panel: Option<Panel>,
}

/// Overlay engine for one instrument's trade book.
///
/// The engine is immutable after construction: every `on_bar` call maps
/// one bar update to one output without touching shared state.
pub struct OverlayEngine {
    book: TradeBook,
    settings: DisplaySettings,
    price_lines: Vec<PriceLine>,
    logger: Logger,
}

impl OverlayEngine {
    /// Create a new OverlayEngine
    pub fn new(book: TradeBook, settings: DisplaySettings) -> Self {
        let price_lines = key_levels(&book);
        let logger = Logger::new("OverlayEngine");
        logger.info(&format!(
            "Overlay ready for {} with {} fills",
            book.symbol(),
            book.len()
        ));

        Self {
            book,
            settings,
            price_lines,
            logger,
        }
    }

    /// Get the book symbol
    pub fn symbol(&self) -> &str {
        self.book.symbol()
    }

    /// Get the trade book
    pub fn book(&self) -> &TradeBook {
        &self.book
    }

    /// Get the chart-wide key level lines
    pub fn price_lines(&self) -> &[PriceLine] {
        &self.price_lines
    }

    /// Evaluate one bar update.
    ///
    /// Matching and alert evaluation always run; the display toggles gate
    /// only the markers and labels that come out.
    pub fn on_bar(&self, bar: &BarUpdate) -> BarOutput {
        let matches = match_bar(&self.book, &bar.symbol, bar.time);

        let alerts = AlertFlags::evaluate(&matches);
        let events = alerts.events(self.book.symbol());

        let mut markers = Vec::new();
        let mut labels = Vec::new();
        for record in &matches {
            if !self.side_visible(record.side) {
                continue;
            }

            markers.push(MarkerRequest::for_trade(bar.index, record));
            if self.settings.show_labels {
                labels.push(LabelRequest::for_trade(bar.index, record));
            }
        }

        if !matches.is_empty() {
            self.logger.debug(&format!(
                "Bar {} at {} matched {} fill(s)",
                bar.index,
                bar.time,
                matches.len()
            ));
        }

        let panel = bar
            .is_last
            .then(|| panel_for(&bar.symbol, &self.book));

        BarOutput {
            markers,
            labels,
            price_lines: self.price_lines.clone(),
            alerts,
            events,
            panel,
        }
    }

    /// Forward the alert events of one output into a sink
    pub fn notify(&self, output: &BarOutput, sink: &dyn AlertSink) {
        for event in &output.events {
            sink.alert(event);
        }
    }

    fn side_visible(&self, side: TradeSide) -> bool {
        match side {
            TradeSide::Buy => self.settings.show_buy_trades,
            TradeSide::Sell => self.settings.show_sell_trades,
            TradeSide::ShortSell => self.settings.show_short_trades,
        }
    }
}

/// Key level lines at the mid, min and max trade prices, cent-rounded
fn key_levels(book: &TradeBook) -> Vec<PriceLine> {
    match book.price_range() {
        Some((min_price, max_price)) => {
            let mid_price = (min_price + max_price) / 2.0;
            vec![
                PriceLine::key_level(round_to(mid_price, 0.01)),
                PriceLine::key_level(round_to(min_price, 0.01)),
                PriceLine::key_level(round_to(max_price, 0.01)),
            ]
        }
        None => Vec::new(),
    }
}
