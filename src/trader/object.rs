//! Basic data structures used across the overlay engine.

use chrono::{DateTime, NaiveTime, Timelike, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::constant::TradeSide;

/// Wall-clock time of day with second resolution.
///
/// Trade records and bar updates carry no date: matching is strictly by
/// time of day, so the same book re-matches on every session a chart spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TimeOfDay {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl TimeOfDay {
    /// Create a new TimeOfDay, rejecting out-of-range components
    pub fn new(hour: u8, minute: u8, second: u8) -> Option<Self> {
        let time = Self { hour, minute, second };
        time.is_valid().then_some(time)
    }

    /// Check the component ranges (fields are public, so literals can be off)
    pub fn is_valid(&self) -> bool {
        self.hour < 24 && self.minute < 60 && self.second < 60
    }

    /// Take the time-of-day part of a full datetime
    pub fn from_datetime(datetime: &DateTime<Utc>) -> Self {
        Self {
            hour: datetime.hour() as u8,
            minute: datetime.minute() as u8,
            second: datetime.second() as u8,
        }
    }

    /// Seconds elapsed since midnight
    pub fn second_of_day(&self) -> u32 {
        self.hour as u32 * 3600 + self.minute as u32 * 60 + self.second as u32
    }

    /// Build from seconds since midnight (must be < 86400)
    pub fn from_second_of_day(second: u32) -> Option<Self> {
        if second >= 86_400 {
            return None;
        }
        Some(Self {
            hour: (second / 3600) as u8,
            minute: (second % 3600 / 60) as u8,
            second: (second % 60) as u8,
        })
    }
}

impl FromStr for TimeOfDay {
    type Err = chrono::ParseError;

    /// Parse "HH:MM:SS", falling back to "HH:MM" with the second set to 0
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let time = NaiveTime::parse_from_str(s, "%H:%M:%S")
            .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))?;
        Ok(Self {
            hour: time.hour() as u8,
            minute: time.minute() as u8,
            second: time.second() as u8,
        })
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

/// One executed fill loaded into the overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeRecord {
    pub symbol: String,
    pub time: TimeOfDay,
    pub side: TradeSide,
    pub price: f64,
    pub quantity: u64,
}

impl TradeRecord {
    /// Create a new TradeRecord
    pub fn new(symbol: String, time: TimeOfDay, side: TradeSide, price: f64, quantity: u64) -> Self {
        Self {
            symbol,
            time,
            side,
            price,
            quantity,
        }
    }

    /// Multi-line label text shown next to the fill marker
    pub fn label_text(&self) -> String {
        format!(
            "{} @ {}\nQty: {}\n{}",
            self.side.value(),
            self.price,
            self.quantity,
            self.time
        )
    }
}

/// Per-bar input from the charting host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BarUpdate {
    pub symbol: String,
    /// Bar position on the chart, used to anchor render requests
    pub index: usize,
    pub time: TimeOfDay,
    /// Set by the host on the terminal bar of the series
    pub is_last: bool,
}

impl BarUpdate {
    /// Create a new BarUpdate
    pub fn new(symbol: String, index: usize, time: TimeOfDay, is_last: bool) -> Self {
        Self {
            symbol,
            index,
            time,
            is_last,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_parse_full() {
        let time: TimeOfDay = "08:24:01".parse().unwrap();
        assert_eq!(time, TimeOfDay::new(8, 24, 1).unwrap());
    }

    #[test]
    fn test_time_parse_fallback_without_seconds() {
        let time: TimeOfDay = "08:24".parse().unwrap();
        assert_eq!(time.second, 0);
        assert_eq!(time, TimeOfDay::new(8, 24, 0).unwrap());
    }

    #[test]
    fn test_time_parse_invalid() {
        assert!("25:00:00".parse::<TimeOfDay>().is_err());
        assert!("08:61".parse::<TimeOfDay>().is_err());
        assert!("garbage".parse::<TimeOfDay>().is_err());
    }

    #[test]
    fn test_time_display_zero_padded() {
        let time = TimeOfDay::new(7, 9, 3).unwrap();
        assert_eq!(format!("{}", time), "07:09:03");
    }

    #[test]
    fn test_time_second_of_day_roundtrip() {
        let time = TimeOfDay::new(8, 25, 43).unwrap();
        assert_eq!(TimeOfDay::from_second_of_day(time.second_of_day()), Some(time));
        assert_eq!(TimeOfDay::from_second_of_day(86_400), None);
    }

    #[test]
    fn test_time_new_rejects_out_of_range() {
        assert!(TimeOfDay::new(24, 0, 0).is_none());
        assert!(TimeOfDay::new(8, 60, 0).is_none());
        assert!(TimeOfDay::new(8, 0, 60).is_none());
    }

    #[test]
    fn test_record_label_text() {
        let record = TradeRecord::new(
            "NRXS".to_string(),
            TimeOfDay::new(8, 24, 1).unwrap(),
            TradeSide::Buy,
            6.11,
            500,
        );
        assert_eq!(record.label_text(), "B @ 6.11\nQty: 500\n08:24:01");
    }

    #[test]
    fn test_time_from_datetime() {
        let datetime = "2024-03-08T08:24:01Z".parse::<DateTime<Utc>>().unwrap();
        let time = TimeOfDay::from_datetime(&datetime);
        assert_eq!(format!("{}", time), "08:24:01");
    }
}
