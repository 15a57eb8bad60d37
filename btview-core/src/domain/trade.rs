//! Trade records as the engine reports them: one fill per row.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Direction of a trade, derived from the sign of `units`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TradeDirection {
    Long,
    Short,
}

/// A single executed trade.
///
/// `units` is signed: positive = long (buy), negative = short (sell).
/// `price` is the fill price and is positive whenever a trade exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    pub time: DateTime<Utc>,
    pub book: String,
    pub ticker: String,
    pub units: f64,
    pub price: f64,
}

impl Trade {
    /// Direction by sign of units. Zero-unit rows carry no direction and
    /// belong to neither the long nor the short marker set.
    pub fn direction(&self) -> Option<TradeDirection> {
        if self.units > 0.0 {
            Some(TradeDirection::Long)
        } else if self.units < 0.0 {
            Some(TradeDirection::Short)
        } else {
            None
        }
    }

    pub fn is_long(&self) -> bool {
        self.units > 0.0
    }

    pub fn is_short(&self) -> bool {
        self.units < 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_trade(units: f64) -> Trade {
        Trade {
            time: Utc.timestamp_opt(1, 0).unwrap(),
            book: "B1".into(),
            ticker: "AAPL".into(),
            units,
            price: 100.0,
        }
    }

    #[test]
    fn positive_units_are_long() {
        let trade = sample_trade(10.0);
        assert_eq!(trade.direction(), Some(TradeDirection::Long));
        assert!(trade.is_long());
        assert!(!trade.is_short());
    }

    #[test]
    fn negative_units_are_short() {
        let trade = sample_trade(-5.0);
        assert_eq!(trade.direction(), Some(TradeDirection::Short));
        assert!(trade.is_short());
    }

    #[test]
    fn zero_units_have_no_direction() {
        let trade = sample_trade(0.0);
        assert_eq!(trade.direction(), None);
        assert!(!trade.is_long());
        assert!(!trade.is_short());
    }

    #[test]
    fn trade_serialization_roundtrip() {
        let trade = sample_trade(10.0);
        let json = serde_json::to_string(&trade).unwrap();
        let deser: Trade = serde_json::from_str(&json).unwrap();
        assert_eq!(trade, deser);
    }
}
