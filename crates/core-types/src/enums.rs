use crate::error::CoreError;
use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The perpetual markets a trade can be opened on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbol {
    #[serde(rename = "SOL-PERP")]
    SolPerp,
    #[serde(rename = "BTC-PERP")]
    BtcPerp,
}

impl Symbol {
    pub const ALL: [Symbol; 2] = [Symbol::SolPerp, Symbol::BtcPerp];

    pub fn as_str(&self) -> &'static str {
        match self {
            Symbol::SolPerp => "SOL-PERP",
            Symbol::BtcPerp => "BTC-PERP",
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Symbol {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Symbol::ALL
            .into_iter()
            .find(|symbol| symbol.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| CoreError::InvalidInput("symbol".to_string(), s.to_string()))
    }
}

/// Direction of a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TradeSide {
    Long,
    Short,
}

impl fmt::Display for TradeSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TradeSide::Long => f.write_str("Long"),
            TradeSide::Short => f.write_str("Short"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderType {
    Market,
    Limit,
}

impl OrderType {
    /// Exchange fee rate charged on the notional size.
    /// Limit orders pay the maker rate (0.02%), market orders the taker rate (0.05%).
    pub fn fee_rate(&self) -> Decimal {
        match self {
            OrderType::Limit => dec!(0.0002),
            OrderType::Market => dec!(0.0005),
        }
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderType::Market => f.write_str("Market"),
            OrderType::Limit => f.write_str("Limit"),
        }
    }
}

/// Outcome of a closed trade, derived from the sign of its net PnL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TradeStatus {
    Win,
    Loss,
}

impl TradeStatus {
    /// `Win` strictly when the net PnL is positive. A flat trade counts as a loss.
    pub fn from_pnl(pnl: Decimal) -> Self {
        if pnl > Decimal::ZERO {
            TradeStatus::Win
        } else {
            TradeStatus::Loss
        }
    }
}

/// Relative look-back window applied to trade timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TimeRange {
    #[default]
    #[serde(rename = "all-time")]
    AllTime,
    #[serde(rename = "last-30-days")]
    Last30Days,
    #[serde(rename = "last-7-days")]
    Last7Days,
}

impl TimeRange {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeRange::AllTime => "all-time",
            TimeRange::Last30Days => "last-30-days",
            TimeRange::Last7Days => "last-7-days",
        }
    }

    /// The exclusive lower bound for a trade timestamp, or `None` when the
    /// range is unbounded.
    pub fn cutoff(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        match self {
            TimeRange::AllTime => None,
            TimeRange::Last30Days => Some(now - Duration::days(30)),
            TimeRange::Last7Days => Some(now - Duration::days(7)),
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeRange {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace(' ', "-").as_str() {
            "all" | "all-time" => Ok(TimeRange::AllTime),
            "30d" | "last-30-days" => Ok(TimeRange::Last30Days),
            "7d" | "last-7-days" => Ok(TimeRange::Last7Days),
            _ => Err(CoreError::InvalidInput("time range".to_string(), s.to_string())),
        }
    }
}
