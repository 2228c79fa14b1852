use crate::enums::{OrderType, Symbol, TradeSide, TradeStatus};
use crate::error::CoreError;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single closed position.
///
/// Monetary fields are fixed-point decimals rounded to cents. The timestamp is
/// kept in its RFC 3339 text form so that records read from external sources
/// survive even when the timestamp is malformed; consumers parse it through
/// [`Trade::parsed_timestamp`] and decide how to treat failures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trade {
    pub id: String,
    pub symbol: Symbol,
    #[serde(rename = "type")]
    pub side: TradeSide,
    pub order_type: OrderType,
    pub entry_price: Decimal,
    pub exit_price: Decimal,
    /// Notional position size in quote currency.
    pub size: Decimal,
    pub fee: Decimal,
    /// Net of fees.
    pub pnl: Decimal,
    pub status: TradeStatus,
    pub timestamp: String,
    /// Calendar day of `timestamp`, `yyyy-MM-dd`.
    pub date: String,
    /// Holding period in seconds.
    pub duration: u32,
}

impl Trade {
    pub fn parsed_timestamp(&self) -> Result<DateTime<Utc>, CoreError> {
        DateTime::parse_from_rfc3339(&self.timestamp)
            .map(|ts| ts.with_timezone(&Utc))
            .map_err(|_| CoreError::InvalidTimestamp(self.timestamp.clone()))
    }

    pub fn is_win(&self) -> bool {
        self.status == TradeStatus::Win
    }
}
