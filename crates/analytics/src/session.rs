use chrono::Timelike;
use core_types::Trade;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub const HOURS_PER_DAY: u32 = 24;

/// Aggregated PnL for trades closed within one hour of the (UTC) day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyBucket {
    pub hour: u32,
    pub pnl: Decimal,
    pub count: usize,
}

impl HourlyBucket {
    fn empty(hour: u32) -> Self {
        Self {
            hour,
            pnl: Decimal::ZERO,
            count: 0,
        }
    }

    /// Axis label, e.g. `"9:00"`.
    pub fn label(&self) -> String {
        format!("{}:00", self.hour)
    }
}

/// Distributes trades over the 24 hours of the day by their timestamp.
///
/// Always returns 24 buckets, index `i` holding hour `i`. A trade whose
/// timestamp cannot be parsed is skipped with a warning.
pub fn hourly_breakdown(trades: &[Trade]) -> Vec<HourlyBucket> {
    let mut buckets: Vec<HourlyBucket> = (0..HOURS_PER_DAY).map(HourlyBucket::empty).collect();

    for trade in trades {
        match trade.parsed_timestamp() {
            Ok(timestamp) => {
                let bucket = &mut buckets[timestamp.hour() as usize];
                bucket.pnl += trade.pnl;
                bucket.count += 1;
            }
            Err(e) => {
                tracing::warn!(trade_id = %trade.id, "Skipping trade in session breakdown: {}", e);
            }
        }
    }

    buckets
}
