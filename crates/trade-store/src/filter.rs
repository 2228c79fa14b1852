use chrono::{DateTime, Utc};
use core_types::{Symbol, TimeRange, Trade};
use std::cmp::Reverse;

/// The dashboard's symbol and look-back selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TradeFilter {
    /// `None` selects every symbol.
    pub symbol: Option<Symbol>,
    pub time_range: TimeRange,
}

impl TradeFilter {
    pub fn new(symbol: Option<Symbol>, time_range: TimeRange) -> Self {
        Self { symbol, time_range }
    }

    /// Returns the trades that pass the filter, in their original order.
    ///
    /// A trade is inside a bounded time range only when its timestamp is
    /// strictly after `now - window`. Trades whose timestamp cannot be parsed
    /// are dropped from bounded ranges and kept for `AllTime`.
    pub fn apply(&self, trades: &[Trade], now: DateTime<Utc>) -> Vec<Trade> {
        let cutoff = self.time_range.cutoff(now);

        let filtered: Vec<Trade> = trades
            .iter()
            .filter(|trade| self.matches(trade, cutoff))
            .cloned()
            .collect();

        tracing::debug!(
            symbol = ?self.symbol,
            time_range = %self.time_range,
            total = trades.len(),
            kept = filtered.len(),
            "Applied trade filter"
        );
        filtered
    }

    fn matches(&self, trade: &Trade, cutoff: Option<DateTime<Utc>>) -> bool {
        if let Some(symbol) = self.symbol {
            if trade.symbol != symbol {
                return false;
            }
        }

        let Some(cutoff) = cutoff else {
            return true;
        };

        match trade.parsed_timestamp() {
            Ok(timestamp) => timestamp > cutoff,
            Err(e) => {
                tracing::warn!(trade_id = %trade.id, "Excluding trade from time range: {}", e);
                false
            }
        }
    }
}

/// The `limit` newest trades, newest first.
///
/// Trades with an unparseable timestamp sort after every dated trade. Ties
/// keep their input order.
pub fn most_recent(trades: &[Trade], limit: usize) -> Vec<Trade> {
    let mut sorted = trades.to_vec();
    sorted.sort_by_cached_key(|trade| Reverse(trade.parsed_timestamp().ok()));
    sorted.truncate(limit);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TradeGenerator;
    use crate::rng::DEFAULT_SEED;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 8, 15, 0).unwrap()
    }

    fn trades() -> Vec<Trade> {
        TradeGenerator::new(DEFAULT_SEED, now()).generate(50)
    }

    #[test]
    fn test_default_filter_keeps_everything() {
        let all = trades();
        assert_eq!(TradeFilter::default().apply(&all, now()), all);
    }

    #[test]
    fn test_symbol_filter() {
        let all = trades();
        let sol = TradeFilter::new(Some(Symbol::SolPerp), TimeRange::AllTime).apply(&all, now());
        let btc = TradeFilter::new(Some(Symbol::BtcPerp), TimeRange::AllTime).apply(&all, now());

        assert!(sol.iter().all(|t| t.symbol == Symbol::SolPerp));
        assert!(btc.iter().all(|t| t.symbol == Symbol::BtcPerp));
        assert_eq!(sol.len() + btc.len(), all.len());
    }

    #[test]
    fn test_time_range_filter_is_strict() {
        // Trades sit exactly 1..=50 days before `now`; the one exactly 7 days
        // back lands on the cutoff and is excluded.
        let all = trades();
        let week = TradeFilter::new(None, TimeRange::Last7Days).apply(&all, now());
        let month = TradeFilter::new(None, TimeRange::Last30Days).apply(&all, now());

        assert_eq!(week.len(), 6);
        assert_eq!(month.len(), 29);
        assert_eq!(week[0].id, "trade-49");
    }

    #[test]
    fn test_later_evaluation_shrinks_the_window() {
        let all = trades();
        let filter = TradeFilter::new(None, TimeRange::Last7Days);
        let later = now() + Duration::hours(1);
        assert_eq!(filter.apply(&all, later).len(), 6);
        assert_eq!(filter.apply(&all, now() + Duration::days(1)).len(), 5);
    }

    #[test]
    fn test_malformed_timestamps() {
        let mut all = trades();
        all[0].timestamp = "not-a-date".to_string();

        let bounded = TradeFilter::new(None, TimeRange::Last7Days).apply(&all, now());
        assert!(bounded.iter().all(|t| t.id != all[0].id));

        let unbounded = TradeFilter::new(None, TimeRange::AllTime).apply(&all, now());
        assert_eq!(unbounded.len(), all.len());
    }

    #[test]
    fn test_source_is_untouched() {
        let all = trades();
        let snapshot = all.clone();
        let _ = TradeFilter::new(Some(Symbol::BtcPerp), TimeRange::Last30Days).apply(&all, now());
        assert_eq!(all, snapshot);
    }

    #[test]
    fn test_most_recent_orders_newest_first() {
        let mut all = trades();
        all.reverse();

        let recent = most_recent(&all, 10);
        let ids: Vec<&str> = recent.iter().map(|t| t.id.as_str()).collect();
        let expected: Vec<String> = (40..50).rev().map(|i| format!("trade-{i}")).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_most_recent_puts_malformed_timestamps_last() {
        let mut all = trades();
        all[0].timestamp = "not-a-date".to_string();

        let recent = most_recent(&all, all.len());
        assert_eq!(recent.len(), all.len());
        assert_eq!(recent[0].id, "trade-48");
        assert_eq!(recent[recent.len() - 1].id, "trade-49");
    }

    #[test]
    fn test_most_recent_respects_limit() {
        let all = trades();
        assert_eq!(most_recent(&all, 3).len(), 3);
        assert_eq!(most_recent(&all, 500).len(), 50);
        assert!(most_recent(&all, 0).is_empty());
    }
}
