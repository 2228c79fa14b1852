use chrono::{DateTime, Utc};
use core_types::Trade;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One step of the cumulative PnL curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquityPoint {
    pub trade_id: String,
    /// `None` when the trade's timestamp could not be parsed.
    pub timestamp: Option<DateTime<Utc>>,
    pub date: String,
    pub pnl: Decimal,
    pub cumulative_pnl: Decimal,
}

/// Orders trades oldest first, whatever order they arrive in.
///
/// The sort is stable. Trades with an unparseable timestamp are placed
/// before every dated trade, keeping their relative order.
pub fn chronological(trades: &[Trade]) -> Vec<(Option<DateTime<Utc>>, &Trade)> {
    let mut ordered: Vec<_> = trades
        .iter()
        .map(|trade| match trade.parsed_timestamp() {
            Ok(timestamp) => (Some(timestamp), trade),
            Err(e) => {
                tracing::warn!(trade_id = %trade.id, "Ordering undated trade first: {}", e);
                (None, trade)
            }
        })
        .collect();

    ordered.sort_by_key(|(timestamp, _)| *timestamp);
    ordered
}

/// Builds the running PnL total in chronological order.
pub fn equity_curve(trades: &[Trade]) -> Vec<EquityPoint> {
    let mut running_pnl = Decimal::ZERO;

    chronological(trades)
        .into_iter()
        .map(|(timestamp, trade)| {
            running_pnl += trade.pnl;
            EquityPoint {
                trade_id: trade.id.clone(),
                timestamp,
                date: trade.date.clone(),
                pnl: trade.pnl,
                cumulative_pnl: running_pnl,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::{OrderType, Symbol, TradeSide, TradeStatus};
    use rust_decimal_macros::dec;

    fn trade(id: &str, pnl: Decimal, timestamp: &str) -> Trade {
        Trade {
            id: id.to_string(),
            symbol: Symbol::BtcPerp,
            side: TradeSide::Short,
            order_type: OrderType::Market,
            entry_price: dec!(66000),
            exit_price: dec!(65900),
            size: dec!(1000),
            fee: dec!(0.5),
            pnl,
            status: TradeStatus::from_pnl(pnl),
            timestamp: timestamp.to_string(),
            date: timestamp.get(..10).unwrap_or_default().to_string(),
            duration: 600,
        }
    }

    #[test]
    fn test_curve_accumulates_oldest_first() {
        // Newest first, the way the store exposes them.
        let trades = vec![
            trade("c", dec!(20), "2026-10-03T00:00:00.000Z"),
            trade("b", dec!(-40), "2026-10-02T00:00:00.000Z"),
            trade("a", dec!(100), "2026-10-01T00:00:00.000Z"),
        ];

        let curve = equity_curve(&trades);
        let ids: Vec<_> = curve.iter().map(|p| p.trade_id.as_str()).collect();
        let cumulative: Vec<_> = curve.iter().map(|p| p.cumulative_pnl).collect();

        assert_eq!(ids, vec!["a", "b", "c"]);
        assert_eq!(cumulative, vec![dec!(100), dec!(60), dec!(80)]);
        assert_eq!(curve[0].date, "2026-10-01");
    }

    #[test]
    fn test_undated_trades_sort_first() {
        let trades = vec![
            trade("dated", dec!(10), "2026-10-01T00:00:00.000Z"),
            trade("undated", dec!(-5), "garbage"),
        ];

        let curve = equity_curve(&trades);
        assert_eq!(curve[0].trade_id, "undated");
        assert_eq!(curve[0].timestamp, None);
        assert_eq!(curve[1].cumulative_pnl, dec!(5));
    }

    #[test]
    fn test_empty_curve() {
        assert!(equity_curve(&[]).is_empty());
    }
}
