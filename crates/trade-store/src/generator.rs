use crate::rng::{DEFAULT_SEED, SineRng};
use chrono::{DateTime, Duration, SecondsFormat, Utc};
use core_types::{OrderType, Symbol, Trade, TradeSide, TradeStatus};
use rust_decimal::prelude::*;
use rust_decimal::Decimal;

/// Produces the synthetic trade history shown on the dashboard.
///
/// The generator owns its random stream and rewinds it on every call to
/// [`TradeGenerator::generate`], so two calls with the same `count` return
/// identical trades. Timestamps are laid out one day apart, ending one day
/// before `anchor`.
#[derive(Debug, Clone)]
pub struct TradeGenerator {
    rng: SineRng,
    anchor: DateTime<Utc>,
}

impl TradeGenerator {
    pub fn new(seed: u32, anchor: DateTime<Utc>) -> Self {
        Self {
            rng: SineRng::new(seed),
            anchor,
        }
    }

    /// A generator with the fixture seed, anchored at the current time.
    pub fn with_defaults() -> Self {
        Self::new(DEFAULT_SEED, Utc::now())
    }

    /// Generates `count` trades, newest first.
    pub fn generate(&mut self, count: usize) -> Vec<Trade> {
        self.rng.reset();
        tracing::debug!(count, anchor = %self.anchor, "Generating mock trades");

        let mut trades: Vec<Trade> = (0..count).map(|i| self.next_trade(i, count)).collect();
        trades.reverse();
        trades
    }

    /// Builds the trade at generation index `index` (0 is the oldest).
    ///
    /// The order of draws is fixed; reordering them changes every fixture.
    fn next_trade(&mut self, index: usize, count: usize) -> Trade {
        let is_win = self.rng.next_f64() > 0.45;
        let side = if self.rng.next_f64() > 0.5 {
            TradeSide::Long
        } else {
            TradeSide::Short
        };
        let symbol = if self.rng.next_f64() > 0.5 {
            Symbol::SolPerp
        } else {
            Symbol::BtcPerp
        };
        let size = Decimal::from((self.rng.next_f64() * 5000.0).floor() as u32 + 1000);
        let order_type = if self.rng.next_f64() > 0.4 {
            OrderType::Limit
        } else {
            OrderType::Market
        };
        let fee = size * order_type.fee_rate();

        let gross_pnl = if is_win {
            size * to_decimal(self.rng.next_f64() * 0.05 + 0.01)
        } else {
            -size * to_decimal(self.rng.next_f64() * 0.03 + 0.01)
        };
        let pnl = round_cents(gross_pnl - fee);

        let duration = (self.rng.next_f64() * 3600.0 * 4.0).floor() as u32 + 60;
        let entry_price = self.price_for(symbol);
        let exit_price = self.price_for(symbol);

        let timestamp = self.anchor - Duration::days((count - index) as i64);

        Trade {
            id: format!("trade-{index}"),
            symbol,
            side,
            order_type,
            entry_price,
            exit_price,
            size,
            fee: round_cents(fee),
            pnl,
            status: TradeStatus::from_pnl(pnl),
            timestamp: timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
            date: timestamp.format("%Y-%m-%d").to_string(),
            duration,
        }
    }

    /// A cosmetic fill price in the symbol's usual band. Unrelated to PnL.
    fn price_for(&mut self, symbol: Symbol) -> Decimal {
        let draw = self.rng.next_f64();
        let price = match symbol {
            Symbol::SolPerp => 140.0 + draw * 10.0,
            Symbol::BtcPerp => 65_000.0 + draw * 2_000.0,
        };
        round_cents(to_decimal(price))
    }
}

impl Default for TradeGenerator {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Draws are always finite, so the conversion cannot fail in practice.
fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

fn round_cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    fn anchor() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 8, 15, 0).unwrap()
    }

    fn fixture(count: usize) -> Vec<Trade> {
        TradeGenerator::new(DEFAULT_SEED, anchor()).generate(count)
    }

    #[test]
    fn test_generates_requested_count() {
        assert_eq!(fixture(50).len(), 50);
        assert_eq!(fixture(1).len(), 1);
        assert!(fixture(0).is_empty());
    }

    #[test]
    fn test_status_matches_pnl_sign() {
        for trade in fixture(500) {
            assert_eq!(trade.is_win(), trade.pnl > Decimal::ZERO, "{}", trade.id);
        }
    }

    #[test]
    fn test_generation_is_deterministic() {
        let mut generator = TradeGenerator::new(DEFAULT_SEED, anchor());
        let first = generator.generate(50);
        let second = generator.generate(50);
        assert_eq!(first, second);
        assert_eq!(first, fixture(50));
    }

    #[test]
    fn test_newest_trade_comes_first() {
        let trades = fixture(50);
        assert_eq!(trades[0].id, "trade-49");
        assert_eq!(trades[49].id, "trade-0");
        assert_eq!(trades[0].timestamp, "2026-10-18T08:15:00.000Z");
        assert_eq!(trades[0].date, "2026-10-18");
        assert_eq!(trades[49].date, "2026-08-30");

        let stamps: Vec<_> = trades.iter().map(|t| t.parsed_timestamp().unwrap()).collect();
        assert!(stamps.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn test_known_records_for_default_seed() {
        let trades = fixture(50);

        let oldest = &trades[49];
        assert_eq!(oldest.status, TradeStatus::Win);
        assert_eq!(oldest.side, TradeSide::Long);
        assert_eq!(oldest.symbol, Symbol::SolPerp);
        assert_eq!(oldest.size, dec!(3575));
        assert_eq!(oldest.order_type, OrderType::Limit);
        assert_eq!(oldest.duration, 11759);

        let next = &trades[48];
        assert_eq!(next.status, TradeStatus::Loss);
        assert_eq!(next.side, TradeSide::Short);
        assert_eq!(next.symbol, Symbol::BtcPerp);
        assert_eq!(next.size, dec!(4355));
    }

    #[test]
    fn test_largest_seed_generates_valid_trades() {
        let trades = TradeGenerator::new(u32::MAX, anchor()).generate(50);
        assert_eq!(trades.len(), 50);
        assert!(trades.iter().all(|t| t.is_win() == (t.pnl > Decimal::ZERO)));
        assert!(trades.windows(2).any(|w| w[0].size != w[1].size));
    }

    #[test]
    fn test_field_bounds_and_fees() {
        for trade in fixture(500) {
            assert!(trade.size >= dec!(1000) && trade.size < dec!(6000));
            assert!((60..14_460).contains(&trade.duration));
            assert_eq!(trade.fee, round_cents(trade.size * trade.order_type.fee_rate()));

            let (low, high) = match trade.symbol {
                Symbol::SolPerp => (dec!(140), dec!(150)),
                Symbol::BtcPerp => (dec!(65000), dec!(67000)),
            };
            assert!(trade.entry_price >= low && trade.entry_price <= high);
            assert!(trade.exit_price >= low && trade.exit_price <= high);
        }
    }

    #[test]
    fn test_pnl_stays_within_policy_band() {
        for trade in fixture(500) {
            let fee = trade.size * trade.order_type.fee_rate();
            let gross = trade.pnl + fee;
            let tolerance = dec!(0.01);
            if trade.is_win() {
                assert!(gross >= trade.size * dec!(0.01) - tolerance);
                assert!(gross <= trade.size * dec!(0.06) + tolerance);
            } else {
                assert!(gross <= -trade.size * dec!(0.01) + tolerance);
                assert!(gross >= -trade.size * dec!(0.04) - tolerance);
            }
        }
    }
}
