use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Trade counts for one direction (long or short).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideBreakdown {
    pub count: usize,
    pub wins: usize,
}

impl SideBreakdown {
    pub fn win_rate_pct(&self) -> Decimal {
        percentage(self.wins, self.count)
    }
}

/// Trade count and win rate for one execution style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderTypeBreakdown {
    pub count: usize,
    pub win_rate_pct: Decimal,
}

/// A snapshot of the statistics shown on the dashboard.
///
/// This struct is the output of the `AnalyticsEngine`. Every field is zero for
/// an empty trade set; no field is ever undefined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceReport {
    // I. Core Profitability Metrics
    pub total_pnl: Decimal,
    pub gross_profit: Decimal,
    pub gross_loss: Decimal,
    /// Capped at 100 when there are profits but no losses.
    pub profit_factor: Decimal,

    // II. Risk and Drawdown
    pub max_drawdown: Decimal,
    /// Best single trade, never below zero.
    pub max_win: Decimal,
    /// Worst single trade, never above zero.
    pub max_loss: Decimal,

    // III. Trade-Level Statistics
    pub total_trades: usize,
    pub winning_trades: usize,
    pub losing_trades: usize,
    pub win_rate_pct: Decimal,
    pub average_win: Decimal,
    pub average_loss: Decimal,

    // IV. Volume and Costs
    pub total_volume: Decimal,
    pub total_fees: Decimal,
    pub average_size: Decimal,

    // V. Time-Based Metrics
    pub average_duration_secs: Decimal,

    // VI. Breakdowns
    pub longs: SideBreakdown,
    pub shorts: SideBreakdown,
    pub limit_orders: OrderTypeBreakdown,
    pub market_orders: OrderTypeBreakdown,
}

impl PerformanceReport {
    /// Creates a new, zeroed-out PerformanceReport.
    pub fn new() -> Self {
        Self {
            total_pnl: Decimal::ZERO,
            gross_profit: Decimal::ZERO,
            gross_loss: Decimal::ZERO,
            profit_factor: Decimal::ZERO,
            max_drawdown: Decimal::ZERO,
            max_win: Decimal::ZERO,
            max_loss: Decimal::ZERO,
            total_trades: 0,
            winning_trades: 0,
            losing_trades: 0,
            win_rate_pct: Decimal::ZERO,
            average_win: Decimal::ZERO,
            average_loss: Decimal::ZERO,
            total_volume: Decimal::ZERO,
            total_fees: Decimal::ZERO,
            average_size: Decimal::ZERO,
            average_duration_secs: Decimal::ZERO,
            longs: SideBreakdown::default(),
            shorts: SideBreakdown::default(),
            limit_orders: OrderTypeBreakdown::default(),
            market_orders: OrderTypeBreakdown::default(),
        }
    }

    /// Fees as a percentage of traded volume.
    pub fn average_fee_rate_pct(&self) -> Decimal {
        if self.total_volume.is_zero() {
            return Decimal::ZERO;
        }
        self.total_fees / self.total_volume * Decimal::ONE_HUNDRED
    }
}

impl Default for PerformanceReport {
    fn default() -> Self {
        Self::new()
    }
}

/// `part / whole` as a percentage, zero when `whole` is zero.
pub(crate) fn percentage(part: usize, whole: usize) -> Decimal {
    if whole == 0 {
        return Decimal::ZERO;
    }
    Decimal::from(part) / Decimal::from(whole) * Decimal::ONE_HUNDRED
}
