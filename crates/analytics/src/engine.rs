use crate::curve::{EquityPoint, equity_curve};
use crate::report::{OrderTypeBreakdown, PerformanceReport, SideBreakdown, percentage};
use core_types::{OrderType, Trade, TradeSide, TradeStatus};
use rust_decimal::Decimal;

/// Profit factor reported when a trade set has profits but no losses.
pub const UNBOUNDED_PROFIT_FACTOR: Decimal = Decimal::ONE_HUNDRED;

/// A stateless calculator for deriving performance metrics from trading activity.
#[derive(Debug, Default)]
pub struct AnalyticsEngine {}

impl AnalyticsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// The main entry point for calculating performance metrics.
    ///
    /// # Arguments
    ///
    /// * `trades` - Closed trades in any order. Only the drawdown depends on
    ///   order, and it is computed over a chronologically sorted copy.
    ///
    /// # Returns
    ///
    /// A `PerformanceReport`. Ratios and means over empty sets are zero, so
    /// this never fails.
    pub fn calculate(&self, trades: &[Trade]) -> PerformanceReport {
        let mut report = PerformanceReport::new();

        if trades.is_empty() {
            return report;
        }

        self.calculate_profitability(trades, &mut report);
        self.calculate_breakdowns(trades, &mut report);
        self.calculate_drawdown(&equity_curve(trades), &mut report);
        self.calculate_averages(trades, &mut report);

        tracing::debug!(
            trades = report.total_trades,
            total_pnl = %report.total_pnl,
            max_drawdown = %report.max_drawdown,
            "Calculated performance report"
        );
        report
    }

    /// PnL totals, extremes, win rate and profit factor.
    fn calculate_profitability(&self, trades: &[Trade], report: &mut PerformanceReport) {
        report.total_trades = trades.len();

        let mut win_pnl = Decimal::ZERO;
        let mut loss_pnl = Decimal::ZERO;

        for trade in trades {
            let pnl = trade.pnl;
            report.total_pnl += pnl;

            if pnl > Decimal::ZERO {
                report.gross_profit += pnl;
            } else if pnl < Decimal::ZERO {
                report.gross_loss += pnl.abs();
            }

            match trade.status {
                TradeStatus::Win => {
                    report.winning_trades += 1;
                    win_pnl += pnl;
                }
                TradeStatus::Loss => {
                    report.losing_trades += 1;
                    loss_pnl += pnl;
                }
            }

            report.max_win = report.max_win.max(pnl);
            report.max_loss = report.max_loss.min(pnl);
        }

        report.profit_factor = if report.gross_loss > Decimal::ZERO {
            report.gross_profit / report.gross_loss
        } else if report.gross_profit > Decimal::ZERO {
            UNBOUNDED_PROFIT_FACTOR
        } else {
            Decimal::ZERO
        };

        report.win_rate_pct = percentage(report.winning_trades, report.total_trades);
        report.average_win = mean(win_pnl, report.winning_trades);
        report.average_loss = mean(loss_pnl, report.losing_trades);
    }

    /// Direction and order-type splits.
    fn calculate_breakdowns(&self, trades: &[Trade], report: &mut PerformanceReport) {
        let mut limit = SideBreakdown::default();
        let mut market = SideBreakdown::default();

        for trade in trades {
            let side = match trade.side {
                TradeSide::Long => &mut report.longs,
                TradeSide::Short => &mut report.shorts,
            };
            let order = match trade.order_type {
                OrderType::Limit => &mut limit,
                OrderType::Market => &mut market,
            };

            side.count += 1;
            order.count += 1;
            if trade.is_win() {
                side.wins += 1;
                order.wins += 1;
            }
        }

        report.limit_orders = OrderTypeBreakdown {
            count: limit.count,
            win_rate_pct: limit.win_rate_pct(),
        };
        report.market_orders = OrderTypeBreakdown {
            count: market.count,
            win_rate_pct: market.win_rate_pct(),
        };
    }

    /// Largest fall of cumulative PnL from its running peak.
    ///
    /// The peak starts at zero, so a losing first trade already counts as
    /// drawdown.
    fn calculate_drawdown(&self, equity_curve: &[EquityPoint], report: &mut PerformanceReport) {
        let mut peak = Decimal::ZERO;
        let mut max_drawdown = Decimal::ZERO;

        for point in equity_curve {
            if point.cumulative_pnl > peak {
                peak = point.cumulative_pnl;
            }
            let drawdown = peak - point.cumulative_pnl;
            if drawdown > max_drawdown {
                max_drawdown = drawdown;
            }
        }

        report.max_drawdown = max_drawdown;
    }

    /// Volume, fees and per-trade means.
    fn calculate_averages(&self, trades: &[Trade], report: &mut PerformanceReport) {
        let mut total_duration = Decimal::ZERO;

        for trade in trades {
            report.total_volume += trade.size;
            report.total_fees += trade.fee;
            total_duration += Decimal::from(trade.duration);
        }

        report.average_size = mean(report.total_volume, report.total_trades);
        report.average_duration_secs = mean(total_duration, report.total_trades);
    }
}

fn mean(sum: Decimal, count: usize) -> Decimal {
    if count == 0 {
        return Decimal::ZERO;
    }
    sum / Decimal::from(count)
}
