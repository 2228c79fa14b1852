//! Terminal rendering of the dashboard panels.

use analytics::{EquityPoint, HourlyBucket, PerformanceReport};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, Color, Table};
use core_types::{Trade, TradeSide};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use trade_store::TradeFilter;

/// `$1234.50`, or `-$40.00` for negative amounts.
pub fn format_currency(value: Decimal) -> String {
    let cents = value.round_dp(2);
    if cents.is_sign_negative() && !cents.is_zero() {
        format!("-${:.2}", cents.abs())
    } else {
        format!("${:.2}", cents.abs())
    }
}

/// Like [`format_currency`] but with an explicit `+` on gains.
pub fn format_signed_currency(value: Decimal) -> String {
    if value > Decimal::ZERO {
        format!("+{}", format_currency(value))
    } else {
        format_currency(value)
    }
}

pub fn format_pct(value: Decimal, decimals: u32) -> String {
    format!("{:.*}%", decimals as usize, value.round_dp(decimals))
}

/// Thousands of dollars with one decimal, e.g. `$12.3k`.
pub fn format_thousands(value: Decimal) -> String {
    format!("${:.1}k", (value / Decimal::ONE_THOUSAND).round_dp(1))
}

/// Whole hours and minutes, e.g. `1h 5m`.
pub fn format_duration(seconds: Decimal) -> String {
    let total = seconds.trunc().to_u64().unwrap_or(0);
    format!("{}h {}m", total / 3600, (total % 3600) / 60)
}

fn pnl_cell(value: Decimal) -> Cell {
    let color = if value > Decimal::ZERO {
        Color::Green
    } else if value < Decimal::ZERO {
        Color::Red
    } else {
        Color::Reset
    };
    Cell::new(format_signed_currency(value))
        .fg(color)
        .set_alignment(CellAlignment::Right)
}

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(header);
    table
}

/// The four headline cards.
pub fn stats_table(report: &PerformanceReport, filter: &TradeFilter) -> Table {
    let mut table = new_table(vec!["Total PnL", "Win Rate", "Total Volume", "Fees Paid"]);

    let scope = match filter.symbol {
        Some(symbol) => format!("{symbol}, {}", filter.time_range),
        None => format!("all symbols, {}", filter.time_range),
    };

    table.add_row(vec![
        pnl_cell(report.total_pnl),
        Cell::new(format_pct(report.win_rate_pct, 1)),
        Cell::new(format_thousands(report.total_volume)),
        Cell::new(format_currency(report.total_fees)),
    ]);
    table.add_row(vec![
        scope,
        format!("{} trades", report.total_trades),
        format!("Avg. size {}", format_thousands(report.average_size)),
        format!("{} avg rate", format_pct(report.average_fee_rate_pct(), 3)),
    ]);
    table
}

/// Performance and risk panel.
pub fn risk_table(report: &PerformanceReport) -> Table {
    let mut table = new_table(vec!["Metric", "Value"]);

    table.add_row(vec![Cell::new("Average Win"), pnl_cell(report.average_win)]);
    table.add_row(vec![Cell::new("Average Loss"), pnl_cell(report.average_loss)]);
    table.add_row(vec![
        Cell::new("Avg Duration"),
        Cell::new(format_duration(report.average_duration_secs)),
    ]);
    table.add_row(vec![Cell::new("Best Trade"), pnl_cell(report.max_win)]);
    table.add_row(vec![Cell::new("Worst Trade"), pnl_cell(report.max_loss)]);
    table.add_row(vec![Cell::new("Max Drawdown"), pnl_cell(-report.max_drawdown)]);
    table.add_row(vec![
        Cell::new("Profit Factor"),
        Cell::new(format!("{:.2}", report.profit_factor.round_dp(2))),
    ]);
    table
}

/// Directional bias and order-type win rates.
pub fn breakdown_table(report: &PerformanceReport) -> Table {
    let mut table = new_table(vec!["Segment", "Trades", "Wins", "Win Rate"]);

    table.add_row(vec![
        "Longs".to_string(),
        report.longs.count.to_string(),
        report.longs.wins.to_string(),
        format_pct(report.longs.win_rate_pct(), 1),
    ]);
    table.add_row(vec![
        "Shorts".to_string(),
        report.shorts.count.to_string(),
        report.shorts.wins.to_string(),
        format_pct(report.shorts.win_rate_pct(), 1),
    ]);
    table.add_row(vec![
        "Limit orders".to_string(),
        report.limit_orders.count.to_string(),
        "-".to_string(),
        format_pct(report.limit_orders.win_rate_pct, 1),
    ]);
    table.add_row(vec![
        "Market orders".to_string(),
        report.market_orders.count.to_string(),
        "-".to_string(),
        format_pct(report.market_orders.win_rate_pct, 1),
    ]);
    table
}

/// The trade journal, one row per trade in the order given.
pub fn recent_trades_table(trades: &[Trade]) -> Table {
    let mut table = new_table(vec![
        "Date", "Symbol", "Type", "Order", "Entry", "Exit", "Size", "PnL",
    ]);

    for trade in trades {
        let side_color = match trade.side {
            TradeSide::Long => Color::Green,
            TradeSide::Short => Color::Red,
        };
        table.add_row(vec![
            Cell::new(&trade.date),
            Cell::new(trade.symbol),
            Cell::new(trade.side).fg(side_color),
            Cell::new(trade.order_type),
            Cell::new(format_currency(trade.entry_price)),
            Cell::new(format_currency(trade.exit_price)),
            Cell::new(format_currency(trade.size)),
            pnl_cell(trade.pnl),
        ]);
    }
    table
}

/// Hourly PnL distribution.
pub fn sessions_table(buckets: &[HourlyBucket]) -> Table {
    let mut table = new_table(vec!["Hour (UTC)", "Trades", "PnL"]);

    for bucket in buckets {
        table.add_row(vec![
            Cell::new(bucket.label()),
            Cell::new(bucket.count),
            pnl_cell(bucket.pnl),
        ]);
    }
    table
}

/// Cumulative PnL over time.
pub fn curve_table(points: &[EquityPoint]) -> Table {
    let mut table = new_table(vec!["Date", "Trade", "PnL", "Cumulative PnL"]);

    for point in points {
        table.add_row(vec![
            Cell::new(&point.date),
            Cell::new(&point.trade_id),
            pnl_cell(point.pnl),
            pnl_cell(point.cumulative_pnl),
        ]);
    }
    table
}
