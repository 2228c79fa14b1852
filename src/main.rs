use analytics::{AnalyticsEngine, equity_curve, hourly_breakdown};
use anyhow::{Context, Result, bail};
use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};
use configuration::Config;
use core_types::{Symbol, TimeRange, Trade};
use std::path::{Path, PathBuf};
use trade_store::{TradeFilter, TradeGenerator, most_recent};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod display;

/// The main entry point for the Deriverse analytics dashboard.
fn main() -> Result<()> {
    // Load RUST_LOG and DERIVERSE_* overrides from a .env file, if there is one.
    dotenvy::dotenv().ok();

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();
    let config = configuration::load_config().context("Failed to load deriverse.toml")?;

    // Every command evaluates time ranges against the same instant.
    let now = Utc::now();

    match cli.command {
        Commands::Report(args) => handle_report(&args, &config, now),
        Commands::Trades(args) => handle_trades(&args, &config, now),
        Commands::Sessions(args) => handle_sessions(&args, &config, now),
        Commands::Curve(args) => handle_curve(&args, &config, now),
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Trading performance analytics for Deriverse perpetual markets.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show headline stats, performance & risk, and directional breakdowns.
    Report(DashboardArgs),
    /// List the most recent trades.
    Trades(TradesArgs),
    /// Show PnL per hour of day (UTC).
    Sessions(DashboardArgs),
    /// Show the cumulative PnL curve.
    Curve(DashboardArgs),
}

#[derive(Args)]
struct DashboardArgs {
    /// Only include one market (e.g. "SOL-PERP"). Defaults to all symbols.
    #[arg(long)]
    symbol: Option<Symbol>,

    /// Look-back window: "all-time", "last-30-days" or "last-7-days".
    #[arg(long)]
    range: Option<TimeRange>,

    /// Number of trades to generate.
    #[arg(long)]
    count: Option<usize>,

    /// Seed for the trade generator.
    #[arg(long)]
    seed: Option<u32>,

    /// Read trades from a JSON array instead of generating them.
    #[arg(long, conflicts_with_all = ["count", "seed"])]
    input: Option<PathBuf>,

    /// Print JSON instead of tables.
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct TradesArgs {
    #[command(flatten)]
    dashboard: DashboardArgs,

    /// Maximum number of rows to show.
    #[arg(long)]
    limit: Option<usize>,
}

// ==============================================================================
// Command Logic
// ==============================================================================

/// Loads or generates the trade history and applies the selected filters.
fn select_trades(
    args: &DashboardArgs,
    config: &Config,
    now: DateTime<Utc>,
) -> Result<(Vec<Trade>, TradeFilter)> {
    let trades = match &args.input {
        Some(path) => read_trades(path)?,
        None => {
            let count = args.count.unwrap_or(config.generator.trade_count);
            if count == 0 {
                bail!("--count must be greater than 0");
            }
            let seed = args.seed.unwrap_or(config.generator.seed);
            TradeGenerator::new(seed, now).generate(count)
        }
    };

    let filter = TradeFilter::new(
        args.symbol.or(config.dashboard.symbol),
        args.range.unwrap_or(config.dashboard.time_range),
    );
    let filtered = filter.apply(&trades, now);

    tracing::info!(
        loaded = trades.len(),
        selected = filtered.len(),
        "Selected trades for dashboard"
    );
    Ok((filtered, filter))
}

fn read_trades(path: &Path) -> Result<Vec<Trade>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read trades from {}", path.display()))?;
    let trades: Vec<Trade> = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse trades in {}", path.display()))?;
    Ok(trades)
}

fn handle_report(args: &DashboardArgs, config: &Config, now: DateTime<Utc>) -> Result<()> {
    let (trades, filter) = select_trades(args, config, now)?;
    let report = AnalyticsEngine::new().calculate(&trades);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Trading Overview");
    println!("{}", display::stats_table(&report, &filter));
    println!("\nPerformance & Risk");
    println!("{}", display::risk_table(&report));
    println!("\nDirectional Bias & Order Types");
    println!("{}", display::breakdown_table(&report));
    Ok(())
}

fn handle_trades(args: &TradesArgs, config: &Config, now: DateTime<Utc>) -> Result<()> {
    let (trades, _) = select_trades(&args.dashboard, config, now)?;
    let limit = args.limit.unwrap_or(config.dashboard.recent_trades);
    let recent = most_recent(&trades, limit);

    if args.dashboard.json {
        println!("{}", serde_json::to_string_pretty(&recent)?);
        return Ok(());
    }

    println!("Recent Trades ({} of {})", recent.len(), trades.len());
    println!("{}", display::recent_trades_table(&recent));
    Ok(())
}

fn handle_sessions(args: &DashboardArgs, config: &Config, now: DateTime<Utc>) -> Result<()> {
    let (trades, _) = select_trades(args, config, now)?;
    let buckets = hourly_breakdown(&trades);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&buckets)?);
        return Ok(());
    }

    println!("Session Performance");
    println!("{}", display::sessions_table(&buckets));
    Ok(())
}

fn handle_curve(args: &DashboardArgs, config: &Config, now: DateTime<Utc>) -> Result<()> {
    let (trades, _) = select_trades(args, config, now)?;
    let curve = equity_curve(&trades);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&curve)?);
        return Ok(());
    }

    println!("Cumulative PnL");
    println!("{}", display::curve_table(&curve));
    Ok(())
}
