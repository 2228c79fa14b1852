//! # Deriverse Analytics Engine
//!
//! This crate turns a list of closed trades into the statistics shown on the
//! dashboard.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of external systems.
//!   It depends only on `core-types` (Layer 0).
//! - **Stateless Calculation:** The `AnalyticsEngine` takes a trade slice and produces a
//!   `PerformanceReport`. Degenerate inputs yield zeros rather than errors.
//!
//! ## Public API
//!
//! - `AnalyticsEngine`: profitability, drawdown, breakdowns and averages.
//! - `PerformanceReport`: the snapshot handed to presentation code.
//! - `equity_curve`: cumulative PnL in chronological order.
//! - `hourly_breakdown`: PnL and trade count per hour of day.

pub mod curve;
pub mod engine;
pub mod report;
pub mod session;

pub use curve::{EquityPoint, equity_curve};
pub use engine::{AnalyticsEngine, UNBOUNDED_PROFIT_FACTOR};
pub use report::{OrderTypeBreakdown, PerformanceReport, SideBreakdown};
pub use session::{HourlyBucket, hourly_breakdown};
