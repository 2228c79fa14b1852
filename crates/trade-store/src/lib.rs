//! # Trade Store
//!
//! Source of the trade history the dashboard analyses.
//!
//! - `TradeGenerator` builds a reproducible synthetic history from a seeded
//!   `SineRng`. Every call rewinds the stream, so there is no shared draw
//!   state between callers.
//! - `TradeFilter` narrows a history by symbol and look-back window. It
//!   always returns a new vector and never mutates its input.
//! - `most_recent` picks the newest trades by timestamp, whatever order the
//!   history arrived in.

pub mod filter;
pub mod generator;
pub mod rng;

pub use filter::{TradeFilter, most_recent};
pub use generator::TradeGenerator;
pub use rng::{DEFAULT_SEED, SineRng};
