use crate::error::ConfigError;
use core_types::{Symbol, TimeRange};
use serde::Deserialize;

/// The root configuration structure for the entire application.
///
/// Every section is optional in `deriverse.toml`; missing keys fall back to
/// the dashboard's defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub generator: GeneratorSettings,
    pub dashboard: DashboardSettings,
}

/// Controls the synthetic trade history.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneratorSettings {
    /// How many trades to generate.
    pub trade_count: usize,
    /// Seed for the sine-based random stream.
    pub seed: u32,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            trade_count: 50,
            seed: 56789,
        }
    }
}

/// Initial filter selection and table sizes.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DashboardSettings {
    /// Restrict to one market. Absent means all symbols.
    pub symbol: Option<Symbol>,
    pub time_range: TimeRange,
    /// Rows shown in the recent trades table.
    pub recent_trades: usize,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            symbol: None,
            time_range: TimeRange::AllTime,
            recent_trades: 10,
        }
    }
}

impl Config {
    /// Checks the values that deserialization alone cannot rule out.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.generator.trade_count == 0 {
            return Err(ConfigError::ValidationError(
                "generator.trade_count must be greater than 0".to_string(),
            ));
        }
        if self.dashboard.recent_trades == 0 {
            return Err(ConfigError::ValidationError(
                "dashboard.recent_trades must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}
