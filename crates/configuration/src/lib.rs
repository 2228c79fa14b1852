// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use error::ConfigError;
pub use settings::{Config, DashboardSettings, GeneratorSettings};

/// Name of the optional configuration file, looked up in the working directory.
pub const CONFIG_FILE: &str = "deriverse.toml";

/// Loads the application configuration.
///
/// Reads `deriverse.toml` when present, then applies environment overrides
/// such as `DERIVERSE_GENERATOR__TRADE_COUNT=200`. The result is validated
/// before it is returned.
pub fn load_config() -> Result<Config, ConfigError> {
    let builder = config::Config::builder()
        .add_source(config::File::with_name(CONFIG_FILE).required(false))
        .add_source(environment());

    finish(builder)
}

/// `DERIVERSE_` followed by the key path, with `__` between nested keys.
fn environment() -> config::Environment {
    config::Environment::with_prefix("DERIVERSE")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

/// Loads the configuration from TOML text instead of the filesystem.
pub fn load_config_from_str(toml: &str) -> Result<Config, ConfigError> {
    let builder = config::Config::builder()
        .add_source(config::File::from_str(toml, config::FileFormat::Toml));

    finish(builder)
}

fn finish(
    builder: config::ConfigBuilder<config::builder::DefaultState>,
) -> Result<Config, ConfigError> {
    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = builder.build()?.try_deserialize::<Config>()?;
    config.validate()?;

    tracing::debug!(?config, "Loaded configuration");
    Ok(config)
}
