// In crates/app-config/src/lib.rs

use config::{Config, Environment, File};
use std::path::Path;

pub mod error;
pub mod types;

// Re-export the most important types for easy access.
pub use error::{Error, Result};
pub use types::Settings;

/// Loads the application settings from `./config`.
///
/// The environment name is taken from `APP_ENVIRONMENT` and defaults to "development".
pub fn load_settings() -> Result<Settings> {
    let environment = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "development".into());
    load_settings_from(Path::new("config"), &environment)
}

/// Loads the application settings from `directory`.
///
/// This function orchestrates the layered configuration loading:
/// 1. Built-in defaults.
/// 2. An optional `base.toml` file.
/// 3. An optional environment-specific file (e.g., `development.toml`).
/// 4. Environment variables (e.g., `APP_BACKTEST__PRINCIPAL=5000`).
pub fn load_settings_from(directory: &Path, environment: &str) -> Result<Settings> {
    let settings = Config::builder()
        .set_default("app.environment", environment)?
        .set_default("app.log_level", "info")?
        .set_default("backtest.principal", 10_000.0)?
        .set_default("backtest.strategy", "SMA")?
        .set_default("crossover.fast_period", 20)?
        .set_default("crossover.slow_period", 50)?
        .set_default("data.directory", "data")?
        .set_default("server.host", "127.0.0.1")?
        .set_default("server.port", 8080)?
        .add_source(File::from(directory.join("base")).required(false))
        .add_source(File::from(directory.join(environment)).required(false))
        // The prefix is `APP`, separator is `__`.
        .add_source(
            Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    // Deserialize the configuration into our `Settings` struct.
    let settings: Settings = settings.try_deserialize()?;
    settings.crossover.validate()?;

    Ok(settings)
}
