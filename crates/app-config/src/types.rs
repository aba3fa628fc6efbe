// In crates/app-config/src/types.rs

use serde::Deserialize;
use std::path::PathBuf;
use strategies::types::CrossoverSettings;

#[derive(Deserialize, Debug, Clone)]
pub struct Settings {
    /// The application's general settings.
    pub app: AppSettings,
    /// Defaults for backtest parameters not given on the command line or in a request.
    pub backtest: BacktestSettings,
    /// Window lengths of the fast and slow averages.
    pub crossover: CrossoverSettings,
    /// Where historical price files live.
    pub data: DataSettings,
    pub server: ServerSettings,
}

#[derive(Deserialize, Debug, Clone)]
pub struct AppSettings {
    /// The environment the application is running in (e.g., "development", "production").
    pub environment: String,
    /// The log level for the application.
    pub log_level: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct BacktestSettings {
    /// Capital re-invested at every trade.
    pub principal: f64,
    /// "SMA" or "EMA". Parsed when a run starts, so a bad value is reported there.
    pub strategy: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct DataSettings {
    /// Directory holding one `{SYMBOL}.csv` file per instrument.
    pub directory: PathBuf,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}
