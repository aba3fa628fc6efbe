// In app/src/main.rs

use anyhow::{Context, Result};
use app_config::Settings;
use backtester::{principal_from_f64, BacktestRequest, Backtester};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use core_types::{StrategyKind, Symbol};
use market_data::{CsvPriceSource, PriceSource};
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing_subscriber::prelude::*;
use web_server::AppState;

mod report;

// --- Command-Line Interface Definition ---

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = "A moving-average crossover backtester.")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Runs a historical backtest of the crossover strategy.
    Backtest {
        /// The ticker to backtest (e.g., "AAPL"). Prices are read from `<data dir>/<SYMBOL>.csv`.
        #[arg(short, long)]
        symbol: String,

        /// The first day of the window in YYYY-MM-DD format.
        #[arg(long)]
        start_date: NaiveDate,

        /// The last day of the window in YYYY-MM-DD format (inclusive).
        #[arg(long)]
        end_date: NaiveDate,

        /// Amount re-invested at every trade. Defaults to `backtest.principal`.
        #[arg(short, long)]
        principal: Option<Decimal>,

        /// "SMA" or "EMA". Defaults to `backtest.strategy`.
        #[arg(long)]
        strategy: Option<String>,

        /// Print the full report as JSON instead of tables.
        #[arg(long)]
        json: bool,
    },

    /// Serves backtests over HTTP.
    Serve,
}

// --- Main Application Entry Point ---

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from a .env file, if it exists.
    dotenvy::dotenv().ok();

    // Parse command-line arguments.
    let cli = Cli::parse();

    let settings = app_config::load_settings()?;
    init_tracing(&settings.app.log_level);
    tracing::info!(environment = %settings.app.environment, "Application settings loaded successfully.");

    match cli.command {
        Commands::Backtest {
            symbol,
            start_date,
            end_date,
            principal,
            strategy,
            json,
        } => {
            handle_backtest(&settings, symbol, start_date, end_date, principal, strategy, json)?;
        }
        Commands::Serve => {
            handle_serve(settings).await?;
        }
    }

    Ok(())
}

fn init_tracing(log_level: &str) {
    let level = log_level.parse::<tracing::Level>().unwrap_or(tracing::Level::INFO);
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_filter(
            tracing_subscriber::filter::Targets::new()
                .with_target("tower_http", level)
                .with_default(level),
        );
    tracing_subscriber::registry().with(fmt_layer).init();
}

// --- "Backtest" Subcommand Logic ---

/// Handles the logic for the `backtest` subcommand.
fn handle_backtest(
    settings: &Settings,
    symbol_str: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
    principal: Option<Decimal>,
    strategy: Option<String>,
    json: bool,
) -> Result<()> {
    // --- 1. Resolve Parameters ---
    let strategy = strategy.unwrap_or_else(|| settings.backtest.strategy.clone());
    // Fail on an unknown strategy before touching any data.
    strategy.parse::<StrategyKind>()?;

    let principal = match principal {
        Some(principal) => principal,
        None => principal_from_f64(settings.backtest.principal)?,
    };
    let request = BacktestRequest {
        symbol: Symbol(symbol_str),
        start_date,
        end_date,
        principal,
        strategy,
    };

    // --- 2. Load Prices ---
    let source = CsvPriceSource::new(&settings.data.directory);
    let prices = source
        .load(&request.symbol, start_date, end_date)
        .with_context(|| format!("Failed to load prices for {}", request.symbol))?;

    // --- 3. Run & Report ---
    let report = Backtester::new(settings.crossover).run(&request, &prices)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        report::print_report(&report);
    }

    Ok(())
}

// --- "Serve" Subcommand Logic ---

/// Starts the web server. It will run indefinitely until terminated.
async fn handle_serve(settings: Settings) -> Result<()> {
    let state = AppState {
        prices: Arc::new(CsvPriceSource::new(&settings.data.directory)),
        backtester: Backtester::new(settings.crossover),
        defaults: settings.backtest.clone(),
    };

    tracing::info!(data_dir = %settings.data.directory.display(), "Launching web server.");
    web_server::run(settings.server, state).await?;

    Ok(())
}
