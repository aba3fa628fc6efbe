// In crates/web-server/src/lib.rs

use app_config::types::{BacktestSettings, ServerSettings};
use axum::{
    extract::State,
    response::Json,
    routing::{get, post},
    Router,
};
use backtester::{BacktestReport, Backtester};
use market_data::PriceSource;
use std::sync::Arc;
use tokio::net::TcpListener;
use types::BacktestParams;

pub mod error;
pub mod types;

// Re-export our custom error type for convenience.
pub use error::{Error, Result};

/// The shared application state that is available to all API handlers.
///
/// Everything in here is read-only, so concurrent requests never interact.
#[derive(Clone)]
pub struct AppState {
    pub prices: Arc<dyn PriceSource>,
    pub backtester: Backtester,
    pub defaults: BacktestSettings,
}

/// Creates the main application router with all routes and middleware.
pub fn create_router(app_state: AppState) -> Router {
    // In a production environment, you would restrict the origin to your actual frontend domain.
    let cors = tower_http::cors::CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods(tower_http::cors::Any)
        .allow_headers(tower_http::cors::Any);

    let api_router = Router::new().route("/backtests", post(run_backtest_handler));

    Router::new()
        .route("/health", get(health_check_handler))
        .nest("/api", api_router)
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state)
}

/// A simple health check handler.
async fn health_check_handler() -> &'static str {
    "OK"
}

/// The handler for `POST /api/backtests`.
/// Loads the requested window and runs one independent backtest over it.
async fn run_backtest_handler(
    State(state): State<AppState>,
    Json(params): Json<BacktestParams>,
) -> Result<Json<BacktestReport>> {
    let request = params.into_request(&state.defaults)?;
    tracing::info!(
        symbol = %request.symbol,
        strategy = %request.strategy,
        source = state.prices.name(),
        "Backtest requested."
    );

    // File I/O and the computation are blocking; keep them off the async workers.
    let report = tokio::task::spawn_blocking(move || -> Result<BacktestReport> {
        let prices = state
            .prices
            .load(&request.symbol, request.start_date, request.end_date)?;
        Ok(state.backtester.run(&request, &prices)?)
    })
    .await??;

    Ok(Json(report))
}

/// The main entry point for running the web server.
///
/// It will run forever until the process is terminated.
pub async fn run(settings: ServerSettings, app_state: AppState) -> Result<()> {
    let app = create_router(app_state);

    let address = format!("{}:{}", settings.host, settings.port);
    tracing::info!("Web server listening on {}", address);

    let listener = TcpListener::bind(&address).await.map_err(Error::ServerBindError)?;

    axum::serve(listener, app.into_make_service())
        .await
        .map_err(Error::ServeError)?;

    Ok(())
}
