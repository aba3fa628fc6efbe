// In crates/web-server/src/error.rs

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Backtest(#[from] core_types::Error),

    #[error(transparent)]
    MarketData(#[from] market_data::Error),

    #[error("Backtest task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    #[error("Failed to bind server address: {0}")]
    ServerBindError(std::io::Error),

    #[error("Server terminated: {0}")]
    ServeError(std::io::Error),
}

impl Error {
    fn status(&self) -> StatusCode {
        use core_types::Error as Core;
        use market_data::Error as Data;

        match self {
            Error::Backtest(Core::InvalidStrategy { .. } | Core::InvalidParameter { .. }) => {
                StatusCode::BAD_REQUEST
            }
            Error::Backtest(
                Core::DivisionByZero { .. } | Core::ArithmeticOverflow { .. } | Core::EmptyLedger,
            ) => StatusCode::UNPROCESSABLE_ENTITY,
            Error::MarketData(Data::InvalidRange { .. }) => StatusCode::BAD_REQUEST,
            Error::MarketData(Data::SymbolNotFound { .. }) => StatusCode::NOT_FOUND,
            Error::MarketData(Data::DuplicateDate { .. }) => StatusCode::UNPROCESSABLE_ENTITY,
            Error::MarketData(Data::Io(_) | Data::Csv(_))
            | Error::Task(_)
            | Error::ServerBindError(_)
            | Error::ServeError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed.");
        } else {
            tracing::warn!(error = %self, status = status.as_u16(), "Request rejected.");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

pub type Result<T> = std::result::Result<T, Error>;
