//! Request handlers for `/currency/*`

use super::{ApiError, AppState};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

/// Symbol segment selecting the full ticker list
pub const ALL_SYMBOLS: &str = "all";

/// `GET /currency/{symbol}`; `all` returns every ticker
#[tracing::instrument(skip(state))]
pub async fn get_currency(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
) -> Result<Response, ApiError> {
    dispatch(&state, &symbol).await
}

/// `GET /currency/` is passed upstream as an empty symbol
#[tracing::instrument(skip(state))]
pub async fn get_empty_symbol(State(state): State<AppState>) -> Result<Response, ApiError> {
    dispatch(&state, "").await
}

async fn dispatch(state: &AppState, symbol: &str) -> Result<Response, ApiError> {
    if symbol == ALL_SYMBOLS {
        let tickers = state.source.get_all().await?;
        Ok(Json(tickers).into_response())
    } else {
        let ticker = state.source.get_one(symbol).await?;
        Ok(Json(ticker).into_response())
    }
}

/// Any method other than GET on `/currency/*`
pub async fn method_not_allowed() -> impl IntoResponse {
    let status = StatusCode::METHOD_NOT_ALLOWED;
    (status, status.canonical_reason().unwrap_or_default())
}
