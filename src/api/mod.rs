//! HTTP query surface
//!
//! Every request is answered by a live upstream call through a
//! [`TickerSource`]; the feed's ticker cache is not consulted.

mod error;
mod handlers;

pub use error::ApiError;
pub use handlers::ALL_SYMBOLS;

use crate::upstream::TickerSource;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn TickerSource>,
}

/// Build the `/currency/*` router
pub fn router(source: Arc<dyn TickerSource>) -> Router {
    // `get` would otherwise answer HEAD as well
    Router::new()
        .route(
            "/currency/",
            get(handlers::get_empty_symbol)
                .head(handlers::method_not_allowed)
                .fallback(handlers::method_not_allowed),
        )
        .route(
            "/currency/{*symbol}",
            get(handlers::get_currency)
                .head(handlers::method_not_allowed)
                .fallback(handlers::method_not_allowed),
        )
        .with_state(AppState { source })
}

/// Serve `router` on `listener` until Ctrl-C
pub async fn serve(listener: TcpListener, router: Router) -> anyhow::Result<()> {
    tracing::info!(addr = %listener.local_addr()?, "HTTP server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
