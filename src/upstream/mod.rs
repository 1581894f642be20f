//! Upstream exchange REST API
//!
//! Live ticker queries against the exchange. Nothing here is cached: every
//! call is one outbound request.

mod hitbtc;

pub use hitbtc::{HitbtcClient, HitbtcConfig, HITBTC_REST_URL};

use crate::ticker::Ticker;
use async_trait::async_trait;
use thiserror::Error;

/// Errors from an upstream ticker query
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Request could not be completed (connect, TLS, timeout, body read)
    #[error("{0}")]
    Unreachable(#[from] reqwest::Error),

    /// Upstream answered with a non-2xx status
    #[error("upstream returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    /// Body is not JSON of the expected shape
    #[error("{0}")]
    Decode(#[from] serde_json::Error),
}

impl UpstreamError {
    /// Short label used for metrics and logs
    pub fn kind(&self) -> &'static str {
        match self {
            UpstreamError::Unreachable(_) => "unreachable",
            UpstreamError::Status { .. } => "status",
            UpstreamError::Decode(_) => "decode",
        }
    }
}

/// Source of live ticker data
#[async_trait]
pub trait TickerSource: Send + Sync {
    /// Fetch tickers for every symbol
    async fn get_all(&self) -> Result<Vec<Ticker>, UpstreamError>;

    /// Fetch the ticker for one symbol, passed to upstream verbatim
    async fn get_one(&self, symbol: &str) -> Result<Ticker, UpstreamError>;
}
