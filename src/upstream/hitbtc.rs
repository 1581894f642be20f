//! HitBTC public REST client

use super::{TickerSource, UpstreamError};
use crate::telemetry;
use crate::ticker::Ticker;
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// HitBTC public API base URL
pub const HITBTC_REST_URL: &str = "https://api.hitbtc.com/api/2/public";

/// Configuration for the HitBTC client
#[derive(Debug, Clone)]
pub struct HitbtcConfig {
    /// Base URL the `/ticker` paths are appended to
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for HitbtcConfig {
    fn default() -> Self {
        Self {
            base_url: HITBTC_REST_URL.to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

/// Client for HitBTC's public ticker endpoints
pub struct HitbtcClient {
    config: HitbtcConfig,
    client: Client,
}

impl HitbtcClient {
    /// Create a client with default configuration
    pub fn new() -> Result<Self, UpstreamError> {
        Self::with_config(HitbtcConfig::default())
    }

    /// Create a client with custom configuration
    pub fn with_config(config: HitbtcConfig) -> Result<Self, UpstreamError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { config, client })
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    fn all_tickers_url(&self) -> String {
        format!("{}/ticker", self.config.base_url.trim_end_matches('/'))
    }

    fn ticker_url(&self, symbol: &str) -> String {
        format!("{}/{}", self.all_tickers_url(), symbol)
    }

    /// Issue one GET and decode the body as `T`
    ///
    /// The body is read as text first so that a shape mismatch surfaces as
    /// [`UpstreamError::Decode`] rather than a transport error.
    async fn fetch<T: DeserializeOwned>(
        &self,
        url: &str,
        endpoint: &'static str,
    ) -> Result<T, UpstreamError> {
        telemetry::record_upstream_request(endpoint);
        tracing::debug!(url = %url, endpoint, "Fetching ticker data");

        let result: Result<T, UpstreamError> = async {
            let response = self.client.get(url).send().await?;
            let status = response.status();
            let body = response.text().await?;

            if !status.is_success() {
                return Err(UpstreamError::Status { status, body });
            }

            Ok(serde_json::from_str(&body)?)
        }
        .await;

        if let Err(ref e) = result {
            telemetry::record_upstream_error(e.kind());
            tracing::warn!(url = %url, kind = e.kind(), error = %e, "Upstream ticker request failed");
        }

        result
    }
}

#[async_trait]
impl TickerSource for HitbtcClient {
    async fn get_all(&self) -> Result<Vec<Ticker>, UpstreamError> {
        let tickers: Vec<Ticker> = self.fetch(&self.all_tickers_url(), "all").await?;
        tracing::debug!(count = tickers.len(), "Fetched all tickers");
        Ok(tickers)
    }

    async fn get_one(&self, symbol: &str) -> Result<Ticker, UpstreamError> {
        self.fetch(&self.ticker_url(symbol), "one").await
    }
}
