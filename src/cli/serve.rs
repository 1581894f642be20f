//! Serve command implementation

use crate::api;
use crate::config::Config;
use crate::feed::HitbtcFeed;
use crate::ticker::TickerCache;
use crate::upstream::{HitbtcClient, HitbtcConfig};
use clap::Args;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Override the HTTP bind address
    #[arg(short, long)]
    pub bind: Option<SocketAddr>,

    /// Do not start the websocket ticker feed
    #[arg(long)]
    pub no_feed: bool,
}

impl ServeArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let client = HitbtcClient::with_config(HitbtcConfig {
            base_url: config.upstream.rest_url.clone(),
            timeout: config.upstream.timeout(),
        })?;

        // The feed and the query path run side by side and never touch each other
        let cache = TickerCache::new();
        let _feed = if config.feed.enabled && !self.no_feed {
            Some(HitbtcFeed::from_config(&config.feed).spawn(cache.clone())?)
        } else {
            tracing::info!("Ticker feed disabled");
            None
        };

        let addr = self.bind.unwrap_or(config.server.bind_addr);
        let listener = TcpListener::bind(addr).await?;
        api::serve(listener, api::router(Arc::new(client))).await?;

        tracing::info!(cached_symbols = cache.len().await, "Shutting down");
        Ok(())
    }
}
