//! HitBTC websocket ticker feed

use super::{parse_frame, FeedError, FeedFrame, FeedHandle, FeedState, SubscribeRequest, TickerUpdate};
use crate::config::FeedConfig;
use crate::telemetry;
use crate::ticker::TickerCache;
use crate::ws::{WsClient, WsConfig, WsMessage};
use std::time::Duration;
use tokio::sync::{mpsc, watch};

/// HitBTC WebSocket URL
pub const HITBTC_WS_URL: &str = "wss://api.hitbtc.com/api/2/ws";

/// Ticker channel subscriber for HitBTC
pub struct HitbtcFeed {
    symbols: Vec<String>,
    ws_config: WsConfig,
}

impl HitbtcFeed {
    /// Create a feed for the given symbols against the public endpoint
    pub fn new<I, S>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            symbols: symbols.into_iter().map(Into::into).collect(),
            ws_config: WsConfig::new(HITBTC_WS_URL).max_reconnects(0),
        }
    }

    /// Build a feed from the `[feed]` config section
    pub fn from_config(config: &FeedConfig) -> Self {
        let ws_config = WsConfig::new(config.ws_url.clone())
            .reconnect(config.reconnect)
            .max_reconnects(config.max_reconnect_attempts)
            .initial_delay(Duration::from_millis(config.initial_reconnect_delay_ms))
            .max_delay(Duration::from_millis(config.max_reconnect_delay_ms))
            .ping_interval(Duration::from_secs(config.ping_interval_secs));

        Self::new(config.symbols.iter().cloned()).with_ws_config(ws_config)
    }

    /// Replace the websocket settings; any `on_connect` frames are overwritten
    pub fn with_ws_config(mut self, ws_config: WsConfig) -> Self {
        self.ws_config = ws_config;
        self
    }

    /// One subscribe frame per symbol, ids counting from 1
    fn subscribe_frames(&self) -> Result<Vec<String>, FeedError> {
        self.symbols
            .iter()
            .zip(1u64..)
            .map(|(symbol, id)| {
                serde_json::to_string(&SubscribeRequest::ticker(symbol.as_str(), id))
                    .map_err(FeedError::Encode)
            })
            .collect()
    }

    /// Start the feed, writing every update into `cache`
    ///
    /// Subscribe requests are re-sent on every (re)connect.
    pub fn spawn(&self, cache: TickerCache) -> Result<FeedHandle, FeedError> {
        let mut ws_config = self.ws_config.clone();
        ws_config.on_connect = self.subscribe_frames()?;

        tracing::info!(
            url = %ws_config.url,
            symbols = ?self.symbols,
            reconnect = ws_config.reconnect,
            "Subscribing to ticker feed"
        );

        let (state_tx, state_rx) = watch::channel(FeedState::Connecting);
        let ws_rx = WsClient::new(ws_config).connect();

        let task = tokio::spawn(async move {
            match Self::run_message_loop(ws_rx, cache, &state_tx).await {
                Ok(()) => tracing::info!("Ticker feed stopped"),
                Err(e) => tracing::error!(error = %e, "Ticker feed terminated"),
            }
            state_tx.send_replace(FeedState::Terminated);
        });

        Ok(FeedHandle {
            state: state_rx,
            task,
        })
    }

    /// Apply websocket messages to the cache until the connection is gone
    async fn run_message_loop(
        mut ws_rx: mpsc::Receiver<WsMessage>,
        cache: TickerCache,
        state_tx: &watch::Sender<FeedState>,
    ) -> Result<(), FeedError> {
        while let Some(msg) = ws_rx.recv().await {
            match msg {
                WsMessage::Text(text) => {
                    Self::handle_text(&text, &cache, state_tx).await;
                }
                WsMessage::Connected => {
                    tracing::info!("Ticker feed subscribed");
                    state_tx.send_replace(FeedState::Subscribed);
                }
                WsMessage::Reconnecting { attempt } => {
                    tracing::warn!(attempt, "Ticker feed reconnecting...");
                    telemetry::record_feed_reconnect();
                    state_tx.send_replace(FeedState::Reconnecting { attempt });
                }
                WsMessage::Disconnected => {
                    return Err(FeedError::ConnectionLost);
                }
                WsMessage::Binary(_) => {
                    // HitBTC only sends text frames
                }
            }
        }

        Ok(())
    }

    async fn handle_text(text: &str, cache: &TickerCache, state_tx: &watch::Sender<FeedState>) {
        match parse_frame(text) {
            Ok(FeedFrame::Update(TickerUpdate {
                method,
                params,
                result,
            })) => {
                state_tx.send_if_modified(|state| {
                    if *state == FeedState::Receiving {
                        return false;
                    }
                    *state = FeedState::Receiving;
                    true
                });

                tracing::trace!(symbol = %params.symbol, method = %method, "Ticker update");
                cache.insert(params.symbol, result).await;
                telemetry::record_feed_update();
                telemetry::set_cached_symbols(cache.len().await);
            }
            Ok(FeedFrame::Ack { id }) => {
                tracing::debug!(?id, "Subscription acknowledged");
            }
            Ok(FeedFrame::Error { id, message }) => {
                tracing::warn!(?id, error = %message, "Feed request rejected");
            }
            Err(e) => {
                telemetry::record_feed_parse_error();
                tracing::warn!(error = %e, "Failed to parse feed frame");
            }
        }
    }
}
