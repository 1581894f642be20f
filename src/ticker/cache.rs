//! In-memory ticker cache fed by the websocket subscription

use super::Ticker;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A cached ticker together with the time it was received
#[derive(Debug, Clone, PartialEq)]
pub struct CachedTicker {
    pub ticker: Ticker,
    pub received_at: DateTime<Utc>,
}

/// Latest ticker per symbol
///
/// Cloning yields another handle to the same map. Entries are only ever
/// replaced wholesale; there is no eviction.
#[derive(Debug, Clone, Default)]
pub struct TickerCache {
    entries: Arc<RwLock<HashMap<String, CachedTicker>>>,
}

impl TickerCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the entry for `symbol`, returning the previous ticker if any
    pub async fn insert(&self, symbol: impl Into<String>, ticker: Ticker) -> Option<Ticker> {
        let entry = CachedTicker {
            ticker,
            received_at: Utc::now(),
        };
        let mut entries = self.entries.write().await;
        entries.insert(symbol.into(), entry).map(|prev| prev.ticker)
    }

    /// Latest ticker for `symbol`
    pub async fn get(&self, symbol: &str) -> Option<Ticker> {
        self.entry(symbol).await.map(|e| e.ticker)
    }

    /// Latest ticker for `symbol` with its receive time
    pub async fn entry(&self, symbol: &str) -> Option<CachedTicker> {
        let entries = self.entries.read().await;
        entries.get(symbol).cloned()
    }

    /// Copy of every cached ticker keyed by symbol
    pub async fn snapshot(&self) -> HashMap<String, Ticker> {
        let entries = self.entries.read().await;
        entries
            .iter()
            .map(|(symbol, e)| (symbol.clone(), e.ticker.clone()))
            .collect()
    }

    /// Number of cached symbols
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}
