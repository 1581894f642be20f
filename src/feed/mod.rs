//! Ticker feed module
//!
//! Keeps a [`TickerCache`](crate::ticker::TickerCache) current from the
//! exchange's websocket ticker channel

mod hitbtc;
mod types;

pub use hitbtc::{HitbtcFeed, HITBTC_WS_URL};
pub use types::{parse_frame, FeedFrame, SubscribeRequest, TickerUpdate, UpdateParams};

use thiserror::Error;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Feed errors
#[derive(Debug, Error)]
pub enum FeedError {
    /// Inbound frame is not valid JSON or not a known frame shape
    #[error("Invalid feed frame: {0}")]
    Parse(#[from] serde_json::Error),

    /// Subscribe request could not be encoded
    #[error("Failed to encode subscribe request: {0}")]
    Encode(serde_json::Error),

    /// Websocket is gone and will not come back
    #[error("Feed connection lost")]
    ConnectionLost,
}

/// Lifecycle of the feed subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedState {
    /// Dialing the websocket
    Connecting,
    /// Connected and subscribe requests sent
    Subscribed,
    /// At least one update applied on the current connection
    Receiving,
    /// Connection lost, waiting to re-dial
    Reconnecting { attempt: u32 },
    /// Feed has stopped for good
    Terminated,
}

/// Handle to a running feed subscriber
pub struct FeedHandle {
    state: watch::Receiver<FeedState>,
    task: JoinHandle<()>,
}

impl FeedHandle {
    /// Current state
    pub fn state(&self) -> FeedState {
        *self.state.borrow()
    }

    /// Wait until the feed reaches `target`
    pub async fn wait_for_state(&mut self, target: FeedState) {
        let _ = self.state.wait_for(|s| *s == target).await;
    }

    /// Wait until the feed has terminated
    pub async fn terminated(&mut self) {
        self.wait_for_state(FeedState::Terminated).await;
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Stop the message loop
    pub fn abort(&self) {
        self.task.abort();
    }
}
