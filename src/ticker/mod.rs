//! Ticker data model
//!
//! The exchange ticker shape and the websocket-fed cache of latest tickers

mod cache;
mod types;

pub use cache::{CachedTicker, TickerCache};
pub use types::Ticker;
