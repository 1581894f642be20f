//! ticker-relay: HTTP relay for HitBTC public ticker data
//!
//! This library provides:
//! - A `/currency/{symbol}` HTTP surface answered by live REST queries
//! - A websocket ticker subscription feeding an in-memory cache
//! - A reusable websocket client with optional reconnection
//! - Logging and Prometheus metrics

pub mod api;
pub mod cli;
pub mod config;
pub mod feed;
pub mod telemetry;
pub mod ticker;
pub mod upstream;
pub mod ws;
