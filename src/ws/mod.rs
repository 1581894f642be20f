//! WebSocket client library
//!
//! Provides a reusable WebSocket client with optional reconnection,
//! ping/pong handling, configurable backoff and frames replayed on connect.

mod client;
mod types;

pub use client::WsClient;
pub use types::{WsConfig, WsError, WsMessage};
