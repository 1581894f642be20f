//! Feed wire types

use super::FeedError;
use crate::ticker::Ticker;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// JSON-RPC style subscribe request
#[derive(Debug, Clone, Serialize)]
pub struct SubscribeRequest {
    pub method: String,
    pub params: Vec<String>,
    pub id: u64,
}

impl SubscribeRequest {
    /// `subscribeTicker` request for one symbol
    pub fn ticker(symbol: impl Into<String>, id: u64) -> Self {
        Self {
            method: "subscribeTicker".to_string(),
            params: vec![symbol.into()],
            id,
        }
    }
}

/// Ticker update notification
#[derive(Debug, Clone, Deserialize)]
pub struct TickerUpdate {
    #[serde(default)]
    pub method: String,
    pub params: UpdateParams,
    pub result: Ticker,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateParams {
    pub symbol: String,
}

/// A decoded inbound frame
#[derive(Debug, Clone)]
pub enum FeedFrame {
    /// Ticker update for a symbol
    Update(TickerUpdate),
    /// Reply to one of our requests, e.g. `{"result":true,"id":1}`
    Ack { id: Option<u64> },
    /// Error reply, e.g. an unknown symbol in a subscribe request
    Error { id: Option<u64>, message: String },
}

/// Decode one text frame
pub fn parse_frame(text: &str) -> Result<FeedFrame, FeedError> {
    let value: Value = serde_json::from_str(text)?;
    let id = value.get("id").and_then(Value::as_u64);

    if let Some(error) = value.get("error") {
        return Ok(FeedFrame::Error {
            id,
            message: error.to_string(),
        });
    }

    if value.get("result").is_some_and(Value::is_boolean) {
        return Ok(FeedFrame::Ack { id });
    }

    Ok(FeedFrame::Update(serde_json::from_value(value)?))
}
