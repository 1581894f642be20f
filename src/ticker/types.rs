//! Ticker types

use serde::{Deserialize, Deserializer, Serialize};

/// Market snapshot for a single symbol
///
/// Prices are kept as the strings the exchange sent, so precision and
/// formatting survive a decode/encode pass untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticker {
    /// Symbol identifier (only present on some endpoints)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Human-readable name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    /// Best ask price
    #[serde(default, deserialize_with = "null_as_empty")]
    pub ask: String,
    /// Best bid price
    #[serde(default, deserialize_with = "null_as_empty")]
    pub bid: String,
    /// Last trade price
    #[serde(default, deserialize_with = "null_as_empty")]
    pub last: String,
    /// Price 24h ago
    #[serde(default, deserialize_with = "null_as_empty")]
    pub open: String,
    /// 24h low
    #[serde(default, deserialize_with = "null_as_empty")]
    pub low: String,
    /// 24h high
    #[serde(default, deserialize_with = "null_as_empty")]
    pub high: String,
    /// Currency fees are charged in
    #[serde(default, deserialize_with = "null_as_empty")]
    pub fee_currency: String,
}

/// HitBTC sends `null` for prices on symbols with no recent trades
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
