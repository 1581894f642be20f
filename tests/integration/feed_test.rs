//! Integration tests for the websocket ticker feed against a fake exchange

mod common;

use common::{start_fake_feed, update_frame};
use std::time::Duration;
use ticker_relay::config::FeedConfig;
use ticker_relay::feed::{FeedState, HitbtcFeed};
use ticker_relay::ticker::TickerCache;

const WAIT: Duration = Duration::from_secs(5);

fn feed_config(ws_url: String, reconnect: bool) -> FeedConfig {
    FeedConfig {
        ws_url,
        reconnect,
        initial_reconnect_delay_ms: 10,
        max_reconnect_delay_ms: 50,
        ..Default::default()
    }
}

#[tokio::test]
async fn test_feed_subscribes_and_updates_cache() {
    let (url, mut subscriptions) = start_fake_feed(
        vec![vec![
            r#"{"jsonrpc":"2.0","result":true,"id":1}"#.to_string(),
            update_frame("BTCUSD", "50000", "49990"),
        ]],
        false,
    )
    .await;

    let cache = TickerCache::new();
    let mut handle = HitbtcFeed::from_config(&feed_config(url, false))
        .spawn(cache.clone())
        .unwrap();

    let subscribe = tokio::time::timeout(WAIT, subscriptions.recv())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(
        subscribe,
        r#"{"method":"subscribeTicker","params":["BTCUSD"],"id":1}"#
    );

    tokio::time::timeout(WAIT, handle.terminated()).await.unwrap();

    let ticker = cache.get("BTCUSD").await.unwrap();
    assert_eq!(ticker.ask, "50000");
    assert_eq!(ticker.bid, "49990");
}

#[tokio::test]
async fn test_malformed_frame_does_not_stop_feed() {
    let (url, _subscriptions) = start_fake_feed(
        vec![vec![
            update_frame("BTCUSD", "50000", "49990"),
            "{not json".to_string(),
            r#"{"method":"ticker","params":{"symbol":"BTCUSD"},"result":{"ask":1}}"#.to_string(),
            update_frame("BTCUSD", "50100", "50050"),
            update_frame("ETHBTC", "0.051", "0.050"),
        ]],
        false,
    )
    .await;

    let cache = TickerCache::new();
    let mut handle = HitbtcFeed::from_config(&feed_config(url, false))
        .spawn(cache.clone())
        .unwrap();

    tokio::time::timeout(WAIT, handle.terminated()).await.unwrap();

    assert_eq!(cache.len().await, 2);
    let btc = cache.get("BTCUSD").await.unwrap();
    assert_eq!(btc.ask, "50100");
    assert_eq!(btc.bid, "50050");
    assert_eq!(cache.get("ETHBTC").await.unwrap().ask, "0.051");
}

#[tokio::test]
async fn test_connection_loss_terminates_without_reconnect() {
    let (url, _subscriptions) =
        start_fake_feed(vec![vec![update_frame("BTCUSD", "1", "2")]], false).await;

    let cache = TickerCache::new();
    let mut handle = HitbtcFeed::from_config(&feed_config(url, false))
        .spawn(cache.clone())
        .unwrap();

    tokio::time::timeout(WAIT, handle.terminated()).await.unwrap();
    assert_eq!(handle.state(), FeedState::Terminated);

    // Terminated is absorbing: the loop is gone and nothing else is written
    tokio::time::timeout(WAIT, async {
        while !handle.is_finished() {
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    })
    .await
    .unwrap();
    assert_eq!(cache.len().await, 1);
}

#[tokio::test]
async fn test_unreachable_feed_terminates() {
    let cache = TickerCache::new();
    let mut handle = HitbtcFeed::from_config(&feed_config("ws://127.0.0.1:9".to_string(), false))
        .spawn(cache.clone())
        .unwrap();

    tokio::time::timeout(WAIT, handle.terminated()).await.unwrap();
    assert!(cache.is_empty().await);
}

#[tokio::test]
async fn test_reconnect_resubscribes() {
    let (url, mut subscriptions) = start_fake_feed(
        vec![
            vec![update_frame("BTCUSD", "50000", "49990")],
            vec![update_frame("BTCUSD", "51000", "50990")],
        ],
        true,
    )
    .await;

    let cache = TickerCache::new();
    let handle = HitbtcFeed::from_config(&feed_config(url, true))
        .spawn(cache.clone())
        .unwrap();

    for _ in 0..2 {
        let subscribe = tokio::time::timeout(WAIT, subscriptions.recv())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(
            subscribe,
            r#"{"method":"subscribeTicker","params":["BTCUSD"],"id":1}"#
        );
    }

    tokio::time::timeout(WAIT, async {
        loop {
            if cache.get("BTCUSD").await.map(|t| t.ask) == Some("51000".to_string()) {
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    })
    .await
    .unwrap();

    assert_ne!(handle.state(), FeedState::Terminated);
    handle.abort();
}

#[tokio::test]
async fn test_reconnect_budget_exhausted_terminates() {
    let config = FeedConfig {
        max_reconnect_attempts: 2,
        ..feed_config("ws://127.0.0.1:9".to_string(), true)
    };

    let mut handle = HitbtcFeed::from_config(&config)
        .spawn(TickerCache::new())
        .unwrap();

    tokio::time::timeout(WAIT, handle.terminated()).await.unwrap();
}
