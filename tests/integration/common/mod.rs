//! Local stand-ins for the exchange REST and websocket endpoints

#![allow(dead_code)]

use axum::extract::State;
use axum::http::{header, StatusCode, Uri};
use axum::routing::get;
use axum::Router;
use futures_util::{SinkExt, StreamExt};
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;
use tokio::sync::mpsc;
use tokio_tungstenite::tungstenite::Message;

/// Status and body returned by a fake endpoint
pub type Canned = (StatusCode, &'static str);

#[derive(Clone)]
struct RestState {
    hits: Arc<Mutex<Vec<String>>>,
    all: Canned,
    one: Canned,
}

/// Fake `/api/2/public/ticker` REST API recording every request path
pub struct FakeRest {
    pub base_url: String,
    hits: Arc<Mutex<Vec<String>>>,
}

impl FakeRest {
    pub async fn start(all: Canned, one: Canned) -> Self {
        let hits = Arc::new(Mutex::new(Vec::new()));
        let state = RestState {
            hits: hits.clone(),
            all,
            one,
        };

        let app = Router::new()
            .route("/api/2/public/ticker", get(all_tickers))
            .route("/api/2/public/ticker/", get(one_ticker))
            .route("/api/2/public/ticker/{symbol}", get(one_ticker))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}/api/2/public"),
            hits,
        }
    }

    /// Request paths seen so far
    pub fn hits(&self) -> Vec<String> {
        self.hits.lock().unwrap().clone()
    }
}

fn reply(state: &RestState, uri: &Uri, canned: Canned) -> impl axum::response::IntoResponse {
    state.hits.lock().unwrap().push(uri.path().to_string());
    (canned.0, [(header::CONTENT_TYPE, "application/json")], canned.1)
}

async fn all_tickers(State(state): State<RestState>, uri: Uri) -> impl axum::response::IntoResponse {
    let canned = state.all;
    reply(&state, &uri, canned)
}

async fn one_ticker(State(state): State<RestState>, uri: Uri) -> impl axum::response::IntoResponse {
    let canned = state.one;
    reply(&state, &uri, canned)
}

/// Fake ticker websocket
///
/// Serves one connection per entry of `sessions`: reads the first text frame
/// (forwarded on the returned channel), sends the session's frames, then drops
/// the socket without a close handshake. With `hold_last`, the final session
/// stays open until the client goes away.
pub async fn start_fake_feed(
    sessions: Vec<Vec<String>>,
    hold_last: bool,
) -> (String, mpsc::UnboundedReceiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (sub_tx, sub_rx) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        let count = sessions.len();
        for (i, frames) in sessions.into_iter().enumerate() {
            let (stream, _) = listener.accept().await.unwrap();
            let mut ws = tokio_tungstenite::accept_async(stream).await.unwrap();

            if let Some(Ok(Message::Text(subscribe))) = ws.next().await {
                let _ = sub_tx.send(subscribe);
            }

            for frame in frames {
                ws.send(Message::Text(frame)).await.unwrap();
            }

            if hold_last && i + 1 == count {
                while let Some(Ok(_)) = ws.next().await {}
            }
        }
    });

    (format!("ws://{addr}/api/2/ws"), sub_rx)
}

/// Ticker update frame for `symbol` with the given ask/bid
pub fn update_frame(symbol: &str, ask: &str, bid: &str) -> String {
    format!(
        r#"{{"method":"ticker","params":{{"symbol":"{symbol}"}},"result":{{"ask":"{ask}","bid":"{bid}"}}}}"#
    )
}
