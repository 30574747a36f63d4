//! Search-as-you-type over a WebSocket.
//!
//! Each text frame is the current contents of the search box. The server
//! debounces them and pushes a [`LiveSearchEvent`] for the latest one.

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        Query, State,
    },
    response::IntoResponse,
};
use futures::{SinkExt, StreamExt};
use serde::Deserialize;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

use super::AppState;
use crate::{
    countries,
    services::live_search::{LiveSearch, LiveSearchEvent},
};

const EVENT_BUFFER: usize = 16;

#[derive(Debug, Deserialize)]
pub struct LiveSearchParams {
    country: Option<String>,
}

pub async fn upgrade(
    ws: WebSocketUpgrade,
    State(state): State<AppState>,
    Query(params): Query<LiveSearchParams>,
) -> impl IntoResponse {
    let country = countries::resolve(params.country.as_deref(), &state.default_country);
    ws.on_upgrade(move |socket| handle_socket(socket, state, country))
}

async fn handle_socket(socket: WebSocket, state: AppState, country: String) {
    let (mut sender, mut receiver) = socket.split();
    let (events_tx, mut events_rx) = mpsc::channel::<LiveSearchEvent>(EVENT_BUFFER);

    info!(country = %country, "Live search client connected");

    let session = LiveSearch::new(
        Arc::clone(&state.provider),
        country,
        state.search_debounce,
        events_tx,
    );

    let send_task = tokio::spawn(async move {
        while let Some(event) = events_rx.recv().await {
            match serde_json::to_string(&event) {
                Ok(json) => {
                    if sender.send(Message::Text(json)).await.is_err() {
                        debug!("WebSocket send failed, client disconnected");
                        break;
                    }
                }
                Err(e) => error!("Failed to serialize LiveSearchEvent: {}", e),
            }
        }
    });

    while let Some(result) = receiver.next().await {
        match result {
            Ok(Message::Text(text)) => session.input(&text),
            Ok(Message::Close(_)) => {
                debug!("WebSocket client requested close");
                break;
            }
            // Pings are answered by axum
            Ok(_) => {}
            Err(e) => {
                warn!("WebSocket receive error: {}", e);
                break;
            }
        }
    }

    session.cancel();
    drop(session);
    send_task.abort();
    info!("Live search client disconnected");
}
