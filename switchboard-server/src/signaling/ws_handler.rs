use crate::relay::RelayHandle;
use crate::signaling::SignalingService;
use axum::extract::State;
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::response::IntoResponse;
use futures::{SinkExt, StreamExt};
use switchboard_core::{ConnectionId, parse_signal};
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

pub async fn ws_handler(
    ws: WebSocketUpgrade,
    State(service): State<SignalingService>,
) -> impl IntoResponse {
    let relay = service.relay().clone();
    let peer_queue = service.peer_queue();

    ws.on_upgrade(move |socket| handle_socket(socket, relay, peer_queue))
}

/// Drive one WebSocket from accept to close.
///
/// The writer task drains the connection's outbound queue; the reader task decodes
/// frames and forwards them to the hub in arrival order. Whichever finishes first
/// ends the connection, and the hub is told exactly once.
async fn handle_socket(socket: WebSocket, relay: RelayHandle, peer_queue: usize) {
    let connection_id = ConnectionId::new();
    info!(%connection_id, "New WebSocket connection");

    let (mut sender, mut receiver) = socket.split();
    let (tx, mut rx) = mpsc::channel(peer_queue.max(1));

    if let Err(e) = relay.connect(connection_id, tx).await {
        error!(%connection_id, "Could not register connection: {}", e);
        return;
    }

    let mut send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sender.send(msg).await.is_err() {
                break;
            }
        }
    });

    let mut recv_task = tokio::spawn({
        let relay = relay.clone();

        async move {
            while let Some(Ok(msg)) = receiver.next().await {
                let signal = match &msg {
                    Message::Text(text) => parse_signal(text.as_str().as_bytes()),
                    Message::Binary(data) => parse_signal(data),
                    Message::Close(_) => break,
                    Message::Ping(_) | Message::Pong(_) => continue,
                };

                let Some(signal) = signal else {
                    debug!(%connection_id, "Dropping malformed frame");
                    continue;
                };

                if let Err(e) = relay.signal(connection_id, signal).await {
                    error!("Relay died: {}", e);
                    break;
                }
            }
        }
    });

    tokio::select! {
        _ = (&mut send_task) => recv_task.abort(),
        _ = (&mut recv_task) => send_task.abort(),
    };

    if let Err(e) = relay.disconnect(connection_id).await {
        warn!(%connection_id, "Could not deregister connection: {}", e);
    }
    info!(%connection_id, "WebSocket disconnected");
}
