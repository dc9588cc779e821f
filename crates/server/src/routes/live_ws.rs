//! WebSocket route for the live board viewer.
//!
//! Each connection gets its own `LiveSession`. The socket reader turns client
//! messages into session commands, a writer task forwards session output, and
//! closing the socket ends the session (which stops its poller).

use std::sync::Arc;

use anyhow::Result;
use axum::{
    extract::ws::{Message, WebSocket, WebSocketUpgrade},
    response::IntoResponse,
    Extension,
};
use futures::stream::SplitSink;
use futures::{SinkExt, StreamExt};
use tokio::sync::mpsc;

use crate::clients::BroadcastApi;
use crate::config::Config;
use crate::live::{ClientMessage, LiveSession, ServerMessage};

pub async fn ws_handler(
    ws: WebSocketUpgrade,
    Extension(api): Extension<Arc<dyn BroadcastApi>>,
    Extension(config): Extension<Config>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, api, config))
}

async fn handle_socket(socket: WebSocket, api: Arc<dyn BroadcastApi>, config: Config) {
    let (mut sender, mut receiver) = socket.split();
    let (out_tx, mut out_rx) = mpsc::unbounded_channel::<ServerMessage>();
    let (cmd_tx, cmd_rx) = mpsc::channel::<ClientMessage>(16);

    let session = tokio::spawn(LiveSession::new(api, &config, out_tx).run(cmd_rx));

    let writer = tokio::spawn(async move {
        while let Some(msg) = out_rx.recv().await {
            if let Err(e) = send_msg(&mut sender, &msg).await {
                tracing::debug!("Live socket write failed: {e}");
                break;
            }
        }
    });

    while let Some(Ok(msg)) = receiver.next().await {
        let text = match msg {
            Message::Text(t) => t.to_string(),
            Message::Close(_) => break,
            _ => continue,
        };

        match serde_json::from_str::<ClientMessage>(&text) {
            Ok(cmd) => {
                if cmd_tx.send(cmd).await.is_err() {
                    break;
                }
            }
            Err(e) => tracing::warn!("Invalid live board message: {e}"),
        }
    }

    drop(cmd_tx);
    if let Err(e) = session.await {
        tracing::warn!("Live session task failed: {e}");
    }
    writer.abort();
}

// ---- Helper: send message ----

async fn send_msg(sender: &mut SplitSink<WebSocket, Message>, msg: &ServerMessage) -> Result<()> {
    let json = serde_json::to_string(msg)?;
    sender.send(Message::Text(json.into())).await?;
    Ok(())
}
