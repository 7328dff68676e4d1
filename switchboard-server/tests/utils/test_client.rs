use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use futures::{SinkExt, StreamExt};
use switchboard_core::{ParticipantInfo, RoomId, ServerMessage, SignalMessage};
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async};
use tracing::debug;

pub const RECV_TIMEOUT: Duration = Duration::from_secs(5);
pub const SILENCE_WINDOW: Duration = Duration::from_millis(300);

/// A WebSocket peer speaking the relay's JSON protocol.
pub struct TestClient {
    name: String,
    stream: WebSocketStream<MaybeTlsStream<TcpStream>>,
}

impl TestClient {
    pub async fn connect(addr: SocketAddr, name: &str) -> Result<Self> {
        let url = format!("ws://{}/ws", addr);
        let (stream, _) = connect_async(url)
            .await
            .with_context(|| format!("{} failed to connect", name))?;

        Ok(Self {
            name: name.to_owned(),
            stream,
        })
    }

    pub async fn send(&mut self, message: &SignalMessage) -> Result<()> {
        let text = serde_json::to_string(message)?;
        self.send_text(&text).await
    }

    pub async fn send_text(&mut self, text: &str) -> Result<()> {
        debug!(client = %self.name, "-> {}", text);
        self.stream.send(Message::text(text.to_owned())).await?;
        Ok(())
    }

    pub async fn send_binary(&mut self, data: Vec<u8>) -> Result<()> {
        self.stream.send(Message::binary(data)).await?;
        Ok(())
    }

    /// Next protocol message, skipping control frames.
    pub async fn recv(&mut self) -> Result<ServerMessage> {
        self.recv_within(RECV_TIMEOUT).await
    }

    pub async fn recv_within(&mut self, timeout: Duration) -> Result<ServerMessage> {
        let deadline = tokio::time::Instant::now() + timeout;

        loop {
            let frame = tokio::time::timeout_at(deadline, self.stream.next())
                .await
                .with_context(|| format!("{} timed out waiting for a message", self.name))?;

            match frame {
                Some(Ok(Message::Text(text))) => {
                    debug!(client = %self.name, "<- {}", text.as_str());
                    return Ok(serde_json::from_str(text.as_str())?);
                }
                Some(Ok(Message::Close(_))) | None => bail!("{} connection closed", self.name),
                Some(Ok(_)) => continue,
                Some(Err(e)) => return Err(e.into()),
            }
        }
    }

    /// Succeeds only if the window elapses with no data frame and no close.
    ///
    /// Any text or binary frame fails, whether or not it decodes as a known message.
    pub async fn expect_silence(&mut self) -> Result<()> {
        let deadline = tokio::time::Instant::now() + SILENCE_WINDOW;

        loop {
            let Ok(frame) = tokio::time::timeout_at(deadline, self.stream.next()).await else {
                return Ok(());
            };

            match frame {
                Some(Ok(Message::Text(text))) => {
                    bail!("{} expected silence, got {}", self.name, text.as_str())
                }
                Some(Ok(Message::Binary(data))) => {
                    bail!("{} expected silence, got {} binary bytes", self.name, data.len())
                }
                Some(Ok(Message::Close(_))) | None => {
                    bail!("{} connection closed while expecting silence", self.name)
                }
                Some(Ok(_)) => continue,
                Some(Err(e)) => return Err(e.into()),
            }
        }
    }

    /// Join a room and return the participants listed in the acknowledgement.
    pub async fn join(&mut self, room: &str) -> Result<Vec<ParticipantInfo>> {
        self.send(&SignalMessage::Join {
            room_id: RoomId::from(room),
            token: None,
        })
        .await?;

        match self.recv().await? {
            ServerMessage::Joined {
                room_id,
                participants,
            } if room_id.as_str() == room => Ok(participants),
            other => bail!("{} expected joined ack for {}, got {:?}", self.name, room, other),
        }
    }

    pub async fn close(mut self) -> Result<()> {
        self.stream.close(None).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::net::TcpListener;
    use tokio_tungstenite::accept_async;

    /// A bare WebSocket peer that pushes `frames`, then either closes or idles.
    async fn scripted_peer(frames: Vec<Message>, close: bool) -> SocketAddr {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (tcp, _) = listener.accept().await.unwrap();
            let mut ws = accept_async(tcp).await.unwrap();
            for frame in frames {
                ws.send(frame).await.unwrap();
            }
            if close {
                let _ = ws.close(None).await;
            }
            while let Some(Ok(_)) = ws.next().await {}
        });

        addr
    }

    #[tokio::test]
    async fn silence_holds_on_idle_connection() {
        let addr = scripted_peer(vec![Message::Ping(Vec::new().into())], false).await;
        let mut client = TestClient::connect(addr, "idle").await.unwrap();

        assert!(client.expect_silence().await.is_ok());
    }

    #[tokio::test]
    async fn unknown_message_breaks_silence() {
        let frame = Message::text(r#"{"type":"error","reason":"bad frame"}"#.to_owned());
        let addr = scripted_peer(vec![frame], false).await;
        let mut client = TestClient::connect(addr, "stray").await.unwrap();

        assert!(client.expect_silence().await.is_err());
    }

    #[tokio::test]
    async fn binary_frame_breaks_silence() {
        let addr = scripted_peer(vec![Message::binary(vec![1u8, 2, 3])], false).await;
        let mut client = TestClient::connect(addr, "binary").await.unwrap();

        assert!(client.expect_silence().await.is_err());
    }

    #[tokio::test]
    async fn close_breaks_silence() {
        let addr = scripted_peer(Vec::new(), true).await;
        let mut client = TestClient::connect(addr, "closed").await.unwrap();

        assert!(client.expect_silence().await.is_err());
    }
}
