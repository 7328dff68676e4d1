use crate::error::ServerError;
use std::fmt;
use std::net::SocketAddr;

/// Connection parameters for the external media service that verifies join tokens.
#[derive(Clone)]
pub struct MediaServiceConfig {
    pub ws_url: String,
    pub api_key: String,
    pub api_secret: String,
    pub token_ttl_secs: u64,
}

impl Default for MediaServiceConfig {
    fn default() -> Self {
        Self {
            ws_url: "ws://localhost:7880".to_owned(),
            api_key: String::new(),
            api_secret: String::new(),
            token_ttl_secs: 15 * 60,
        }
    }
}

impl fmt::Debug for MediaServiceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MediaServiceConfig")
            .field("ws_url", &self.ws_url)
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .field("token_ttl_secs", &self.token_ttl_secs)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub bind_addr: SocketAddr,
    /// Capacity of the hub's command queue.
    pub command_buffer: usize,
    /// Frames buffered per connection before further frames to it are dropped.
    pub peer_queue: usize,
    pub media: MediaServiceConfig,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            command_buffer: 256,
            peer_queue: 128,
            media: MediaServiceConfig::default(),
        }
    }
}

impl RelayConfig {
    pub fn validate(&self) -> Result<(), ServerError> {
        let media = &self.media;
        let missing = [
            ("media ws url", media.ws_url.is_empty()),
            ("media api key", media.api_key.is_empty()),
            ("media api secret", media.api_secret.is_empty()),
        ];
        if let Some((name, _)) = missing.iter().find(|(_, empty)| *empty) {
            return Err(ServerError::Config(format!("{} must be set", name)));
        }
        if media.token_ttl_secs == 0 {
            return Err(ServerError::Config("token ttl must be positive".to_owned()));
        }
        if self.command_buffer == 0 {
            return Err(ServerError::Config("command buffer must be positive".to_owned()));
        }
        if self.peer_queue == 0 {
            return Err(ServerError::Config("peer queue must be positive".to_owned()));
        }
        Ok(())
    }
}
