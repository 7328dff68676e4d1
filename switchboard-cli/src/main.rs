use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use switchboard::server::{JwtCredentialIssuer, MediaServiceConfig, RelayConfig, RelayServer};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "switchboard", version, about = "WebSocket signaling relay for WebRTC rooms")]
struct Cli {
    /// Address to listen on.
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    host: IpAddr,

    #[arg(short, long, env = "PORT", default_value_t = 3000)]
    port: u16,

    /// Media service endpoint handed out alongside join tokens.
    #[arg(long, env = "LIVEKIT_WS_URL", default_value = "ws://localhost:7880")]
    media_ws_url: String,

    #[arg(long, env = "LIVEKIT_API_KEY")]
    media_api_key: String,

    #[arg(long, env = "LIVEKIT_API_SECRET", hide_env_values = true)]
    media_api_secret: String,

    /// Lifetime of issued join tokens, in seconds.
    #[arg(long, env = "TOKEN_TTL_SECS", default_value_t = 900)]
    token_ttl_secs: u64,

    /// Capacity of the relay's command queue.
    #[arg(long, default_value_t = 256)]
    command_buffer: usize,

    /// Frames buffered per connection; a peer that falls further behind loses frames.
    #[arg(long, default_value_t = 128)]
    peer_queue: usize,
}

impl Cli {
    fn into_config(self) -> RelayConfig {
        RelayConfig {
            bind_addr: SocketAddr::new(self.host, self.port),
            command_buffer: self.command_buffer,
            peer_queue: self.peer_queue,
            media: MediaServiceConfig {
                ws_url: self.media_ws_url,
                api_key: self.media_api_key,
                api_secret: self.media_api_secret,
                token_ttl_secs: self.token_ttl_secs,
            },
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Cli::parse().into_config();
    config.validate().context("Refusing to start")?;

    println!("{}", "📡 Starting Switchboard relay...".green().bold());
    println!("   🔌 WebSocket: ws://{}/ws", config.bind_addr);
    println!("   🔑 Tokens:    http://{}/token", config.bind_addr);
    println!("   🎥 Media:     {}", config.media.ws_url.cyan());

    let issuer = JwtCredentialIssuer::new(&config.media);
    let server = RelayServer::bind(&config, Arc::new(issuer))
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;

    server.run_until(shutdown_signal()).await?;

    println!("{}", "👋 Relay stopped".yellow());
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            warn!("Cannot listen for ctrl-c, running until killed: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
