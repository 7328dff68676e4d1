use crate::config::RelayConfig;
use crate::credential::CredentialIssuer;
use crate::error::ServerError;
use crate::relay::RelayHandle;
use crate::router::build_router;
use crate::signaling::SignalingService;
use axum::Router;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// A bound relay: listener, router and a running hub.
pub struct RelayServer {
    listener: TcpListener,
    router: Router,
    relay: RelayHandle,
}

impl RelayServer {
    /// Bind the listener and start the hub. Must be called inside a tokio runtime.
    pub async fn bind(
        config: &RelayConfig,
        issuer: Arc<dyn CredentialIssuer>,
    ) -> Result<Self, ServerError> {
        let listener = TcpListener::bind(config.bind_addr).await?;
        let relay = RelayHandle::spawn(config.command_buffer);
        let router = build_router(SignalingService::new(
            relay.clone(),
            issuer,
            config.peer_queue,
        ));

        Ok(Self {
            listener,
            router,
            relay,
        })
    }

    pub fn local_addr(&self) -> Result<SocketAddr, ServerError> {
        Ok(self.listener.local_addr()?)
    }

    pub fn relay(&self) -> RelayHandle {
        self.relay.clone()
    }

    pub async fn run(self) -> Result<(), ServerError> {
        self.run_until(std::future::pending()).await
    }

    pub async fn run_until<F>(self, shutdown: F) -> Result<(), ServerError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        info!("Signaling server listening on http://{}", self.local_addr()?);

        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await?;

        info!("Signaling server stopped");
        Ok(())
    }
}
