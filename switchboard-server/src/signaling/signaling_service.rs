use crate::credential::CredentialIssuer;
use crate::relay::RelayHandle;
use std::sync::Arc;

/// Shared state handed to every HTTP and WebSocket handler.
#[derive(Clone)]
pub struct SignalingService {
    relay: RelayHandle,
    issuer: Arc<dyn CredentialIssuer>,
    peer_queue: usize,
}

impl SignalingService {
    pub fn new(relay: RelayHandle, issuer: Arc<dyn CredentialIssuer>, peer_queue: usize) -> Self {
        Self {
            relay,
            issuer,
            peer_queue,
        }
    }

    pub fn relay(&self) -> &RelayHandle {
        &self.relay
    }

    pub fn issuer(&self) -> &dyn CredentialIssuer {
        self.issuer.as_ref()
    }

    /// Outbound queue capacity for each new WebSocket.
    pub fn peer_queue(&self) -> usize {
        self.peer_queue
    }
}
