//! WebSocket signaling relay.
//!
//! Clients connect to `/ws`, join a room by label and exchange offer/answer/ICE
//! payloads with everyone else in that room. All connection state lives in one
//! [`RelayHub`] task; sockets talk to it through a [`RelayHandle`].

pub mod config;
pub mod credential;
pub mod error;
pub mod registry;
pub mod relay;
pub mod router;
pub mod server;
pub mod signaling;

pub use config::{MediaServiceConfig, RelayConfig};
pub use credential::{CredentialError, CredentialIssuer, JwtCredentialIssuer};
pub use error::ServerError;
pub use registry::{ClientRegistry, Connection, PeerSender, RegistryError};
pub use relay::{Dispatcher, PeerState, RelayCommand, RelayHandle, RelayHub, broadcast, send_to};
pub use router::build_router;
pub use server::RelayServer;
pub use signaling::{SignalingService, token_handler, ws_handler};
