mod connection;
mod credential;
mod room;
mod signaling;

pub use connection::{ConnectionId, ParticipantInfo};
pub use credential::{Credential, CredentialRequest};
pub use room::RoomId;
pub use signaling::{ServerMessage, SignalMessage};
