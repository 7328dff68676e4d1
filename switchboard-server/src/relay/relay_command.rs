use crate::registry::PeerSender;
use switchboard_core::{ConnectionId, ParticipantInfo, RoomId, SignalMessage};
use tokio::sync::oneshot;

/// Commands the WebSocket tasks send to the relay hub.
#[derive(Debug)]
pub enum RelayCommand {
    /// A socket was accepted; register it with its outbound queue.
    Connect {
        connection_id: ConnectionId,
        sender: PeerSender,
    },

    /// A validated frame arrived on the connection.
    Signal {
        connection_id: ConnectionId,
        message: SignalMessage,
    },

    /// The socket closed, for whatever reason.
    Disconnect { connection_id: ConnectionId },

    /// Snapshot of a room's membership.
    MembersOf {
        room_id: RoomId,
        reply: oneshot::Sender<Vec<ParticipantInfo>>,
    },
}
