use crate::registry::{ClientRegistry, Connection};
use axum::extract::ws::Message;
use switchboard_core::{ConnectionId, RoomId, ServerMessage, encode};
use tokio::sync::mpsc::error::TrySendError;
use tracing::{debug, error};

/// Deliver `message` to every member of `room_id` except `except`.
///
/// The message is encoded once and pushed onto each member's outbound queue without
/// waiting. A full or closed queue only loses that member's copy. Returns how many members got the frame.
pub fn broadcast(
    registry: &ClientRegistry,
    room_id: &RoomId,
    message: &ServerMessage,
    except: Option<&ConnectionId>,
) -> usize {
    let Some(frame) = to_frame(message) else {
        return 0;
    };

    let mut delivered = 0;
    for member in registry.members_of(room_id) {
        if except == Some(&member.id) {
            continue;
        }
        if push(member, frame.clone(), message) {
            delivered += 1;
        }
    }

    debug!(
        room = %room_id,
        kind = message.kind(),
        delivered,
        "Broadcast to room"
    );
    delivered
}

/// Deliver `message` to a single registered connection.
pub fn send_to(registry: &ClientRegistry, connection_id: &ConnectionId, message: &ServerMessage) -> bool {
    let Some(connection) = registry.get(connection_id) else {
        debug!(%connection_id, kind = message.kind(), "Send to unknown connection");
        return false;
    };
    let Some(frame) = to_frame(message) else {
        return false;
    };
    push(connection, frame, message)
}

fn to_frame(message: &ServerMessage) -> Option<Message> {
    match encode(message) {
        Ok(text) => Some(Message::Text(text.into())),
        Err(e) => {
            error!("Failed to encode server message: {}", e);
            None
        }
    }
}

fn push(connection: &Connection, frame: Message, message: &ServerMessage) -> bool {
    match connection.sender().try_send(frame) {
        Ok(()) => true,
        Err(TrySendError::Full(_)) => {
            debug!(
                connection_id = %connection.id,
                kind = message.kind(),
                "Outbound queue full, frame dropped"
            );
            false
        }
        Err(TrySendError::Closed(_)) => {
            debug!(
                connection_id = %connection.id,
                kind = message.kind(),
                "Outbound queue closed, frame dropped"
            );
            false
        }
    }
}
