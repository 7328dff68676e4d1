use axum::extract::ws::Message;
use std::collections::HashMap;
use switchboard_core::{ConnectionId, ParticipantInfo, RoomId};
use thiserror::Error;
use tokio::sync::mpsc;

/// Bounded outbound queue of one WebSocket; drained by that socket's writer task.
pub type PeerSender = mpsc::Sender<Message>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("connection {0} is already registered")]
    AlreadyRegistered(ConnectionId),
}

/// State of one live connection.
#[derive(Debug)]
pub struct Connection {
    pub id: ConnectionId,
    pub display_name: String,
    pub room_id: Option<RoomId>,
    sender: PeerSender,
}

impl Connection {
    pub fn sender(&self) -> &PeerSender {
        &self.sender
    }

    pub fn participant(&self) -> ParticipantInfo {
        ParticipantInfo {
            id: self.id,
            display_name: self.display_name.clone(),
        }
    }

    pub fn is_in(&self, room_id: &RoomId) -> bool {
        self.room_id.as_ref() == Some(room_id)
    }
}

/// All live connections, keyed by id.
///
/// Room membership is not stored separately: `members_of` filters entries by their
/// `room_id`, so a connection is in a room exactly when its entry says so.
#[derive(Debug, Default)]
pub struct ClientRegistry {
    connections: HashMap<ConnectionId, Connection>,
    order: Vec<ConnectionId>,
}

impl ClientRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(
        &mut self,
        id: ConnectionId,
        sender: PeerSender,
    ) -> Result<&Connection, RegistryError> {
        if self.connections.contains_key(&id) {
            return Err(RegistryError::AlreadyRegistered(id));
        }

        self.order.push(id);
        let connection = self.connections.entry(id).or_insert(Connection {
            id,
            display_name: id.display_name(),
            room_id: None,
            sender,
        });
        Ok(connection)
    }

    /// Returns `false` if `id` is not registered.
    pub fn set_room(&mut self, id: &ConnectionId, room_id: Option<RoomId>) -> bool {
        let Some(connection) = self.connections.get_mut(id) else {
            return false;
        };
        connection.room_id = room_id;
        true
    }

    pub fn remove(&mut self, id: &ConnectionId) -> Option<Connection> {
        let removed = self.connections.remove(id)?;
        self.order.retain(|other| other != id);
        Some(removed)
    }

    pub fn get(&self, id: &ConnectionId) -> Option<&Connection> {
        self.connections.get(id)
    }

    /// Members of `room_id` in registration order.
    pub fn members_of(&self, room_id: &RoomId) -> Vec<&Connection> {
        self.order
            .iter()
            .filter_map(|id| self.connections.get(id))
            .filter(|connection| connection.is_in(room_id))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.connections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }
}
