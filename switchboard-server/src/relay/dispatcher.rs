use crate::registry::{ClientRegistry, Connection, PeerSender, RegistryError};
use crate::relay::broadcaster::{broadcast, send_to};
use switchboard_core::{ConnectionId, ParticipantInfo, RoomId, ServerMessage, SignalMessage};
use tracing::{debug, info};

/// Signaling state of one connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeerState {
    Unjoined,
    Joined(RoomId),
}

/// The signaling state machine. Owns the registry; every mutation and every fan-out
/// goes through here, one call at a time.
///
/// Known behaviors kept on purpose:
/// - `join` while already in a room moves the connection without telling the old room.
/// - `to` on offer/answer/ice is ignored; the whole room minus the sender gets the frame.
#[derive(Debug, Default)]
pub struct Dispatcher {
    registry: ClientRegistry,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn registry(&self) -> &ClientRegistry {
        &self.registry
    }

    pub fn state(&self, connection_id: &ConnectionId) -> Option<PeerState> {
        self.registry
            .get(connection_id)
            .map(|connection| match &connection.room_id {
                Some(room_id) => PeerState::Joined(room_id.clone()),
                None => PeerState::Unjoined,
            })
    }

    /// Register an accepted connection in the `Unjoined` state.
    pub fn connect(
        &mut self,
        connection_id: ConnectionId,
        sender: PeerSender,
    ) -> Result<(), RegistryError> {
        let connection = self.registry.register(connection_id, sender)?;
        info!(
            %connection_id,
            display_name = %connection.display_name,
            "Connection registered"
        );
        Ok(())
    }

    pub fn dispatch(&mut self, connection_id: ConnectionId, message: SignalMessage) {
        let Some(state) = self.state(&connection_id) else {
            debug!(%connection_id, "Signal from unregistered connection dropped");
            return;
        };

        match (state, message) {
            (_, SignalMessage::Join { room_id, .. }) => self.join(connection_id, room_id),

            (PeerState::Joined(room_id), SignalMessage::Leave) => self.leave(connection_id, room_id),
            (PeerState::Unjoined, SignalMessage::Leave) => {}

            (PeerState::Joined(room_id), SignalMessage::Offer { sdp, .. }) => {
                let forwarded = ServerMessage::Offer {
                    from: connection_id,
                    sdp,
                };
                broadcast(&self.registry, &room_id, &forwarded, Some(&connection_id));
            }
            (PeerState::Joined(room_id), SignalMessage::Answer { sdp, .. }) => {
                let forwarded = ServerMessage::Answer {
                    from: connection_id,
                    sdp,
                };
                broadcast(&self.registry, &room_id, &forwarded, Some(&connection_id));
            }
            (
                PeerState::Joined(room_id),
                SignalMessage::Ice {
                    candidate,
                    sdp_mid,
                    sdp_m_line_index,
                    ..
                },
            ) => {
                let forwarded = ServerMessage::Ice {
                    from: connection_id,
                    candidate,
                    sdp_mid,
                    sdp_m_line_index,
                };
                broadcast(&self.registry, &room_id, &forwarded, Some(&connection_id));
            }
            (PeerState::Unjoined, _) => {
                debug!(%connection_id, "Negotiation message outside a room dropped");
            }
        }
    }

    /// Clean up a closed connection. Safe to call more than once; only the first call
    /// notifies the room.
    pub fn disconnect(&mut self, connection_id: &ConnectionId) -> bool {
        let Some(PeerState::Joined(room_id)) = self.state(connection_id) else {
            return self.registry.remove(connection_id).is_some();
        };

        let left = ServerMessage::ParticipantLeft {
            participant_id: *connection_id,
        };
        broadcast(&self.registry, &room_id, &left, Some(connection_id));
        self.registry.remove(connection_id);
        info!(%connection_id, room = %room_id, "Connection left room on close");
        true
    }

    pub fn members_of(&self, room_id: &RoomId) -> Vec<ParticipantInfo> {
        self.registry
            .members_of(room_id)
            .into_iter()
            .map(Connection::participant)
            .collect()
    }

    fn join(&mut self, connection_id: ConnectionId, room_id: RoomId) {
        self.registry.set_room(&connection_id, Some(room_id.clone()));

        let Some(joiner) = self.registry.get(&connection_id) else {
            return;
        };
        let announcement = ServerMessage::ParticipantJoined {
            participant: joiner.participant(),
        };
        broadcast(&self.registry, &room_id, &announcement, Some(&connection_id));

        let participants = self
            .registry
            .members_of(&room_id)
            .into_iter()
            .filter(|member| member.id != connection_id)
            .map(Connection::participant)
            .collect::<Vec<_>>();
        info!(
            %connection_id,
            room = %room_id,
            peers = participants.len(),
            "Connection joined room"
        );

        let ack = ServerMessage::Joined {
            room_id,
            participants,
        };
        send_to(&self.registry, &connection_id, &ack);
    }

    fn leave(&mut self, connection_id: ConnectionId, room_id: RoomId) {
        let left = ServerMessage::ParticipantLeft {
            participant_id: connection_id,
        };
        broadcast(&self.registry, &room_id, &left, Some(&connection_id));
        self.registry.set_room(&connection_id, None);
        info!(%connection_id, room = %room_id, "Connection left room");
    }
}
