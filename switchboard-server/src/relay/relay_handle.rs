use crate::error::ServerError;
use crate::registry::PeerSender;
use crate::relay::relay_command::RelayCommand;
use crate::relay::relay_hub::RelayHub;
use switchboard_core::{ConnectionId, ParticipantInfo, RoomId, SignalMessage};
use tokio::sync::{mpsc, oneshot};

/// Cheap, cloneable front door to the relay hub task.
#[derive(Clone)]
pub struct RelayHandle {
    command_tx: mpsc::Sender<RelayCommand>,
}

impl RelayHandle {
    /// Spawn a hub on the current runtime and return a handle to it.
    pub fn spawn(command_buffer: usize) -> Self {
        let (command_tx, command_rx) = mpsc::channel(command_buffer.max(1));
        tokio::spawn(RelayHub::new(command_rx).run());
        Self { command_tx }
    }

    pub async fn connect(
        &self,
        connection_id: ConnectionId,
        sender: PeerSender,
    ) -> Result<(), ServerError> {
        self.send(RelayCommand::Connect {
            connection_id,
            sender,
        })
        .await
    }

    pub async fn signal(
        &self,
        connection_id: ConnectionId,
        message: SignalMessage,
    ) -> Result<(), ServerError> {
        self.send(RelayCommand::Signal {
            connection_id,
            message,
        })
        .await
    }

    pub async fn disconnect(&self, connection_id: ConnectionId) -> Result<(), ServerError> {
        self.send(RelayCommand::Disconnect { connection_id }).await
    }

    pub async fn members_of(&self, room_id: RoomId) -> Result<Vec<ParticipantInfo>, ServerError> {
        let (reply, rx) = oneshot::channel();
        self.send(RelayCommand::MembersOf { room_id, reply }).await?;
        rx.await.map_err(|_| ServerError::RelayClosed)
    }

    async fn send(&self, cmd: RelayCommand) -> Result<(), ServerError> {
        self.command_tx
            .send(cmd)
            .await
            .map_err(|_| ServerError::RelayClosed)
    }
}
