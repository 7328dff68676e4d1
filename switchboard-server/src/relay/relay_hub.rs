use crate::relay::dispatcher::Dispatcher;
use crate::relay::relay_command::RelayCommand;
use tokio::sync::mpsc;
use tracing::{info, warn};

/// Single owner of the relay state.
///
/// Commands are applied strictly one after another, so a join's membership snapshot
/// and its announcement never interleave with another join or leave.
pub struct RelayHub {
    dispatcher: Dispatcher,
    command_rx: mpsc::Receiver<RelayCommand>,
}

impl RelayHub {
    pub fn new(command_rx: mpsc::Receiver<RelayCommand>) -> Self {
        Self {
            dispatcher: Dispatcher::new(),
            command_rx,
        }
    }

    pub async fn run(mut self) {
        info!("Relay hub started");

        while let Some(cmd) = self.command_rx.recv().await {
            self.handle_command(cmd);
        }

        info!(
            remaining = self.dispatcher.registry().len(),
            "Command channel closed. Relay hub finished"
        );
    }

    fn handle_command(&mut self, cmd: RelayCommand) {
        match cmd {
            RelayCommand::Connect {
                connection_id,
                sender,
            } => {
                if let Err(e) = self.dispatcher.connect(connection_id, sender) {
                    warn!("Rejected connection: {}", e);
                }
            }

            RelayCommand::Signal {
                connection_id,
                message,
            } => self.dispatcher.dispatch(connection_id, message),

            RelayCommand::Disconnect { connection_id } => {
                self.dispatcher.disconnect(&connection_id);
            }

            RelayCommand::MembersOf { room_id, reply } => {
                let _ = reply.send(self.dispatcher.members_of(&room_id));
            }
        }
    }
}
