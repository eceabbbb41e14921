use thiserror::Error;

use vision_client::{Client, ClientConfig, ClientError, ClientEvent};
use vision_server::{HostError, HostStatus, RenderHost, Renderer, ServerConfig};

use crate::local_pipe::{LocalPipe, LocalPipePair};

#[derive(Debug, Error)]
pub enum LoopbackError {
    #[error("Client error: {0}")]
    Client(#[from] ClientError),

    #[error("Host error: {0}")]
    Host(#[from] HostError),
}

/// A Client wired to a RenderHost through in-memory pipes.
///
/// Nothing moves until [`pump`](Loopback::pump) is called, so tests control
/// exactly when and in what chunk sizes bytes are delivered.
pub struct Loopback<R: Renderer> {
    pub client: Client<LocalPipe>,
    pub host: RenderHost<R, LocalPipe>,
    pipes: LocalPipePair,
    chunk_size: usize,
    host_status: HostStatus,
}

impl<R: Renderer> Loopback<R> {
    pub fn new(client_config: ClientConfig, server_config: ServerConfig, renderer: R) -> Self {
        let pipes = LocalPipePair::new();
        Self {
            client: Client::new(client_config, pipes.client_to_server.clone()),
            host: RenderHost::new(server_config, renderer, pipes.server_to_client.clone()),
            pipes,
            chunk_size: usize::MAX,
            host_status: HostStatus::Running,
        }
    }

    /// Delivers responses to the client in chunks of at most `chunk_size`
    /// bytes.
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }

    pub fn host_status(&self) -> HostStatus {
        self.host_status
    }

    /// Moves every pending command to the host, then every pending response
    /// to the client. Returns the client events of this round.
    pub fn pump(&mut self) -> Result<Vec<ClientEvent>, LoopbackError> {
        let commands = self.pipes.client_to_server.take_all();
        if !commands.is_empty() && self.host_status == HostStatus::Running {
            self.host_status = self.host.receive(&commands)?;
        }

        let mut events = Vec::new();
        while !self.pipes.server_to_client.is_empty() {
            let chunk = self.pipes.server_to_client.take(self.chunk_size);
            events.extend(self.client.receive(&chunk));
        }
        Ok(events)
    }

    /// Pumps until the current frame completes, nothing is left to move, or
    /// `max_rounds` is reached. Returns all events in order.
    pub fn run_until_complete(&mut self, max_rounds: usize) -> Result<Vec<ClientEvent>, LoopbackError> {
        let mut events = Vec::new();
        for _ in 0..max_rounds {
            let round = self.pump()?;
            let complete = round.contains(&ClientEvent::FrameComplete);
            events.extend(round);

            if complete || self.is_idle() {
                break;
            }
        }
        Ok(events)
    }

    /// No bytes are in flight in either direction.
    pub fn is_idle(&self) -> bool {
        self.pipes.client_to_server.is_empty() && self.pipes.server_to_client.is_empty()
    }
}
