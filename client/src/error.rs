use std::io;

use thiserror::Error;

use vision_shared::CommandError;

/// Errors that can occur while writing commands to the transport
#[derive(Debug, Error)]
pub enum SendError {
    /// The command cannot be encoded as a line
    #[error("Command encoding error: {0}")]
    Command(#[from] CommandError),

    /// The transport failed to accept or flush the bytes
    #[error("Transport write error: {0}")]
    Io(#[from] io::Error),
}

/// Errors that can occur while driving a Client
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Send error: {0}")]
    Send(#[from] SendError),

    /// A command was issued after `quit`
    #[error("Client has already sent quit")]
    Closed,
}
