use std::io;

use thiserror::Error;

/// Errors that can occur while buffering command bytes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// A line grew past the configured bound before its terminator arrived.
    /// That line is discarded.
    #[error("Command buffer overflow: more than {max_buffer_size} bytes without a complete line")]
    BufferOverflow { max_buffer_size: usize },
}

/// Errors that can occur while writing an `rgb buffer` response
#[derive(Debug, Error)]
pub enum ResponseWriteError {
    /// The payload does not hold `width * height * 3` bytes
    #[error("Payload holds {actual} bytes, expected {expected}")]
    PayloadSizeMismatch { expected: usize, actual: usize },

    #[error("Response write error: {0}")]
    Io(#[from] io::Error),
}

/// Errors that stop a RenderHost
#[derive(Debug, Error)]
pub enum HostError {
    #[error("Command decode error: {0}")]
    Decode(#[from] DecodeError),

    #[error("Response error: {0}")]
    Write(#[from] ResponseWriteError),

    /// Reading the command stream failed
    #[error("Command read error: {0}")]
    Read(#[from] io::Error),
}
