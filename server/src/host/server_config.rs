use std::default::Default;

use crate::command_decoder::DEFAULT_MAX_COMMAND_BUFFER_SIZE;

/// Bytes requested from the reader per call in [`RenderHost::serve`](crate::RenderHost::serve).
pub const DEFAULT_READ_CHUNK_SIZE: usize = 64 * 1024;

/// Largest tile payload the host renders: 64 MiB.
pub const DEFAULT_MAX_PAYLOAD_SIZE: usize = 64 * 1024 * 1024;

/// Contains Config properties which will be used by a RenderHost
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Size of the read buffer used when serving a reader
    pub read_chunk_size: usize,
    /// Longest command line buffered while waiting for its terminator
    pub max_command_buffer_size: usize,
    /// Render requests whose payload would exceed this are dropped
    pub max_payload_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            read_chunk_size: DEFAULT_READ_CHUNK_SIZE,
            max_command_buffer_size: DEFAULT_MAX_COMMAND_BUFFER_SIZE,
            max_payload_size: DEFAULT_MAX_PAYLOAD_SIZE,
        }
    }
}
