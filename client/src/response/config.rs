use std::default::Default;

/// Upper bound on buffered response bytes unless configured otherwise: 16 MiB.
pub const DEFAULT_MAX_BUFFER_SIZE: usize = 16 * 1024 * 1024;

/// Contains Config properties which will be used by the ResponseParser
#[derive(Clone, Debug)]
pub struct ResponseParserConfig {
    /// Maximum number of bytes the parser keeps buffered while waiting for a
    /// complete frame. A write that would exceed it clears the buffer.
    pub max_buffer_size: usize,
}

impl Default for ResponseParserConfig {
    fn default() -> Self {
        Self {
            max_buffer_size: DEFAULT_MAX_BUFFER_SIZE,
        }
    }
}
