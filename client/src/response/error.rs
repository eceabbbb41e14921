use thiserror::Error;

/// Reasons a response header line is rejected. The messages are part of the
/// protocol's observable behavior and are reported verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeaderError {
    /// The line does not start with `rgb buffer`
    #[error("Header line is not recognizable.")]
    NotRecognizable,

    #[error("Width, height and request ID are missing.")]
    MissingWidth,

    #[error("Height and request ID are missing.")]
    MissingHeight,

    #[error("Request ID is missing.")]
    MissingRequestId,

    /// Also reported for integers that do not fit in 64 bits
    #[error("Width is not an integer.")]
    WidthNotInteger,

    #[error("Height is not an integer.")]
    HeightNotInteger,

    #[error("Request ID is not an integer.")]
    RequestIdNotInteger,

    #[error("Width is negative.")]
    NegativeWidth,

    #[error("Height is negative.")]
    NegativeHeight,

    #[error("Request ID is negative.")]
    NegativeRequestId,

    #[error("Trailing tokens after request ID.")]
    TrailingTokens,
}

/// Errors that can occur while feeding bytes to a ResponseParser. Both are
/// fatal for the stream: the buffered bytes are discarded and the caller
/// should treat the connection as desynchronized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResponseError {
    /// Appending the bytes would have exceeded the configured bound
    #[error("Response buffer overflow: more than {max_buffer_size} bytes buffered")]
    BufferOverflow { max_buffer_size: usize },

    /// A header line failed validation
    #[error("Invalid response: {reason}")]
    InvalidResponse { reason: HeaderError },
}
