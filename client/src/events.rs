use vision_shared::RequestId;

use crate::frame::ReplyError;

/// Something that happened while the Client processed received bytes
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClientEvent {
    /// A tile was stored in the current frame
    TileAccepted { request_id: RequestId },
    /// The accepted tiles now form a finer preview grid
    PreviewChanged { level: usize },
    /// Every tile of the current frame has arrived
    FrameComplete,
    /// A decoded buffer did not answer the current request
    ReplyRejected(ReplyError),
    /// The stream carried a malformed header. Fatal for the stream
    InvalidResponse(String),
    /// The stream outgrew the response buffer. Fatal for the stream
    BufferOverflow,
    /// The follow-up request could not be written to the transport. The
    /// tile that prompted it was still accepted
    SendFailed { request_id: RequestId, reason: String },
}

impl ClientEvent {
    /// Whether the response stream can no longer be trusted.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::InvalidResponse(_) | Self::BufferOverflow)
    }
}
