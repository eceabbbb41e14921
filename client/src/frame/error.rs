use thiserror::Error;

use vision_shared::RequestId;

/// Reasons a decoded RGB buffer is not accepted as the reply to the current
/// request. A rejected reply leaves the frame untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReplyError {
    /// Every request of the frame has already been answered
    #[error("No request is pending, got reply for request {request_id}")]
    NoPendingRequest { request_id: RequestId },

    /// The reply answers a different request than the one at the cursor
    #[error("Expected reply to request {expected}, got {actual}")]
    RequestIdMismatch {
        expected: RequestId,
        actual: RequestId,
    },

    /// The reply size differs from the tile size of the request
    #[error("Reply to request {request_id} is {actual_width}x{actual_height}, expected {expected_width}x{expected_height}")]
    DimensionMismatch {
        request_id: RequestId,
        expected_width: usize,
        expected_height: usize,
        actual_width: usize,
        actual_height: usize,
    },

    /// The payload does not hold `width * height * 3` bytes
    #[error("Reply to request {request_id} carries {actual} bytes, expected {expected}")]
    PayloadSizeMismatch {
        request_id: RequestId,
        expected: usize,
        actual: usize,
    },
}
