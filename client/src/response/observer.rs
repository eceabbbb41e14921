use vision_shared::RequestId;

/// Receives the outcome of each parse step of a
/// [`ResponseParser`](crate::ResponseParser).
pub trait ResponseObserver {
    /// A complete frame was decoded. `data` holds exactly
    /// `width * height * 3` bytes and is only valid for the call.
    fn on_rgb_buffer(&mut self, data: &[u8], width: usize, height: usize, request_id: RequestId);

    /// A header line was rejected; `reason` is a one-sentence description.
    fn on_invalid_response(&mut self, reason: &str) {
        let _ = reason;
    }

    fn on_buffer_overflow(&mut self) {}
}
