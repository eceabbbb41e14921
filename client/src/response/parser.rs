use log::{debug, trace, warn};

use super::{
    config::ResponseParserConfig,
    error::{HeaderError, ResponseError},
    header::ResponseHeader,
    observer::ResponseObserver,
};

/// Incrementally decodes `rgb buffer` responses out of a byte stream.
///
/// Bytes may arrive in chunks of any size. Every [`write`](Self::write)
/// appends to a bounded buffer and then decodes every complete frame it
/// holds, stopping at the first incomplete one. Decoded frames and errors
/// are reported to the observer.
pub struct ResponseParser<O: ResponseObserver> {
    observer: O,
    buffer: Vec<u8>,
    max_buffer_size: usize,
}

impl<O: ResponseObserver> ResponseParser<O> {
    pub fn new(observer: O) -> Self {
        Self::with_config(ResponseParserConfig::default(), observer)
    }

    pub fn with_config(config: ResponseParserConfig, observer: O) -> Self {
        Self {
            observer,
            buffer: Vec::new(),
            max_buffer_size: config.max_buffer_size,
        }
    }

    /// Appends `bytes` and decodes all complete frames.
    ///
    /// Overflow and header validation failures discard everything buffered,
    /// notify the observer, and are returned as errors. Frames decoded
    /// before a failing header in the same call have already been reported.
    ///
    /// A header announcing a frame larger than `max_buffer_size` is accepted
    /// and its payload buffered until the bound is hit, since the stream
    /// gives no earlier signal. [`pending_frame_len`](Self::pending_frame_len)
    /// exposes the announced size for callers that want to act sooner.
    pub fn write(&mut self, bytes: &[u8]) -> Result<(), ResponseError> {
        if self.buffer.len().saturating_add(bytes.len()) > self.max_buffer_size {
            warn!(
                "Response buffer overflow: {} buffered + {} incoming > {}",
                self.buffer.len(),
                bytes.len(),
                self.max_buffer_size
            );
            self.buffer.clear();
            self.observer.on_buffer_overflow();
            return Err(ResponseError::BufferOverflow {
                max_buffer_size: self.max_buffer_size,
            });
        }

        self.buffer.extend_from_slice(bytes);

        while self.decode_next()? {}

        Ok(())
    }

    /// Decodes the frame at the front of the buffer. Returns `Ok(false)`
    /// when more bytes are needed.
    fn decode_next(&mut self) -> Result<bool, ResponseError> {
        let Some(newline) = self.buffer.iter().position(|&byte| byte == b'\n') else {
            return Ok(false);
        };
        let header_len = newline + 1;

        let header = match ResponseHeader::parse(&self.buffer[..header_len]) {
            Ok(header) => header,
            Err(reason) => return Err(self.reject(reason)),
        };

        let frame_len = header_len.saturating_add(header.payload_size());
        if self.buffer.len() < frame_len {
            if frame_len > self.max_buffer_size {
                debug!(
                    "Request {} announces {} bytes, more than the {} byte buffer; it will overflow",
                    header.request_id, frame_len, self.max_buffer_size
                );
            }
            return Ok(false);
        }

        trace!(
            "Decoded rgb buffer {}x{} for request {}",
            header.width,
            header.height,
            header.request_id
        );
        self.observer.on_rgb_buffer(
            &self.buffer[header_len..frame_len],
            header.width,
            header.height,
            header.request_id,
        );
        self.buffer.drain(..frame_len);

        Ok(true)
    }

    fn reject(&mut self, reason: HeaderError) -> ResponseError {
        warn!("Invalid response: {}", reason);
        self.buffer.clear();
        self.observer.on_invalid_response(&reason.to_string());
        ResponseError::InvalidResponse { reason }
    }

    /// Total length, header included, of the frame whose header is at the
    /// front of the buffer. `None` until a complete, valid header is buffered.
    pub fn pending_frame_len(&self) -> Option<usize> {
        let newline = self.buffer.iter().position(|&byte| byte == b'\n')?;
        let header = ResponseHeader::parse(&self.buffer[..=newline]).ok()?;
        Some((newline + 1).saturating_add(header.payload_size()))
    }

    pub fn set_max_buffer_size(&mut self, max_buffer_size: usize) {
        self.max_buffer_size = max_buffer_size;
    }

    pub fn max_buffer_size(&self) -> usize {
        self.max_buffer_size
    }

    /// Number of bytes waiting for the rest of their frame.
    pub fn buffered_len(&self) -> usize {
        self.buffer.len()
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    pub fn into_observer(self) -> O {
        self.observer
    }
}
