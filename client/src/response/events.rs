use std::collections::{vec_deque, VecDeque};

use vision_shared::RequestId;

use super::observer::ResponseObserver;

/// An owned, decoded frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RgbBuffer {
    pub request_id: RequestId,
    pub width: usize,
    pub height: usize,
    pub data: Vec<u8>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResponseEvent {
    RgbBuffer(RgbBuffer),
    InvalidResponse(String),
    BufferOverflow,
}

/// A [`ResponseObserver`] that queues everything it observes, in order, for
/// a driving loop to drain after each write.
#[derive(Debug, Default)]
pub struct ResponseEvents {
    events: VecDeque<ResponseEvent>,
    overflow_count: usize,
}

impl ResponseEvents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn pop(&mut self) -> Option<ResponseEvent> {
        self.events.pop_front()
    }

    pub fn drain(&mut self) -> vec_deque::Drain<'_, ResponseEvent> {
        self.events.drain(..)
    }

    /// Number of overflows observed over the lifetime of this queue.
    pub fn overflow_count(&self) -> usize {
        self.overflow_count
    }
}

impl ResponseObserver for ResponseEvents {
    fn on_rgb_buffer(&mut self, data: &[u8], width: usize, height: usize, request_id: RequestId) {
        self.events.push_back(ResponseEvent::RgbBuffer(RgbBuffer {
            request_id,
            width,
            height,
            data: data.to_vec(),
        }));
    }

    fn on_invalid_response(&mut self, reason: &str) {
        self.events
            .push_back(ResponseEvent::InvalidResponse(reason.to_string()));
    }

    fn on_buffer_overflow(&mut self) {
        self.overflow_count += 1;
        self.events.push_back(ResponseEvent::BufferOverflow);
    }
}
