use log::debug;

use vision_shared::{RenderRequest, RequestId};

use crate::{
    frame::error::ReplyError,
    schedule::{PreviewOperation, Schedule},
};

/// An accepted tile: the request it answers and its packed RGB pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileReply {
    pub request: RenderRequest,
    pub data: Vec<u8>,
}

/// Result of accepting one reply.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReplyOutcome {
    /// The preview level differs from the one before this reply. The first
    /// accepted tile always changes it.
    pub preview_changed: bool,
    /// Every request of the frame has now been answered.
    pub complete: bool,
}

/// Collects the replies of one frame in schedule order.
///
/// Replies must arrive in the order the schedule emits requests. Each one is
/// checked against the request at the cursor before it is stored.
#[derive(Debug)]
pub struct FrameBuilder {
    schedule: Schedule,
    tiles: Vec<TileReply>,
    preview_level: Option<usize>,
}

impl FrameBuilder {
    pub fn new(schedule: Schedule) -> Self {
        let capacity = schedule.request_count();
        Self {
            schedule,
            tiles: Vec::with_capacity(capacity),
            preview_level: None,
        }
    }

    pub fn accept_reply(
        &mut self,
        width: usize,
        height: usize,
        request_id: RequestId,
        data: &[u8],
    ) -> Result<ReplyOutcome, ReplyError> {
        let request = self.schedule.current_request();
        if !request.is_valid() || self.tiles.len() >= self.schedule.request_count() {
            return Err(ReplyError::NoPendingRequest { request_id });
        }

        if request.id != request_id {
            return Err(ReplyError::RequestIdMismatch {
                expected: request.id,
                actual: request_id,
            });
        }

        if request.pixel_count.x != width || request.pixel_count.y != height {
            return Err(ReplyError::DimensionMismatch {
                request_id,
                expected_width: request.pixel_count.x,
                expected_height: request.pixel_count.y,
                actual_width: width,
                actual_height: height,
            });
        }

        let expected = request.payload_size();
        if data.len() != expected {
            return Err(ReplyError::PayloadSizeMismatch {
                request_id,
                expected,
                actual: data.len(),
            });
        }

        self.tiles.push(TileReply {
            request,
            data: data.to_vec(),
        });
        self.schedule.advance();

        let previous = self.preview_level.replace(self.schedule.preview_level());
        let outcome = ReplyOutcome {
            preview_changed: previous != self.preview_level,
            complete: self.is_complete(),
        };

        debug!(
            "Accepted tile {}/{} (request {})",
            self.tiles.len(),
            self.schedule.request_count(),
            request_id
        );

        Ok(outcome)
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    pub fn reply_count(&self) -> usize {
        self.tiles.len()
    }

    pub fn tile(&self, index: usize) -> Option<&TileReply> {
        self.tiles.get(index)
    }

    pub fn tiles(&self) -> &[TileReply] {
        &self.tiles
    }

    pub fn is_complete(&self) -> bool {
        self.schedule.is_finished()
    }

    /// Pairs each operation of the current preview with the tile it draws.
    pub fn preview_tiles(&self) -> impl Iterator<Item = (PreviewOperation, &TileReply)> + '_ {
        self.schedule
            .preview_operations()
            .into_iter()
            .zip(self.tiles.iter())
    }
}
