use crate::types::{RequestId, Vec2};

/// Bytes per pixel of every payload on the wire (packed 24-bit RGB).
pub const RGB_CHANNELS: usize = 3;

/// Describes which pixels of a frame should be rendered next.
///
/// A request samples the frame on a strided grid: tile pixel `(i, j)` maps to
/// frame pixel `(frame_x(i), frame_y(j))`. The replies to all requests of a
/// schedule together make up the full frame.
///
/// A request whose frame size is zero along either axis is the "no request
/// available" sentinel, see [`RenderRequest::is_valid`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct RenderRequest {
    pub id: RequestId,
    pub pixel_count: Vec2,
    pub pixel_offset: Vec2,
    pub pixel_stride: Vec2,
    pub frame_size: Vec2,
}

impl RenderRequest {
    /// The "no request available" sentinel.
    pub const fn invalid() -> Self {
        Self {
            id: 0,
            pixel_count: Vec2::new(0, 0),
            pixel_offset: Vec2::new(0, 0),
            pixel_stride: Vec2::new(0, 0),
            frame_size: Vec2::new(0, 0),
        }
    }

    pub const fn frame_x(&self, x: usize) -> usize {
        self.pixel_offset.x + x * self.pixel_stride.x
    }

    pub const fn frame_y(&self, y: usize) -> usize {
        self.pixel_offset.y + y * self.pixel_stride.y
    }

    pub const fn is_valid(&self) -> bool {
        self.frame_size.x > 0 && self.frame_size.y > 0
    }

    /// Size in bytes of the RGB reply to this request.
    pub const fn payload_size(&self) -> usize {
        self.pixel_count.area().saturating_mul(RGB_CHANNELS)
    }
}

/// Tells the renderer the size of the frame and of the buffer it should
/// allocate for it. The padded size is the frame size rounded up to a
/// multiple of the partition stride, so that every phase samples evenly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ResizeRequest {
    pub width: usize,
    pub height: usize,
    pub padded_width: usize,
    pub padded_height: usize,
}

impl Default for ResizeRequest {
    fn default() -> Self {
        Self {
            width: 1,
            height: 1,
            padded_width: 1,
            padded_height: 1,
        }
    }
}
