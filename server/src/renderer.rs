use vision_shared::{RenderRequest, ResizeRequest};

/// Produces pixels for a [`RenderHost`](crate::RenderHost).
///
/// Input callbacks default to doing nothing.
pub trait Renderer {
    /// The frame size changed. Called before any render request of the new
    /// frame.
    fn resize(&mut self, request: &ResizeRequest);

    /// Fills `rgb` with the tile described by `request`: row-major packed
    /// RGB, `request.pixel_count.x * request.pixel_count.y * 3` bytes. Tile
    /// pixel `(x, y)` is frame pixel `(request.frame_x(x), request.frame_y(y))`.
    fn render(&mut self, request: &RenderRequest, rgb: &mut [u8]);

    fn key(&mut self, name: &str, pressed: bool) {
        let _ = (name, pressed);
    }

    fn mouse_button(&mut self, name: &str, x: i32, y: i32, pressed: bool) {
        let _ = (name, x, y, pressed);
    }

    fn mouse_move(&mut self, x: i32, y: i32) {
        let _ = (x, y);
    }
}
