use vision_client::FrameBuilder;
use vision_server::{
    shared::{RenderRequest, ResizeRequest, RGB_CHANNELS},
    Renderer,
};

/// Deterministic color of frame pixel `(x, y)`.
pub fn pattern_pixel(x: usize, y: usize) -> [u8; 3] {
    [(x % 251) as u8, (y % 241) as u8, ((x * 7 + y * 13) % 256) as u8]
}

/// Renders [`pattern_pixel`] and records every call it receives.
#[derive(Default)]
pub struct PatternRenderer {
    pub resizes: Vec<ResizeRequest>,
    pub renders: Vec<RenderRequest>,
    pub keys: Vec<(String, bool)>,
    pub mouse_buttons: Vec<(String, i32, i32, bool)>,
    pub mouse_moves: Vec<(i32, i32)>,
}

impl Renderer for PatternRenderer {
    fn resize(&mut self, request: &ResizeRequest) {
        self.resizes.push(*request);
    }

    fn render(&mut self, request: &RenderRequest, rgb: &mut [u8]) {
        self.renders.push(*request);

        let width = request.pixel_count.x;
        for (index, pixel) in rgb.chunks_exact_mut(RGB_CHANNELS).enumerate() {
            let x = request.frame_x(index % width);
            let y = request.frame_y(index / width);
            pixel.copy_from_slice(&pattern_pixel(x, y));
        }
    }

    fn key(&mut self, name: &str, pressed: bool) {
        self.keys.push((name.to_string(), pressed));
    }

    fn mouse_button(&mut self, name: &str, x: i32, y: i32, pressed: bool) {
        self.mouse_buttons.push((name.to_string(), x, y, pressed));
    }

    fn mouse_move(&mut self, x: i32, y: i32) {
        self.mouse_moves.push((x, y));
    }
}

/// Places every accepted tile pixel that falls inside the frame, row-major.
/// Pixels no tile covers stay `None`.
pub fn compose_frame(frame: &FrameBuilder) -> Vec<Option<[u8; 3]>> {
    let schedule = frame.schedule();
    let (width, height) = (schedule.frame_width(), schedule.frame_height());
    let mut pixels = vec![None; width * height];

    for tile in frame.tiles() {
        let request = &tile.request;
        let tile_width = request.pixel_count.x;
        for (index, rgb) in tile.data.chunks_exact(RGB_CHANNELS).enumerate() {
            let x = request.frame_x(index % tile_width);
            let y = request.frame_y(index / tile_width);
            if x < width && y < height {
                pixels[y * width + x] = Some([rgb[0], rgb[1], rgb[2]]);
            }
        }
    }

    pixels
}
