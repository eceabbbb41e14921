use log::info;

use vision_server::{
    shared::{RenderRequest, ResizeRequest, RGB_CHANNELS},
    Renderer,
};

/// Paints a horizontal red ramp over a vertical green ramp on full blue.
#[derive(Default)]
pub struct GradientRenderer {
    width: usize,
    height: usize,
}

impl GradientRenderer {
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 3] {
        let u = ramp(x, self.width);
        let v = ramp(y, self.height);
        [(255.0 * u) as u8, (255.0 * v) as u8, 255]
    }
}

// Pixel centers; a zero extent yields an empty ramp.
fn ramp(position: usize, extent: usize) -> f32 {
    if extent == 0 {
        return 0.0;
    }
    (position as f32 + 0.5) / extent as f32
}

impl Renderer for GradientRenderer {
    fn resize(&mut self, request: &ResizeRequest) {
        info!("Frame is now {}x{}", request.width, request.height);
        self.width = request.width;
        self.height = request.height;
    }

    fn render(&mut self, request: &RenderRequest, rgb: &mut [u8]) {
        // Without a resize the host reports the tile extent as the frame.
        if self.width == 0 || self.height == 0 {
            self.width = request.frame_size.x;
            self.height = request.frame_size.y;
        }

        let tile_width = request.pixel_count.x;
        for (index, pixel) in rgb.chunks_exact_mut(RGB_CHANNELS).enumerate() {
            let x = request.frame_x(index % tile_width);
            let y = request.frame_y(index / tile_width);
            pixel.copy_from_slice(&self.pixel(x, y));
        }
    }

    fn key(&mut self, name: &str, pressed: bool) {
        info!("Key {} {}", name, if pressed { "down" } else { "up" });
    }
}
