pub mod loopback;
pub mod pattern_renderer;

pub use loopback::{Loopback, LoopbackError};
pub use pattern_renderer::{compose_frame, pattern_pixel, PatternRenderer};
