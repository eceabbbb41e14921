mod error;
mod frame_builder;

pub use error::ReplyError;
pub use frame_builder::{FrameBuilder, ReplyOutcome, TileReply};
