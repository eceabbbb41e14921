pub mod helpers;
pub mod local_pipe;

pub use helpers::*;
pub use local_pipe::{LocalPipe, LocalPipePair};
