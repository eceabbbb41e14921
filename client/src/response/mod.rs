mod config;
mod error;
mod events;
mod header;
mod observer;
mod parser;

pub use config::{ResponseParserConfig, DEFAULT_MAX_BUFFER_SIZE};
pub use error::{HeaderError, ResponseError};
pub use events::{ResponseEvent, ResponseEvents, RgbBuffer};
pub use header::ResponseHeader;
pub use observer::ResponseObserver;
pub use parser::ResponseParser;
