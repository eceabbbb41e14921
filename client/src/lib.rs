//! # Vision Client
//! Requests a frame from a renderer tile by tile, in an order where every
//! prefix of delivered tiles forms an evenly spaced preview, and decodes the
//! `rgb buffer` responses streamed back.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

mod client;
mod client_config;
mod command_stream;
mod error;
mod events;
mod frame;
mod response;
mod schedule;

pub use vision_shared::{
    Command, CommandError, RenderRequest, RequestId, RequestIdGenerator, ResizeRequest, Vec2,
};

pub use client::Client;
pub use client_config::{
    ClientConfig, RequestPolicy, DEFAULT_DIVISION_LEVEL, MAX_CLIENT_DIVISION_LEVEL,
};
pub use command_stream::CommandStream;
pub use error::{ClientError, SendError};
pub use events::ClientEvent;
pub use frame::{FrameBuilder, ReplyError, ReplyOutcome, TileReply};
pub use response::{
    HeaderError, ResponseError, ResponseEvent, ResponseEvents, ResponseHeader, ResponseObserver,
    ResponseParser, ResponseParserConfig, RgbBuffer, DEFAULT_MAX_BUFFER_SIZE,
};
pub use schedule::{PreviewOperation, Schedule, MAX_DIVISION_LEVEL};
