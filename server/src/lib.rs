//! # Vision Server
//! The renderer side of the protocol: decodes command lines sent by a
//! vision-client, dispatches them to a [`Renderer`] and streams back
//! `rgb buffer` responses over any `std::io` pair.

#![deny(
    trivial_casts,
    trivial_numeric_casts,
    unstable_features,
    unused_import_braces
)]

pub mod shared {
    pub use vision_shared::{
        Command, CommandError, RenderRequest, RequestId, ResizeRequest, Vec2, RGB_CHANNELS,
    };
}

mod command_decoder;
mod error;
mod host;
mod renderer;
mod response_writer;

pub use command_decoder::{CommandDecoder, DEFAULT_MAX_COMMAND_BUFFER_SIZE};
pub use error::{DecodeError, HostError, ResponseWriteError};
pub use host::{
    HostStatus, RenderHost, ServerConfig, DEFAULT_MAX_PAYLOAD_SIZE, DEFAULT_READ_CHUNK_SIZE,
};
pub use renderer::Renderer;
pub use response_writer::ResponseWriter;
