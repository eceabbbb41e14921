//! # Vision Shared
//! Wire types, the header lexer and command line encoding shared between
//! vision-client & vision-server crates.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

mod command;
mod interleave;
mod lexer;
mod render_request;
mod types;

pub use command::{Command, CommandError};
pub use interleave::{interleave, reverse_interleave_x, reverse_interleave_y};
pub use lexer::{Lexer, Token, TokenKind};
pub use render_request::{RenderRequest, ResizeRequest, RGB_CHANNELS};
pub use types::{RequestId, RequestIdGenerator, Vec2};
