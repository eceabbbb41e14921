mod command;
mod error;

pub use command::Command;
pub use error::CommandError;
