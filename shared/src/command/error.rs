use thiserror::Error;

/// Errors that can occur while encoding or decoding a command line
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// Key and button names travel as a single field, so they cannot be empty
    /// or contain whitespace or control characters
    #[error("Invalid input name {name:?}. Names must be non-empty and contain no whitespace or control characters")]
    InvalidName { name: String },

    /// The line contained nothing but whitespace
    #[error("Command line is empty")]
    EmptyLine,

    /// The first field is not one of the known one-character tags
    #[error("Unknown command tag {tag:?}")]
    UnknownTag { tag: String },

    /// The line ended before a required field
    #[error("Command '{command}' is missing field '{field}'")]
    MissingField {
        command: &'static str,
        field: &'static str,
    },

    /// A numeric field did not hold an integer (or one too large for 64 bits)
    #[error("Field '{field}' is not an integer: {text:?}")]
    NotAnInteger { field: &'static str, text: String },

    /// A size, offset, stride or id field was negative
    #[error("Field '{field}' is negative: {value}")]
    Negative { field: &'static str, value: i64 },

    /// An integer field does not fit the type it is decoded into
    #[error("Field '{field}' is out of range: {value}")]
    OutOfRange { field: &'static str, value: i64 },

    /// A press/release state field was not `0` or `1`
    #[error("Field '{field}' must be 0 or 1, got {text:?}")]
    InvalidState { field: &'static str, text: String },

    /// More fields followed the last field of the command
    #[error("Trailing fields after command '{command}'")]
    TrailingFields { command: &'static str },
}
