use std::{fmt, vec::IntoIter};

use crate::{
    command::error::CommandError,
    lexer::{Lexer, Token, TokenKind},
    render_request::{RenderRequest, ResizeRequest},
    types::{RequestId, Vec2},
};

/// A control message sent from the viewer to the renderer, one per line.
///
/// ```text
/// r <x_count> <y_count> <x_offset> <y_offset> <x_stride> <y_stride> <id>
/// s <width> <height> <padded_width> <padded_height>
/// k <key_name> <0|1>
/// b <button_name> <x> <y> <0|1>
/// m <x> <y>
/// q
/// ```
///
/// A render line does not carry the frame size, so a decoded
/// [`Command::Render`] has a zero `frame_size` until the receiver fills in
/// the size from the last resize.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Render(RenderRequest),
    Resize(ResizeRequest),
    Key {
        name: String,
        pressed: bool,
    },
    MouseButton {
        name: String,
        x: i32,
        y: i32,
        pressed: bool,
    },
    MouseMove {
        x: i32,
        y: i32,
    },
    Quit,
}

impl Command {
    pub fn key(name: impl Into<String>, pressed: bool) -> Self {
        Self::Key {
            name: name.into(),
            pressed,
        }
    }

    pub fn mouse_button(name: impl Into<String>, x: i32, y: i32, pressed: bool) -> Self {
        Self::MouseButton {
            name: name.into(),
            x,
            y,
            pressed,
        }
    }

    /// The one-character tag that starts this command's line.
    pub fn tag(&self) -> char {
        match self {
            Self::Render(_) => 'r',
            Self::Resize(_) => 's',
            Self::Key { .. } => 'k',
            Self::MouseButton { .. } => 'b',
            Self::MouseMove { .. } => 'm',
            Self::Quit => 'q',
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Render(_) => "render",
            Self::Resize(_) => "resize",
            Self::Key { .. } => "key",
            Self::MouseButton { .. } => "mouse button",
            Self::MouseMove { .. } => "mouse move",
            Self::Quit => "quit",
        }
    }

    /// Checks that the command can be written as a single unambiguous line.
    pub fn validate(&self) -> Result<(), CommandError> {
        match self {
            Self::Key { name, .. } | Self::MouseButton { name, .. } if !is_valid_name(name) => {
                Err(CommandError::InvalidName { name: name.clone() })
            }
            _ => Ok(()),
        }
    }

    /// Appends the command line, newline included, to `out`.
    pub fn encode(&self, out: &mut Vec<u8>) -> Result<(), CommandError> {
        self.validate()?;
        out.extend_from_slice(self.to_string().as_bytes());
        out.push(b'\n');
        Ok(())
    }

    /// The command line, newline included.
    pub fn to_line(&self) -> Result<String, CommandError> {
        self.validate()?;
        Ok(format!("{self}\n"))
    }

    /// Parses one command line. A trailing line terminator is optional and
    /// fields may be separated by any run of spaces or tabs.
    pub fn decode(line: &[u8]) -> Result<Self, CommandError> {
        let mut fields = split_fields(line).into_iter();

        let tag = fields.next().ok_or(CommandError::EmptyLine)?;

        let command = match tag.text {
            b"r" => {
                let mut reader = FieldReader::new(fields, "render");
                let x_count = reader.size("x_count")?;
                let y_count = reader.size("y_count")?;
                let x_offset = reader.size("x_offset")?;
                let y_offset = reader.size("y_offset")?;
                let x_stride = reader.size("x_stride")?;
                let y_stride = reader.size("y_stride")?;
                let id = reader.request_id("id")?;
                reader.finish()?;

                Self::Render(RenderRequest {
                    id,
                    pixel_count: Vec2::new(x_count, y_count),
                    pixel_offset: Vec2::new(x_offset, y_offset),
                    pixel_stride: Vec2::new(x_stride, y_stride),
                    frame_size: Vec2::default(),
                })
            }
            b"s" => {
                let mut reader = FieldReader::new(fields, "resize");
                let width = reader.size("width")?;
                let height = reader.size("height")?;
                let padded_width = reader.size("padded_width")?;
                let padded_height = reader.size("padded_height")?;
                reader.finish()?;

                Self::Resize(ResizeRequest {
                    width,
                    height,
                    padded_width,
                    padded_height,
                })
            }
            b"k" => {
                let mut reader = FieldReader::new(fields, "key");
                let name = reader.name("key_name")?;
                let pressed = reader.state("state")?;
                reader.finish()?;

                Self::Key { name, pressed }
            }
            b"b" => {
                let mut reader = FieldReader::new(fields, "mouse button");
                let name = reader.name("button_name")?;
                let x = reader.coordinate("x")?;
                let y = reader.coordinate("y")?;
                let pressed = reader.state("state")?;
                reader.finish()?;

                Self::MouseButton {
                    name,
                    x,
                    y,
                    pressed,
                }
            }
            b"m" => {
                let mut reader = FieldReader::new(fields, "mouse move");
                let x = reader.coordinate("x")?;
                let y = reader.coordinate("y")?;
                reader.finish()?;

                Self::MouseMove { x, y }
            }
            b"q" => {
                FieldReader::new(fields, "quit").finish()?;
                Self::Quit
            }
            other => {
                return Err(CommandError::UnknownTag {
                    tag: String::from_utf8_lossy(other).into_owned(),
                })
            }
        };

        Ok(command)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Render(req) => write!(
                f,
                "r {} {} {} {} {} {} {}",
                req.pixel_count.x,
                req.pixel_count.y,
                req.pixel_offset.x,
                req.pixel_offset.y,
                req.pixel_stride.x,
                req.pixel_stride.y,
                req.id
            ),
            Self::Resize(req) => write!(
                f,
                "s {} {} {} {}",
                req.width, req.height, req.padded_width, req.padded_height
            ),
            Self::Key { name, pressed } => write!(f, "k {} {}", name, u8::from(*pressed)),
            Self::MouseButton {
                name,
                x,
                y,
                pressed,
            } => write!(f, "b {} {} {} {}", name, x, y, u8::from(*pressed)),
            Self::MouseMove { x, y } => write!(f, "m {} {}", x, y),
            Self::Quit => write!(f, "q"),
        }
    }
}

fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && !name
            .bytes()
            .any(|b| b.is_ascii_whitespace() || b.is_ascii_control())
}

/// A maximal run of adjacent non-space tokens.
struct Field<'a> {
    start: usize,
    text: &'a [u8],
    first: Token<'a>,
    token_count: usize,
}

impl Field<'_> {
    fn as_integer(&self) -> Option<i64> {
        if self.token_count == 1 {
            self.first.to_i64()
        } else {
            None
        }
    }

    fn lossy_text(&self) -> String {
        String::from_utf8_lossy(self.text).into_owned()
    }
}

fn split_fields(line: &[u8]) -> Vec<Field<'_>> {
    let mut fields: Vec<Field<'_>> = Vec::new();
    let mut open = false;

    for token in Lexer::new(line) {
        match token.kind {
            TokenKind::Newline => break,
            TokenKind::Space => open = false,
            _ => {
                // Everything before the first newline is on line 1, where the
                // column is the byte offset plus one.
                let start = token.column - 1;
                let end = start + token.len();

                match fields.last_mut() {
                    Some(field) if open => {
                        field.text = line.get(field.start..end).unwrap_or(field.text);
                        field.token_count += 1;
                    }
                    _ => fields.push(Field {
                        start,
                        text: token.text,
                        first: token,
                        token_count: 1,
                    }),
                }
                open = true;
            }
        }
    }

    fields
}

struct FieldReader<'a> {
    fields: IntoIter<Field<'a>>,
    command: &'static str,
}

impl<'a> FieldReader<'a> {
    fn new(fields: IntoIter<Field<'a>>, command: &'static str) -> Self {
        Self { fields, command }
    }

    fn next(&mut self, field: &'static str) -> Result<Field<'a>, CommandError> {
        self.fields.next().ok_or(CommandError::MissingField {
            command: self.command,
            field,
        })
    }

    fn integer(&mut self, field: &'static str) -> Result<i64, CommandError> {
        let next = self.next(field)?;
        next.as_integer().ok_or_else(|| CommandError::NotAnInteger {
            field,
            text: next.lossy_text(),
        })
    }

    fn size(&mut self, field: &'static str) -> Result<usize, CommandError> {
        let value = self.integer(field)?;
        if value < 0 {
            return Err(CommandError::Negative { field, value });
        }
        usize::try_from(value).map_err(|_| CommandError::OutOfRange { field, value })
    }

    fn request_id(&mut self, field: &'static str) -> Result<RequestId, CommandError> {
        let value = self.integer(field)?;
        RequestId::try_from(value).map_err(|_| CommandError::Negative { field, value })
    }

    fn coordinate(&mut self, field: &'static str) -> Result<i32, CommandError> {
        let value = self.integer(field)?;
        i32::try_from(value).map_err(|_| CommandError::OutOfRange { field, value })
    }

    fn state(&mut self, field: &'static str) -> Result<bool, CommandError> {
        let next = self.next(field)?;
        match next.text {
            b"0" => Ok(false),
            b"1" => Ok(true),
            _ => Err(CommandError::InvalidState {
                field,
                text: next.lossy_text(),
            }),
        }
    }

    fn name(&mut self, field: &'static str) -> Result<String, CommandError> {
        let next = self.next(field)?;
        match std::str::from_utf8(next.text) {
            Ok(name) if is_valid_name(name) => Ok(name.to_string()),
            _ => Err(CommandError::InvalidName {
                name: next.lossy_text(),
            }),
        }
    }

    fn finish(mut self) -> Result<(), CommandError> {
        if self.fields.next().is_some() {
            return Err(CommandError::TrailingFields {
                command: self.command,
            });
        }
        Ok(())
    }
}
