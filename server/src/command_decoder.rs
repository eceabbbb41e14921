use vision_shared::{Command, CommandError};

use crate::error::DecodeError;

/// Default bound on the length of a line still waiting for its terminator.
pub const DEFAULT_MAX_COMMAND_BUFFER_SIZE: usize = 1024 * 1024;

/// Splits a byte stream into command lines and decodes them.
///
/// The grammar is line-delimited, so a malformed line only costs that line:
/// decoding resumes at the next newline. Only the trailing unterminated line
/// is bounded; complete lines are kept until popped however many arrive at
/// once.
#[derive(Debug)]
pub struct CommandDecoder {
    buffer: Vec<u8>,
    max_buffer_size: usize,
}

impl Default for CommandDecoder {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_COMMAND_BUFFER_SIZE)
    }
}

impl CommandDecoder {
    pub fn new(max_buffer_size: usize) -> Self {
        Self {
            buffer: Vec::new(),
            max_buffer_size,
        }
    }

    /// Appends received bytes.
    ///
    /// Fails once the unterminated line would grow past the bound. The
    /// complete lines are still kept and the oversized line is dropped.
    pub fn write(&mut self, bytes: &[u8]) -> Result<(), DecodeError> {
        let (complete, tail) = match bytes.iter().rposition(|&byte| byte == b'\n') {
            Some(last) => bytes.split_at(last + 1),
            None => bytes.split_at(0),
        };

        let carried = if complete.is_empty() {
            self.partial_len()
        } else {
            0
        };

        if carried.saturating_add(tail.len()) > self.max_buffer_size {
            self.buffer.truncate(self.buffer.len() - carried);
            self.buffer.extend_from_slice(complete);
            return Err(DecodeError::BufferOverflow {
                max_buffer_size: self.max_buffer_size,
            });
        }

        self.buffer.extend_from_slice(bytes);
        Ok(())
    }

    // Bytes after the last buffered newline.
    fn partial_len(&self) -> usize {
        self.buffer
            .iter()
            .rev()
            .take_while(|&&byte| byte != b'\n')
            .count()
    }

    /// Pops and decodes the next complete line. Blank lines are skipped.
    /// Returns `None` once no complete line is buffered.
    pub fn next_command(&mut self) -> Option<Result<Command, CommandError>> {
        loop {
            let newline = self.buffer.iter().position(|&byte| byte == b'\n')?;
            let line: Vec<u8> = self.buffer.drain(..=newline).collect();

            if line.iter().all(|byte| byte.is_ascii_whitespace()) {
                continue;
            }
            return Some(Command::decode(&line));
        }
    }

    pub fn buffered_len(&self) -> usize {
        self.buffer.len()
    }

    pub fn max_buffer_size(&self) -> usize {
        self.max_buffer_size
    }
}
