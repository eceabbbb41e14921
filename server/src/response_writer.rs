use std::io::Write;

use vision_shared::{RequestId, RGB_CHANNELS};

use crate::error::ResponseWriteError;

/// Writes `rgb buffer <width> <height> <id>\n` followed by the raw payload.
pub struct ResponseWriter<W: Write> {
    output: W,
}

impl<W: Write> ResponseWriter<W> {
    pub fn new(output: W) -> Self {
        Self { output }
    }

    /// Writes one response and flushes. `data` must hold exactly
    /// `width * height * 3` bytes; nothing is written otherwise.
    pub fn write_rgb_buffer(
        &mut self,
        request_id: RequestId,
        width: usize,
        height: usize,
        data: &[u8],
    ) -> Result<(), ResponseWriteError> {
        let expected = width.saturating_mul(height).saturating_mul(RGB_CHANNELS);
        if data.len() != expected {
            return Err(ResponseWriteError::PayloadSizeMismatch {
                expected,
                actual: data.len(),
            });
        }

        writeln!(self.output, "rgb buffer {} {} {}", width, height, request_id)?;
        self.output.write_all(data)?;
        self.output.flush()?;
        Ok(())
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn output_mut(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
