use vision_shared::{Lexer, RequestId, Token, TokenKind, RGB_CHANNELS};

use super::error::HeaderError;

/// A validated `rgb buffer <width> <height> <request_id>` line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResponseHeader {
    pub width: usize,
    pub height: usize,
    pub request_id: RequestId,
}

impl ResponseHeader {
    /// Size of the binary payload following the header line.
    pub fn payload_size(&self) -> usize {
        self.width
            .saturating_mul(self.height)
            .saturating_mul(RGB_CHANNELS)
    }

    /// Validates one header line, terminator included or not.
    ///
    /// Checks run in a fixed order and the first failing one is reported:
    /// literals, field presence, integer syntax, sign, then trailing tokens.
    pub fn parse(line: &[u8]) -> Result<Self, HeaderError> {
        let tokens: Vec<Token<'_>> = Lexer::new(line)
            .take_while(|token| token.kind != TokenKind::Newline)
            .filter(|token| token.kind != TokenKind::Space)
            .collect();

        match tokens.as_slice() {
            [rgb, buffer, ..] if *rgb == "rgb" && *buffer == "buffer" => {}
            _ => return Err(HeaderError::NotRecognizable),
        }

        match tokens.len() {
            2 => return Err(HeaderError::MissingWidth),
            3 => return Err(HeaderError::MissingHeight),
            4 => return Err(HeaderError::MissingRequestId),
            _ => {}
        }

        let width = tokens[2].to_i64().ok_or(HeaderError::WidthNotInteger)?;
        let height = tokens[3].to_i64().ok_or(HeaderError::HeightNotInteger)?;
        let request_id = tokens[4]
            .to_i64()
            .ok_or(HeaderError::RequestIdNotInteger)?;

        if width < 0 {
            return Err(HeaderError::NegativeWidth);
        }
        if height < 0 {
            return Err(HeaderError::NegativeHeight);
        }
        if request_id < 0 {
            return Err(HeaderError::NegativeRequestId);
        }

        if tokens.len() > 5 {
            return Err(HeaderError::TrailingTokens);
        }

        Ok(Self {
            // Sizes past the address space cannot be buffered anyway; the
            // saturated payload size makes the stream overflow.
            width: usize::try_from(width).unwrap_or(usize::MAX),
            height: usize::try_from(height).unwrap_or(usize::MAX),
            request_id: request_id.unsigned_abs(),
        })
    }
}
