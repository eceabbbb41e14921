use super::token::{Token, TokenKind};

fn is_digit(c: u8) -> bool {
    c.is_ascii_digit()
}

fn is_non_digit(c: u8) -> bool {
    c.is_ascii_alphabetic() || c == b'_'
}

fn is_space(c: u8) -> bool {
    c == b' ' || c == b'\t'
}

/// Splits a header or command line into tokens.
///
/// Recognition order is identifier, whitespace run, newline, integer and
/// finally a single-byte symbol. The symbol fallback means every call to
/// [`scan`](Lexer::scan) on a non-empty input consumes at least one byte.
pub struct Lexer<'a> {
    input: &'a [u8],
    offset: usize,
    line: usize,
    column: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        Self {
            input,
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    pub fn at_end(&self) -> bool {
        self.offset >= self.input.len()
    }

    pub fn remaining(&self) -> usize {
        self.input.len() - self.offset
    }

    /// Produces the next token, or `None` once the input is exhausted.
    pub fn scan(&mut self) -> Option<Token<'a>> {
        if self.at_end() {
            return None;
        }

        self.scan_identifier()
            .or_else(|| self.scan_space())
            .or_else(|| self.scan_newline())
            .or_else(|| self.scan_integer())
            .or_else(|| self.produce(TokenKind::Symbol, 1))
    }

    /// Tokenizes a whole line, including space and newline tokens.
    pub fn scan_all(input: &'a [u8]) -> Vec<Token<'a>> {
        Lexer::new(input).collect()
    }

    fn scan_identifier(&mut self) -> Option<Token<'a>> {
        if !is_non_digit(self.peek(0)?) {
            return None;
        }

        let mut length = 1;
        while let Some(c) = self.peek(length) {
            if !is_non_digit(c) && !is_digit(c) {
                break;
            }
            length += 1;
        }

        self.produce(TokenKind::Id, length)
    }

    fn scan_space(&mut self) -> Option<Token<'a>> {
        let mut length = 0;
        while self.peek(length).is_some_and(is_space) {
            length += 1;
        }

        if length == 0 {
            return None;
        }
        self.produce(TokenKind::Space, length)
    }

    fn scan_newline(&mut self) -> Option<Token<'a>> {
        match (self.peek(0)?, self.peek(1)) {
            (b'\n', _) => self.produce(TokenKind::Newline, 1),
            (b'\r', Some(b'\n')) => self.produce(TokenKind::Newline, 2),
            (b'\r', _) => self.produce(TokenKind::Newline, 1),
            _ => None,
        }
    }

    fn scan_integer(&mut self) -> Option<Token<'a>> {
        let mut length = match (self.peek(0)?, self.peek(1)) {
            (c, _) if is_digit(c) => 1,
            (b'-', Some(c)) if is_digit(c) => 2,
            _ => return None,
        };

        while self.peek(length).is_some_and(is_digit) {
            length += 1;
        }

        self.produce(TokenKind::Int, length)
    }

    fn peek(&self, offset: usize) -> Option<u8> {
        self.input.get(self.offset + offset).copied()
    }

    fn produce(&mut self, kind: TokenKind, length: usize) -> Option<Token<'a>> {
        let end = self.offset.checked_add(length)?;
        let text = self.input.get(self.offset..end)?;

        let token = Token {
            kind,
            text,
            line: self.line,
            column: self.column,
        };

        self.offset = end;
        if kind == TokenKind::Newline {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += length;
        }

        Some(token)
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.scan()
    }
}
