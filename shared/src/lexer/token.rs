use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Id,
    Int,
    /// Part of the token vocabulary, but neither wire grammar has fractional
    /// fields so the lexer never produces it.
    Float,
    Space,
    Newline,
    Symbol,
}

/// A slice of an input line together with its classification and its
/// 1-based position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a [u8],
    pub line: usize,
    pub column: usize,
}

impl<'a> Token<'a> {
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    /// The token text, if it is valid UTF-8. Every token kind except
    /// `Symbol` is ASCII by construction.
    pub fn as_str(&self) -> Option<&'a str> {
        std::str::from_utf8(self.text).ok()
    }

    /// Value of an `Int` token, or `None` for any other kind or when the
    /// value does not fit in an `i64`.
    pub fn to_i64(&self) -> Option<i64> {
        if self.kind != TokenKind::Int {
            return None;
        }
        self.as_str()?.parse().ok()
    }
}

impl PartialEq<str> for Token<'_> {
    fn eq(&self, other: &str) -> bool {
        self.text == other.as_bytes()
    }
}

impl PartialEq<&str> for Token<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.text == other.as_bytes()
    }
}

impl PartialEq<TokenKind> for Token<'_> {
    fn eq(&self, other: &TokenKind) -> bool {
        self.kind == *other
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(self.text))
    }
}
