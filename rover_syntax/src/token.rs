use std::fmt::Display;

/// The enum variants are in SCREAMING_SNAKE_CASE as they technically
/// represent constants, but Rust does not allow const enum variants.
#[allow(nonstandard_style)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum TokenKind {
    // Keywords
    DEPLOY,
    PIT,
    MOVE,
    LEFT,
    RIGHT,
    REPORT,
    // Comma separated argument
    ARG,
}

impl TokenKind {
    /// Keywords are case-sensitive.
    pub fn from_keyword(kw: &str) -> Option<Self> {
        let token = match kw {
            "DEPLOY" => Self::DEPLOY,
            "PIT" => Self::PIT,
            "MOVE" => Self::MOVE,
            "LEFT" => Self::LEFT,
            "RIGHT" => Self::RIGHT,
            "REPORT" => Self::REPORT,
            _ => return None,
        };
        Some(token)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub line: usize,
    pub lexeme: String,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.lexeme)
    }
}

impl Token {
    pub fn new(kind: TokenKind, line: usize, lexeme: String) -> Self {
        Self { kind, line, lexeme }
    }
}
