use std::fmt::Display;

pub type Error = String;

#[derive(Debug)]
pub enum ErrorMsg {
    // Lex errors
    UnknownCommand,
    // Parse errors
    UnexpectedToken,
    MissingArgs,
    TooManyArgs,
    InvalidCoordinate,
    InvalidDirection,
    // EOF
    EndOfStream,
}

impl Display for ErrorMsg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::UnknownCommand => "unknown command",
            Self::UnexpectedToken => "unexpected token",
            Self::MissingArgs => "missing arguments for",
            Self::TooManyArgs => "too many arguments, found",
            Self::InvalidCoordinate => "invalid coordinate",
            Self::InvalidDirection => "invalid direction",
            Self::EndOfStream => "end of stream",
        })
    }
}
