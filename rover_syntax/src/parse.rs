use std::{iter::Peekable, slice::Iter};

use crate::{
    ast::{Command, Direction, Position},
    error::{Error, ErrorMsg},
    token::{Token, TokenKind},
};

#[derive(Debug)]
pub struct Parser<'a> {
    stream: Peekable<Iter<'a, Token>>,
}

impl<'a> Parser<'a> {
    pub fn new(stream: &'a [Token]) -> Self {
        Self {
            stream: stream.iter().peekable(),
        }
    }

    /// Parses the tokens of one line into a command. Every
    /// argument must be consumed for the command to be valid.
    pub fn parse(mut self) -> Result<Command, Error> {
        let Some(keyword) = self.advance() else {
            return Err(Self::eof_error(ErrorMsg::UnexpectedToken));
        };
        let command = match keyword.kind {
            TokenKind::DEPLOY => self.parse_deploy(keyword)?,
            TokenKind::PIT => Command::Pit(self.parse_position(keyword)?),
            TokenKind::MOVE => Command::Move,
            TokenKind::LEFT => Command::Left,
            TokenKind::RIGHT => Command::Right,
            TokenKind::REPORT => Command::Report,
            TokenKind::ARG => return Err(Self::error(keyword, ErrorMsg::UnexpectedToken)),
        };
        if let Some(&t) = self.stream.peek() {
            return Err(Self::error(t, ErrorMsg::TooManyArgs));
        }
        Ok(command)
    }

    fn parse_deploy(&mut self, keyword: &Token) -> Result<Command, Error> {
        let position = self.parse_position(keyword)?;
        let arg = self.advance_or_err(keyword)?;
        let direction = Direction::from_name(&arg.lexeme)
            .ok_or_else(|| Self::error(arg, ErrorMsg::InvalidDirection))?;
        Ok(Command::Deploy {
            position,
            direction,
        })
    }

    fn parse_position(&mut self, keyword: &Token) -> Result<Position, Error> {
        let x = self.parse_coordinate(keyword)?;
        let y = self.parse_coordinate(keyword)?;
        Ok(Position::new(x, y))
    }

    fn parse_coordinate(&mut self, keyword: &Token) -> Result<i32, Error> {
        let arg = self.advance_or_err(keyword)?;
        arg.lexeme
            .parse()
            .map_err(|_| Self::error(arg, ErrorMsg::InvalidCoordinate))
    }

    fn advance(&mut self) -> Option<&'a Token> {
        self.stream.next()
    }

    /// Consumes the next argument, reporting the
    /// command keyword when the arguments run out.
    fn advance_or_err(&mut self, keyword: &Token) -> Result<&'a Token, Error> {
        match self.advance() {
            Some(t) if t.kind == TokenKind::ARG => Ok(t),
            Some(t) => Err(Self::error(t, ErrorMsg::UnexpectedToken)),
            None => Err(Self::error(keyword, ErrorMsg::MissingArgs)),
        }
    }

    fn error(token: &Token, msg: ErrorMsg) -> Error {
        format!("Parse error at line {}: {} {:?}", token.line + 1, msg, token.lexeme)
    }

    fn eof_error(msg: ErrorMsg) -> Error {
        format!("Parse error: {} {}", msg, ErrorMsg::EndOfStream)
    }
}
