use crate::{
    error::{Error, ErrorMsg},
    token::{Token, TokenKind},
};

/// Splits a single command line into a keyword token
/// followed by zero or more argument tokens.
#[derive(Debug)]
pub struct Lexer<'a> {
    source: &'a str,
    line: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str, line: usize) -> Self {
        Self { source, line }
    }

    pub fn lex_all(self) -> Result<Vec<Token>, Error> {
        let source = self.source.trim();
        // The keyword ends at the first whitespace run
        let (keyword, rest) = match source.split_once(char::is_whitespace) {
            Some((keyword, rest)) => (keyword, Some(rest.trim_start())),
            None => (source, None),
        };
        let Some(kind) = TokenKind::from_keyword(keyword) else {
            return Err(self.error(ErrorMsg::UnknownCommand, keyword));
        };

        let mut tokens = vec![self.make_token(kind, keyword)];
        if let Some(args) = rest {
            tokens.extend(
                args.split(',')
                    .map(|arg| self.make_token(TokenKind::ARG, arg)),
            );
        }
        Ok(tokens)
    }

    fn make_token(&self, kind: TokenKind, lexeme: &str) -> Token {
        Token::new(kind, self.line, lexeme.to_string())
    }

    fn error(&self, msg: ErrorMsg, lexeme: &str) -> Error {
        format!("Lex error at line {}: {} {:?}", self.line + 1, msg, lexeme)
    }
}
