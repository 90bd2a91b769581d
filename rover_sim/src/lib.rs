pub mod config;
pub mod error;
pub mod interpret;
pub mod robot;
pub mod zone;

use std::io::BufRead;

use crate::error::Exception;
use interpret::Interpreter;
use log::trace;
use rover_syntax::{ast::Command, error::Error, lex::Lexer, parse::Parser};

/// Lexes and parses a single line. `line` is the zero-based
/// index of the line in its input and is only used for errors.
pub fn parse_line(source: &str, line: usize) -> Result<Command, Error> {
    trace!("Lexing {source:?}");
    let tokens = Lexer::new(source, line).lex_all()?;
    trace!("Parsing {tokens:?}");
    Parser::new(&tokens).parse()
}

/// Streams lines from `reader` through the interpreter, handing every
/// output line to `emit` as soon as it is produced. Lines are read one at
/// a time, so input of any length runs in constant memory.
pub fn run<R, F>(
    mut reader: R,
    interpreter: &mut Interpreter,
    mut emit: F,
) -> Result<(), Exception>
where
    R: BufRead,
    F: FnMut(String) -> std::io::Result<()>,
{
    interpreter.start_session();
    let mut buf = Vec::default();
    loop {
        buf.clear();
        let n = reader.read_until(b'\n', &mut buf).map_err(Exception::Read)?;
        // Zero bytes read means the input is exhausted
        if n == 0 {
            break;
        }
        let line = String::from_utf8_lossy(&buf);
        if let Some(output) = interpreter.interpret(&line) {
            emit(output).map_err(Exception::Write)?;
        }
    }
    Ok(())
}
