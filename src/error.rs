//! The error boundary of the crate.
//!
//! Lexing and parsing report recoverable, caller-visible errors; a failed
//! formula leaves no state behind, so the caller can simply try the next
//! one. Contract violations (evaluating with an incomplete assignment,
//! building a table over too many variables) panic instead.

use std::fmt;

use crate::lexer::LexError;
use crate::parser::ParseError;

/// Any error produced while turning a formula string into a tree.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Error {
    /// The input contained an unrecognized character.
    Lex(LexError),
    /// The token sequence did not form a well-formed formula.
    Parse(ParseError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Lex(e) => write!(f, "{}", e),
            Error::Parse(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Lex(e) => Some(e),
            Error::Parse(e) => Some(e),
        }
    }
}

impl From<LexError> for Error {
    fn from(e: LexError) -> Self {
        Error::Lex(e)
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Error::Parse(e)
    }
}
