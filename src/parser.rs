//! Recursive-descent parser for propositional formulas.
//!
//! One method per precedence level, lowest binding first:
//!
//! ```text
//! equiv   := imply ( '↔' imply )*
//! imply   := or    ( '→' or    )*
//! or      := and   ( '∨' and   )*
//! and     := not   ( '∧' not   )*
//! not     := '¬' not | primary
//! primary := '(' equiv ')' | Variable
//! ```
//!
//! Binary levels left-fold, so `a → b → c` parses as `(a → b) → c`.
//! Negation is right-recursive: `¬¬p` is a double-negation node.
//! The whole token sequence must be consumed; a leftover token after the
//! top-level formula is an error.

use std::fmt;

use crate::expr::Expr;
use crate::token::Token;

/// A malformed token sequence.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum ParseError {
    /// A primary expression was expected but the sequence held something
    /// else (or nothing).
    ExpectedExpression(Option<Token>),
    /// An opening parenthesis was never closed.
    ExpectedClosingParen(Option<Token>),
    /// A complete formula was parsed but tokens remain.
    TrailingToken(Token),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::ExpectedExpression(Some(token)) => {
                write!(f, "expected a variable or '(', found '{}'", token)
            }
            ParseError::ExpectedExpression(None) => {
                write!(f, "expected a variable or '(', found end of input")
            }
            ParseError::ExpectedClosingParen(Some(token)) => {
                write!(f, "expected ')', found '{}'", token)
            }
            ParseError::ExpectedClosingParen(None) => {
                write!(f, "expected ')', found end of input")
            }
            ParseError::TrailingToken(token) => {
                write!(f, "unexpected '{}' after the end of the formula", token)
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// A cursor over the token sequence.
pub struct Parser<'a> {
    tokens: &'a [Token],
    position: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    /// Parse the whole sequence into an expression tree.
    pub fn parse(mut self) -> Result<Expr, ParseError> {
        let expr = self.parse_equiv()?;
        match self.peek() {
            None => Ok(expr),
            Some(token) => Err(ParseError::TrailingToken(token.clone())),
        }
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.position)
    }

    /// Consume the next token if it equals `expected`.
    fn eat(&mut self, expected: &Token) -> bool {
        if self.peek() == Some(expected) {
            self.position += 1;
            true
        } else {
            false
        }
    }

    fn parse_equiv(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_imply()?;
        while self.eat(&Token::Equiv) {
            let right = self.parse_imply()?;
            left = Expr::equiv(left, right);
        }
        Ok(left)
    }

    fn parse_imply(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_or()?;
        while self.eat(&Token::Imply) {
            let right = self.parse_or()?;
            left = Expr::imply(left, right);
        }
        Ok(left)
    }

    fn parse_or(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_and()?;
        while self.eat(&Token::Or) {
            let right = self.parse_and()?;
            left = Expr::or(left, right);
        }
        Ok(left)
    }

    fn parse_and(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_not()?;
        while self.eat(&Token::And) {
            let right = self.parse_not()?;
            left = Expr::and(left, right);
        }
        Ok(left)
    }

    fn parse_not(&mut self) -> Result<Expr, ParseError> {
        if self.eat(&Token::Not) {
            let inner = self.parse_not()?;
            Ok(Expr::not(inner))
        } else {
            self.parse_primary()
        }
    }

    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        if self.eat(&Token::LParen) {
            let expr = self.parse_equiv()?;
            if !self.eat(&Token::RParen) {
                return Err(ParseError::ExpectedClosingParen(self.peek().cloned()));
            }
            return Ok(expr);
        }

        match self.peek() {
            Some(Token::Variable(name)) => {
                let expr = Expr::var(name.clone());
                self.position += 1;
                Ok(expr)
            }
            other => Err(ParseError::ExpectedExpression(other.cloned())),
        }
    }
}

/// Parse a token sequence into an expression tree.
///
/// Consumes the entire sequence; returns a [`ParseError`] describing what
/// was expected otherwise.
pub fn parse(tokens: &[Token]) -> Result<Expr, ParseError> {
    Parser::new(tokens).parse()
}
