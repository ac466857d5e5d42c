//! The token vocabulary produced by the lexer and consumed by the parser.

use std::fmt;

/// A single lexical token of a propositional formula.
///
/// Tokens are immutable once produced. All operator aliases recognized by the
/// lexer collapse into one token per connective, so the parser never sees the
/// surface spelling.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Token {
    /// A variable name: a letter followed by letters, digits or underscores.
    Variable(String),
    /// Negation (¬).
    Not,
    /// Conjunction (∧).
    And,
    /// Disjunction (∨).
    Or,
    /// Implication (→).
    Imply,
    /// Biconditional (↔).
    Equiv,
    /// Opening parenthesis.
    LParen,
    /// Closing parenthesis.
    RParen,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Variable(name) => write!(f, "{}", name),
            Token::Not => write!(f, "¬"),
            Token::And => write!(f, "∧"),
            Token::Or => write!(f, "∨"),
            Token::Imply => write!(f, "→"),
            Token::Equiv => write!(f, "↔"),
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
        }
    }
}
