//! Lexical analysis of propositional formulas.
//!
//! The lexer turns a formula string into a flat [`Token`] sequence. Every
//! connective has several accepted spellings, all collapsing into the same
//! token:
//!
//! | connective    | spellings    |
//! |---------------|--------------|
//! | negation      | `¬` `!` `-` `~` |
//! | conjunction   | `∧` `^` `&`  |
//! | disjunction   | `∨` `v` `\|` |
//! | implication   | `→` `->`     |
//! | biconditional | `↔` `<->`    |
//!
//! Multi-character operators are matched greedily before single-character
//! ones: `<->` before `->` before the lone `-` negation alias. Whitespace
//! is stripped before scanning, so it may appear anywhere, including inside
//! a multi-character operator (`p < - > q` is `p <-> q`).
//!
//! # The `v` quirk
//!
//! The bare lowercase `v` is a disjunction alias. Operator aliases are
//! matched before identifier scanning, so no variable name can start with
//! `v` (`victor` lexes as `∨ ictor`) — yet a `v` *inside* an identifier run
//! is absorbed by it, and since whitespace is stripped before scanning,
//! `p v q` collapses to the single variable `pvq`. Disjunction therefore
//! needs `∨`, `|`, or a `v` not adjacent to an identifier, e.g. `(p)v(q)`.
//! This matches the behavior of the original calculator and is kept for
//! compatibility.

use std::fmt;

use log::debug;

use crate::token::Token;

/// An unrecognized character in the input.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct LexError {
    /// The offending character.
    pub character: char,
    /// Character offset of the offending character, counted over the
    /// whitespace-stripped input the lexer scans.
    pub position: usize,
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid character '{}' at position {}",
            self.character, self.position
        )
    }
}

impl std::error::Error for LexError {}

/// A character-level scanner over one formula string.
pub struct Lexer {
    chars: Vec<char>,
    position: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        // Whitespace is stripped up front, so it can sit anywhere, even in
        // the middle of a multi-character operator (`< - >` is `<->`).
        Self {
            chars: input.chars().filter(|c| !c.is_whitespace()).collect(),
            position: 0,
        }
    }

    /// Consume the whole input and produce the token sequence.
    pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }
        debug!("lexed {} tokens", tokens.len());
        Ok(tokens)
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.position + offset).copied()
    }

    /// Scan the next token, or `None` at end of input.
    fn next_token(&mut self) -> Result<Option<Token>, LexError> {
        // The constructor already strips whitespace; skip it here anyway in
        // case the scanner is ever fed an unstripped buffer.
        while matches!(self.peek_at(0), Some(c) if c.is_whitespace()) {
            self.position += 1;
        }

        let current = match self.peek_at(0) {
            Some(c) => c,
            None => return Ok(None),
        };

        // Longest operators first: `<->` would otherwise be misread starting
        // at `<`, and `->` starting at the `-` negation alias.
        if current == '<' && self.peek_at(1) == Some('-') && self.peek_at(2) == Some('>') {
            self.position += 3;
            return Ok(Some(Token::Equiv));
        }
        if current == '-' && self.peek_at(1) == Some('>') {
            self.position += 2;
            return Ok(Some(Token::Imply));
        }

        let token = match current {
            '¬' | '!' | '-' | '~' => Some(Token::Not),
            '∧' | '^' | '&' => Some(Token::And),
            '∨' | 'v' | '|' => Some(Token::Or),
            '→' => Some(Token::Imply),
            '↔' => Some(Token::Equiv),
            '(' => Some(Token::LParen),
            ')' => Some(Token::RParen),
            _ => None,
        };
        if let Some(token) = token {
            self.position += 1;
            return Ok(Some(token));
        }

        if current.is_alphabetic() {
            let start = self.position;
            self.position += 1;
            while matches!(self.peek_at(0), Some(c) if c.is_alphanumeric() || c == '_') {
                self.position += 1;
            }
            let name: String = self.chars[start..self.position].iter().collect();
            return Ok(Some(Token::Variable(name)));
        }

        Err(LexError {
            character: current,
            position: self.position,
        })
    }
}

/// Tokenize a formula string.
///
/// Returns the ordered token sequence, or a [`LexError`] naming the first
/// unrecognized character.
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(input).tokenize()
}
