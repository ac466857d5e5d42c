//! # truthtable-rs: propositional truth tables in Rust
//!
//! **`truthtable-rs`** parses propositional-logic formulas written with
//! ASCII or Unicode operator symbols and prints their full truth table over
//! all variable assignments.
//!
//! ## Pipeline
//!
//! Text is tokenized, parsed into an immutable expression tree by recursive
//! descent (respecting operator precedence and associativity), and the tree
//! is evaluated once per assignment while the table generator enumerates all
//! `2^n` assignments of the `n` distinct variables.
//!
//! ## Operators
//!
//! From loosest to tightest binding: biconditional `↔`/`<->`, implication
//! `→`/`->`, disjunction `∨`/`v`/`|`, conjunction `∧`/`^`/`&`, and prefix
//! negation `¬`/`!`/`-`/`~`. Binary operators are left-associative;
//! parentheses group as usual.
//!
//! ## Quick Start
//!
//! ```rust
//! use truthtable_rs::{parse, TruthTable};
//!
//! let expr = parse("p -> q")?;
//! let table = TruthTable::build(&expr);
//!
//! assert_eq!(table.variables(), ["p", "q"]);
//! assert_eq!(table.rows().len(), 4);
//! print!("{}", table);
//! // p q | Resultado
//! // F F | V
//! // F V | V
//! // V F | F
//! // V V | V
//! # Ok::<(), truthtable_rs::Error>(())
//! ```
//!
//! ## Core Components
//!
//! - **[`lexer`]**: formula text to [`Token`] sequence.
//! - **[`parser`]**: token sequence to [`Expr`] tree.
//! - **[`eval`]**: tree evaluation under an [`Assignment`].
//! - **[`table`]**: exhaustive enumeration into a printable [`TruthTable`].

pub mod error;
pub mod eval;
pub mod expr;
pub mod lexer;
pub mod parser;
pub mod table;
pub mod token;

pub use error::Error;
pub use eval::Assignment;
pub use expr::{BinaryOp, Expr};
pub use lexer::{tokenize, LexError};
pub use parser::ParseError;
pub use table::{Row, TruthTable, MAX_VARIABLES};
pub use token::Token;

/// Parse a formula string into an expression tree.
///
/// Chains [`lexer::tokenize`] and [`parser::parse`]; either failure is
/// reported as an [`Error`] with a human-readable message.
pub fn parse(input: &str) -> Result<Expr, Error> {
    let tokens = lexer::tokenize(input)?;
    let expr = parser::parse(&tokens)?;
    Ok(expr)
}
