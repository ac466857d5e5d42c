//! The expression tree for propositional formulas.
//!
//! A formula is a finite tree of [`Expr`] nodes. Every child is exclusively
//! owned by its parent (boxed, never shared), so the tree is destroyed by
//! plain structural recursion and can be re-read any number of times during
//! table generation.

use std::fmt;

/// A binary connective.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum BinaryOp {
    /// Conjunction (∧).
    And,
    /// Disjunction (∨).
    Or,
    /// Implication (→).
    Imply,
    /// Biconditional (↔).
    Equiv,
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BinaryOp::And => write!(f, "∧"),
            BinaryOp::Or => write!(f, "∨"),
            BinaryOp::Imply => write!(f, "→"),
            BinaryOp::Equiv => write!(f, "↔"),
        }
    }
}

/// A propositional formula.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Expr {
    /// A variable reference.
    Var(String),
    /// Negation of a sub-formula.
    Not(Box<Expr>),
    /// A binary connective applied to two sub-formulas.
    Binary(BinaryOp, Box<Expr>, Box<Expr>),
}

impl Expr {
    /// A variable leaf.
    pub fn var(name: impl Into<String>) -> Self {
        Expr::Var(name.into())
    }

    /// Negation of `inner`.
    pub fn not(inner: Self) -> Self {
        Expr::Not(Box::new(inner))
    }

    /// `lhs ∧ rhs`.
    pub fn and(lhs: Self, rhs: Self) -> Self {
        Expr::Binary(BinaryOp::And, Box::new(lhs), Box::new(rhs))
    }

    /// `lhs ∨ rhs`.
    pub fn or(lhs: Self, rhs: Self) -> Self {
        Expr::Binary(BinaryOp::Or, Box::new(lhs), Box::new(rhs))
    }

    /// `lhs → rhs`.
    pub fn imply(lhs: Self, rhs: Self) -> Self {
        Expr::Binary(BinaryOp::Imply, Box::new(lhs), Box::new(rhs))
    }

    /// `lhs ↔ rhs`.
    pub fn equiv(lhs: Self, rhs: Self) -> Self {
        Expr::Binary(BinaryOp::Equiv, Box::new(lhs), Box::new(rhs))
    }

    /// Size of the expression tree (number of nodes).
    pub fn size(&self) -> usize {
        match self {
            Expr::Var(_) => 1,
            Expr::Not(e) => 1 + e.size(),
            Expr::Binary(_, l, r) => 1 + l.size() + r.size(),
        }
    }

    /// Depth of the expression tree (0 for a lone variable).
    pub fn depth(&self) -> usize {
        match self {
            Expr::Var(_) => 0,
            Expr::Not(e) => 1 + e.depth(),
            Expr::Binary(_, l, r) => 1 + l.depth().max(r.depth()),
        }
    }

    /// Distinct variable names, in order of first appearance.
    ///
    /// This order is load-bearing: it fixes both the column order and the
    /// bit-significance order of the generated truth table.
    pub fn variables(&self) -> Vec<String> {
        let mut names = Vec::new();
        self.collect_variables(&mut names);
        names
    }

    fn collect_variables(&self, names: &mut Vec<String>) {
        match self {
            Expr::Var(name) => {
                if !names.iter().any(|n| n == name) {
                    names.push(name.clone());
                }
            }
            Expr::Not(e) => e.collect_variables(names),
            Expr::Binary(_, l, r) => {
                l.collect_variables(names);
                r.collect_variables(names);
            }
        }
    }
}

impl fmt::Display for Expr {
    /// Fully parenthesized rendering with canonical operator symbols.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Var(name) => write!(f, "{}", name),
            Expr::Not(e) => write!(f, "¬{}", e),
            Expr::Binary(op, l, r) => write!(f, "({} {} {})", l, op, r),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_and_depth() {
        let e = Expr::imply(Expr::and(Expr::var("p"), Expr::var("q")), Expr::var("r"));
        assert_eq!(e.size(), 5);
        assert_eq!(e.depth(), 2);

        assert_eq!(Expr::var("p").size(), 1);
        assert_eq!(Expr::var("p").depth(), 0);
    }

    #[test]
    fn test_variables_first_appearance_order() {
        let e = Expr::or(
            Expr::and(Expr::var("q"), Expr::var("p")),
            Expr::and(Expr::var("p"), Expr::var("r")),
        );
        assert_eq!(e.variables(), vec!["q", "p", "r"]);
    }

    #[test]
    fn test_variables_deduplicated() {
        let e = Expr::and(Expr::var("p"), Expr::not(Expr::var("p")));
        assert_eq!(e.variables(), vec!["p"]);
    }

    #[test]
    fn test_display() {
        let e = Expr::equiv(
            Expr::not(Expr::var("p")),
            Expr::imply(Expr::var("q"), Expr::var("r")),
        );
        assert_eq!(e.to_string(), "(¬p ↔ (q → r))");
    }

    #[test]
    fn test_double_negation_display() {
        let e = Expr::not(Expr::not(Expr::var("p")));
        assert_eq!(e.to_string(), "¬¬p");
    }
}
