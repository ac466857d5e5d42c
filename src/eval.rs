//! Truth-functional evaluation of expression trees.

use std::collections::HashMap;

use crate::expr::{BinaryOp, Expr};

/// A mapping from variable names to truth values.
///
/// An assignment must cover every variable of the formula it is evaluated
/// against; the table generator always builds complete assignments.
pub type Assignment = HashMap<String, bool>;

impl BinaryOp {
    /// Apply the connective to already-evaluated operands.
    pub fn apply(self, left: bool, right: bool) -> bool {
        match self {
            BinaryOp::And => left && right,
            BinaryOp::Or => left || right,
            BinaryOp::Imply => !left || right,
            BinaryOp::Equiv => left == right,
        }
    }
}

impl Expr {
    /// Evaluate the formula under the given assignment.
    ///
    /// # Panics
    ///
    /// Panics if the assignment is missing a variable of the formula. That is
    /// a caller contract violation, not a recoverable condition.
    pub fn eval(&self, assignment: &Assignment) -> bool {
        match self {
            Expr::Var(name) => match assignment.get(name) {
                Some(&value) => value,
                None => panic!("no value assigned to variable '{}'", name),
            },
            Expr::Not(e) => !e.eval(assignment),
            Expr::Binary(op, l, r) => {
                // Both sides are always evaluated, left first.
                let left = l.eval(assignment);
                let right = r.eval(assignment);
                op.apply(left, right)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assign(pairs: &[(&str, bool)]) -> Assignment {
        pairs
            .iter()
            .map(|&(name, value)| (name.to_string(), value))
            .collect()
    }

    #[test]
    fn test_variable_roundtrip() {
        let p = Expr::var("p");
        assert!(p.eval(&assign(&[("p", true)])));
        assert!(!p.eval(&assign(&[("p", false)])));
    }

    #[test]
    fn test_negation() {
        let e = Expr::not(Expr::var("p"));
        assert!(!e.eval(&assign(&[("p", true)])));
        assert!(e.eval(&assign(&[("p", false)])));
    }

    #[test]
    fn test_conjunction() {
        for (a, b) in [(true, true), (true, false), (false, true), (false, false)] {
            assert_eq!(BinaryOp::And.apply(a, b), a && b);
        }
    }

    #[test]
    fn test_disjunction() {
        for (a, b) in [(true, true), (true, false), (false, true), (false, false)] {
            assert_eq!(BinaryOp::Or.apply(a, b), a || b);
        }
    }

    #[test]
    fn test_implication_false_only_for_true_false() {
        let e = Expr::imply(Expr::var("a"), Expr::var("b"));
        assert!(e.eval(&assign(&[("a", true), ("b", true)])));
        assert!(!e.eval(&assign(&[("a", true), ("b", false)])));
        assert!(e.eval(&assign(&[("a", false), ("b", true)])));
        assert!(e.eval(&assign(&[("a", false), ("b", false)])));
    }

    #[test]
    fn test_biconditional_true_iff_equal() {
        let e = Expr::equiv(Expr::var("p"), Expr::var("q"));
        for (p, q) in [(true, true), (true, false), (false, true), (false, false)] {
            assert_eq!(e.eval(&assign(&[("p", p), ("q", q)])), p == q);
        }
    }

    #[test]
    fn test_nested_formula() {
        // ¬(p ∧ q) ↔ (¬p ∨ ¬q) on a couple of points.
        let e = Expr::equiv(
            Expr::not(Expr::and(Expr::var("p"), Expr::var("q"))),
            Expr::or(Expr::not(Expr::var("p")), Expr::not(Expr::var("q"))),
        );
        assert!(e.eval(&assign(&[("p", true), ("q", false)])));
        assert!(e.eval(&assign(&[("p", true), ("q", true)])));
    }

    #[test]
    #[should_panic(expected = "no value assigned to variable 'q'")]
    fn test_missing_variable_panics() {
        let e = Expr::and(Expr::var("p"), Expr::var("q"));
        e.eval(&assign(&[("p", true)]));
    }
}
