//! Exhaustive truth-table generation.
//!
//! For a formula over `n` distinct variables the generator enumerates all
//! `2^n` assignments and evaluates the formula once per row. Enumeration is
//! O(2^n · s) for tree size `s`, so the variable count is capped at
//! [`MAX_VARIABLES`].

use std::fmt;

use log::debug;

use crate::eval::Assignment;
use crate::expr::Expr;

/// Upper bound on distinct variables per formula (2^20 rows).
pub const MAX_VARIABLES: usize = 20;

/// One row of a truth table: the variable values and the formula's result.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Row {
    values: Vec<bool>,
    result: bool,
}

impl Row {
    /// Variable values, in the table's column order.
    pub fn values(&self) -> &[bool] {
        &self.values
    }

    /// The formula's result under this row's assignment.
    pub fn result(&self) -> bool {
        self.result
    }
}

/// A fully enumerated truth table.
///
/// Columns follow the order of first appearance of the variables in the
/// formula. Rows follow the row index `i = 0..2^n`: the variable in column
/// `j` is true iff bit `n-1-j` of `i` is set, so the first row is all-false,
/// the last row is all-true, and the leftmost column changes slowest.
#[derive(Debug, Clone)]
pub struct TruthTable {
    variables: Vec<String>,
    rows: Vec<Row>,
}

impl TruthTable {
    /// Enumerate the full truth table of `expr`.
    ///
    /// # Panics
    ///
    /// Panics if the formula has more than [`MAX_VARIABLES`] distinct
    /// variables.
    pub fn build(expr: &Expr) -> Self {
        let variables = expr.variables();
        let n = variables.len();
        assert!(
            n <= MAX_VARIABLES,
            "Too many distinct variables: {} (max {})",
            n,
            MAX_VARIABLES
        );

        let num_rows = 1u64 << n;
        debug!("enumerating {} rows over {} variables", num_rows, n);

        let mut rows = Vec::with_capacity(num_rows as usize);
        for i in 0..num_rows {
            let values: Vec<bool> = (0..n).map(|j| i & (1 << (n - 1 - j)) != 0).collect();
            let assignment: Assignment = variables
                .iter()
                .cloned()
                .zip(values.iter().copied())
                .collect();
            let result = expr.eval(&assignment);
            rows.push(Row { values, result });
        }

        Self { variables, rows }
    }

    /// Column headers, in first-appearance order.
    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    /// All `2^n` rows, in enumeration order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// The assignment behind row `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not a valid row index (`0..2^n`).
    pub fn assignment(&self, index: usize) -> Assignment {
        self.variables
            .iter()
            .cloned()
            .zip(self.rows[index].values.iter().copied())
            .collect()
    }

    /// True on every row.
    pub fn is_tautology(&self) -> bool {
        self.rows.iter().all(|row| row.result)
    }

    /// False on every row.
    pub fn is_contradiction(&self) -> bool {
        self.rows.iter().all(|row| !row.result)
    }

    /// True on at least one row.
    pub fn is_satisfiable(&self) -> bool {
        self.rows.iter().any(|row| row.result)
    }
}

fn letter(value: bool) -> &'static str {
    if value {
        "V"
    } else {
        "F"
    }
}

impl fmt::Display for TruthTable {
    /// The original calculator's format: space-joined headers, then
    /// `" | Resultado"`, then one `V`/`F` row per assignment.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} | Resultado", self.variables.join(" "))?;
        for row in &self.rows {
            let values: Vec<&str> = row.values.iter().map(|&v| letter(v)).collect();
            writeln!(f, "{} | {}", values.join(" "), letter(row.result))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    use crate::lexer::tokenize;
    use crate::parser::parse;

    fn table_for(input: &str) -> TruthTable {
        let expr = parse(&tokenize(input).unwrap()).unwrap();
        TruthTable::build(&expr)
    }

    #[test]
    fn test_row_count() {
        assert_eq!(table_for("p").rows().len(), 2);
        assert_eq!(table_for("p^q").rows().len(), 4);
        assert_eq!(table_for("a|b|c").rows().len(), 8);
        // Repeated variables do not add rows.
        assert_eq!(table_for("p ^ p ^ p").rows().len(), 2);
    }

    #[test]
    fn test_column_order_is_first_appearance() {
        assert_eq!(table_for("q & p | q").variables(), ["q", "p"]);
    }

    #[test]
    fn test_row_enumeration_order() {
        // Row 0 is all-false, the last row is all-true, and the leftmost
        // column changes slowest.
        let table = table_for("p^q");
        let values: Vec<&[bool]> = table.rows().iter().map(|r| r.values()).collect();
        assert_eq!(
            values,
            vec![
                &[false, false][..],
                &[false, true][..],
                &[true, false][..],
                &[true, true][..],
            ]
        );
    }

    #[test]
    fn test_conjunction_results() {
        let table = table_for("p^q");
        let results: Vec<bool> = table.rows().iter().map(|r| r.result()).collect();
        assert_eq!(results, vec![false, false, false, true]);
    }

    #[test]
    fn test_implication_results() {
        let table = table_for("p->q");
        let results: Vec<bool> = table.rows().iter().map(|r| r.result()).collect();
        // (F,F)→V, (F,V)→V, (V,F)→F, (V,V)→V
        assert_eq!(results, vec![true, true, false, true]);
    }

    #[test]
    fn test_display_format() {
        let table = table_for("p^q");
        let expected = "\
p q | Resultado
F F | F
F V | F
V F | F
V V | V
";
        assert_eq!(table.to_string(), expected);
    }

    #[test]
    fn test_display_single_variable() {
        let expected = "\
p | Resultado
F | F
V | V
";
        assert_eq!(table_for("p").to_string(), expected);
    }

    #[test]
    fn test_assignment_accessor() {
        let table = table_for("p^q");
        let assignment = table.assignment(2);
        assert_eq!(assignment["p"], true);
        assert_eq!(assignment["q"], false);
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn test_assignment_out_of_range() {
        table_for("p^q").assignment(4);
    }

    #[test]
    fn test_classification() {
        assert!(table_for("p | !p").is_tautology());
        assert!(table_for("p & !p").is_contradiction());
        assert!(table_for("p & q").is_satisfiable());
        assert!(!table_for("p & q").is_tautology());
        assert!(!table_for("p & !p").is_satisfiable());
    }

    #[test]
    fn test_tautology_excluded_middle_with_implication() {
        assert!(table_for("(p -> q) <-> (!p | q)").is_tautology());
    }

    #[test]
    #[should_panic(expected = "Too many distinct variables")]
    fn test_variable_cap() {
        // 21 distinct single-letter variables chained with ∧.
        let names: Vec<String> = (0..21).map(|i| format!("x{}", i)).collect();
        let formula = names.join(" & ");
        let expr = parse(&tokenize(&formula).unwrap()).unwrap();
        TruthTable::build(&expr);
    }
}
