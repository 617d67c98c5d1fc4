//! Exhaustive truth tables.
//!
//! [`Expr::truth_table`] sweeps every interpretation of an expression's
//! variables in the canonical enumeration order and records the evaluated
//! result of each. Generation is O(2^n) in time and space for n variables;
//! callers bound n themselves.

use std::fmt;

use log::debug;

use crate::expr::Expr;
use crate::interp::{all_interpretations, Interp};
use crate::types::Var;

fn tf(value: bool) -> &'static str {
    if value {
        "T"
    } else {
        "F"
    }
}

/// The truth table of an expression.
///
/// Three parallel, index-aligned sequences: the column variables (in the
/// expression's first-occurrence order), one interpretation per row (in the
/// canonical enumeration order), and the evaluated result of each row.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TruthTable {
    variables: Vec<Var>,
    interpretations: Vec<Interp>,
    values: Vec<bool>,
}

impl TruthTable {
    /// Returns the column variables.
    pub fn variables(&self) -> &[Var] {
        &self.variables
    }

    /// Returns the row interpretations.
    pub fn interpretations(&self) -> &[Interp] {
        &self.interpretations
    }

    /// Returns the evaluated result of each row.
    pub fn values(&self) -> &[bool] {
        &self.values
    }

    /// Returns the number of rows (`2^n` for `n` variables).
    pub fn num_rows(&self) -> usize {
        self.values.len()
    }

    /// Iterates over `(interpretation, value)` rows in order.
    pub fn rows(&self) -> impl Iterator<Item = (&Interp, bool)> {
        self.interpretations.iter().zip(self.values.iter().copied())
    }
}

impl fmt::Display for TruthTable {
    /// Renders the table: one header line with the variable names, a dashed
    /// separator, and one row per interpretation listing each variable's
    /// value followed by the expression's result, using the same `T`/`F`
    /// literals as the infix rendering of constants.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for var in &self.variables {
            write!(f, "{}\t", var)?;
        }
        writeln!(f, "|")?;
        writeln!(f, "{}", "----".repeat(self.variables.len() + 1))?;
        for (interp, value) in self.rows() {
            for var in &self.variables {
                let bound = interp.get(var).expect("table rows bind every column variable");
                write!(f, "{}\t", tf(bound))?;
            }
            writeln!(f, "|\t{}", tf(value))?;
        }
        Ok(())
    }
}

impl Expr {
    /// Builds the exhaustive truth table of this expression.
    ///
    /// Columns are the expression's variables in first-occurrence order;
    /// rows are all `2^n` interpretations in the canonical enumeration
    /// order, each paired with the evaluated result.
    pub fn truth_table(&self) -> TruthTable {
        let variables = self.variables();
        let interpretations = all_interpretations(&variables);
        debug!(
            "truth_table({}): {} variables, {} rows",
            self,
            variables.len(),
            interpretations.len()
        );
        let values = interpretations
            .iter()
            .map(|interp| {
                self.eval(interp).expect("enumerated interpretations bind every variable")
            })
            .collect();
        TruthTable {
            variables,
            interpretations,
            values,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    #[test]
    fn test_row_count() {
        let p = Expr::var("p");
        let q = Expr::var("q");
        let r = Expr::var("r");
        assert_eq!(Expr::constant(true).truth_table().num_rows(), 1);
        assert_eq!(p.clone().truth_table().num_rows(), 2);
        assert_eq!(Expr::and(p.clone(), q.clone()).truth_table().num_rows(), 4);
        assert_eq!(
            Expr::or(Expr::and(p, q), r).truth_table().num_rows(),
            8
        );
    }

    #[test]
    fn test_rows_are_index_aligned() {
        let f = Expr::implies(Expr::var("p"), Expr::iff(Expr::var("q"), Expr::var("r")));
        let table = f.truth_table();
        assert_eq!(table.interpretations().len(), table.values().len());
        for (i, interp) in table.interpretations().iter().enumerate() {
            assert_eq!(f.eval(interp), Ok(table.values()[i]));
        }
    }

    #[test]
    fn test_columns_follow_first_occurrence_order() {
        let f = Expr::and(Expr::var("q"), Expr::var("p"));
        let table = f.truth_table();
        assert_eq!(table.variables(), &[Var::new("q"), Var::new("p")]);
    }

    #[test]
    fn test_and_table_values() {
        let f = Expr::and(Expr::var("p"), Expr::var("q"));
        let table = f.truth_table();
        // Canonical order: FF, FT, TF, TT.
        assert_eq!(table.values(), &[false, false, false, true]);
    }

    #[test]
    fn test_constant_table() {
        let table = Expr::constant(false).truth_table();
        assert!(table.variables().is_empty());
        assert_eq!(table.values(), &[false]);
        assert_eq!(table.interpretations(), &[Interp::new()]);
    }

    #[test]
    fn test_display_format() {
        let f = Expr::and(Expr::var("p"), Expr::var("q"));
        let expected = "p\tq\t|\n\
                        ------------\n\
                        F\tF\t|\tF\n\
                        F\tT\t|\tF\n\
                        T\tF\t|\tF\n\
                        T\tT\t|\tT\n";
        assert_eq!(f.truth_table().to_string(), expected);
    }

    #[test]
    fn test_tautology_table() {
        let p = Expr::var("p");
        let f = Expr::or(p.clone(), Expr::not(p));
        assert!(f.truth_table().values().iter().all(|&v| v));
    }
}
