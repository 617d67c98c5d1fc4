//! Recursive evaluation of expressions under an interpretation.

use crate::expr::Expr;
use crate::interp::{Interp, UnboundVariableError};

impl Expr {
    /// Evaluates the expression under the given interpretation.
    ///
    /// The interpretation must bind every variable reachable from this
    /// expression; the first missing binding is returned as an
    /// [`UnboundVariableError`].
    ///
    /// Both operands of a binary connective are evaluated before their values
    /// are combined, so an unbound variable in the right operand is reported
    /// even when the left operand already decides the result.
    ///
    /// # Examples
    ///
    /// ```
    /// use boolexpr_rs::expr::Expr;
    /// use boolexpr_rs::interp::Interp;
    ///
    /// let f = Expr::implies(Expr::constant(true), Expr::constant(false));
    /// assert_eq!(f.eval(&Interp::new()), Ok(false));
    /// ```
    pub fn eval(&self, interp: &Interp) -> Result<bool, UnboundVariableError> {
        match self {
            Expr::Const(value) => Ok(*value),
            Expr::Var(var) => interp.lookup(var),
            Expr::Not(operand) => Ok(!operand.eval(interp)?),
            Expr::And(lhs, rhs) => {
                let lhs = lhs.eval(interp)?;
                let rhs = rhs.eval(interp)?;
                Ok(lhs && rhs)
            }
            Expr::Or(lhs, rhs) => {
                let lhs = lhs.eval(interp)?;
                let rhs = rhs.eval(interp)?;
                Ok(lhs || rhs)
            }
            Expr::Implies(antecedent, consequent) => {
                let antecedent = antecedent.eval(interp)?;
                let consequent = consequent.eval(interp)?;
                Ok(!antecedent || consequent)
            }
            Expr::Iff(lhs, rhs) => {
                let lhs = lhs.eval(interp)?;
                let rhs = rhs.eval(interp)?;
                Ok(lhs == rhs)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::types::Var;

    fn empty() -> Interp {
        Interp::new()
    }

    #[test]
    fn test_eval_constants() {
        assert_eq!(Expr::constant(true).eval(&empty()), Ok(true));
        assert_eq!(Expr::constant(false).eval(&empty()), Ok(false));
    }

    #[test]
    fn test_eval_variable() {
        let interp: Interp = [(Var::new("p"), true)].into_iter().collect();
        assert_eq!(Expr::var("p").eval(&interp), Ok(true));
    }

    #[test]
    fn test_eval_unbound_variable() {
        let err = Expr::var("p").eval(&empty()).unwrap_err();
        assert_eq!(err.var, Var::new("p"));
    }

    #[test]
    fn test_eval_not() {
        for value in [false, true] {
            let f = Expr::not(Expr::constant(value));
            assert_eq!(f.eval(&empty()), Ok(!value));
        }
    }

    #[test]
    fn test_eval_and() {
        for lhs in [false, true] {
            for rhs in [false, true] {
                let f = Expr::and(Expr::constant(lhs), Expr::constant(rhs));
                assert_eq!(f.eval(&empty()), Ok(lhs && rhs));
            }
        }
    }

    #[test]
    fn test_eval_or() {
        for lhs in [false, true] {
            for rhs in [false, true] {
                let f = Expr::or(Expr::constant(lhs), Expr::constant(rhs));
                assert_eq!(f.eval(&empty()), Ok(lhs || rhs));
            }
        }
    }

    #[test]
    fn test_eval_implies() {
        for lhs in [false, true] {
            for rhs in [false, true] {
                let f = Expr::implies(Expr::constant(lhs), Expr::constant(rhs));
                assert_eq!(f.eval(&empty()), Ok(!lhs || rhs));
            }
        }
    }

    #[test]
    fn test_eval_iff() {
        for lhs in [false, true] {
            for rhs in [false, true] {
                let f = Expr::iff(Expr::constant(lhs), Expr::constant(rhs));
                assert_eq!(f.eval(&empty()), Ok(lhs == rhs));
            }
        }
    }

    #[test]
    fn test_eval_does_not_short_circuit() {
        // The left operand decides the result, but the unbound variable on
        // the right must still surface as an error.
        let f = Expr::and(Expr::constant(false), Expr::var("x"));
        assert!(f.eval(&empty()).is_err());

        let g = Expr::or(Expr::constant(true), Expr::var("x"));
        assert!(g.eval(&empty()).is_err());

        let h = Expr::implies(Expr::constant(false), Expr::var("x"));
        assert!(h.eval(&empty()).is_err());
    }

    #[test]
    fn test_eval_nested() {
        // (p & ~q) | (p <=> q)
        let f = Expr::or(
            Expr::and(Expr::var("p"), Expr::not(Expr::var("q"))),
            Expr::iff(Expr::var("p"), Expr::var("q")),
        );
        let interp: Interp =
            [(Var::new("p"), true), (Var::new("q"), false)].into_iter().collect();
        assert_eq!(f.eval(&interp), Ok(true));

        let interp: Interp =
            [(Var::new("p"), false), (Var::new("q"), true)].into_iter().collect();
        assert_eq!(f.eval(&interp), Ok(false));
    }
}
