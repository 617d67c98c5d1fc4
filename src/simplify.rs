//! Local algebraic simplification.
//!
//! [`Expr::simplify`] applies a fixed set of local rewrite rules, one pass
//! per node, bottom-up. It is best-effort: the result is logically
//! equivalent but not guaranteed to be a canonical minimal form (for
//! example, `~(T & T)` simplifies to `~T`, not `F`, because the negation
//! rule inspects the operand before it is simplified).

use log::debug;

use crate::expr::Expr;

impl Expr {
    /// Simplifies the expression with local, single-pass-per-node rules.
    ///
    /// For each binary connective, both operands are simplified first; then:
    ///
    /// - `And`: equal operands collapse to one; a `F` operand absorbs to
    ///   `F`; a `T` operand yields the other side.
    /// - `Or`: equal operands collapse to one; a `T` operand absorbs to
    ///   `T`; a `F` operand yields the other side.
    /// - `Implies`: equal operands yield `T`; a `F` antecedent or `T`
    ///   consequent yields `T`; a `T` antecedent yields the consequent; a
    ///   `F` consequent yields the negated antecedent.
    /// - `Iff`: equal operands yield `T`; a `T` operand yields the other
    ///   side; a `F` operand yields the other side negated and simplified.
    /// - `Not`: a double negation simplifies its innermost operand; a
    ///   constant operand folds; otherwise the simplified operand is
    ///   re-wrapped.
    ///
    /// When no rule applies — the simplified operands differ and neither is
    /// a constant — the node is reconstructed from the simplified operands
    /// and returned unchanged in shape. Constants and variables simplify to
    /// themselves.
    pub fn simplify(&self) -> Expr {
        debug!("simplify({})", self);
        match self {
            Expr::Const(_) | Expr::Var(_) => self.clone(),
            Expr::Not(operand) => match operand.as_ref() {
                Expr::Not(inner) => inner.simplify(),
                Expr::Const(value) => Expr::Const(!value),
                _ => Expr::not(operand.simplify()),
            },
            Expr::And(lhs, rhs) => match (lhs.simplify(), rhs.simplify()) {
                (lhs, rhs) if lhs == rhs => lhs,
                (Expr::Const(false), _) | (_, Expr::Const(false)) => Expr::Const(false),
                (Expr::Const(true), rhs) => rhs,
                (lhs, Expr::Const(true)) => lhs,
                (lhs, rhs) => Expr::and(lhs, rhs),
            },
            Expr::Or(lhs, rhs) => match (lhs.simplify(), rhs.simplify()) {
                (lhs, rhs) if lhs == rhs => lhs,
                (Expr::Const(true), _) | (_, Expr::Const(true)) => Expr::Const(true),
                (Expr::Const(false), rhs) => rhs,
                (lhs, Expr::Const(false)) => lhs,
                (lhs, rhs) => Expr::or(lhs, rhs),
            },
            Expr::Implies(antecedent, consequent) => {
                match (antecedent.simplify(), consequent.simplify()) {
                    (lhs, rhs) if lhs == rhs => Expr::Const(true),
                    (Expr::Const(false), _) | (_, Expr::Const(true)) => Expr::Const(true),
                    (Expr::Const(true), rhs) => rhs,
                    (lhs, Expr::Const(false)) => Expr::not(lhs),
                    (lhs, rhs) => Expr::implies(lhs, rhs),
                }
            }
            Expr::Iff(lhs, rhs) => match (lhs.simplify(), rhs.simplify()) {
                (lhs, rhs) if lhs == rhs => Expr::Const(true),
                (Expr::Const(false), other) | (other, Expr::Const(false)) => {
                    Expr::not(other).simplify()
                }
                (Expr::Const(true), other) | (other, Expr::Const(true)) => other,
                (lhs, rhs) => Expr::iff(lhs, rhs),
            },
        }
    }
}
