//! Equivalence-preserving structural rewrites.
//!
//! [`Expr::remove_implications`] eliminates `Implies`/`Iff` nodes;
//! [`Expr::nnf`] additionally pushes negation inward until it applies to
//! atoms only. Both are pure rewrites: no evaluation occurs, and the input
//! tree is never mutated.

use log::debug;

use crate::expr::Expr;

impl Expr {
    /// Rewrites the tree so that no `Implies` or `Iff` nodes remain.
    ///
    /// `A => B` becomes `~A | B`, and `A <=> B` becomes
    /// `(~A | B) & (~B | A)`, with operands rewritten recursively first.
    /// All other variants are rebuilt from their rewritten children.
    /// Logical equivalence is preserved.
    pub fn remove_implications(&self) -> Expr {
        match self {
            Expr::Const(_) | Expr::Var(_) => self.clone(),
            Expr::Not(operand) => Expr::not(operand.remove_implications()),
            Expr::And(lhs, rhs) => {
                Expr::and(lhs.remove_implications(), rhs.remove_implications())
            }
            Expr::Or(lhs, rhs) => {
                Expr::or(lhs.remove_implications(), rhs.remove_implications())
            }
            Expr::Implies(antecedent, consequent) => Expr::or(
                Expr::not(antecedent.remove_implications()),
                consequent.remove_implications(),
            ),
            Expr::Iff(lhs, rhs) => {
                let lhs = lhs.remove_implications();
                let rhs = rhs.remove_implications();
                Expr::and(
                    Expr::or(Expr::not(lhs.clone()), rhs.clone()),
                    Expr::or(Expr::not(rhs), lhs),
                )
            }
        }
    }

    /// Converts the expression to Negation Normal Form.
    ///
    /// The result is logically equivalent, contains no `Implies`/`Iff`
    /// nodes, and applies negation to atoms only: implications are
    /// eliminated first, then double negations are removed and De Morgan
    /// steps push each negation inward. The push recurses into the rewritten
    /// operands, so `e.nnf().is_nnf()` holds for every `e`.
    pub fn nnf(&self) -> Expr {
        debug!("nnf({})", self);
        match self {
            Expr::Const(_) | Expr::Var(_) => self.clone(),
            Expr::And(lhs, rhs) => Expr::and(lhs.nnf(), rhs.nnf()),
            Expr::Or(lhs, rhs) => Expr::or(lhs.nnf(), rhs.nnf()),
            Expr::Implies(_, _) | Expr::Iff(_, _) => self.remove_implications().nnf(),
            Expr::Not(operand) => match operand.as_ref() {
                Expr::Const(_) | Expr::Var(_) => self.clone(),
                Expr::Not(inner) => inner.nnf(),
                Expr::And(lhs, rhs) => Expr::or(
                    Expr::not((**lhs).clone()).nnf(),
                    Expr::not((**rhs).clone()).nnf(),
                ),
                Expr::Or(lhs, rhs) => Expr::and(
                    Expr::not((**lhs).clone()).nnf(),
                    Expr::not((**rhs).clone()).nnf(),
                ),
                Expr::Implies(_, _) | Expr::Iff(_, _) => {
                    Expr::not(operand.remove_implications()).nnf()
                }
            },
        }
    }

    /// Returns `true` if the expression is in Negation Normal Form.
    ///
    /// Constants and variables are in NNF; a negation is in NNF iff its
    /// operand is an atom; conjunctions and disjunctions are in NNF iff both
    /// children are; the mere presence of `Implies` or `Iff` disqualifies.
    pub fn is_nnf(&self) -> bool {
        match self {
            Expr::Const(_) | Expr::Var(_) => true,
            Expr::Not(operand) => operand.is_atom(),
            Expr::And(lhs, rhs) | Expr::Or(lhs, rhs) => lhs.is_nnf() && rhs.is_nnf(),
            Expr::Implies(_, _) | Expr::Iff(_, _) => false,
        }
    }
}
