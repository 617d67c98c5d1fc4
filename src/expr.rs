//! The propositional expression tree.
//!
//! [`Expr`] is a closed sum type with one variant per connective. Every
//! operation over expressions (evaluation, rewriting, rendering) matches
//! exhaustively on it, so adding a connective forces every operation to be
//! updated.
//!
//! Trees are immutable: every transformation returns a new tree and never
//! mutates in place. Structural equality and hashing are derived from the
//! declared fields, so two expressions are equal iff they have the same
//! variant and recursively equal children (constants compare by value,
//! variables by name), and equal expressions hash equal.

use crate::types::Var;

/// A propositional formula.
///
/// Leaves are truth constants and named variables; inner nodes apply a
/// connective to one or two subtrees. Children are boxed, so an `Expr` is a
/// small value regardless of tree depth.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Expr {
    /// A literal truth value.
    Const(bool),
    /// An atomic proposition, identified by name.
    Var(Var),
    /// Negation.
    Not(Box<Expr>),
    /// Conjunction.
    And(Box<Expr>, Box<Expr>),
    /// Disjunction.
    Or(Box<Expr>, Box<Expr>),
    /// Material implication (antecedent, consequent).
    Implies(Box<Expr>, Box<Expr>),
    /// Biconditional.
    Iff(Box<Expr>, Box<Expr>),
}

impl Expr {
    /// Creates a truth constant.
    pub fn constant(value: bool) -> Self {
        Expr::Const(value)
    }

    /// Creates a variable leaf.
    pub fn var(name: impl Into<String>) -> Self {
        Expr::Var(Var::new(name))
    }

    /// Creates the negation of an expression.
    pub fn not(operand: Self) -> Self {
        Expr::Not(Box::new(operand))
    }

    /// Creates the conjunction of two expressions.
    pub fn and(lhs: Self, rhs: Self) -> Self {
        Expr::And(Box::new(lhs), Box::new(rhs))
    }

    /// Creates the disjunction of two expressions.
    pub fn or(lhs: Self, rhs: Self) -> Self {
        Expr::Or(Box::new(lhs), Box::new(rhs))
    }

    /// Creates the implication `antecedent => consequent`.
    pub fn implies(antecedent: Self, consequent: Self) -> Self {
        Expr::Implies(Box::new(antecedent), Box::new(consequent))
    }

    /// Creates the biconditional `lhs <=> rhs`.
    pub fn iff(lhs: Self, rhs: Self) -> Self {
        Expr::Iff(Box::new(lhs), Box::new(rhs))
    }

    /// Returns `true` if this expression is an atom (a constant or a variable).
    pub fn is_atom(&self) -> bool {
        matches!(self, Expr::Const(_) | Expr::Var(_))
    }

    /// Returns `true` if this expression is a literal: an atom or a negated atom.
    pub fn is_literal(&self) -> bool {
        match self {
            Expr::Const(_) | Expr::Var(_) => true,
            Expr::Not(operand) => operand.is_atom(),
            _ => false,
        }
    }

    /// Returns the distinct variables reachable from this expression.
    ///
    /// The order is the first-occurrence order of a depth-first,
    /// left-to-right traversal. This is the canonical order used for
    /// interpretation enumeration and truth-table columns.
    pub fn variables(&self) -> Vec<Var> {
        let mut vars = Vec::new();
        self.collect_variables(&mut vars);
        vars
    }

    fn collect_variables(&self, out: &mut Vec<Var>) {
        match self {
            Expr::Const(_) => {}
            Expr::Var(var) => {
                if !out.contains(var) {
                    out.push(var.clone());
                }
            }
            Expr::Not(operand) => operand.collect_variables(out),
            Expr::And(lhs, rhs)
            | Expr::Or(lhs, rhs)
            | Expr::Implies(lhs, rhs)
            | Expr::Iff(lhs, rhs) => {
                lhs.collect_variables(out);
                rhs.collect_variables(out);
            }
        }
    }
}
