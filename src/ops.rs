//! Operator-overload sugar for building expression trees.
//!
//! Formulas can be assembled with Rust operators instead of the named
//! constructors: `!a` negates, `a & b` conjoins, `a | b` disjoins,
//! `a >> b` builds the implication `a => b`, and `a % b` builds the
//! biconditional `a <=> b`.
//!
//! # Examples
//!
//! ```
//! use boolexpr_rs::expr::Expr;
//!
//! let p = Expr::var("p");
//! let q = Expr::var("q");
//! let f = (p.clone() & q.clone()) >> (p | q);
//! assert_eq!(f.to_string(), "((p & q) => (p | q))");
//! ```

use std::ops::{BitAnd, BitOr, Not, Rem, Shr};

use crate::expr::Expr;

impl Not for Expr {
    type Output = Expr;

    fn not(self) -> Self::Output {
        Expr::Not(Box::new(self))
    }
}

impl BitAnd for Expr {
    type Output = Expr;

    fn bitand(self, rhs: Self) -> Self::Output {
        Expr::And(Box::new(self), Box::new(rhs))
    }
}

impl BitOr for Expr {
    type Output = Expr;

    fn bitor(self, rhs: Self) -> Self::Output {
        Expr::Or(Box::new(self), Box::new(rhs))
    }
}

/// `a >> b` is the implication `a => b`.
impl Shr for Expr {
    type Output = Expr;

    fn shr(self, rhs: Self) -> Self::Output {
        Expr::Implies(Box::new(self), Box::new(rhs))
    }
}

/// `a % b` is the biconditional `a <=> b`.
impl Rem for Expr {
    type Output = Expr;

    fn rem(self, rhs: Self) -> Self::Output {
        Expr::Iff(Box::new(self), Box::new(rhs))
    }
}
