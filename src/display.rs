//! Text renderings of expression trees.
//!
//! Two renderings share the same parenthesization: [`std::fmt::Display`]
//! produces plain infix notation (`~`, `&`, `|`, `=>`, `<=>`), and
//! [`Expr::tex`] produces the matching TeX operator glyphs for documents.
//! Both are total over well-formed trees.

use std::fmt;

use crate::expr::Expr;

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Const(true) => write!(f, "T"),
            Expr::Const(false) => write!(f, "F"),
            Expr::Var(var) => write!(f, "{}", var),
            Expr::Not(operand) => write!(f, "~{}", operand),
            Expr::And(lhs, rhs) => write!(f, "({} & {})", lhs, rhs),
            Expr::Or(lhs, rhs) => write!(f, "({} | {})", lhs, rhs),
            Expr::Implies(lhs, rhs) => write!(f, "({} => {})", lhs, rhs),
            Expr::Iff(lhs, rhs) => write!(f, "({} <=> {})", lhs, rhs),
        }
    }
}

impl Expr {
    /// Renders the expression with TeX operator glyphs.
    ///
    /// The structure (parenthesization and operand order) is identical to the
    /// [`Display`](std::fmt::Display) rendering; only the operator symbols
    /// differ. Constants render as `T`/`F` and variables as their name.
    ///
    /// # Examples
    ///
    /// ```
    /// use boolexpr_rs::expr::Expr;
    ///
    /// let f = Expr::implies(Expr::var("p"), Expr::not(Expr::var("q")));
    /// assert_eq!(f.tex(), "(p \\Rightarrow \\neg q)");
    /// ```
    pub fn tex(&self) -> String {
        match self {
            Expr::Const(_) | Expr::Var(_) => self.to_string(),
            Expr::Not(operand) => format!("\\neg {}", operand.tex()),
            Expr::And(lhs, rhs) => format!("({} \\land {})", lhs.tex(), rhs.tex()),
            Expr::Or(lhs, rhs) => format!("({} \\lor {})", lhs.tex(), rhs.tex()),
            Expr::Implies(lhs, rhs) => format!("({} \\Rightarrow {})", lhs.tex(), rhs.tex()),
            Expr::Iff(lhs, rhs) => format!("({} \\Leftrightarrow {})", lhs.tex(), rhs.tex()),
        }
    }
}
