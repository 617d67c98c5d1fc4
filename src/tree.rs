//! Indented tree rendering of expressions.
//!
//! Each node prints its variant name on its own line with its children
//! indented one level deeper; leaves print their literal value or name.
//! Purely presentational: the only contract is determinism.

use crate::expr::Expr;

/// Configuration for the indented tree rendering.
///
/// The indent width is an explicit parameter rather than shared state, so
/// independent callers can render with different widths.
#[derive(Debug, Clone)]
pub struct TreeConfig {
    /// Number of spaces per indentation level (default: 2).
    pub indent_width: usize,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self { indent_width: 2 }
    }
}

impl Expr {
    /// Renders the expression as an indented tree starting at `depth`.
    ///
    /// # Examples
    ///
    /// ```
    /// use boolexpr_rs::expr::Expr;
    /// use boolexpr_rs::tree::TreeConfig;
    ///
    /// let f = Expr::and(Expr::var("p"), Expr::not(Expr::var("q")));
    /// let rendered = f.indented(0, &TreeConfig::default());
    /// assert_eq!(rendered, "And\n  p\n  Not\n    q");
    /// ```
    pub fn indented(&self, depth: usize, config: &TreeConfig) -> String {
        let pad = " ".repeat(depth * config.indent_width);
        match self {
            Expr::Const(value) => format!("{}{}", pad, value),
            Expr::Var(var) => format!("{}{}", pad, var),
            Expr::Not(operand) => {
                format!("{}Not\n{}", pad, operand.indented(depth + 1, config))
            }
            Expr::And(lhs, rhs) => Self::branch("And", &pad, lhs, rhs, depth, config),
            Expr::Or(lhs, rhs) => Self::branch("Or", &pad, lhs, rhs, depth, config),
            Expr::Implies(lhs, rhs) => Self::branch("Implies", &pad, lhs, rhs, depth, config),
            Expr::Iff(lhs, rhs) => Self::branch("Iff", &pad, lhs, rhs, depth, config),
        }
    }

    fn branch(
        name: &str,
        pad: &str,
        lhs: &Expr,
        rhs: &Expr,
        depth: usize,
        config: &TreeConfig,
    ) -> String {
        format!(
            "{}{}\n{}\n{}",
            pad,
            name,
            lhs.indented(depth + 1, config),
            rhs.indented(depth + 1, config)
        )
    }

    /// Prints the indented tree rendering with the default configuration.
    pub fn tree_view(&self) {
        println!("{}", self.indented(0, &TreeConfig::default()));
    }
}
