//! Expression tree to DOT (Graphviz) conversion.
//!
//! This module renders an expression tree in DOT format for visualization
//! with Graphviz tools like `dot` or online viewers.
//!
//! # DOT Format
//!
//! - Every subterm becomes one node, labeled with its connective symbol
//!   (`~`, `&`, `|`, `=>`, `<=>`) or its leaf value (`T`/`F`, variable name)
//! - Operator nodes and leaf nodes use configurable shapes
//! - Edges point from each node to its children, left to right
//!
//! # Examples
//!
//! ```
//! use boolexpr_rs::expr::Expr;
//!
//! let f = Expr::and(Expr::var("p"), Expr::not(Expr::var("q")));
//! let dot = f.to_dot_default().unwrap();
//! // Write to file and render with: dot -Tpng output.dot -o output.png
//! assert!(dot.starts_with("digraph {"));
//! ```

use crate::expr::Expr;

/// Configuration options for DOT output generation.
///
/// Use `DotConfig::default()` for standard settings.
#[derive(Debug, Clone)]
pub struct DotConfig {
    /// Shape for connective nodes (default: "circle")
    pub operator_shape: &'static str,
    /// Shape for constant and variable nodes (default: "square")
    pub leaf_shape: &'static str,
}

impl Default for DotConfig {
    fn default() -> Self {
        Self {
            operator_shape: "circle",
            leaf_shape: "square",
        }
    }
}

impl Expr {
    /// Converts the expression tree to DOT format with default settings.
    ///
    /// Node identifiers are assigned in depth-first pre-order, so the output
    /// is deterministic for a given tree.
    pub fn to_dot_default(&self) -> Result<String, std::fmt::Error> {
        self.to_dot(&DotConfig::default())
    }

    /// Converts the expression tree to DOT format with custom configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use boolexpr_rs::dot::DotConfig;
    /// use boolexpr_rs::expr::Expr;
    ///
    /// let f = Expr::or(Expr::var("p"), Expr::constant(false));
    /// let config = DotConfig {
    ///     leaf_shape: "plaintext",
    ///     ..DotConfig::default()
    /// };
    /// let dot = f.to_dot(&config).unwrap();
    /// assert!(dot.contains("shape=plaintext"));
    /// ```
    pub fn to_dot(&self, config: &DotConfig) -> Result<String, std::fmt::Error> {
        use std::fmt::Write as _;

        let mut dot = String::new();
        writeln!(dot, "digraph {{")?;
        writeln!(dot, "node [shape={}];", config.operator_shape)?;
        let mut next_id = 0;
        self.write_dot(&mut dot, &mut next_id, config)?;
        writeln!(dot, "}}")?;
        Ok(dot)
    }

    /// Emits this subterm and its children, returning the subterm's node id.
    fn write_dot(
        &self,
        dot: &mut String,
        next_id: &mut usize,
        config: &DotConfig,
    ) -> Result<usize, std::fmt::Error> {
        use std::fmt::Write as _;

        let id = *next_id;
        *next_id += 1;
        match self {
            Expr::Const(value) => {
                let label = if *value { "T" } else { "F" };
                writeln!(dot, "{} [shape={}, label=\"{}\"];", id, config.leaf_shape, label)?;
            }
            Expr::Var(var) => {
                writeln!(dot, "{} [shape={}, label=\"{}\"];", id, config.leaf_shape, var)?;
            }
            Expr::Not(operand) => {
                writeln!(dot, "{} [label=\"~\"];", id)?;
                let child = operand.write_dot(dot, next_id, config)?;
                writeln!(dot, "{} -> {};", id, child)?;
            }
            Expr::And(lhs, rhs) => Self::write_dot_branch(dot, id, "&", lhs, rhs, next_id, config)?,
            Expr::Or(lhs, rhs) => Self::write_dot_branch(dot, id, "|", lhs, rhs, next_id, config)?,
            Expr::Implies(lhs, rhs) => {
                Self::write_dot_branch(dot, id, "=>", lhs, rhs, next_id, config)?
            }
            Expr::Iff(lhs, rhs) => {
                Self::write_dot_branch(dot, id, "<=>", lhs, rhs, next_id, config)?
            }
        }
        Ok(id)
    }

    fn write_dot_branch(
        dot: &mut String,
        id: usize,
        label: &str,
        lhs: &Expr,
        rhs: &Expr,
        next_id: &mut usize,
        config: &DotConfig,
    ) -> Result<(), std::fmt::Error> {
        use std::fmt::Write as _;

        writeln!(dot, "{} [label=\"{}\"];", id, label)?;
        let left = lhs.write_dot(dot, next_id, config)?;
        writeln!(dot, "{} -> {};", id, left)?;
        let right = rhs.write_dot(dot, next_id, config)?;
        writeln!(dot, "{} -> {};", id, right)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Basic test: verify DOT output is generated without errors
    #[test]
    fn test_to_dot_basic() {
        let f = Expr::implies(Expr::var("p"), Expr::and(Expr::var("q"), Expr::constant(true)));
        let dot = f.to_dot_default().unwrap();

        assert!(dot.starts_with("digraph {"));
        assert!(dot.ends_with("}\n"));
        assert!(dot.contains("label=\"=>\""));
        assert!(dot.contains("label=\"&\""));
        assert!(dot.contains("label=\"p\""));
        assert!(dot.contains("label=\"T\""));
    }

    #[test]
    fn test_to_dot_one_node_per_subterm() {
        // (p & q) | ~r has 6 subterms, hence 6 node declarations.
        let f = Expr::or(
            Expr::and(Expr::var("p"), Expr::var("q")),
            Expr::not(Expr::var("r")),
        );
        let dot = f.to_dot_default().unwrap();
        let declared = dot.lines().filter(|line| line.contains("label=")).count();
        assert_eq!(declared, 6);
        let edges = dot.lines().filter(|line| line.contains(" -> ")).count();
        assert_eq!(edges, 5);
    }

    #[test]
    fn test_to_dot_leaf_only() {
        let dot = Expr::var("p").to_dot_default().unwrap();
        assert!(dot.contains("0 [shape=square, label=\"p\"];"));
    }

    #[test]
    fn test_to_dot_with_config() {
        let f = Expr::not(Expr::var("p"));
        let config = DotConfig {
            operator_shape: "ellipse",
            leaf_shape: "plaintext",
        };
        let dot = f.to_dot(&config).unwrap();
        assert!(dot.contains("node [shape=ellipse];"));
        assert!(dot.contains("shape=plaintext"));
    }

    #[test]
    fn test_to_dot_deterministic() {
        let f = Expr::iff(Expr::var("a"), Expr::var("b"));
        assert_eq!(f.to_dot_default().unwrap(), f.to_dot_default().unwrap());
    }

    /// Helper test to write a DOT file for manual inspection (disabled by default)
    #[test]
    #[ignore]
    fn test_write_dot_file() {
        let f = Expr::implies(
            Expr::and(Expr::var("p"), Expr::var("q")),
            Expr::or(Expr::var("p"), Expr::var("q")),
        );
        let dot = f.to_dot_default().unwrap();
        std::fs::write("test_output.dot", &dot).unwrap();
        println!("DOT output:\n{}", dot);
    }
}
