//! # boolexpr-rs: Propositional Logic Expression Trees in Rust
//!
//! **`boolexpr-rs`** is a small symbolic-computation core for **propositional
//! logic**. It represents formulas as immutable expression trees and provides
//! structural transformations over them.
//!
//! ## What is an expression tree?
//!
//! A formula like `(p & q) => r` is a tree: leaves are truth constants and
//! named variables, inner nodes apply a connective to their children. Every
//! operation here is a pure function over such trees --- transformations
//! return new trees and never mutate in place, so independently-constructed
//! trees are trivially safe to share across threads for read-only use.
//!
//! ## Key Features
//!
//! - **Closed sum type**: [`Expr`][crate::expr::Expr] has one variant per
//!   connective and every operation matches exhaustively, so the compiler
//!   enforces that a new connective updates every operation.
//! - **Structural equality & hashing**: derived per-variant from the declared
//!   fields, consistent with each other.
//! - **Evaluation**: reduce a tree to a truth value under an
//!   [`Interp`][crate::interp::Interp]; missing bindings fail with
//!   [`UnboundVariableError`][crate::interp::UnboundVariableError].
//! - **Rewrites**: implication/biconditional elimination, Negation Normal
//!   Form, and best-effort algebraic simplification, all
//!   equivalence-preserving.
//! - **Truth tables**: exhaustive enumeration of all `2^n` interpretations in
//!   a canonical order, assembled into a
//!   [`TruthTable`][crate::table::TruthTable] artifact.
//! - **Renderings**: infix text, TeX, indented tree view, and Graphviz DOT.
//!
//! ## Basic Usage
//!
//! ```rust
//! use boolexpr_rs::expr::Expr;
//! use boolexpr_rs::interp::Interp;
//! use boolexpr_rs::types::Var;
//!
//! // 1. Build a formula: (p & q) => p
//! let p = Expr::var("p");
//! let q = Expr::var("q");
//! let f = Expr::implies(Expr::and(p.clone(), q.clone()), p.clone());
//! assert_eq!(f.to_string(), "((p & q) => p)");
//!
//! // 2. Evaluate under an assignment
//! let interp: Interp = [(Var::new("p"), true), (Var::new("q"), false)]
//!     .into_iter()
//!     .collect();
//! assert_eq!(f.eval(&interp), Ok(true));
//!
//! // 3. Rewrite to Negation Normal Form
//! let g = f.nnf();
//! assert!(g.is_nnf());
//!
//! // 4. Sweep all interpretations --- f is a tautology
//! assert!(f.truth_table().values().iter().all(|&v| v));
//! ```
//!
//! ## Core Components
//!
//! - **[`expr`]**: the [`Expr`][crate::expr::Expr] sum type, constructors,
//!   and variable collection.
//! - **[`interp`]**: truth assignments and their canonical enumeration.
//! - **[`table`]**: truth-table construction and rendering.
//! - **[`rewrite`]** / **[`simplify`]**: the structural transformations.
//! - **[`tree`]** / **[`dot`]**: tree-shaped renderings for humans and
//!   Graphviz.
//!
//! Truth-table generation is inherently O(2^n) in the number of variables;
//! callers bound n themselves.

pub mod display;
pub mod dot;
pub mod eval;
pub mod expr;
pub mod interp;
pub mod ops;
pub mod rewrite;
pub mod simplify;
pub mod table;
pub mod tree;
pub mod types;
