//! Interpretations (truth assignments) and their enumeration.
//!
//! An [`Interp`] maps variables to truth values. Evaluation requires the
//! interpretation to be total over the variables of the expression being
//! evaluated; a missing binding surfaces as [`UnboundVariableError`].
//!
//! [`all_interpretations`] enumerates every total assignment over a variable
//! list in a canonical order, which fixes the row order of truth tables.

use std::collections::HashMap;
use std::fmt;

use thiserror::Error;

use crate::types::Var;

/// The error returned by evaluation when a variable has no binding.
///
/// It is propagated immediately to the caller; no partial or default value is
/// ever substituted.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[error("variable `{var}` is not bound by the interpretation")]
pub struct UnboundVariableError {
    /// The variable that was missing from the interpretation.
    pub var: Var,
}

/// A truth assignment: a mapping from variables to boolean values.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Interp {
    bindings: HashMap<Var, bool>,
}

impl Interp {
    /// Creates an empty interpretation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds a variable to a value, replacing any previous binding.
    pub fn bind(&mut self, var: Var, value: bool) {
        self.bindings.insert(var, value);
    }

    /// Returns the value bound to `var`, if any.
    pub fn get(&self, var: &Var) -> Option<bool> {
        self.bindings.get(var).copied()
    }

    /// Returns the value bound to `var`, or an [`UnboundVariableError`].
    pub fn lookup(&self, var: &Var) -> Result<bool, UnboundVariableError> {
        self.get(var).ok_or_else(|| UnboundVariableError { var: var.clone() })
    }

    /// Returns the number of bound variables.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns `true` if no variable is bound.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl FromIterator<(Var, bool)> for Interp {
    fn from_iter<I: IntoIterator<Item = (Var, bool)>>(iter: I) -> Self {
        Interp {
            bindings: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Interp {
    /// Renders bindings sorted by variable name, e.g. `{p = T, q = F}`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut bindings: Vec<_> = self.bindings.iter().collect();
        bindings.sort_by(|(a, _), (b, _)| a.cmp(b));
        write!(f, "{{")?;
        for (i, (var, value)) in bindings.into_iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{} = {}", var, if *value { "T" } else { "F" })?;
        }
        write!(f, "}}")
    }
}

/// Enumerates all total interpretations over the given variables.
///
/// Produces exactly `2^n` interpretations for `n` variables. The order is
/// canonical: the variable list acts as a binary counter with the first
/// variable as the most significant bit, and `false` is enumerated before
/// `true`. The empty list yields the single empty interpretation.
pub fn all_interpretations(vars: &[Var]) -> Vec<Interp> {
    match vars.split_first() {
        None => vec![Interp::new()],
        Some((first, rest)) => {
            let tails = all_interpretations(rest);
            let mut interps = Vec::with_capacity(2 * tails.len());
            for value in [false, true] {
                for tail in &tails {
                    let mut interp = tail.clone();
                    interp.bind(first.clone(), value);
                    interps.push(interp);
                }
            }
            interps
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_and_get() {
        let mut interp = Interp::new();
        assert!(interp.is_empty());
        interp.bind(Var::new("p"), true);
        assert_eq!(interp.get(&Var::new("p")), Some(true));
        assert_eq!(interp.get(&Var::new("q")), None);
        assert_eq!(interp.len(), 1);
    }

    #[test]
    fn test_lookup_missing() {
        let interp = Interp::new();
        let err = interp.lookup(&Var::new("p")).unwrap_err();
        assert_eq!(err.var, Var::new("p"));
    }

    #[test]
    fn test_error_message() {
        let err = UnboundVariableError { var: Var::new("p") };
        assert_eq!(err.to_string(), "variable `p` is not bound by the interpretation");
    }

    #[test]
    fn test_display_sorted() {
        let interp: Interp =
            [(Var::new("q"), false), (Var::new("p"), true)].into_iter().collect();
        assert_eq!(interp.to_string(), "{p = T, q = F}");
    }

    #[test]
    fn test_empty_enumeration() {
        let interps = all_interpretations(&[]);
        assert_eq!(interps, vec![Interp::new()]);
    }

    #[test]
    fn test_enumeration_count() {
        let vars: Vec<Var> = ["a", "b", "c"].into_iter().map(Var::new).collect();
        assert_eq!(all_interpretations(&vars).len(), 8);
    }

    #[test]
    fn test_enumeration_canonical_order() {
        // First variable is the most significant bit; false before true.
        let p = Var::new("p");
        let q = Var::new("q");
        let interps = all_interpretations(&[p.clone(), q.clone()]);
        let expected = [(false, false), (false, true), (true, false), (true, true)];
        assert_eq!(interps.len(), expected.len());
        for (interp, (pv, qv)) in interps.iter().zip(expected) {
            assert_eq!(interp.get(&p), Some(pv));
            assert_eq!(interp.get(&q), Some(qv));
        }
    }

    #[test]
    fn test_enumeration_exhaustive_and_distinct() {
        let p = Var::new("p");
        let q = Var::new("q");
        let interps = all_interpretations(&[p.clone(), q.clone()]);
        assert_eq!(interps.len(), 4);
        for i in 0..interps.len() {
            assert_eq!(interps[i].len(), 2);
            for j in (i + 1)..interps.len() {
                assert_ne!(interps[i], interps[j]);
            }
        }
    }
}
