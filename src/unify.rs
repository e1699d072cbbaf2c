//! Unification and substitution over function-free terms.
//!
//! A failed unification is `None`. Because a variable can only be bound to a
//! constant or to a different, not yet bound variable, binding chains never
//! close into a cycle and no occurs-check is needed.

use std::collections::HashMap;
use std::fmt;

use crate::ast::Term;

/// Variable name -> term bindings.
///
/// Values are never mutated once handed out: [`Substitution::extend`]
/// returns a new substitution and leaves the receiver as it was.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Substitution {
    bindings: HashMap<String, Term>,
}

impl Substitution {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, var: &str) -> Option<&Term> {
        self.bindings.get(var)
    }

    pub fn contains(&self, var: &str) -> bool {
        self.bindings.contains_key(var)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Term)> {
        self.bindings.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Copy-on-extend: `self` is left untouched.
    pub fn extend(&self, var: &str, term: Term) -> Substitution {
        let mut bindings = self.bindings.clone();
        bindings.insert(var.to_string(), term);
        Substitution { bindings }
    }

    /// Follow a variable chain to its end. Unlike [`substitute`] this walks
    /// `?x -> ?y -> a` all the way to `a`.
    pub fn resolve(&self, term: &Term) -> Term {
        let mut current = term;
        // A chain can visit each binding at most once.
        for _ in 0..=self.bindings.len() {
            match current {
                Term::Variable(name) => match self.bindings.get(name) {
                    Some(next) => current = next,
                    None => break,
                },
                Term::Constant(_) => break,
            }
        }
        current.clone()
    }
}

impl fmt::Display for Substitution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pairs: Vec<_> = self.bindings.iter().collect();
        pairs.sort();
        f.write_str("{")?;
        for (i, (k, v)) in pairs.into_iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "?{k}/{v}")?;
        }
        f.write_str("}")
    }
}

pub fn is_variable(term: &Term) -> bool {
    term.is_variable()
}

/// Extend `subs` so that `x` and `y` become identical, or `None`.
pub fn unify(x: &Term, y: &Term, subs: &Substitution) -> Option<Substitution> {
    if x == y {
        return Some(subs.clone());
    }
    match (x, y) {
        (Term::Variable(name), _) => unify_var(name, x, y, subs),
        (_, Term::Variable(name)) => unify_var(name, y, x, subs),
        _ => None,
    }
}

/// Element-wise unification of two argument lists, threading the
/// substitution through. Lists of different length never unify.
pub fn unify_args(xs: &[Term], ys: &[Term], subs: &Substitution) -> Option<Substitution> {
    if xs.len() != ys.len() {
        return None;
    }
    xs.iter()
        .zip(ys)
        .try_fold(subs.clone(), |acc, (x, y)| unify(x, y, &acc))
}

fn unify_var(name: &str, var: &Term, x: &Term, subs: &Substitution) -> Option<Substitution> {
    if let Some(bound) = subs.get(name) {
        return unify(bound, x, subs);
    }
    if let Term::Variable(other) = x {
        if let Some(bound) = subs.get(other) {
            return unify(var, bound, subs);
        }
    }
    Some(subs.extend(name, x.clone()))
}

/// Replace bound variables by their value. One dereference per variable:
/// with `{?x/?y, ?y/a}`, `?x` becomes `?y`. Use [`Substitution::resolve`]
/// for the full walk.
pub fn substitute(term: &Term, subs: &Substitution) -> Term {
    match term {
        Term::Variable(name) => subs.get(name).cloned().unwrap_or_else(|| term.clone()),
        Term::Constant(_) => term.clone(),
    }
}

pub fn substitute_args(args: &[Term], subs: &Substitution) -> Vec<Term> {
    args.iter().map(|a| substitute(a, subs)).collect()
}

#[cfg(test)]
mod proptest_tests;
