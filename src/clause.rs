use std::collections::{BTreeSet, HashMap};
use std::fmt;

use crate::ast::{write_args, Fact, Rule, Term};
use crate::unify::Substitution;

/// Clause-form counterpart of a [`Fact`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Literal {
    pub predicate: String,
    pub args: Vec<Term>,
    pub positive: bool,
}

impl Literal {
    pub fn negate(&self) -> Literal {
        Literal { positive: !self.positive, ..self.clone() }
    }

    /// Same predicate, opposite polarity: a candidate for resolution.
    pub fn complements(&self, other: &Literal) -> bool {
        self.positive != other.positive && self.predicate == other.predicate
    }

    pub fn resolve(&self, subs: &Substitution) -> Literal {
        Literal {
            predicate: self.predicate.clone(),
            args: self.args.iter().map(|a| subs.resolve(a)).collect(),
            positive: self.positive,
        }
    }

    fn rename(&self, name: &mut impl FnMut(&str) -> String) -> Literal {
        let args = self
            .args
            .iter()
            .map(|a| match a {
                Term::Variable(v) => Term::Variable(name(v)),
                c => c.clone(),
            })
            .collect();
        Literal { args, ..self.clone() }
    }
}

impl From<&Fact> for Literal {
    fn from(f: &Fact) -> Self {
        Literal {
            predicate: f.predicate().to_string(),
            args: f.args().to_vec(),
            positive: f.is_positive(),
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.positive {
            f.write_str("¬")?;
        }
        write!(f, "{}(", self.predicate)?;
        write_args(f, &self.args)?;
        f.write_str(")")
    }
}

/// Disjunction of literals. The empty clause is a contradiction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Clause(BTreeSet<Literal>);

impl Clause {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn unit(lit: Literal) -> Self {
        Clause(BTreeSet::from([lit]))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn literals(&self) -> impl Iterator<Item = &Literal> {
        self.0.iter()
    }

    pub fn contains(&self, lit: &Literal) -> bool {
        self.0.contains(lit)
    }

    /// Copy of this clause without `lit`.
    pub fn without(&self, lit: &Literal) -> Clause {
        Clause(self.0.iter().filter(|l| *l != lit).cloned().collect())
    }

    pub fn union(&self, other: &Clause) -> Clause {
        Clause(self.0.union(&other.0).cloned().collect())
    }

    pub fn resolve(&self, subs: &Substitution) -> Clause {
        self.0.iter().map(|l| l.resolve(subs)).collect()
    }

    /// Every variable `v` becomes `v_{suffix}`. Two clauses renamed with
    /// different suffixes share no variable.
    pub fn rename_variables(&self, suffix: &str) -> Clause {
        self.0.iter().map(|l| l.rename(&mut |v| format!("{v}_{suffix}"))).collect()
    }

    /// Variables renamed `_0`, `_1`, ... in order of first appearance, so
    /// that clauses differing only in variable names usually coincide.
    pub fn canonical(&self) -> Clause {
        let mut names: HashMap<String, String> = HashMap::new();
        self.0
            .iter()
            .map(|l| {
                l.rename(&mut |v| {
                    let next = names.len();
                    names.entry(v.to_string()).or_insert_with(|| format!("_{next}")).clone()
                })
            })
            .collect()
    }
}

impl FromIterator<Literal> for Clause {
    fn from_iter<I: IntoIterator<Item = Literal>>(iter: I) -> Self {
        Clause(iter.into_iter().collect())
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("⊥");
        }
        for (i, l) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ∨ ")?;
            }
            write!(f, "{l}")?;
        }
        Ok(())
    }
}

pub fn fact_to_clause(fact: &Fact) -> Clause {
    Clause::unit(Literal::from(fact))
}

/// `a1 ∧ … ∧ an → c` becomes `¬a1 ∨ … ∨ ¬an ∨ c`.
pub fn rule_to_clause(rule: &Rule) -> Clause {
    rule.antecedents()
        .iter()
        .map(|a| Literal::from(a).negate())
        .chain(std::iter::once(Literal::from(rule.consequent())))
        .collect()
}
