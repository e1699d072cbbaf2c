use std::fmt;

use crate::error::{LogicError, Result};
use crate::unify::{substitute, Substitution};

/// Sigil marking a variable in text form (`?x`).
pub const VAR_SIGIL: char = '?';

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Term {
    Variable(String),
    Constant(String),
}

impl Term {
    pub fn var(name: impl Into<String>) -> Self {
        Term::Variable(name.into())
    }

    pub fn constant(name: impl Into<String>) -> Self {
        Term::Constant(name.into())
    }

    pub fn is_variable(&self) -> bool {
        matches!(self, Term::Variable(_))
    }

    pub fn name(&self) -> &str {
        match self {
            Term::Variable(n) | Term::Constant(n) => n,
        }
    }
}

/// `"?x"` becomes a variable, anything else a constant.
impl From<&str> for Term {
    fn from(s: &str) -> Self {
        match s.strip_prefix(VAR_SIGIL) {
            Some(name) => Term::Variable(name.to_string()),
            None => Term::Constant(s.to_string()),
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Variable(n) => write!(f, "{VAR_SIGIL}{n}"),
            Term::Constant(n) if is_plain_name(n) => f.write_str(n),
            Term::Constant(n) if n.contains('"') => write!(f, "'{n}'"),
            Term::Constant(n) => write!(f, "\"{n}\""),
        }
    }
}

fn is_plain_name(s: &str) -> bool {
    let mut chars = s.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphanumeric() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// Variables need a plain name; a constant needs a quote character it
/// does not contain.
fn is_writable(t: &Term) -> bool {
    match t {
        Term::Variable(n) => is_plain_name(n),
        Term::Constant(n) => !n.is_empty() && !(n.contains('"') && n.contains('\'')),
    }
}

/// Signed predicate application. `positive == false` is explicit negation,
/// not absence of information.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Fact {
    predicate: String,
    args: Vec<Term>,
    positive: bool,
}

impl Fact {
    pub fn new(predicate: impl Into<String>, args: Vec<Term>, positive: bool) -> Result<Self> {
        let predicate = predicate.into();
        if predicate.trim().is_empty() {
            return Err(LogicError::InvalidArgument(
                "fact predicate name must not be empty".into(),
            ));
        }
        if !is_plain_name(&predicate) {
            return Err(LogicError::InvalidArgument(format!(
                "predicate name `{predicate}` may only use letters, digits, `_` and `-`"
            )));
        }
        if let Some(bad) = args.iter().find(|t| !is_writable(t)) {
            return Err(LogicError::InvalidArgument(format!(
                "argument {bad:?} of `{predicate}` cannot be written back as text"
            )));
        }
        Ok(Fact { predicate, args, positive })
    }

    /// Positive fact from textual arguments (`"?x"` marks a variable).
    pub fn pos(predicate: impl Into<String>, args: &[&str]) -> Result<Self> {
        Fact::new(predicate, args.iter().map(|a| Term::from(*a)).collect(), true)
    }

    /// Negated fact from textual arguments.
    pub fn neg(predicate: impl Into<String>, args: &[&str]) -> Result<Self> {
        Fact::new(predicate, args.iter().map(|a| Term::from(*a)).collect(), false)
    }

    pub fn predicate(&self) -> &str {
        &self.predicate
    }

    pub fn args(&self) -> &[Term] {
        &self.args
    }

    pub fn is_positive(&self) -> bool {
        self.positive
    }

    pub fn arity(&self) -> usize {
        self.args.len()
    }

    pub fn is_ground(&self) -> bool {
        !self.args.iter().any(Term::is_variable)
    }

    /// Same predicate and arguments, opposite polarity.
    pub fn negated(&self) -> Fact {
        Fact { positive: !self.positive, ..self.clone() }
    }

    /// Single-pass substitution (one dereference per variable).
    pub fn substitute(&self, subs: &Substitution) -> Fact {
        Fact {
            predicate: self.predicate.clone(),
            args: self.args.iter().map(|a| substitute(a, subs)).collect(),
            positive: self.positive,
        }
    }

    /// Substitution with variable chains followed to their end.
    pub fn resolve(&self, subs: &Substitution) -> Fact {
        Fact {
            predicate: self.predicate.clone(),
            args: self.args.iter().map(|a| subs.resolve(a)).collect(),
            positive: self.positive,
        }
    }

    /// Predicate and polarity agree, so argument unification is worth trying.
    pub fn same_signature(&self, other: &Fact) -> bool {
        self.positive == other.positive && self.predicate == other.predicate
    }
}

impl fmt::Display for Fact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.positive {
            f.write_str("not ")?;
        }
        write!(f, "{}(", self.predicate)?;
        write_args(f, &self.args)?;
        f.write_str(")")
    }
}

pub(crate) fn write_args(f: &mut fmt::Formatter<'_>, args: &[Term]) -> fmt::Result {
    for (i, a) in args.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{a}")?;
    }
    Ok(())
}

/// Conjunction of antecedents implying one consequent. Variables are
/// universally quantified over the whole rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rule {
    antecedents: Vec<Fact>,
    consequent: Fact,
}

impl Rule {
    pub fn new(antecedents: Vec<Fact>, consequent: Fact) -> Result<Self> {
        if antecedents.is_empty() {
            return Err(LogicError::InvalidArgument(format!(
                "rule for `{consequent}` has no antecedents"
            )));
        }
        Ok(Rule { antecedents, consequent })
    }

    pub fn antecedents(&self) -> &[Fact] {
        &self.antecedents
    }

    pub fn consequent(&self) -> &Fact {
        &self.consequent
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} :- ", self.consequent)?;
        for (i, a) in self.antecedents.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{a}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Fact(Fact),
    Rule(Rule),
}

impl From<Fact> for Statement {
    fn from(f: Fact) -> Self {
        Statement::Fact(f)
    }
}

impl From<Rule> for Statement {
    fn from(r: Rule) -> Self {
        Statement::Rule(r)
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Fact(x) => write!(f, "{x}."),
            Statement::Rule(r) => write!(f, "{r}."),
        }
    }
}

/// A knowledge base as handed over by a collaborator: statements to load
/// and the queries asked of them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub statements: Vec<Statement>,
    pub queries: Vec<Fact>,
}

impl Document {
    pub fn facts(&self) -> impl Iterator<Item = &Fact> {
        self.statements.iter().filter_map(|s| match s {
            Statement::Fact(f) => Some(f),
            Statement::Rule(_) => None,
        })
    }

    pub fn rules(&self) -> impl Iterator<Item = &Rule> {
        self.statements.iter().filter_map(|s| match s {
            Statement::Rule(r) => Some(r),
            Statement::Fact(_) => None,
        })
    }
}
