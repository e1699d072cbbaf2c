//! Resolution refutation over clause sets.
//!
//! To decide whether the knowledge base entails `q`, the unit clause `¬q`
//! is added to a working copy of the clause set and resolvents are
//! generated round by round until the empty clause shows up (entailed) or a
//! round adds nothing new (not entailed).

use std::collections::{BTreeSet, HashMap, HashSet};

use log::{debug, info};

use crate::ast::{Fact, Rule, Statement};
use crate::clause::{fact_to_clause, rule_to_clause, Clause};
use crate::config::ResolutionConfig;
use crate::error::{LogicError, Result};
use crate::unify::{unify_args, Substitution};

/// One binary resolution step: `resolvent` was derived from `left` and `right`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionStep {
    pub left: Clause,
    pub right: Clause,
    pub resolvent: Clause,
}

/// Outcome of a refutation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Proof {
    pub entailed: bool,
    /// Saturation rounds run before the verdict.
    pub rounds: usize,
    /// Derivation of the empty clause, parents first. Empty when not entailed.
    pub steps: Vec<ResolutionStep>,
}

#[derive(Debug, Clone, Default)]
pub struct ResolutionEngine {
    clauses: BTreeSet<Clause>,
    config: ResolutionConfig,
}

impl ResolutionEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ResolutionConfig) -> Self {
        ResolutionEngine { config, ..Self::default() }
    }

    pub fn add_fact(&mut self, fact: &Fact) {
        self.clauses.insert(fact_to_clause(fact).canonical());
    }

    pub fn add_rule(&mut self, rule: &Rule) {
        self.clauses.insert(rule_to_clause(rule).canonical());
    }

    pub fn add_knowledge_base<'a>(&mut self, statements: impl IntoIterator<Item = &'a Statement>) {
        for st in statements {
            match st {
                Statement::Fact(f) => self.add_fact(f),
                Statement::Rule(r) => self.add_rule(r),
            }
        }
    }

    pub fn clauses(&self) -> &BTreeSet<Clause> {
        &self.clauses
    }

    /// Does the clause set entail `query`?
    pub fn resolution(&self, query: &Fact) -> Result<bool> {
        self.prove(query).map(|p| p.entailed)
    }

    /// Refutation with the derivation of the empty clause kept.
    pub fn prove(&self, query: &Fact) -> Result<Proof> {
        let mut clauses = self.clauses.clone();
        clauses.insert(fact_to_clause(&query.negated()).canonical());

        // First derivation of each clause not in the starting set.
        let mut parents: HashMap<Clause, (Clause, Clause)> = HashMap::new();
        let mut rounds = 0usize;

        loop {
            if let Some(limit) = self.config.max_rounds {
                if rounds >= limit {
                    return Err(LogicError::Aborted { operation: "resolution", limit });
                }
            }
            rounds += 1;

            let current: Vec<&Clause> = clauses.iter().collect();
            let mut new = BTreeSet::new();

            for (i, ci) in current.iter().enumerate() {
                for cj in &current[i + 1..] {
                    for resolvent in resolve_clauses(ci, cj) {
                        if !clauses.contains(&resolvent) && !parents.contains_key(&resolvent) {
                            parents.insert(resolvent.clone(), ((*ci).clone(), (*cj).clone()));
                        }
                        if resolvent.is_empty() {
                            info!("{query} entailed: empty clause derived in round {rounds}");
                            let steps = derivation(&resolvent, &parents);
                            return Ok(Proof { entailed: true, rounds, steps });
                        }
                        new.insert(resolvent);
                    }
                }
            }

            debug!(
                "round {rounds}: {} clauses, {} resolvents",
                clauses.len(),
                new.len()
            );

            if new.is_subset(&clauses) {
                info!("{query} not entailed: saturated after {rounds} rounds");
                return Ok(Proof { entailed: false, rounds, steps: vec![] });
            }
            clauses.extend(new);

            if let Some(limit) = self.config.max_clauses {
                if clauses.len() > limit {
                    return Err(LogicError::Aborted { operation: "resolution", limit });
                }
            }
        }
    }
}

//
// ------------------------- Resolvents -------------------------
//

/// All resolvents of `ci` and `cj`, one per complementary literal pair whose
/// arguments unify. The two clauses are standardized apart first, and each
/// resolvent comes back in canonical variable naming.
pub fn resolve_clauses(ci: &Clause, cj: &Clause) -> BTreeSet<Clause> {
    let ci = ci.rename_variables("1");
    let cj = cj.rename_variables("2");

    let mut out = BTreeSet::new();
    for li in ci.literals() {
        for lj in cj.literals().filter(|lj| li.complements(lj)) {
            if let Some(subs) = unify_args(&li.args, &lj.args, &Substitution::new()) {
                let resolvent = ci.without(li).union(&cj.without(lj)).resolve(&subs);
                out.insert(resolvent.canonical());
            }
        }
    }
    out
}

//
// ------------------------- Derivation trace -------------------------
//

/// Steps leading to `target`, parents before children.
fn derivation(target: &Clause, parents: &HashMap<Clause, (Clause, Clause)>) -> Vec<ResolutionStep> {
    let mut steps = vec![];
    let mut seen = HashSet::new();
    collect_steps(target, parents, &mut seen, &mut steps);
    steps
}

fn collect_steps(
    clause: &Clause,
    parents: &HashMap<Clause, (Clause, Clause)>,
    seen: &mut HashSet<Clause>,
    steps: &mut Vec<ResolutionStep>,
) {
    if !seen.insert(clause.clone()) {
        return;
    }
    let Some((left, right)) = parents.get(clause) else {
        return;
    };
    collect_steps(left, parents, seen, steps);
    collect_steps(right, parents, seen, steps);
    steps.push(ResolutionStep {
        left: left.clone(),
        right: right.clone(),
        resolvent: clause.clone(),
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clause::Literal;

    fn fact(pred: &str, args: &[&str]) -> Fact {
        Fact::pos(pred, args).unwrap()
    }

    #[test]
    fn complementary_units_give_empty_clause() {
        let p = fact_to_clause(&fact("p", &["a"]));
        let not_p = fact_to_clause(&fact("p", &["a"]).negated());
        let out = resolve_clauses(&p, &not_p);
        assert_eq!(out, BTreeSet::from([Clause::empty()]));
    }

    #[test]
    fn no_complement_no_resolvent() {
        let p = fact_to_clause(&fact("p", &["a"]));
        let q = fact_to_clause(&fact("q", &["a"]).negated());
        assert!(resolve_clauses(&p, &q).is_empty());

        let pb = fact_to_clause(&fact("p", &["b"]).negated());
        assert!(resolve_clauses(&p, &pb).is_empty());
    }

    #[test]
    fn resolvent_is_instantiated() {
        let rule = Rule::new(vec![fact("man", &["?x"])], fact("mortal", &["?x"])).unwrap();
        let out = resolve_clauses(&rule_to_clause(&rule), &fact_to_clause(&fact("man", &["socrates"])));
        let expected = Clause::unit(Literal::from(&fact("mortal", &["socrates"])));
        assert_eq!(out, BTreeSet::from([expected]));
    }

    #[test]
    fn duplicate_fact_is_one_clause() {
        let mut e = ResolutionEngine::new();
        e.add_fact(&fact("p", &["a"]));
        e.add_fact(&fact("p", &["a"]));
        assert_eq!(e.clauses().len(), 1);
    }

    #[test]
    fn chained_rules_are_followed() {
        let mut e = ResolutionEngine::new();
        e.add_fact(&fact("a", &["k"]));
        e.add_rule(&Rule::new(vec![fact("a", &["?x"])], fact("b", &["?x"])).unwrap());
        e.add_rule(&Rule::new(vec![fact("b", &["?x"])], fact("c", &["?x"])).unwrap());

        let proof = e.prove(&fact("c", &["k"])).unwrap();
        assert!(proof.entailed);
        assert!(proof.steps.last().is_some_and(|s| s.resolvent.is_empty()));
        assert!(!e.resolution(&fact("c", &["j"])).unwrap());
    }

    #[test]
    fn round_limit_aborts() {
        let mut e = ResolutionEngine::with_config(ResolutionConfig {
            max_rounds: Some(1),
            max_clauses: None,
        });
        e.add_fact(&fact("a", &["k"]));
        e.add_rule(&Rule::new(vec![fact("a", &["?x"])], fact("b", &["?x"])).unwrap());
        e.add_rule(&Rule::new(vec![fact("b", &["?x"])], fact("c", &["?x"])).unwrap());

        assert_eq!(
            e.resolution(&fact("c", &["k"])),
            Err(LogicError::Aborted { operation: "resolution", limit: 1 })
        );
    }

    #[test]
    fn shared_variable_names_stay_independent() {
        // ?x in the fact and ?x in the negated query are different variables.
        let fact_clause = fact_to_clause(&fact("p", &["?x", "a"]));
        let query_clause = fact_to_clause(&fact("p", &["b", "?x"]).negated());
        let out = resolve_clauses(&fact_clause, &query_clause);
        assert_eq!(out, BTreeSet::from([Clause::empty()]));
    }

    #[test]
    fn resolvents_are_canonical() {
        let rule = Rule::new(vec![fact("man", &["?who"])], fact("mortal", &["?who"])).unwrap();
        let query = fact_to_clause(&fact("mortal", &["?x"]).negated());
        let out = resolve_clauses(&rule_to_clause(&rule), &query);
        let expected = fact_to_clause(&fact("man", &["?_0"]).negated());
        assert_eq!(out, BTreeSet::from([expected]));
    }

    #[test]
    fn query_does_not_leak_into_engine() {
        let mut e = ResolutionEngine::new();
        e.add_fact(&fact("p", &["a"]));
        e.resolution(&fact("q", &["a"])).unwrap();
        assert_eq!(e.clauses().len(), 1);
    }
}
