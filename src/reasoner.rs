use std::collections::HashSet;

use log::{debug, info, trace};

use crate::ast::{Fact, Rule};
use crate::config::InferenceConfig;
use crate::error::{LogicError, Result};
use crate::unify::{unify_args, Substitution};

/// Forward-chaining engine: a working memory of facts plus an ordered rule
/// list. Facts are only ever added.
#[derive(Debug, Clone, Default)]
pub struct ReasoningEngine {
    facts: HashSet<Fact>,
    rules: Vec<Rule>,
    config: InferenceConfig,
}

impl ReasoningEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: InferenceConfig) -> Self {
        ReasoningEngine { config, ..Self::default() }
    }

    /// Returns `false` if a structurally equal fact was already present.
    pub fn add_fact(&mut self, fact: Fact) -> bool {
        trace!("adding fact {fact}");
        self.facts.insert(fact)
    }

    pub fn add_rule(&mut self, rule: Rule) {
        trace!("adding rule {rule}");
        self.rules.push(rule);
    }

    pub fn facts(&self) -> &HashSet<Fact> {
        &self.facts
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Naive forward chaining to fixpoint.
    ///
    /// Every pass matches every rule against the whole working memory and
    /// stops once a pass adds nothing. Returns the number of new facts.
    pub fn infer(&mut self) -> Result<usize> {
        let initial = self.facts.len();
        let mut passes = 0usize;

        loop {
            if let Some(limit) = self.config.max_passes {
                if passes >= limit {
                    return Err(LogicError::Aborted { operation: "forward chaining", limit });
                }
            }
            passes += 1;

            let mut changed = false;
            for rule in &self.rules {
                let sols = match_antecedents(rule.antecedents(), &self.facts, &Substitution::new());
                for subs in sols {
                    let fact = rule.consequent().resolve(&subs);
                    if !self.facts.contains(&fact) {
                        debug!("inferred {fact} via {rule} with substitution {subs}");
                        self.facts.insert(fact);
                        changed = true;
                    }
                }
            }

            trace!("pass {passes}: {} facts", self.facts.len());
            if !changed {
                break;
            }
        }

        let derived = self.facts.len() - initial;
        info!("forward chaining reached fixpoint after {passes} passes: {derived} new facts");
        Ok(derived)
    }

    /// True iff some known fact of the same predicate and polarity unifies
    /// with `fact`. Stops at the first match.
    pub fn query(&self, fact: &Fact) -> bool {
        self.facts.iter().any(|f| {
            f.same_signature(fact)
                && unify_args(fact.args(), f.args(), &Substitution::new()).is_some()
        })
    }

    /// Every substitution under which some known fact answers `fact`.
    pub fn query_all(&self, fact: &Fact) -> Vec<Substitution> {
        self.facts
            .iter()
            .filter(|f| f.same_signature(fact))
            .filter_map(|f| unify_args(fact.args(), f.args(), &Substitution::new()))
            .collect()
    }

    /// All known facts, optionally only those of one predicate. Order is
    /// unspecified.
    pub fn get_facts(&self, predicate: Option<&str>) -> Vec<Fact> {
        self.facts
            .iter()
            .filter(|f| predicate.map_or(true, |p| f.predicate() == p))
            .cloned()
            .collect()
    }
}

/// Every substitution extending `subs` under which each antecedent, in
/// order, matches some fact of the same predicate and polarity.
pub fn match_antecedents(
    antecedents: &[Fact],
    facts: &HashSet<Fact>,
    subs: &Substitution,
) -> Vec<Substitution> {
    let Some((first, rest)) = antecedents.split_first() else {
        return vec![subs.clone()];
    };

    let mut out = vec![];
    for f in facts.iter().filter(|f| f.same_signature(first)) {
        if let Some(next) = unify_args(first.args(), f.args(), subs) {
            out.extend(match_antecedents(rest, facts, &next));
        }
    }
    out
}
