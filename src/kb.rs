//! Feeding the engines.
//!
//! Whatever produces facts and rules (a text file, a sentence translator,
//! an API) hands them over through [`KnowledgeSink`].

use crate::ast::{Document, Fact, Rule, Statement};
use crate::reasoner::ReasoningEngine;
use crate::resolution::ResolutionEngine;

pub trait KnowledgeSink {
    fn add_fact(&mut self, fact: Fact);

    fn add_rule(&mut self, rule: Rule);

    fn add_statement(&mut self, statement: Statement) {
        match statement {
            Statement::Fact(f) => self.add_fact(f),
            Statement::Rule(r) => self.add_rule(r),
        }
    }

    fn add_knowledge_base<I>(&mut self, statements: I)
    where
        I: IntoIterator<Item = Statement>,
        Self: Sized,
    {
        for st in statements {
            self.add_statement(st);
        }
    }
}

impl KnowledgeSink for ReasoningEngine {
    fn add_fact(&mut self, fact: Fact) {
        ReasoningEngine::add_fact(self, fact);
    }

    fn add_rule(&mut self, rule: Rule) {
        ReasoningEngine::add_rule(self, rule);
    }
}

impl KnowledgeSink for ResolutionEngine {
    fn add_fact(&mut self, fact: Fact) {
        ResolutionEngine::add_fact(self, &fact);
    }

    fn add_rule(&mut self, rule: Rule) {
        ResolutionEngine::add_rule(self, &rule);
    }
}

/// Load every statement of `doc`; its queries are left to the caller.
pub fn load_document<S: KnowledgeSink>(sink: &mut S, doc: &Document) {
    sink.add_knowledge_base(doc.statements.iter().cloned());
}
