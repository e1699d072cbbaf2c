mod ast;
mod clause;
mod config;
mod error;
mod kb;
mod parser;
mod persist;
mod reasoner;
mod resolution;
mod unify;

pub use ast::*;
pub use clause::{fact_to_clause, rule_to_clause, Clause, Literal};
pub use config::{InferenceConfig, ResolutionConfig, DEFAULT_MAX_ROUNDS};
pub use error::{LogicError, Result};
pub use kb::{load_document, KnowledgeSink};
pub use parser::{parse_document, parse_fact, parse_rule, ParseError};
pub use persist::{read_document, save_facts, write_facts, PersistError};
pub use reasoner::{match_antecedents, ReasoningEngine};
pub use resolution::{resolve_clauses, Proof, ResolutionEngine, ResolutionStep};
pub use unify::{
    is_variable,
    substitute,
    substitute_args,
    unify,
    unify_args,
    Substitution,
};
