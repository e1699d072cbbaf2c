use pest::iterators::Pair;
use pest::Parser as PestParser;
use pest_derive::Parser;
use thiserror::Error;

use crate::ast::{self, Document, Fact, Statement, Term};
use crate::error::LogicError;

#[derive(Parser)]
#[grammar = "logic.pest"]
struct LogicParser;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("parse error: {0}")]
    Pest(#[from] pest::error::Error<Rule>),
    #[error("unexpected rule: {0:?}")]
    Unexpected(Rule),
    #[error(transparent)]
    Invalid(#[from] LogicError),
}

pub fn parse_document(input: &str) -> Result<Document, ParseError> {
    let mut pairs = LogicParser::parse(Rule::document, input)?;
    match pairs.next() {
        Some(doc_pair) => build_document(doc_pair),
        None => Ok(Document::default()),
    }
}

/// Parse one literal such as `not get_job(jack)`; a trailing `.` is allowed.
pub fn parse_fact(input: &str) -> Result<Fact, ParseError> {
    let top = first_inner(LogicParser::parse(Rule::single_literal, input)?.next(), Rule::single_literal)?;
    build_literal(first_inner(top.into_inner().next(), Rule::single_literal)?)
}

/// Parse one rule such as `mortal(?x) :- man(?x)`.
pub fn parse_rule(input: &str) -> Result<ast::Rule, ParseError> {
    let top = first_inner(LogicParser::parse(Rule::single_rule, input)?.next(), Rule::single_rule)?;
    build_rule(first_inner(top.into_inner().next(), Rule::single_rule)?)
}

fn build_document(pair: Pair<Rule>) -> Result<Document, ParseError> {
    let mut doc = Document::default();

    for item in pair.into_inner() {
        if item.as_rule() != Rule::statement {
            continue;
        }
        let inner = first_inner(item.into_inner().next(), Rule::statement)?;
        match inner.as_rule() {
            Rule::fact => {
                let lit = first_inner(inner.into_inner().next(), Rule::fact)?;
                doc.statements.push(Statement::Fact(build_literal(lit)?));
            }
            Rule::rule => doc.statements.push(Statement::Rule(build_rule(inner)?)),
            Rule::query => {
                let lit = first_inner(inner.into_inner().next(), Rule::query)?;
                doc.queries.push(build_literal(lit)?);
            }
            r => return Err(ParseError::Unexpected(r)),
        }
    }

    Ok(doc)
}

fn build_rule(pair: Pair<Rule>) -> Result<ast::Rule, ParseError> {
    let mut literals = pair
        .into_inner()
        .filter(|p| p.as_rule() == Rule::literal)
        .map(build_literal)
        .collect::<Result<Vec<_>, _>>()?;

    if literals.is_empty() {
        return Err(ParseError::Unexpected(Rule::rule));
    }
    let head = literals.remove(0);
    Ok(ast::Rule::new(literals, head)?)
}

fn build_literal(pair: Pair<Rule>) -> Result<Fact, ParseError> {
    let mut positive = true;
    let mut predicate = None;
    let mut args = vec![];

    for p in pair.into_inner() {
        match p.as_rule() {
            Rule::negation => positive = false,
            Rule::atom => {
                for part in p.into_inner() {
                    match part.as_rule() {
                        Rule::predicate => predicate = Some(part.as_str().to_string()),
                        Rule::variable => args.push(Term::var(&part.as_str()[1..])),
                        Rule::constant => args.push(Term::constant(unquote(part.as_str()))),
                        r => return Err(ParseError::Unexpected(r)),
                    }
                }
            }
            r => return Err(ParseError::Unexpected(r)),
        }
    }

    let predicate = predicate.ok_or(ParseError::Unexpected(Rule::atom))?;
    Ok(Fact::new(predicate, args, positive)?)
}

fn first_inner(pair: Option<Pair<Rule>>, expected: Rule) -> Result<Pair<Rule>, ParseError> {
    pair.ok_or(ParseError::Unexpected(expected))
}

fn unquote(s: &str) -> &str {
    let quoted = s.len() >= 2
        && ((s.starts_with('"') && s.ends_with('"')) || (s.starts_with('\'') && s.ends_with('\'')));
    if quoted {
        &s[1..s.len() - 1]
    } else {
        s
    }
}
