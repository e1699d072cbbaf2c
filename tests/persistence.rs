//! Saving a working memory and reading it back.

use std::collections::HashSet;
use std::fs;

use logiclite::{
    load_document, parse_document, read_document, save_facts, Fact, KnowledgeSink, LogicError,
    PersistError, ReasoningEngine, Rule, Term,
};

#[test]
fn test_saved_facts_load_back() {
    let doc = parse_document(
        "works_hard(jack).
         said(jack, \"all work\").
         dull_boy(?x) :- works_hard(?x).
         not get_job(?x) :- dull_boy(?x).",
    )
    .unwrap();
    let mut engine = ReasoningEngine::new();
    load_document(&mut engine, &doc);
    engine.infer().unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("kb.pl");
    save_facts(&path, engine.facts()).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(text.lines().count(), 4);
    assert!(text.lines().all(|l| l.ends_with('.')));
    assert!(text.ends_with(".\n"));

    let reloaded = read_document(&path).unwrap();
    let mut again = ReasoningEngine::new();
    again.add_knowledge_base(reloaded.statements);
    assert_eq!(again.facts(), engine.facts());
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_document(dir.path().join("nope.pl")).unwrap_err();
    assert!(matches!(err, PersistError::Io(_)));
}

#[test]
fn test_bad_syntax_is_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.pl");
    fs::write(&path, "man(socrates").unwrap();
    assert!(matches!(read_document(&path), Err(PersistError::Parse(_))));
}

#[test]
fn test_rule_without_body_is_rejected() {
    assert!(parse_document("p(a) :- .").is_err());

    let head = Fact::pos("p", &["a"]).unwrap();
    assert!(matches!(
        Rule::new(vec![], head),
        Err(LogicError::InvalidArgument(_))
    ));
}

#[test]
fn test_quoted_constants_survive_a_save() {
    let facts: HashSet<Fact> = [
        Fact::new("said", vec![Term::constant("jack"), Term::constant("a \"dull\" boy")], true),
        Fact::new("said", vec![Term::constant("jill"), Term::constant("it's late")], true),
    ]
    .into_iter()
    .collect::<Result<_, _>>()
    .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("quotes.pl");
    save_facts(&path, &facts).unwrap();

    let reloaded: HashSet<Fact> = read_document(&path).unwrap().facts().cloned().collect();
    assert_eq!(reloaded, facts);
}
