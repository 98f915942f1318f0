use std::sync::Arc;

use crate::{DiagnosticKind, Error, Grammar, Limits};

#[test]
fn keeps_every_stage() {
    let grammar = Grammar::expect_valid("of (simpleArticle:article | articleName:article modele+)*");

    assert_eq!(grammar.source(), "of (simpleArticle:article | articleName:article modele+)*");
    assert_eq!(grammar.terms().len(), 4);
    assert_eq!(grammar.terms().callables(), vec!["of", "article", "modele"]);
    assert_eq!(grammar.nfa().len(), 8);
    assert_eq!(grammar.dfa().len(), 5);
    assert_eq!(grammar.cores().len(), grammar.dfa().len());
    assert_eq!(
        grammar.ast().to_string(),
        "of (simpleArticle:article | articleName:article modele+)*"
    );
}

#[test]
fn shared_tables_point_at_the_same_data() {
    let grammar = Grammar::expect_valid("a b");
    let dfa = grammar.shared_dfa();
    let again = grammar.clone().shared_dfa();
    assert!(Arc::ptr_eq(&dfa, &again));
    assert!(Arc::ptr_eq(&grammar.shared_terms(), &grammar.shared_terms()));
}

#[test]
fn default_limits() {
    let limits = Limits::default();
    assert_eq!(limits.recursion, 256);
    assert_eq!(limits.states, 4096);
    assert_eq!(
        limits.with_recursion(8).with_states(16),
        Limits {
            recursion: 8,
            states: 16
        }
    );
}

#[test]
fn parse_error_stops_before_automata() {
    let Err(Error::GrammarParseError(diagnostics)) = Grammar::compile("(foo") else {
        panic!("expected a parse error");
    };
    assert_eq!(diagnostics.kinds(), vec![DiagnosticKind::UnclosedGroup]);
}

#[test]
fn deep_nesting_hits_recursion_limit() {
    let source = format!("{}a{}", "(".repeat(40), ")".repeat(40));
    let err = Grammar::compile_with(&source, Limits::default().with_recursion(16)).unwrap_err();
    assert!(matches!(err, Error::RecursionLimitExceeded));

    assert!(Grammar::compile(&source).is_ok());
}

#[test]
fn blank_text_is_rejected() {
    insta::assert_snapshot!(Grammar::expect_invalid("   \n"), @"error at 4..4: expected a term: found end of input");
}
