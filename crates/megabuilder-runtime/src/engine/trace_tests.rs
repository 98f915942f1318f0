use megabuilder_compiler::Grammar;

use super::builder::Builder;
use super::recorder::Recorder;
use super::trace::{PrintTracer, Verbosity};

const CATALOG: &str = "of (simpleArticle:article | articleName:article modele+)*";

fn walk(verbosity: Verbosity) -> String {
    let grammar = Grammar::compile(CATALOG).unwrap();
    let tracer = PrintTracer::builder().verbosity(verbosity).build();
    let mut b = Builder::new(grammar.shared_dfa(), grammar.shared_terms(), Recorder::new())
        .with_tracer(tracer);

    b.call("of", Vec::new()).unwrap();
    b.call("articleName", Vec::new()).unwrap();
    assert!(b.build().is_err());
    b.call("modele", Vec::new()).unwrap();
    assert!(b.call("of", Vec::new()).is_err());
    b.build().unwrap();

    b.tracer().output()
}

#[test]
fn default_verbosity() {
    insta::assert_snapshot!(walk(Verbosity::Default), @r"
    S0 -- of --> S1
    S1 -- articleName:article --> S3
    S3 build rejected
    S3 -- modele --> S4
    S4 reject of: `of` is not allowed in state S4, expected `article`, `modele`
    S4 build
    ");
}

#[test]
fn verbose_adds_calls() {
    insta::assert_snapshot!(walk(Verbosity::Verbose), @r"
    S0 call of
    S0 -- of --> S1
    S1 call articleName
    S1 -- articleName:article --> S3
    S3 build rejected
    S3 call modele
    S3 -- modele --> S4
    S4 call of
    S4 reject of: `of` is not allowed in state S4, expected `article`, `modele`
    S4 build
    ");
}

#[test]
fn very_verbose_adds_states() {
    insta::assert_snapshot!(walk(Verbosity::VeryVerbose), @r"
      S0 expects [of]
    S0 call of
    S0 -- of --> S1
      S1 accept expects [article]
    S1 call articleName
    S1 -- articleName:article --> S3
      S3 expects [modele]
    S3 build rejected
    S3 call modele
    S3 -- modele --> S4
      S4 accept expects [article, modele]
    S4 call of
    S4 reject of: `of` is not allowed in state S4, expected `article`, `modele`
    S4 build
    ");
}

#[test]
fn colored_lines_carry_escapes() {
    let grammar = Grammar::compile("a").unwrap();
    let tracer = PrintTracer::builder().colored(true).build();
    let mut b = Builder::new(grammar.shared_dfa(), grammar.shared_terms(), Recorder::new())
        .with_tracer(tracer);
    b.call("a", Vec::new()).unwrap();

    let line = &b.tracer().lines()[0];
    assert!(line.contains("\x1b[34mS0\x1b[0m"));
    assert!(line.contains(" a "));
}

#[test]
fn empty_trace_prints_nothing() {
    assert_eq!(PrintTracer::default().output(), "");
}
