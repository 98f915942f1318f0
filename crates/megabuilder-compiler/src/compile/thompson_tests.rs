use crate::Grammar;
use crate::compile::Nfa;

#[test]
fn single_term() {
    insta::assert_snapshot!(Grammar::expect_nfa("a"), @r"
    N0
      a -> N1
    N1 accept
    ");
}

#[test]
fn sequence_chains_through_intermediates() {
    insta::assert_snapshot!(Grammar::expect_nfa("a b c"), @r"
    N0
      a -> N2
    N1 accept
    N2
      b -> N3
    N3
      c -> N1
    ");
}

#[test]
fn alternation_shares_endpoints() {
    insta::assert_snapshot!(Grammar::expect_nfa("a | b"), @r"
    N0
      a -> N1
      b -> N1
    N1 accept
    ");
}

#[test]
fn optional_adds_skip() {
    insta::assert_snapshot!(Grammar::expect_nfa("a?"), @r"
    N0
      a -> N1
      ε -> N1
    N1 accept
    ");
}

#[test]
fn star_loops_over_fresh_states() {
    insta::assert_snapshot!(Grammar::expect_nfa("a*"), @r"
    N0
      ε -> N2
    N1 accept
    N2
      a -> N3
      ε -> N3
    N3
      ε -> N2
      ε -> N1
    ");
}

#[test]
fn plus_has_no_skip() {
    insta::assert_snapshot!(Grammar::expect_nfa("a+"), @r"
    N0
      ε -> N2
    N1 accept
    N2
      a -> N3
    N3
      ε -> N2
      ε -> N1
    ");
}

#[test]
fn catalog_example() {
    insta::assert_snapshot!(Grammar::expect_nfa("of (simpleArticle:article | articleName:article modele+)*"), @r"
    N0
      of -> N2
    N1 accept
    N2
      ε -> N3
    N3
      simpleArticle:article -> N4
      articleName:article -> N5
      ε -> N4
    N4
      ε -> N3
      ε -> N1
    N5
      ε -> N6
    N6
      modele -> N7
    N7
      ε -> N6
      ε -> N4
    ");
}

#[test]
fn shared_prefix_keeps_both_edges() {
    let grammar = Grammar::expect_valid("a | a b");
    let a = grammar.terms().find("a", "a").unwrap();
    let edges: Vec<_> = grammar
        .nfa()
        .state(Nfa::START)
        .transitions()
        .iter()
        .filter(|(t, _)| *t == a)
        .collect();
    assert_eq!(edges.len(), 2);
}

#[test]
fn repeated_occurrence_is_not_duplicated() {
    let grammar = Grammar::expect_valid("a | a");
    assert_eq!(grammar.nfa().state(Nfa::START).transitions().len(), 1);
}

#[test]
fn loops_do_not_leak_into_siblings() {
    // With loops closed over shared endpoints, `a* b*` would accept `b a`.
    let grammar = Grammar::expect_valid("a* b*");
    let a = grammar.terms().find("a", "a").unwrap();
    let b = grammar.terms().find("b", "b").unwrap();
    let nfa = grammar.nfa();

    assert!(nfa.accepts(&[]));
    assert!(nfa.accepts(&[a, a, b]));
    assert!(nfa.accepts(&[b, b]));
    assert!(!nfa.accepts(&[b, a]));
}

#[test]
fn star_does_not_skip_the_prefix() {
    let grammar = Grammar::expect_valid("of (simpleArticle:article | articleName:article modele+)*");
    let terms = grammar.terms();
    let of = terms.find("of", "of").unwrap();
    let named = terms.find("articleName", "article").unwrap();
    let modele = terms.find("modele", "modele").unwrap();
    let nfa = grammar.nfa();

    assert!(!nfa.accepts(&[]));
    assert!(nfa.accepts(&[of]));
    assert!(!nfa.accepts(&[of, modele]));
    assert!(!nfa.accepts(&[of, named]));
    assert!(nfa.accepts(&[of, named, modele, modele]));
}
