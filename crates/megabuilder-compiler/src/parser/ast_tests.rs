use indoc::indoc;

use super::parse;
use crate::Grammar;

#[test]
fn single_term() {
    insta::assert_snapshot!(Grammar::expect_ast("of"), @r"
    Alt
      Seq
        Term of
    ");
}

#[test]
fn catalog_example() {
    insta::assert_snapshot!(Grammar::expect_ast("of (simpleArticle:article | articleName:article modele+)*"), @r"
    Alt
      Seq
        Term of
        Star
          Alt
            Seq
              Term simpleArticle:article
            Seq
              Term articleName:article
              Plus
                Term modele
    ");
}

#[test]
fn quantifiers() {
    insta::assert_snapshot!(Grammar::expect_ast("a* b+ c?"), @r"
    Alt
      Seq
        Star
          Term a
        Plus
          Term b
        Optional
          Term c
    ");
}

#[test]
fn top_level_alternation() {
    insta::assert_snapshot!(Grammar::expect_ast("a b | c"), @r"
    Alt
      Seq
        Term a
        Term b
      Seq
        Term c
    ");
}

#[test]
fn single_branch_group_is_kept() {
    insta::assert_snapshot!(Grammar::expect_ast("(a)"), @r"
    Alt
      Seq
        Alt
          Seq
            Term a
    ");
}

#[test]
fn multiline_grammar() {
    let source = indoc! {"
        header
        (line:row
          | note?)*
        footer
    "};
    insta::assert_snapshot!(Grammar::expect_ast(source), @r"
    Alt
      Seq
        Term header
        Star
          Alt
            Seq
              Term line:row
            Seq
              Optional
                Term note
        Term footer
    ");
}

#[test]
fn alias_pairs_name_before_colon() {
    let parsed = parse("articleName:article").unwrap();
    let terms = parsed.root.terms();
    assert_eq!(terms.len(), 1);
    assert_eq!(terms[0].term.name(), "articleName");
    assert_eq!(terms[0].term.alias(), "article");
    assert_eq!(u32::from(terms[0].span.start()), 0);
    assert_eq!(u32::from(terms[0].span.end()), 19);
}

#[test]
fn repeated_terms_share_an_id() {
    let parsed = parse("a b a a:x").unwrap();
    let ids: Vec<_> = parsed.root.terms().iter().map(|t| t.id.as_u32()).collect();
    assert_eq!(ids, vec![0, 1, 0, 2]);
    assert_eq!(parsed.terms.len(), 3);
}

#[test]
fn printer_normalizes_spacing() {
    let parsed = parse("  of(a:b|c  d+ )*  e?").unwrap();
    insta::assert_snapshot!(parsed.root.to_string(), @"of (a:b | c d+)* e?");
}

#[test]
fn printer_drops_redundant_alias() {
    let parsed = parse("a:a b").unwrap();
    insta::assert_snapshot!(parsed.root.to_string(), @"a b");
}

#[test]
fn printer_round_trips() {
    let grammars = [
        "of",
        "a b c",
        "a | b | c",
        "of (simpleArticle:article | articleName:article modele+)*",
        "(a)",
        "((a))",
        "(a b)* c+",
        "(a | b)? (c)+",
        "x (y (z | w)* | v)+ u?",
        "a:b c:d | e:f",
        "((a | b) c)*",
    ];

    for source in grammars {
        let first = parse(source).unwrap().root;
        let printed = first.to_string();
        let second = parse(&printed).unwrap().root;
        assert_eq!(first, second, "round trip of `{source}` via `{printed}`");
    }
}

#[test]
fn printed_form_is_a_fixpoint() {
    let source = "of (simpleArticle:article | articleName:article modele+)*";
    let printed = parse(source).unwrap().root.to_string();
    assert_eq!(printed, source);
}
