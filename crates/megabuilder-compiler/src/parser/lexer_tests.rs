use super::lexer::{TokenKind, lex, token_text};

fn snapshot(source: &str) -> String {
    lex(source)
        .iter()
        .map(|t| format!("{:?} {:?}", t.kind, token_text(source, t)))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn operators_and_identifiers() {
    insta::assert_snapshot!(snapshot("of (simpleArticle:article | modele+)*"), @r#"
    Ident "of"
    ParenOpen "("
    Ident "simpleArticle"
    Colon ":"
    Ident "article"
    Pipe "|"
    Ident "modele"
    Plus "+"
    ParenClose ")"
    Star "*"
    "#);
}

#[test]
fn whitespace_is_dropped() {
    let tokens = lex(" a\t\tb\r\n  c ");
    let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(kinds, vec![TokenKind::Ident; 3]);
}

#[test]
fn operators_need_no_separating_space() {
    insta::assert_snapshot!(snapshot("a|b?(c)"), @r#"
    Ident "a"
    Pipe "|"
    Ident "b"
    Question "?"
    ParenOpen "("
    Ident "c"
    ParenClose ")"
    "#);
}

#[test]
fn identifiers_take_any_non_operator_character() {
    insta::assert_snapshot!(snapshot("prix-€ x.y_2 [z]"), @r#"
    Ident "prix-€"
    Ident "x.y_2"
    Ident "[z]"
    "#);
}

#[test]
fn spans_point_into_source() {
    let source = "  of  modele";
    let tokens = lex(source);
    assert_eq!(u32::from(tokens[0].span.start()), 2);
    assert_eq!(u32::from(tokens[1].span.start()), 6);
    assert_eq!(token_text(source, &tokens[1]), "modele");
}

#[test]
fn empty_input_has_no_tokens() {
    assert!(lex("").is_empty());
    assert!(lex(" \n\t").is_empty());
}
