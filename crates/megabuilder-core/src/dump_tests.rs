use super::*;

fn sample() -> (Dfa, TermTable) {
    let mut terms = TermTable::new();
    let of = terms.intern_plain("of");
    let simple = terms.intern_aliased("simpleArticle", "article");

    let mut s0 = DfaState::new(false);
    s0.insert(of, DfaStateId::from_raw(1));
    let mut s1 = DfaState::new(true);
    s1.insert(simple, DfaStateId::from_raw(1));

    (Dfa::from_states(vec![s0, s1]), terms)
}

#[test]
fn dump_plain() {
    let (dfa, terms) = sample();
    insta::assert_snapshot!(dump(&dfa, &terms, Colors::OFF), @r"
    S0
      of -> S1
    S1 accept
      simpleArticle:article -> S1
    ");
}

#[test]
fn dump_unknown_term_falls_back_to_id() {
    let (dfa, _) = sample();
    let empty = TermTable::new();
    insta::assert_snapshot!(dump(&dfa, &empty, Colors::OFF), @r"
    S0
      #0 -> S1
    S1 accept
      #1 -> S1
    ");
}

#[test]
fn dump_colored() {
    let (dfa, terms) = sample();
    let out = dump(&dfa, &terms, Colors::ON);
    assert!(out.contains("\x1b[34mS0\x1b[0m"));
    assert!(out.contains("\x1b[32maccept\x1b[0m"));
    assert!(Colors::ON.is_enabled());
    assert!(!Colors::new(false).is_enabled());
}
