use super::*;

#[test]
fn plain_term_aliases_itself() {
    let term = Term::plain("of");
    assert_eq!(term.name(), "of");
    assert_eq!(term.alias(), "of");
    assert!(!term.is_aliased());
    assert_eq!(term.to_string(), "of");
}

#[test]
fn aliased_term_display() {
    let term = Term::aliased("simpleArticle", "article");
    assert!(term.is_aliased());
    assert_eq!(term.to_string(), "simpleArticle:article");
}

#[test]
fn intern_deduplicates_pairs() {
    let mut table = TermTable::new();
    let a = table.intern_plain("modele");
    let b = table.intern_plain("modele");
    let c = table.intern_aliased("modele", "item");

    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(table.len(), 2);
}

#[test]
fn ids_follow_insertion_order() {
    let mut table = TermTable::new();
    let z = table.intern_plain("z");
    let a = table.intern_plain("a");

    assert_eq!(z.as_u32(), 0);
    assert_eq!(a.as_u32(), 1);
    assert!(z < a);
}

#[test]
fn resolve_and_find() {
    let mut table = TermTable::new();
    let id = table.intern_aliased("articleName", "article");

    assert_eq!(table.get(id).name(), "articleName");
    assert_eq!(table.find("articleName", "article"), Some(id));
    assert_eq!(table.find("articleName", "articleName"), None);
    assert!(table.try_get(TermId::from_raw(7)).is_none());
}

#[test]
fn by_alias_collects_shared_callables() {
    let mut table = TermTable::new();
    table.intern_plain("of");
    let simple = table.intern_aliased("simpleArticle", "article");
    let named = table.intern_aliased("articleName", "article");

    let ids: Vec<_> = table.by_alias("article").collect();
    assert_eq!(ids, vec![simple, named]);
    assert_eq!(table.by_alias("missing").count(), 0);
}

#[test]
fn callables_are_distinct_aliases() {
    let mut table = TermTable::new();
    table.intern_plain("of");
    table.intern_aliased("simpleArticle", "article");
    table.intern_aliased("articleName", "article");
    table.intern_plain("modele");

    assert_eq!(table.callables(), vec!["of", "article", "modele"]);
}

#[test]
fn serializes_as_term_list() {
    let mut table = TermTable::new();
    table.intern_plain("of");
    table.intern_aliased("simpleArticle", "article");

    let json = serde_json::to_string(&table).unwrap();
    insta::assert_snapshot!(json, @r#"[{"name":"of","alias":"of"},{"name":"simpleArticle","alias":"article"}]"#);
}
