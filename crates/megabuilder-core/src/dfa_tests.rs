use super::*;

fn id(n: u32) -> DfaStateId {
    DfaStateId::from_raw(n)
}

fn term(n: u32) -> TermId {
    TermId::from_raw(n)
}

/// `a b*` with states numbered 0, 1.
fn a_then_bs() -> Dfa {
    let mut s0 = DfaState::new(false);
    s0.insert(term(0), id(1));
    let mut s1 = DfaState::new(true);
    s1.insert(term(1), id(1));
    Dfa::from_states(vec![s0, s1])
}

#[test]
fn state_zero_is_start() {
    let dfa = a_then_bs();
    assert_eq!(dfa.start(), DfaStateId::START);
    assert_eq!(dfa.start().to_string(), "S0");
    assert!(!dfa.state(dfa.start()).is_final());
}

#[test]
fn step_follows_edges() {
    let dfa = a_then_bs();
    assert_eq!(dfa.step(id(0), term(0)), Some(id(1)));
    assert_eq!(dfa.step(id(0), term(1)), None);
    assert_eq!(dfa.step(id(9), term(0)), None);
}

#[test]
fn accepts_traces() {
    let dfa = a_then_bs();
    assert!(dfa.accepts(&[term(0)]));
    assert!(dfa.accepts(&[term(0), term(1), term(1)]));
    assert!(!dfa.accepts(&[]));
    assert!(!dfa.accepts(&[term(1)]));
    assert!(!dfa.accepts(&[term(0), term(0)]));
}

#[test]
fn insert_replaces_target() {
    let mut state = DfaState::new(false);
    state.insert(term(0), id(1));
    state.insert(term(0), id(2));
    assert_eq!(state.transition_count(), 1);
    assert_eq!(state.next(term(0)), Some(id(2)));
}

#[test]
fn reachable_in_discovery_order() {
    let mut s0 = DfaState::new(false);
    s0.insert(term(0), id(2));
    s0.insert(term(1), id(1));
    let s1 = DfaState::new(true);
    let s2 = DfaState::new(true);
    let unreachable = DfaState::new(true);
    let dfa = Dfa::from_states(vec![s0, s1, s2, unreachable]);

    assert_eq!(dfa.reachable(), vec![id(0), id(2), id(1)]);
}

#[test]
fn isomorphic_under_renumbering() {
    let dfa = a_then_bs();

    // Same shape with a detour state inserted at index 1.
    let mut s0 = DfaState::new(false);
    s0.insert(term(0), id(2));
    let mut s1 = DfaState::new(false);
    s1.insert(term(0), id(1));
    let mut s2 = DfaState::new(true);
    s2.insert(term(1), id(2));
    let three = Dfa::from_states(vec![s0, s1, s2]);
    assert!(!dfa.is_isomorphic(&three));

    let mut r0 = DfaState::new(false);
    r0.insert(term(0), id(1));
    let mut r1 = DfaState::new(true);
    r1.insert(term(1), id(1));
    assert!(dfa.is_isomorphic(&Dfa::from_states(vec![r0, r1])));
}

#[test]
fn not_isomorphic_when_finality_differs() {
    let dfa = a_then_bs();
    let mut s0 = DfaState::new(false);
    s0.insert(term(0), id(1));
    let mut s1 = DfaState::new(false);
    s1.insert(term(1), id(1));
    assert!(!dfa.is_isomorphic(&Dfa::from_states(vec![s0, s1])));
}

#[test]
fn not_isomorphic_when_labels_differ() {
    let dfa = a_then_bs();
    let mut s0 = DfaState::new(false);
    s0.insert(term(0), id(1));
    let mut s1 = DfaState::new(true);
    s1.insert(term(2), id(1));
    assert!(!dfa.is_isomorphic(&Dfa::from_states(vec![s0, s1])));
}

#[test]
fn swapped_indices_are_isomorphic() {
    // 0 -a-> 1 -b-> 2(final)  vs  0 -a-> 2 -b-> 1(final)
    let mut a0 = DfaState::new(false);
    a0.insert(term(0), id(1));
    let mut a1 = DfaState::new(false);
    a1.insert(term(1), id(2));
    let left = Dfa::from_states(vec![a0, a1, DfaState::new(true)]);

    let mut b0 = DfaState::new(false);
    b0.insert(term(0), id(2));
    let mut b2 = DfaState::new(false);
    b2.insert(term(1), id(1));
    let right = Dfa::from_states(vec![b0, DfaState::new(true), b2]);

    assert!(left.is_isomorphic(&right));
    assert!(right.is_isomorphic(&left));
}
