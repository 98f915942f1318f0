//! Nondeterministic automaton with epsilon edges.
//!
//! State 0 is the start and state 1 the single accepting state. Ids come from
//! a counter and are never reused. A state may carry several labelled edges
//! for the same term; subset construction merges them.

use std::collections::BTreeSet;
use std::fmt;

use megabuilder_core::{Colors, TermId, TermTable};

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct NfaStateId(u32);

impl NfaStateId {
    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NfaStateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "N{}", self.0)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NfaState {
    is_final: bool,
    epsilons: Vec<NfaStateId>,
    transitions: Vec<(TermId, NfaStateId)>,
}

impl NfaState {
    pub fn is_final(&self) -> bool {
        self.is_final
    }

    /// Epsilon successors, deduplicated, in insertion order.
    pub fn epsilons(&self) -> &[NfaStateId] {
        &self.epsilons
    }

    /// Labelled edges in insertion order.
    pub fn transitions(&self) -> &[(TermId, NfaStateId)] {
        &self.transitions
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Nfa {
    states: Vec<NfaState>,
}

impl Nfa {
    pub const START: NfaStateId = NfaStateId(0);
    pub const ACCEPT: NfaStateId = NfaStateId(1);

    /// The two fixed states: 0 (start) and 1 (accepting).
    pub fn new() -> Self {
        Self {
            states: vec![
                NfaState::default(),
                NfaState {
                    is_final: true,
                    ..NfaState::default()
                },
            ],
        }
    }

    pub fn add_state(&mut self) -> NfaStateId {
        let id = NfaStateId(self.states.len() as u32);
        self.states.push(NfaState::default());
        id
    }

    pub fn add_epsilon(&mut self, from: NfaStateId, to: NfaStateId) {
        let epsilons = &mut self.states[from.index()].epsilons;
        if !epsilons.contains(&to) {
            epsilons.push(to);
        }
    }

    pub fn add_transition(&mut self, from: NfaStateId, term: TermId, to: NfaStateId) {
        let transitions = &mut self.states[from.index()].transitions;
        if !transitions.contains(&(term, to)) {
            transitions.push((term, to));
        }
    }

    pub fn state(&self, id: NfaStateId) -> &NfaState {
        &self.states[id.index()]
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NfaStateId, &NfaState)> {
        self.states
            .iter()
            .enumerate()
            .map(|(i, s)| (NfaStateId(i as u32), s))
    }

    /// Everything reachable from `seed` through epsilon edges, seed included.
    ///
    /// Worklist fixpoint: loops built by `*` and `+` make epsilon cycles.
    pub fn epsilon_closure(&self, seed: impl IntoIterator<Item = NfaStateId>) -> BTreeSet<NfaStateId> {
        let mut closure = BTreeSet::new();
        let mut worklist: Vec<NfaStateId> = seed.into_iter().collect();

        while let Some(id) = worklist.pop() {
            if !closure.insert(id) {
                continue;
            }
            for &next in &self.state(id).epsilons {
                if !closure.contains(&next) {
                    worklist.push(next);
                }
            }
        }
        closure
    }

    pub fn any_final(&self, set: &BTreeSet<NfaStateId>) -> bool {
        set.iter().any(|&id| self.state(id).is_final)
    }

    /// All states reachable from `set` on `term`, closed under epsilon.
    pub fn advance(&self, set: &BTreeSet<NfaStateId>, term: TermId) -> BTreeSet<NfaStateId> {
        let targets = set.iter().flat_map(|&id| {
            self.state(id)
                .transitions
                .iter()
                .filter(move |(t, _)| *t == term)
                .map(|&(_, to)| to)
        });
        self.epsilon_closure(targets)
    }

    /// Terms with at least one outgoing edge from `set`.
    pub fn next_terms(&self, set: &BTreeSet<NfaStateId>) -> BTreeSet<TermId> {
        set.iter()
            .flat_map(|&id| self.state(id).transitions.iter().map(|&(t, _)| t))
            .collect()
    }

    /// Direct simulation: the epsilon-closed state set after `trace`.
    pub fn simulate(&self, trace: &[TermId]) -> BTreeSet<NfaStateId> {
        let mut current = self.epsilon_closure([Self::START]);
        for &term in trace {
            if current.is_empty() {
                break;
            }
            current = self.advance(&current, term);
        }
        current
    }

    pub fn accepts(&self, trace: &[TermId]) -> bool {
        self.any_final(&self.simulate(trace))
    }

    pub fn dump(&self, terms: &TermTable, colors: Colors) -> String {
        NfaDump {
            nfa: self,
            terms,
            colors,
        }
        .to_string()
    }
}

impl Default for Nfa {
    fn default() -> Self {
        Self::new()
    }
}

struct NfaDump<'a> {
    nfa: &'a Nfa,
    terms: &'a TermTable,
    colors: Colors,
}

impl fmt::Display for NfaDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = self.colors;
        for (id, state) in self.nfa.iter() {
            write!(f, "{}{id}{}", c.state, c.reset)?;
            if state.is_final {
                write!(f, " {}accept{}", c.accept, c.reset)?;
            }
            writeln!(f)?;

            for &(term, to) in &state.transitions {
                let label = self
                    .terms
                    .try_get(term)
                    .map_or_else(|| format!("#{}", term.as_u32()), ToString::to_string);
                writeln!(f, "  {label} {}->{} {}{to}{}", c.dim, c.reset, c.state, c.reset)?;
            }
            for &to in &state.epsilons {
                writeln!(f, "  {}ε ->{} {}{to}{}", c.dim, c.reset, c.state, c.reset)?;
            }
        }
        Ok(())
    }
}
