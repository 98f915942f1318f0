//! Production transition table.
//!
//! State 0 is always the start state. Every state is reachable from it, and
//! the table is never mutated once a builder holds it.

use std::collections::{HashMap, VecDeque};

use indexmap::IndexMap;
use serde::Serialize;

use crate::TermId;

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize)]
#[serde(transparent)]
pub struct DfaStateId(u32);

impl DfaStateId {
    pub const START: Self = Self(0);

    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub fn from_raw(index: u32) -> Self {
        Self(index)
    }
}

impl std::fmt::Display for DfaStateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "S{}", self.0)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DfaState {
    is_final: bool,
    transitions: IndexMap<TermId, DfaStateId>,
}

impl DfaState {
    pub fn new(is_final: bool) -> Self {
        Self {
            is_final,
            transitions: IndexMap::new(),
        }
    }

    pub fn is_final(&self) -> bool {
        self.is_final
    }

    /// Record `term -> target`. A later insert for the same term replaces the target.
    pub fn insert(&mut self, term: TermId, target: DfaStateId) {
        self.transitions.insert(term, target);
    }

    pub fn next(&self, term: TermId) -> Option<DfaStateId> {
        self.transitions.get(&term).copied()
    }

    /// Outgoing edges in insertion order.
    pub fn transitions(&self) -> impl Iterator<Item = (TermId, DfaStateId)> + '_ {
        self.transitions.iter().map(|(&t, &s)| (t, s))
    }

    pub fn terms(&self) -> impl Iterator<Item = TermId> + '_ {
        self.transitions.keys().copied()
    }

    pub fn transition_count(&self) -> usize {
        self.transitions.len()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Dfa {
    states: Vec<DfaState>,
}

impl Dfa {
    /// Wrap a state vector. Index 0 becomes the start state.
    pub fn from_states(states: Vec<DfaState>) -> Self {
        Self { states }
    }

    pub fn start(&self) -> DfaStateId {
        DfaStateId::START
    }

    /// # Panics
    /// Panics if `id` is out of range for this table.
    #[inline]
    pub fn state(&self, id: DfaStateId) -> &DfaState {
        &self.states[id.index()]
    }

    #[inline]
    pub fn get(&self, id: DfaStateId) -> Option<&DfaState> {
        self.states.get(id.index())
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (DfaStateId, &DfaState)> {
        self.states
            .iter()
            .enumerate()
            .map(|(i, s)| (DfaStateId(i as u32), s))
    }

    pub fn step(&self, from: DfaStateId, term: TermId) -> Option<DfaStateId> {
        self.get(from)?.next(term)
    }

    /// Whether the whole trace is accepted starting from state 0.
    pub fn accepts(&self, trace: &[TermId]) -> bool {
        let mut current = self.start();
        for &term in trace {
            match self.step(current, term) {
                Some(next) => current = next,
                None => return false,
            }
        }
        self.get(current).is_some_and(DfaState::is_final)
    }

    /// States reachable from the start, in breadth-first discovery order.
    pub fn reachable(&self) -> Vec<DfaStateId> {
        if self.is_empty() {
            return Vec::new();
        }
        let mut seen = vec![false; self.len()];
        let mut order = Vec::new();
        let mut queue = VecDeque::from([self.start()]);
        seen[0] = true;

        while let Some(id) = queue.pop_front() {
            order.push(id);
            for (_, target) in self.state(id).transitions() {
                if !seen[target.index()] {
                    seen[target.index()] = true;
                    queue.push_back(target);
                }
            }
        }
        order
    }

    /// Structural equality up to state renumbering.
    ///
    /// Labels are compared by [`TermId`], so both tables must come from the
    /// same term numbering.
    pub fn is_isomorphic(&self, other: &Dfa) -> bool {
        if self.len() != other.len() {
            return false;
        }
        if self.is_empty() {
            return true;
        }

        let mut forward: HashMap<DfaStateId, DfaStateId> = HashMap::new();
        let mut backward: HashMap<DfaStateId, DfaStateId> = HashMap::new();
        let mut queue = VecDeque::from([(self.start(), other.start())]);
        forward.insert(self.start(), other.start());
        backward.insert(other.start(), self.start());

        while let Some((a, b)) = queue.pop_front() {
            let (sa, sb) = (self.state(a), other.state(b));
            if sa.is_final() != sb.is_final() || sa.transition_count() != sb.transition_count() {
                return false;
            }
            for (term, ta) in sa.transitions() {
                let Some(tb) = sb.next(term) else {
                    return false;
                };
                match (forward.get(&ta), backward.get(&tb)) {
                    (None, None) => {
                        forward.insert(ta, tb);
                        backward.insert(tb, ta);
                        queue.push_back((ta, tb));
                    }
                    (Some(&fa), Some(&fb)) if fa == tb && fb == ta => {}
                    _ => return false,
                }
            }
        }

        forward.len() == self.reachable().len()
    }
}
