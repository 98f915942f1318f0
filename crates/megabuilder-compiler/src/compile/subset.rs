//! Subset construction: NFA to DFA.
//!
//! A DFA state stands for an epsilon-closed set of NFA states (its core).
//! Two DFA states are the same exactly when their cores are equal, so the
//! result is deterministic but not minimal.

use std::collections::BTreeSet;

use indexmap::{IndexMap, IndexSet};
use megabuilder_core::{Dfa, DfaState, DfaStateId, TermId};

use super::nfa::{Nfa, NfaStateId};
use crate::Error;

/// DFA together with the NFA core behind each of its states.
#[derive(Debug, Clone)]
pub struct Determinized {
    pub dfa: Dfa,
    /// `cores[i]` is the NFA state set behind DFA state `i`.
    pub cores: Vec<BTreeSet<NfaStateId>>,
}

impl Determinized {
    /// Drop the construction bookkeeping.
    pub fn into_dfa(self) -> Dfa {
        self.dfa
    }
}

/// Build the DFA reachable from NFA state 0.
///
/// `state_limit` bounds the number of DFA states; None = unbounded.
pub fn determinize(nfa: &Nfa, state_limit: Option<usize>) -> Result<Determinized, Error> {
    let mut builder = SubsetBuilder {
        nfa,
        cores: IndexSet::new(),
        states: Vec::new(),
        state_limit,
    };

    let start = builder.find_or_create([Nfa::START])?;
    debug_assert_eq!(start, DfaStateId::START);

    // Pending states are exactly those at or past `next`, in creation order.
    let mut next = 0;
    while next < builder.cores.len() {
        let core = builder.cores[next].clone();
        for (term, targets) in group_by_term(nfa, &core) {
            let target = builder.find_or_create(targets)?;
            builder.states[next].insert(term, target);
        }
        next += 1;
    }

    Ok(Determinized {
        dfa: Dfa::from_states(builder.states),
        cores: builder.cores.into_iter().collect(),
    })
}

/// Non-epsilon edges of every member, grouped by term.
///
/// Members are visited in ascending id order and each member's edges in
/// insertion order, which fixes the order of the resulting transitions.
fn group_by_term(nfa: &Nfa, core: &BTreeSet<NfaStateId>) -> IndexMap<TermId, BTreeSet<NfaStateId>> {
    let mut groups: IndexMap<TermId, BTreeSet<NfaStateId>> = IndexMap::new();
    for &id in core {
        for &(term, to) in nfa.state(id).transitions() {
            groups.entry(term).or_default().insert(to);
        }
    }
    groups
}

struct SubsetBuilder<'a> {
    nfa: &'a Nfa,
    /// Insertion index is the DFA state id.
    cores: IndexSet<BTreeSet<NfaStateId>>,
    states: Vec<DfaState>,
    state_limit: Option<usize>,
}

impl SubsetBuilder<'_> {
    fn find_or_create(
        &mut self,
        seed: impl IntoIterator<Item = NfaStateId>,
    ) -> Result<DfaStateId, Error> {
        let core = self.nfa.epsilon_closure(seed);
        if let Some(index) = self.cores.get_index_of(&core) {
            return Ok(DfaStateId::from_raw(index as u32));
        }

        if let Some(limit) = self.state_limit
            && self.cores.len() >= limit
        {
            return Err(Error::StateLimitExceeded { limit });
        }

        let is_final = self.nfa.any_final(&core);
        let (index, _) = self.cores.insert_full(core);
        self.states.push(DfaState::new(is_final));
        Ok(DfaStateId::from_raw(index as u32))
    }
}
