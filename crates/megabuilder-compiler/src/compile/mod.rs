//! Automaton construction.
//!
//! `thompson` lowers the expression tree into an [`Nfa`]; `subset` turns that
//! into the production DFA. Neither stage can fail on a well-formed tree
//! except by exceeding the configured state limit.

mod nfa;
pub mod subset;
pub mod thompson;

#[cfg(test)]
mod thompson_tests;

pub use nfa::{Nfa, NfaState, NfaStateId};
pub use subset::{Determinized, determinize};
pub use thompson::build_nfa;
