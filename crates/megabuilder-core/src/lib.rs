#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures shared by the megabuilder compiler and runtime.
//!
//! - [`Term`] / [`TermTable`]: interned grammar terms, addressed by [`TermId`]
//! - [`Dfa`] / [`DfaState`]: the production transition table a builder walks
//! - [`dump`]: plain-text rendering of a table for inspection

mod colors;
mod dfa;
mod dump;
mod term;

#[cfg(test)]
mod dfa_tests;
#[cfg(test)]
mod dump_tests;
#[cfg(test)]
mod term_tests;

pub use colors::Colors;
pub use dfa::{Dfa, DfaState, DfaStateId};
pub use dump::dump;
pub use term::{Term, TermId, TermTable};
