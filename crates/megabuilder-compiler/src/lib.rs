//! megabuilder compiler: grammar text to transition table.
//!
//! Pipeline, each stage feeding only the next:
//! - `parser` - lexer and recursive-descent parser producing an [`Expr`] tree
//! - `compile::thompson` - Thompson construction of an [`Nfa`]
//! - `compile::subset` - subset construction of the production [`Dfa`]
//! - `diagnostics` - spanned parse errors and their rendering
//! - [`Grammar`] - the facade running all of the above
//!
//! [`Dfa`]: megabuilder_core::Dfa

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod compile;
pub mod diagnostics;
pub mod parser;

mod grammar;

#[cfg(test)]
mod grammar_tests;
#[cfg(test)]
pub mod test_utils;

pub use compile::{Nfa, NfaState, NfaStateId};
pub use diagnostics::{DiagnosticKind, Diagnostics, DiagnosticsPrinter};
pub use grammar::{Grammar, Limits};
pub use parser::{Expr, TermExpr};

/// Errors that can occur while compiling a grammar.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// Groups nested deeper than [`Limits::recursion`].
    #[error("recursion limit exceeded")]
    RecursionLimitExceeded,

    /// Subset construction produced more than [`Limits::states`] states.
    #[error("automaton exceeds the limit of {limit} states")]
    StateLimitExceeded { limit: usize },

    #[error("grammar parsing failed: {0}")]
    GrammarParseError(Diagnostics),
}

pub type Result<T> = std::result::Result<T, Error>;
