//! megabuilder: chainable builders whose legal calls follow a grammar.
//!
//! A grammar such as `of (simpleArticle:article | articleName:article modele+)*`
//! is compiled once into a DFA; every builder walks that DFA and forwards the
//! calls it accepts to an [`Actions`] object.
//!
//! # Example
//!
//! ```
//! use megabuilder_lib::{Recorder, create_builder};
//!
//! let mut builder = create_builder("of (simpleArticle:article | articleName:article modele+)*", Recorder::new)
//!     .expect("grammar compiles");
//!
//! builder
//!     .call("of", vec!["spring".into()])
//!     .and_then(|b| b.call("articleName", vec!["flea spray".into()]))
//!     .expect("legal calls");
//! assert_eq!(builder.expected(), vec!["modele"]);
//! assert!(builder.build().is_err());
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod blueprint;


pub use blueprint::{Blueprint, create_builder};
pub use megabuilder_compiler::{Diagnostics, DiagnosticsPrinter, Grammar, Limits};
pub use megabuilder_core::{Colors, Dfa, DfaStateId, Term, TermId, TermTable};
pub use megabuilder_runtime::{ActionError, Actions, Builder, Recorder, RecordedCall, RuntimeError};

/// Tracing and dispatch internals.
pub mod engine {
    pub use megabuilder_runtime::engine::*;
}

/// Errors from either compiling a grammar or driving a builder.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Compile(#[from] megabuilder_compiler::Error),

    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl Error {
    /// Parse diagnostics, when the grammar text itself was malformed.
    pub fn diagnostics(&self) -> Option<&Diagnostics> {
        match self {
            Error::Compile(megabuilder_compiler::Error::GrammarParseError(d)) => Some(d),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
