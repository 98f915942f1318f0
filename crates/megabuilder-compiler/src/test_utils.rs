//! Test helpers returning printable stage outputs.

use megabuilder_core::Colors;

use crate::{Error, Grammar};

impl Grammar {
    pub fn expect_valid(source: &str) -> Grammar {
        match Grammar::compile(source) {
            Ok(grammar) => grammar,
            Err(e) => panic!("expected `{source}` to compile, got: {e}"),
        }
    }

    pub fn expect_ast(source: &str) -> String {
        Self::expect_valid(source).ast().dump()
    }

    pub fn expect_nfa(source: &str) -> String {
        Self::expect_valid(source).dump_nfa(Colors::OFF)
    }

    pub fn expect_dfa(source: &str) -> String {
        Self::expect_valid(source).dump_dfa(Colors::OFF)
    }

    /// Plain one-line rendering of the parse diagnostic.
    pub fn expect_invalid(source: &str) -> String {
        match Grammar::compile(source) {
            Err(Error::GrammarParseError(diagnostics)) => diagnostics.printer().render(),
            Err(e) => panic!("expected a parse error for `{source}`, got: {e}"),
            Ok(_) => panic!("expected `{source}` to be rejected"),
        }
    }
}
