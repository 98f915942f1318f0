use megabuilder_compiler::{Grammar, Limits};
use megabuilder_runtime::{Actions, Builder};

use crate::Result;

/// A compiled grammar from which any number of chains can be started.
///
/// Chains share the DFA and term table; each owns its cursor and its
/// action object.
#[derive(Debug, Clone)]
pub struct Blueprint {
    grammar: Grammar,
}

impl Blueprint {
    pub fn compile(grammar: &str) -> Result<Self> {
        Self::with_limits(grammar, Limits::default())
    }

    pub fn with_limits(grammar: &str, limits: Limits) -> Result<Self> {
        let grammar = Grammar::compile_with(grammar, limits)?;
        log::debug!(
            "blueprint ready: {} terms, {} states",
            grammar.terms().len(),
            grammar.dfa().len()
        );
        Ok(Self { grammar })
    }

    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    /// Every callable name the grammar uses anywhere.
    pub fn callables(&self) -> Vec<&str> {
        self.grammar.terms().callables()
    }

    /// A fresh chain at the start state.
    pub fn builder<A: Actions>(&self, actions: A) -> Builder<A> {
        Builder::new(
            self.grammar.shared_dfa(),
            self.grammar.shared_terms(),
            actions,
        )
    }
}

/// Compile `grammar` and start one chain on the action object `factory`
/// makes.
///
/// Malformed grammar text fails here, before the factory runs.
pub fn create_builder<A: Actions>(grammar: &str, factory: impl FnOnce() -> A) -> Result<Builder<A>> {
    let blueprint = Blueprint::compile(grammar)?;
    Ok(blueprint.builder(factory()))
}
