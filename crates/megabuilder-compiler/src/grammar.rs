//! Compiled grammar facade.

use std::collections::BTreeSet;
use std::sync::Arc;

use megabuilder_core::{Colors, Dfa, TermTable};

use crate::Result;
use crate::compile::{Nfa, NfaStateId, build_nfa, determinize};
use crate::parser::lexer::lex;
use crate::parser::{Expr, Parser};

const DEFAULT_RECURSION_LIMIT: u32 = 256;
const DEFAULT_STATE_LIMIT: usize = 4096;

/// Compilation limits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Limits {
    /// Maximum group nesting depth (default: 256).
    pub recursion: u32,
    /// Maximum number of DFA states (default: 4,096).
    pub states: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            recursion: DEFAULT_RECURSION_LIMIT,
            states: DEFAULT_STATE_LIMIT,
        }
    }
}

impl Limits {
    pub fn with_recursion(mut self, limit: u32) -> Self {
        self.recursion = limit;
        self
    }

    pub fn with_states(mut self, limit: usize) -> Self {
        self.states = limit;
        self
    }
}

/// Every stage's output for one grammar text.
///
/// The term table and DFA are behind `Arc` so builders can share them.
#[derive(Debug, Clone)]
pub struct Grammar {
    source: String,
    ast: Expr,
    terms: Arc<TermTable>,
    nfa: Nfa,
    dfa: Arc<Dfa>,
    cores: Vec<BTreeSet<NfaStateId>>,
}

impl Grammar {
    pub fn compile(source: &str) -> Result<Self> {
        Self::compile_with(source, Limits::default())
    }

    /// Parse, lower and determinize. Fails before any automaton exists if
    /// the text is malformed.
    pub fn compile_with(source: &str, limits: Limits) -> Result<Self> {
        let tokens = lex(source);
        log::debug!("lexed {} tokens", tokens.len());

        let parsed = Parser::new(source, tokens)
            .with_recursion_limit(Some(limits.recursion))
            .parse()?;
        log::debug!("parsed grammar with {} distinct terms", parsed.terms.len());

        let nfa = build_nfa(&parsed.root);
        log::debug!("nfa: {} states", nfa.len());

        let determinized = determinize(&nfa, Some(limits.states))?;
        log::debug!("dfa: {} states", determinized.dfa.len());

        Ok(Self {
            source: source.to_owned(),
            ast: parsed.root,
            terms: Arc::new(parsed.terms),
            nfa,
            dfa: Arc::new(determinized.dfa),
            cores: determinized.cores,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn ast(&self) -> &Expr {
        &self.ast
    }

    pub fn terms(&self) -> &TermTable {
        &self.terms
    }

    pub fn nfa(&self) -> &Nfa {
        &self.nfa
    }

    pub fn dfa(&self) -> &Dfa {
        &self.dfa
    }

    /// NFA state set behind each DFA state, indexed by DFA state id.
    pub fn cores(&self) -> &[BTreeSet<NfaStateId>] {
        &self.cores
    }

    pub fn shared_terms(&self) -> Arc<TermTable> {
        Arc::clone(&self.terms)
    }

    pub fn shared_dfa(&self) -> Arc<Dfa> {
        Arc::clone(&self.dfa)
    }

    pub fn dump_ast(&self) -> String {
        self.ast.dump()
    }

    pub fn dump_nfa(&self, colors: Colors) -> String {
        self.nfa.dump(&self.terms, colors)
    }

    pub fn dump_dfa(&self, colors: Colors) -> String {
        megabuilder_core::dump(&self.dfa, &self.terms, colors)
    }
}
