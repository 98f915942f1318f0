//! The chainable dispatch cursor.

use std::sync::Arc;

use megabuilder_core::{Dfa, DfaStateId, TermId, TermTable};

use super::actions::Actions;
use super::error::RuntimeError;
use super::trace::{NoopTracer, Tracer};

/// A call chain over a compiled grammar.
///
/// The DFA and term table are shared read-only; the cursor, the action
/// object and the tracer belong to this chain alone.
#[derive(Debug, Clone)]
pub struct Builder<A: Actions, T: Tracer = NoopTracer> {
    dfa: Arc<Dfa>,
    terms: Arc<TermTable>,
    current: DfaStateId,
    actions: A,
    tracer: T,
}

impl<A: Actions> Builder<A> {
    /// A chain at the start state.
    pub fn new(dfa: Arc<Dfa>, terms: Arc<TermTable>, actions: A) -> Self {
        Self {
            dfa,
            terms,
            current: DfaStateId::START,
            actions,
            tracer: NoopTracer,
        }
    }
}

impl<A: Actions, T: Tracer> Builder<A, T> {
    /// Swap in another tracer, keeping the cursor and action object.
    pub fn with_tracer<U: Tracer>(self, tracer: U) -> Builder<A, U> {
        let mut builder = Builder {
            dfa: self.dfa,
            terms: self.terms,
            current: self.current,
            actions: self.actions,
            tracer,
        };
        builder.trace_state();
        builder
    }

    pub fn state(&self) -> DfaStateId {
        self.current
    }

    pub fn is_final(&self) -> bool {
        self.dfa.state(self.current).is_final()
    }

    /// Whether `build` would succeed now.
    pub fn can_build(&self) -> bool {
        self.is_final()
    }

    /// Callable names legal in the current state, deduplicated, in
    /// transition order. `build` is not listed; see [`Self::can_build`].
    pub fn expected(&self) -> Vec<&str> {
        callables(&self.dfa, &self.terms, self.current)
    }

    pub fn dfa(&self) -> &Dfa {
        &self.dfa
    }

    pub fn terms(&self) -> &TermTable {
        &self.terms
    }

    pub fn actions(&self) -> &A {
        &self.actions
    }

    pub fn into_actions(self) -> A {
        self.actions
    }

    pub fn tracer(&self) -> &T {
        &self.tracer
    }

    pub fn into_parts(self) -> (A, T) {
        (self.actions, self.tracer)
    }

    /// Dispatch one call and advance.
    ///
    /// `name` is matched against term aliases first and, failing that,
    /// against declared term names. A refused call leaves both the cursor
    /// and the action object untouched.
    pub fn call(&mut self, name: &str, args: A::Args) -> Result<&mut Self, RuntimeError> {
        let state = self.current;
        self.tracer.trace_call(state, name);
        log::trace!("{state}: call `{name}`");

        let (term_id, target) = match self.resolve(name, &args) {
            Ok(edge) => edge,
            Err(error) => return Err(self.reject(name, error)),
        };

        let terms = Arc::clone(&self.terms);
        let term = terms.get(term_id);
        if let Err(source) = self.actions.apply(term, args) {
            let error = RuntimeError::Action {
                callable: name.to_owned(),
                source,
            };
            return Err(self.reject(name, error));
        }

        self.current = target;
        log::trace!("{state} --{term}--> {target}");
        self.tracer.trace_transition(state, term, target);
        self.trace_state();
        Ok(self)
    }

    /// Finish the chain. Only legal in an accepting state.
    ///
    /// The cursor stays put; accepting states may still have outgoing calls.
    pub fn build(&mut self) -> Result<A::Output, RuntimeError> {
        let state = self.current;
        if !self.is_final() {
            log::trace!("{state}: build refused");
            self.tracer.trace_build(state, false);
            return Err(RuntimeError::PrematureBuild { state });
        }
        log::trace!("{state}: build");
        self.tracer.trace_build(state, true);
        Ok(self.actions.build())
    }

    fn resolve(&self, name: &str, args: &A::Args) -> Result<(TermId, DfaStateId), RuntimeError> {
        let candidates = self.candidates(name);
        match candidates.as_slice() {
            [] => Err(RuntimeError::InvalidTransition {
                callable: name.to_owned(),
                state: self.current,
                expected: self.expected().into_iter().map(str::to_owned).collect(),
            }),
            [only] => Ok(*only),
            several => {
                let terms: Vec<_> = several.iter().map(|&(id, _)| self.terms.get(id)).collect();
                match self.actions.select(name, &terms, args) {
                    Some(index) if index < several.len() => Ok(several[index]),
                    _ => Err(RuntimeError::AmbiguousCall {
                        callable: name.to_owned(),
                        state: self.current,
                        candidates: terms.iter().map(ToString::to_string).collect(),
                    }),
                }
            }
        }
    }

    fn candidates(&self, name: &str) -> Vec<(TermId, DfaStateId)> {
        let state = self.dfa.state(self.current);
        let by_alias: Vec<_> = state
            .transitions()
            .filter(|&(id, _)| self.terms.get(id).alias() == name)
            .collect();
        if !by_alias.is_empty() {
            return by_alias;
        }
        state
            .transitions()
            .filter(|&(id, _)| self.terms.get(id).name() == name)
            .collect()
    }

    fn reject(&mut self, name: &str, error: RuntimeError) -> RuntimeError {
        log::trace!("{}: rejected `{name}`: {error}", self.current);
        self.tracer.trace_reject(self.current, name, &error);
        error
    }

    fn trace_state(&mut self) {
        let dfa = Arc::clone(&self.dfa);
        let terms = Arc::clone(&self.terms);
        let expected = callables(&dfa, &terms, self.current);
        let is_final = dfa.state(self.current).is_final();
        self.tracer.trace_state(self.current, is_final, &expected);
    }
}

fn callables<'a>(dfa: &'a Dfa, terms: &'a TermTable, state: DfaStateId) -> Vec<&'a str> {
    let mut names: Vec<&str> = Vec::new();
    for term in dfa.state(state).terms() {
        let alias = terms.get(term).alias();
        if !names.contains(&alias) {
            names.push(alias);
        }
    }
    names
}
