//! The user side of a builder chain.

use megabuilder_core::Term;

/// Receives every call the grammar accepts, in order.
///
/// One object per chain: the builder owns it and hands it back through
/// [`Builder::into_actions`](super::Builder::into_actions).
pub trait Actions {
    /// Arguments carried by a single call.
    type Args;
    /// Result of a successful `build`.
    type Output;

    /// Called after the builder has checked `term` is legal in the current
    /// state. An error leaves the builder's cursor where it was.
    fn apply(&mut self, term: &Term, args: Self::Args) -> Result<(), ActionError>;

    /// Called only in accepting states.
    fn build(&mut self) -> Self::Output;

    /// Resolves a callable name shared by several outgoing terms.
    ///
    /// Returns an index into `candidates`. The builder does not look at
    /// `args` itself; `None` makes the call fail as ambiguous.
    fn select(&self, callable: &str, candidates: &[&Term], args: &Self::Args) -> Option<usize> {
        let _ = (callable, candidates, args);
        None
    }
}

/// Failure reported by an [`Actions`] implementation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ActionError {
    message: String,
}

impl ActionError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
