//! An [`Actions`] implementation that only remembers what it was given.

use megabuilder_core::Term;
use serde::Serialize;

use super::actions::{ActionError, Actions};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RecordedCall {
    pub term: Term,
    pub args: Vec<String>,
}

/// Records every accepted call; `build` returns the log so far.
#[derive(Clone, Debug, Default)]
pub struct Recorder {
    calls: Vec<RecordedCall>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[RecordedCall] {
        &self.calls
    }
}

impl Actions for Recorder {
    type Args = Vec<String>;
    type Output = Vec<RecordedCall>;

    fn apply(&mut self, term: &Term, args: Vec<String>) -> Result<(), ActionError> {
        self.calls.push(RecordedCall {
            term: term.clone(),
            args,
        });
        Ok(())
    }

    fn build(&mut self) -> Vec<RecordedCall> {
        self.calls.clone()
    }
}
