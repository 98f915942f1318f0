//! Builder dispatch engine.
//!
//! The builder owns one cursor into a shared DFA and refuses every call the
//! current state has no transition for.

mod actions;
mod builder;
mod error;
mod recorder;
mod trace;

#[cfg(test)]
mod trace_tests;

pub use actions::{ActionError, Actions};
pub use builder::Builder;
pub use error::RuntimeError;
pub use recorder::{RecordedCall, Recorder};
pub use trace::{NoopTracer, PrintTracer, PrintTracerBuilder, Tracer, Verbosity};
