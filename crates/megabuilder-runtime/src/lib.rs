//! Runtime dispatcher for compiled megabuilder grammars.
//!
//! A [`Builder`] walks the DFA produced by `megabuilder-compiler`, forwarding
//! each accepted call to a user [`Actions`] object.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod engine;

pub use engine::{
    ActionError, Actions, Builder, NoopTracer, PrintTracer, RecordedCall, Recorder, RuntimeError,
    Tracer, Verbosity,
};
