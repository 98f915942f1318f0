//! Dispatch instrumentation.
//!
//! [`Builder`](super::Builder) is generic over its tracer, so the
//! [`NoopTracer`] default compiles away while [`PrintTracer`] collects a
//! readable log of the walk.

use megabuilder_core::{Colors, DfaStateId, Term};

use super::error::RuntimeError;

/// How much [`PrintTracer`] records.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    /// Transitions, rejections and builds.
    #[default]
    Default,
    /// Also every attempted call.
    Verbose,
    /// Also the legal callables after every step.
    VeryVerbose,
}

pub trait Tracer {
    /// A call was attempted in `state`.
    fn trace_call(&mut self, state: DfaStateId, callable: &str);

    /// `term` moved the cursor from `from` to `to`.
    fn trace_transition(&mut self, from: DfaStateId, term: &Term, to: DfaStateId);

    /// The cursor rests on `state`, which offers `expected`.
    fn trace_state(&mut self, state: DfaStateId, is_final: bool, expected: &[&str]);

    /// A call was refused; the cursor did not move.
    fn trace_reject(&mut self, state: DfaStateId, callable: &str, error: &RuntimeError);

    /// `build` was attempted in `state`.
    fn trace_build(&mut self, state: DfaStateId, accepted: bool);
}

#[derive(Clone, Copy, Debug, Default)]
pub struct NoopTracer;

impl Tracer for NoopTracer {
    #[inline(always)]
    fn trace_call(&mut self, _state: DfaStateId, _callable: &str) {}

    #[inline(always)]
    fn trace_transition(&mut self, _from: DfaStateId, _term: &Term, _to: DfaStateId) {}

    #[inline(always)]
    fn trace_state(&mut self, _state: DfaStateId, _is_final: bool, _expected: &[&str]) {}

    #[inline(always)]
    fn trace_reject(&mut self, _state: DfaStateId, _callable: &str, _error: &RuntimeError) {}

    #[inline(always)]
    fn trace_build(&mut self, _state: DfaStateId, _accepted: bool) {}
}

/// Collects trace lines in memory.
#[derive(Clone, Debug, Default)]
pub struct PrintTracer {
    verbosity: Verbosity,
    colors: Colors,
    lines: Vec<String>,
}

pub struct PrintTracerBuilder {
    verbosity: Verbosity,
    colored: bool,
}

impl PrintTracerBuilder {
    pub fn verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    pub fn colored(mut self, colored: bool) -> Self {
        self.colored = colored;
        self
    }

    pub fn build(self) -> PrintTracer {
        PrintTracer {
            verbosity: self.verbosity,
            colors: Colors::new(self.colored),
            lines: Vec::new(),
        }
    }
}

impl PrintTracer {
    pub fn builder() -> PrintTracerBuilder {
        PrintTracerBuilder {
            verbosity: Verbosity::Default,
            colored: false,
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn output(&self) -> String {
        let mut out = self.lines.join("\n");
        if !out.is_empty() {
            out.push('\n');
        }
        out
    }

    /// Writes the collected lines to stderr.
    pub fn print(&self) {
        eprint!("{}", self.output());
    }

    fn state_label(&self, state: DfaStateId) -> String {
        format!("{}{state}{}", self.colors.state, self.colors.reset)
    }
}

impl Tracer for PrintTracer {
    fn trace_call(&mut self, state: DfaStateId, callable: &str) {
        if self.verbosity < Verbosity::Verbose {
            return;
        }
        let line = format!("{} call {callable}", self.state_label(state));
        self.lines.push(line);
    }

    fn trace_transition(&mut self, from: DfaStateId, term: &Term, to: DfaStateId) {
        let c = self.colors;
        let line = format!(
            "{} {}--{} {term} {}-->{} {}",
            self.state_label(from),
            c.dim,
            c.reset,
            c.dim,
            c.reset,
            self.state_label(to)
        );
        self.lines.push(line);
    }

    fn trace_state(&mut self, state: DfaStateId, is_final: bool, expected: &[&str]) {
        if self.verbosity < Verbosity::VeryVerbose {
            return;
        }
        let c = self.colors;
        let accept = if is_final {
            format!(" {}accept{}", c.accept, c.reset)
        } else {
            String::new()
        };
        let line = format!(
            "  {}{accept} {}expects{} [{}]",
            self.state_label(state),
            c.dim,
            c.reset,
            expected.join(", ")
        );
        self.lines.push(line);
    }

    fn trace_reject(&mut self, state: DfaStateId, callable: &str, error: &RuntimeError) {
        let c = self.colors;
        let line = format!(
            "{} {}reject{} {callable}: {error}",
            self.state_label(state),
            c.error,
            c.reset
        );
        self.lines.push(line);
    }

    fn trace_build(&mut self, state: DfaStateId, accepted: bool) {
        let c = self.colors;
        let (color, word) = if accepted {
            (c.accept, "build")
        } else {
            (c.error, "build rejected")
        };
        let line = format!("{} {color}{word}{}", self.state_label(state), c.reset);
        self.lines.push(line);
    }
}
