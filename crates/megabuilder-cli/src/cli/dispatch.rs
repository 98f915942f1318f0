//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! This module contains:
//! - `*Params` structs that mirror command `*Args` but are populated from clap
//! - `from_matches()` extractors that pull relevant fields (ignoring hidden ones)
//! - `Into<*Args>` impls to bridge dispatch → command handlers
//! - Positional shifting for exec/trace (`-g` shifts the first positional to CALLS)

use std::path::PathBuf;

use clap::ArgMatches;
use megabuilder_lib::engine::Verbosity;

use super::ColorChoice;
use crate::commands::ast::AstArgs;
use crate::commands::check::CheckArgs;
use crate::commands::dump::DumpArgs;
use crate::commands::exec::ExecArgs;
use crate::commands::trace::TraceArgs;
use crate::commands::walk::parse_call;

pub struct CheckParams {
    pub grammar_path: Option<PathBuf>,
    pub grammar_text: Option<String>,
    pub color: ColorChoice,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            grammar_path: m.get_one::<PathBuf>("grammar_path").cloned(),
            grammar_text: m.get_one::<String>("grammar_text").cloned(),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            grammar_path: p.grammar_path,
            grammar_text: p.grammar_text,
            color: p.color.should_colorize(),
        }
    }
}

pub struct AstParams {
    pub grammar_path: Option<PathBuf>,
    pub grammar_text: Option<String>,
    pub normalize: bool,
    pub color: ColorChoice,
}

impl AstParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            grammar_path: m.get_one::<PathBuf>("grammar_path").cloned(),
            grammar_text: m.get_one::<String>("grammar_text").cloned(),
            normalize: m.get_flag("normalize"),
            color: parse_color(m),
        }
    }
}

impl From<AstParams> for AstArgs {
    fn from(p: AstParams) -> Self {
        Self {
            grammar_path: p.grammar_path,
            grammar_text: p.grammar_text,
            normalize: p.normalize,
            color: p.color.should_colorize(),
        }
    }
}

pub struct DumpParams {
    pub grammar_path: Option<PathBuf>,
    pub grammar_text: Option<String>,
    pub json: bool,
    pub compact: bool,
    pub color: ColorChoice,
}

impl DumpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            grammar_path: m.get_one::<PathBuf>("grammar_path").cloned(),
            grammar_text: m.get_one::<String>("grammar_text").cloned(),
            json: m.get_flag("json"),
            compact: m.get_flag("compact"),
            color: parse_color(m),
        }
    }
}

impl From<DumpParams> for DumpArgs {
    fn from(p: DumpParams) -> Self {
        Self {
            grammar_path: p.grammar_path,
            grammar_text: p.grammar_text,
            json: p.json,
            compact: p.compact,
            color: p.color.should_colorize(),
        }
    }
}

pub struct ExecParams {
    pub grammar_path: Option<PathBuf>,
    pub grammar_text: Option<String>,
    pub calls: Vec<String>,
    pub build: bool,
    pub compact: bool,
    pub color: ColorChoice,
}

impl ExecParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        let grammar_text = m.get_one::<String>("grammar_text").cloned();
        let (grammar_path, calls) = shift_positional_to_calls(
            grammar_text.is_some(),
            m.get_one::<PathBuf>("grammar_path").cloned(),
            collect_calls(m),
        );

        Self {
            grammar_path,
            grammar_text,
            calls,
            build: m.get_flag("build"),
            compact: m.get_flag("compact"),
            color: parse_color(m),
        }
    }
}

impl From<ExecParams> for ExecArgs {
    fn from(p: ExecParams) -> Self {
        Self {
            grammar_path: p.grammar_path,
            grammar_text: p.grammar_text,
            calls: p.calls.iter().map(|token| parse_call(token)).collect(),
            build: p.build,
            compact: p.compact,
            color: p.color.should_colorize(),
        }
    }
}

pub struct TraceParams {
    pub grammar_path: Option<PathBuf>,
    pub grammar_text: Option<String>,
    pub calls: Vec<String>,
    pub build: bool,
    pub verbose: u8,
    pub color: ColorChoice,
}

impl TraceParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        let grammar_text = m.get_one::<String>("grammar_text").cloned();
        let (grammar_path, calls) = shift_positional_to_calls(
            grammar_text.is_some(),
            m.get_one::<PathBuf>("grammar_path").cloned(),
            collect_calls(m),
        );

        Self {
            grammar_path,
            grammar_text,
            calls,
            build: m.get_flag("build"),
            verbose: m.get_count("verbose"),
            color: parse_color(m),
        }
    }
}

impl From<TraceParams> for TraceArgs {
    fn from(p: TraceParams) -> Self {
        Self {
            grammar_path: p.grammar_path,
            grammar_text: p.grammar_text,
            calls: p.calls.iter().map(|token| parse_call(token)).collect(),
            build: p.build,
            verbosity: verbosity(p.verbose),
            color: p.color.should_colorize(),
        }
    }
}

pub fn verbosity(count: u8) -> Verbosity {
    match count {
        0 => Verbosity::Default,
        1 => Verbosity::Verbose,
        _ => Verbosity::VeryVerbose,
    }
}

/// Parse --color flag into ColorChoice.
fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}

fn collect_calls(m: &ArgMatches) -> Vec<String> {
    m.get_many::<String>("calls")
        .map(|values| values.cloned().collect())
        .unwrap_or_default()
}

/// When -g is used, the first positional is a call, not a grammar file.
/// This enables: `megabuilder exec -g 'a b' a b`
fn shift_positional_to_calls(
    has_grammar_text: bool,
    grammar_path: Option<PathBuf>,
    mut calls: Vec<String>,
) -> (Option<PathBuf>, Vec<String>) {
    match grammar_path {
        Some(path) if has_grammar_text => {
            calls.insert(0, path.to_string_lossy().into_owned());
            (None, calls)
        }
        grammar_path => (grammar_path, calls),
    }
}
