//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` so one definition can be reused
//! across commands, hidden where a command ignores it.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Grammar file (positional, `-` for stdin).
pub fn grammar_path_arg() -> Arg {
    Arg::new("grammar_path")
        .value_name("GRAMMAR")
        .value_parser(value_parser!(PathBuf))
        .help("Grammar file (`-` reads stdin)")
}

/// Inline grammar text (-g/--grammar).
pub fn grammar_text_arg() -> Arg {
    Arg::new("grammar_text")
        .short('g')
        .long("grammar")
        .value_name("TEXT")
        .help("Inline grammar text")
}

/// Calls to dispatch, in order (positional, after the grammar).
pub fn calls_arg() -> Arg {
    Arg::new("calls")
        .value_name("CALLS")
        .num_args(1..)
        .action(ArgAction::Append)
        .help("Calls to make, each NAME or NAME=ARG,ARG")
}

/// Finish the chain with `build` (--build).
pub fn build_arg() -> Arg {
    Arg::new("build")
        .long("build")
        .action(ArgAction::SetTrue)
        .help("Call build after the last call")
}

/// Output compact JSON (--compact).
pub fn compact_arg() -> Arg {
    Arg::new("compact")
        .long("compact")
        .action(ArgAction::SetTrue)
        .help("Output compact JSON")
}

/// Output JSON instead of text tables (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Output the term table and DFA as JSON")
}

/// Print the normalized grammar instead of the tree (--normalize).
pub fn normalize_arg() -> Arg {
    Arg::new("normalize")
        .long("normalize")
        .action(ArgAction::SetTrue)
        .help("Print the grammar re-rendered from its AST")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Trace detail (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .long("verbose")
        .action(ArgAction::Count)
        .help("Trace detail (-v adds calls, -vv adds legal calls per state)")
}

/// Log level for the library's `log` records (--log).
pub fn log_arg() -> Arg {
    Arg::new("log")
        .long("log")
        .value_name("LEVEL")
        .global(true)
        .default_value("off")
        .value_parser(["off", "error", "warn", "info", "debug", "trace"])
        .help("Log level written to stderr")
}
