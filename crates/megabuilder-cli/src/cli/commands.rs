//! Command builders for the CLI.
//!
//! `exec` and `trace` accept each other's flags, with the irrelevant ones
//! hidden from `--help`.

use clap::Command;

use super::args::*;

/// A command taking its grammar from GRAMMAR or -g/--grammar.
///
/// The grammar positional is added first so it precedes CALLS.
fn grammar_command(name: &'static str) -> Command {
    Command::new(name)
        .arg(grammar_path_arg())
        .arg(grammar_text_arg())
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("megabuilder")
        .about("Compile builder grammars and drive call chains through them")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(log_arg())
        .subcommand(check_command())
        .subcommand(ast_command())
        .subcommand(dump_command())
        .subcommand(exec_command())
        .subcommand(trace_command())
}

/// Validate a grammar.
pub fn check_command() -> Command {
    grammar_command("check")
        .about("Validate a grammar")
        .override_usage(
            "\
  megabuilder check <GRAMMAR>
  megabuilder check -g <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  megabuilder check catalog.mbg
  megabuilder check -g 'of (article modele+)*'
  cat catalog.mbg | megabuilder check -"#,
        )
        .arg(color_arg())
}

/// Show the parsed grammar tree.
pub fn ast_command() -> Command {
    grammar_command("ast")
        .about("Show the AST of a grammar")
        .after_help(
            r#"EXAMPLES:
  megabuilder ast catalog.mbg
  megabuilder ast -g 'a (b | c)*' --normalize"#,
        )
        .arg(normalize_arg())
        .arg(color_arg())
}

/// Show the term table and both automata.
pub fn dump_command() -> Command {
    grammar_command("dump")
        .about("Show the term table, NFA and DFA of a grammar")
        .after_help(
            r#"EXAMPLES:
  megabuilder dump catalog.mbg
  megabuilder dump -g 'a b*' --json"#,
        )
        .arg(json_arg())
        .arg(compact_arg())
        .arg(color_arg())
}

/// Drive a recording chain and print what it accepted.
pub fn exec_command() -> Command {
    grammar_command("exec")
        .about("Run calls through a grammar and print the accepted chain as JSON")
        .override_usage(
            "\
  megabuilder exec <GRAMMAR> [CALLS]...
  megabuilder exec -g <TEXT> [CALLS]...",
        )
        .after_help(
            r#"EXAMPLES:
  megabuilder exec catalog.mbg of=spring articleName=spray modele=10ml --build
  megabuilder exec -g 'a b*' a b b"#,
        )
        .arg(calls_arg())
        .arg(build_arg())
        .arg(compact_arg())
        .arg(color_arg())
        .arg(verbose_arg().hide(true))
}

/// Drive a recording chain and print the dispatch trace.
pub fn trace_command() -> Command {
    grammar_command("trace")
        .about("Trace calls through a grammar's DFA")
        .override_usage(
            "\
  megabuilder trace <GRAMMAR> [CALLS]...
  megabuilder trace -g <TEXT> [CALLS]...",
        )
        .after_help(
            r#"EXAMPLES:
  megabuilder trace catalog.mbg of articleName modele -vv
  megabuilder trace -g 'a b*' a b --build"#,
        )
        .arg(calls_arg())
        .arg(build_arg())
        .arg(verbose_arg())
        .arg(color_arg())
        .arg(compact_arg().hide(true))
}
