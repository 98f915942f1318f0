use std::path::PathBuf;

use megabuilder_lib::{RecordedCall, Recorder};
use serde::Serialize;

use super::grammar_loader::compile_or_exit;
use super::walk::{Call, drive};

pub struct ExecArgs {
    pub grammar_path: Option<PathBuf>,
    pub grammar_text: Option<String>,
    pub calls: Vec<Call>,
    pub build: bool,
    pub compact: bool,
    pub color: bool,
}

#[derive(Serialize)]
struct ExecReport {
    state: String,
    accepting: bool,
    built: bool,
    expected: Vec<String>,
    calls: Vec<RecordedCall>,
}

pub fn run(args: ExecArgs) {
    let (_, blueprint) = compile_or_exit(
        args.grammar_path.as_deref(),
        args.grammar_text.as_deref(),
        args.color,
    );

    let mut builder = blueprint.builder(Recorder::new());
    let calls = match drive(&mut builder, &args.calls, args.build) {
        Ok(calls) => calls,
        Err(e) => {
            eprintln!("runtime error: {}", e);
            std::process::exit(2);
        }
    };

    let report = ExecReport {
        state: builder.state().to_string(),
        accepting: builder.is_final(),
        built: args.build,
        expected: builder.expected().into_iter().map(str::to_owned).collect(),
        calls,
    };
    let output = if args.compact {
        serde_json::to_string(&report)
    } else {
        serde_json::to_string_pretty(&report)
    };
    match output {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}
