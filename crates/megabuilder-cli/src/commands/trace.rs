//! Trace a call chain for debugging.

use std::path::PathBuf;

use megabuilder_lib::Colors;
use megabuilder_lib::Recorder;
use megabuilder_lib::engine::{PrintTracer, Verbosity};

use super::grammar_loader::compile_or_exit;
use super::walk::{Call, drive};

pub struct TraceArgs {
    pub grammar_path: Option<PathBuf>,
    pub grammar_text: Option<String>,
    pub calls: Vec<Call>,
    pub build: bool,
    pub verbosity: Verbosity,
    pub color: bool,
}

pub fn run(args: TraceArgs) {
    let (_, blueprint) = compile_or_exit(
        args.grammar_path.as_deref(),
        args.grammar_text.as_deref(),
        args.color,
    );

    let tracer = PrintTracer::builder()
        .verbosity(args.verbosity)
        .colored(args.color)
        .build();
    let mut builder = blueprint.builder(Recorder::new()).with_tracer(tracer);

    let result = drive(&mut builder, &args.calls, args.build);
    builder.tracer().print();
    if let Err(e) = result {
        eprintln!("runtime error: {}", e);
        std::process::exit(2);
    }

    let colors = Colors::new(args.color);
    let accept = if builder.is_final() {
        format!(" {}accept{}", colors.accept, colors.reset)
    } else {
        String::new()
    };
    println!("{}---{}", colors.dim, colors.reset);
    println!(
        "{}{}{}{} [{}]",
        colors.state,
        builder.state(),
        colors.reset,
        accept,
        builder.expected().join(", ")
    );
}
