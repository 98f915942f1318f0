use std::path::PathBuf;

use super::grammar_loader::compile_or_exit;

pub struct CheckArgs {
    pub grammar_path: Option<PathBuf>,
    pub grammar_text: Option<String>,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
    let (source, blueprint) = compile_or_exit(
        args.grammar_path.as_deref(),
        args.grammar_text.as_deref(),
        args.color,
    );
    log::info!(
        "{}: {} callables, {} states",
        source.label(),
        blueprint.callables().len(),
        blueprint.grammar().dfa().len()
    );

    // Silent on success (like cargo check)
}
