use std::path::PathBuf;

use super::grammar_loader::compile_or_exit;

pub struct AstArgs {
    pub grammar_path: Option<PathBuf>,
    pub grammar_text: Option<String>,
    pub normalize: bool,
    pub color: bool,
}

pub fn run(args: AstArgs) {
    let (_, blueprint) = compile_or_exit(
        args.grammar_path.as_deref(),
        args.grammar_text.as_deref(),
        args.color,
    );

    let grammar = blueprint.grammar();
    if args.normalize {
        println!("{}", grammar.ast());
    } else {
        print!("{}", grammar.dump_ast());
    }
}
