use std::path::PathBuf;

use megabuilder_lib::{Colors, Dfa, TermTable};
use serde::Serialize;

use super::grammar_loader::compile_or_exit;

pub struct DumpArgs {
    pub grammar_path: Option<PathBuf>,
    pub grammar_text: Option<String>,
    pub json: bool,
    pub compact: bool,
    pub color: bool,
}

#[derive(Serialize)]
struct DumpJson<'a> {
    terms: &'a TermTable,
    dfa: &'a Dfa,
}

pub fn run(args: DumpArgs) {
    let (_, blueprint) = compile_or_exit(
        args.grammar_path.as_deref(),
        args.grammar_text.as_deref(),
        args.color,
    );
    let grammar = blueprint.grammar();

    if args.json {
        let payload = DumpJson {
            terms: grammar.terms(),
            dfa: grammar.dfa(),
        };
        let output = if args.compact {
            serde_json::to_string(&payload)
        } else {
            serde_json::to_string_pretty(&payload)
        };
        match output {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    let colors = Colors::new(args.color);
    println!("{}[terms]{}", colors.dim, colors.reset);
    for (id, term) in grammar.terms().iter() {
        println!("  #{} {}", id.as_u32(), term);
    }
    println!();
    println!("{}[nfa]{}", colors.dim, colors.reset);
    print!("{}", grammar.dump_nfa(colors));
    println!();
    println!("{}[dfa]{}", colors.dim, colors.reset);
    print!("{}", grammar.dump_dfa(colors));
}
