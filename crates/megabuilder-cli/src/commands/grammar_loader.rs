use std::fs;
use std::io::{self, Read};
use std::path::Path;

use megabuilder_lib::Blueprint;

/// Grammar text plus the label diagnostics show for it.
pub struct GrammarSource {
    pub text: String,
    pub path: Option<String>,
}

impl GrammarSource {
    pub fn label(&self) -> &str {
        self.path.as_deref().unwrap_or("<grammar>")
    }
}

pub fn load_grammar_source(
    grammar_path: Option<&Path>,
    grammar_text: Option<&str>,
) -> Result<GrammarSource, String> {
    if let Some(text) = grammar_text {
        return Ok(GrammarSource {
            text: text.to_owned(),
            path: None,
        });
    }

    if let Some(path) = grammar_path {
        if path.as_os_str() == "-" {
            return load_stdin();
        }
        return load_file(path);
    }

    Err("grammar is required: use a positional argument or -g/--grammar".to_string())
}

fn load_stdin() -> Result<GrammarSource, String> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .map_err(|e| format!("failed to read stdin: {}", e))?;
    Ok(GrammarSource {
        text: buf,
        path: Some("<stdin>".to_owned()),
    })
}

fn load_file(path: &Path) -> Result<GrammarSource, String> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("failed to read '{}': {}", path.display(), e))?;
    Ok(GrammarSource {
        text: content,
        path: Some(path.to_string_lossy().into_owned()),
    })
}

/// Load and compile, printing diagnostics and exiting on any failure.
pub fn compile_or_exit(
    grammar_path: Option<&Path>,
    grammar_text: Option<&str>,
    color: bool,
) -> (GrammarSource, Blueprint) {
    let source = match load_grammar_source(grammar_path, grammar_text) {
        Ok(source) => source,
        Err(msg) => {
            eprintln!("error: {}", msg);
            std::process::exit(1);
        }
    };

    match Blueprint::compile(&source.text) {
        Ok(blueprint) => (source, blueprint),
        Err(e) => {
            match e.diagnostics() {
                Some(diagnostics) => eprint!(
                    "{}",
                    diagnostics
                        .printer()
                        .source(&source.text)
                        .path(source.label())
                        .colored(color)
                        .render()
                ),
                None => eprintln!("error: {}", e),
            }
            std::process::exit(1);
        }
    }
}
