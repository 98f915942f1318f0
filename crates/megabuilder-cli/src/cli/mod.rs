mod args;
mod commands;
mod dispatch;


use std::str::FromStr;

use clap::ArgMatches;
use log::LevelFilter;

pub use commands::build_cli;
pub use dispatch::{AstParams, CheckParams, DumpParams, ExecParams, TraceParams};

/// Color output mode for CLI commands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    pub fn should_colorize(self) -> bool {
        match self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            // Traces and diagnostics go to stderr while JSON goes to stdout;
            // color only when neither is piped.
            ColorChoice::Auto => {
                std::io::IsTerminal::is_terminal(&std::io::stdout())
                    && std::io::IsTerminal::is_terminal(&std::io::stderr())
            }
        }
    }
}

/// Level requested with the global --log flag.
pub fn log_level(m: &ArgMatches) -> LevelFilter {
    m.get_one::<String>("log")
        .and_then(|s| LevelFilter::from_str(s).ok())
        .unwrap_or(LevelFilter::Off)
}

/// Install a stderr logger unless logging is off.
pub fn init_logging(level: LevelFilter) {
    if level == LevelFilter::Off {
        return;
    }
    let result = simplelog::TermLogger::init(
        level,
        simplelog::ConfigBuilder::new()
            .set_time_format_custom(&[])
            .build(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    );
    if let Err(e) = result {
        eprintln!("warning: logging disabled: {}", e);
    }
}
