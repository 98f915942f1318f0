//! Call parsing and chain driving shared by `exec` and `trace`.

use megabuilder_lib::engine::Tracer;
use megabuilder_lib::{Builder, RecordedCall, Recorder, RuntimeError};

/// One call from the command line: `NAME` or `NAME=ARG,ARG`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Call {
    pub name: String,
    pub args: Vec<String>,
}

pub fn parse_call(token: &str) -> Call {
    match token.split_once('=') {
        Some((name, "")) => Call {
            name: name.to_owned(),
            args: Vec::new(),
        },
        Some((name, args)) => Call {
            name: name.to_owned(),
            args: args.split(',').map(str::to_owned).collect(),
        },
        None => Call {
            name: token.to_owned(),
            args: Vec::new(),
        },
    }
}

/// Make every call in order, then build if asked.
///
/// Returns the calls the chain accepted, as `build` reported them when
/// `build` is set.
pub fn drive<T: Tracer>(
    builder: &mut Builder<Recorder, T>,
    calls: &[Call],
    build: bool,
) -> Result<Vec<RecordedCall>, RuntimeError> {
    for call in calls {
        builder.call(&call.name, call.args.clone())?;
    }
    if build {
        return builder.build();
    }
    Ok(builder.actions().calls().to_vec())
}
