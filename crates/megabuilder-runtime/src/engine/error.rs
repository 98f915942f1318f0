use megabuilder_core::DfaStateId;

use super::actions::ActionError;

/// Errors raised while driving a builder chain.
///
/// None of them touch the shared DFA; only the chain that raised one is
/// affected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    #[error("`{callable}` is not allowed in state {state}, expected {}", expected_list(expected))]
    InvalidTransition {
        callable: String,
        state: DfaStateId,
        expected: Vec<String>,
    },

    #[error("cannot build in non-accepting state {state}")]
    PrematureBuild { state: DfaStateId },

    #[error("`{callable}` is ambiguous in state {state} between {}", candidates.join(", "))]
    AmbiguousCall {
        callable: String,
        state: DfaStateId,
        candidates: Vec<String>,
    },

    #[error("action `{callable}` failed: {source}")]
    Action {
        callable: String,
        #[source]
        source: ActionError,
    },
}

fn expected_list(expected: &[String]) -> String {
    if expected.is_empty() {
        return "no further calls".to_owned();
    }
    let quoted: Vec<String> = expected.iter().map(|name| format!("`{name}`")).collect();
    quoted.join(", ")
}
