//! Thompson construction: expression tree to NFA.
//!
//! Every node is lowered between two existing states `start` and `end`.
//! Alternation branches share both; sequence elements are chained through
//! fresh intermediates. Loops get their own entry/exit pair so that repeat
//! edges never land on states shared with siblings.

use super::nfa::{Nfa, NfaStateId};
use crate::parser::Expr;

/// Lower `root` between the fixed start (0) and accepting (1) states.
pub fn build_nfa(root: &Expr) -> Nfa {
    let mut nfa = Nfa::new();
    lower(&mut nfa, root, Nfa::START, Nfa::ACCEPT);
    nfa
}

fn lower(nfa: &mut Nfa, expr: &Expr, start: NfaStateId, end: NfaStateId) {
    match expr {
        Expr::Term(t) => nfa.add_transition(start, t.id, end),
        Expr::Seq(items) => lower_seq(nfa, items, start, end),
        Expr::Alt(branches) => {
            for branch in branches {
                lower(nfa, branch, start, end);
            }
        }
        Expr::Optional(inner) => {
            lower(nfa, inner, start, end);
            nfa.add_epsilon(start, end);
        }
        Expr::Star(inner) => lower_loop(nfa, inner, start, end, true),
        Expr::Plus(inner) => lower_loop(nfa, inner, start, end, false),
    }
}

fn lower_seq(nfa: &mut Nfa, items: &[Expr], start: NfaStateId, end: NfaStateId) {
    let Some(last) = items.len().checked_sub(1) else {
        nfa.add_epsilon(start, end);
        return;
    };

    let intermediates: Vec<_> = (0..last).map(|_| nfa.add_state()).collect();
    for (i, item) in items.iter().enumerate() {
        let from = if i == 0 { start } else { intermediates[i - 1] };
        let to = if i == last { end } else { intermediates[i] };
        lower(nfa, item, from, to);
    }
}

/// `start -> entry [inner] exit -> end`, with `exit -> entry` to repeat and,
/// when `skippable`, `entry -> exit` to match zero times.
fn lower_loop(nfa: &mut Nfa, inner: &Expr, start: NfaStateId, end: NfaStateId, skippable: bool) {
    let entry = nfa.add_state();
    let exit = nfa.add_state();

    nfa.add_epsilon(start, entry);
    lower(nfa, inner, entry, exit);
    nfa.add_epsilon(exit, entry);
    nfa.add_epsilon(exit, end);
    if skippable {
        nfa.add_epsilon(entry, exit);
    }
}
