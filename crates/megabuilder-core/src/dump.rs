//! Plain-text rendering of a transition table.
//!
//! ```text
//! S0
//!   of -> S1
//! S1 accept
//!   simpleArticle:article -> S2
//! ```

use std::fmt;

use crate::{Colors, Dfa, TermTable};

/// Render every state with its outgoing edges, in state order.
pub fn dump(dfa: &Dfa, terms: &TermTable, colors: Colors) -> String {
    DfaDump { dfa, terms, colors }.to_string()
}

struct DfaDump<'a> {
    dfa: &'a Dfa,
    terms: &'a TermTable,
    colors: Colors,
}

impl fmt::Display for DfaDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = self.colors;
        for (id, state) in self.dfa.iter() {
            write!(f, "{}{id}{}", c.state, c.reset)?;
            if state.is_final() {
                write!(f, " {}accept{}", c.accept, c.reset)?;
            }
            writeln!(f)?;

            for (term, target) in state.transitions() {
                let label = self
                    .terms
                    .try_get(term)
                    .map_or_else(|| format!("#{}", term.as_u32()), ToString::to_string);
                writeln!(
                    f,
                    "  {label} {}->{} {}{target}{}",
                    c.dim, c.reset, c.state, c.reset
                )?;
            }
        }
        Ok(())
    }
}
