//! Grammar expression tree.
//!
//! The parser output always has the same outer shape: the root is an `Alt`
//! of `Seq`s, and every parenthesized group is again an `Alt` of `Seq`s.
//! Single-branch groups are kept as written.

use std::fmt::{self, Write};

use megabuilder_core::{Term, TermId};
use rowan::TextRange;

/// A term occurrence. Equality ignores the id and span.
#[derive(Debug, Clone)]
pub struct TermExpr {
    pub id: TermId,
    pub term: Term,
    /// Identifier span, covering `name:alias` when aliased.
    pub span: TextRange,
}

impl PartialEq for TermExpr {
    fn eq(&self, other: &Self) -> bool {
        self.term == other.term
    }
}

impl Eq for TermExpr {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Term(TermExpr),
    Seq(Vec<Expr>),
    Alt(Vec<Expr>),
    Star(Box<Expr>),
    Plus(Box<Expr>),
    Optional(Box<Expr>),
}

impl Expr {
    /// Term occurrences in source order.
    pub fn terms(&self) -> Vec<&TermExpr> {
        let mut out = Vec::new();
        self.collect_terms(&mut out);
        out
    }

    fn collect_terms<'a>(&'a self, out: &mut Vec<&'a TermExpr>) {
        match self {
            Expr::Term(t) => out.push(t),
            Expr::Seq(items) | Expr::Alt(items) => {
                for item in items {
                    item.collect_terms(out);
                }
            }
            Expr::Star(inner) | Expr::Plus(inner) | Expr::Optional(inner) => {
                inner.collect_terms(out)
            }
        }
    }

    /// Indented tree rendering, one node per line.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.dump_into(&mut out, 0);
        out
    }

    fn dump_into(&self, out: &mut String, depth: usize) {
        let indent = "  ".repeat(depth);
        let _ = match self {
            Expr::Term(t) => writeln!(out, "{indent}Term {}", t.term),
            Expr::Seq(_) => writeln!(out, "{indent}Seq"),
            Expr::Alt(_) => writeln!(out, "{indent}Alt"),
            Expr::Star(_) => writeln!(out, "{indent}Star"),
            Expr::Plus(_) => writeln!(out, "{indent}Plus"),
            Expr::Optional(_) => writeln!(out, "{indent}Optional"),
        };
        match self {
            Expr::Term(_) => {}
            Expr::Seq(items) | Expr::Alt(items) => {
                for item in items {
                    item.dump_into(out, depth + 1);
                }
            }
            Expr::Star(inner) | Expr::Plus(inner) | Expr::Optional(inner) => {
                inner.dump_into(out, depth + 1)
            }
        }
    }
}

/// Where an expression is printed, from loosest to tightest binding.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Position {
    /// Root, or directly inside parentheses.
    Top,
    /// A branch of an alternation.
    Branch,
    /// An element of a sequence.
    Item,
    /// The operand of `*`, `+` or `?`.
    Operand,
}

/// Prints normalized grammar text that parses back to an equal tree.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_expr(f, self, Position::Top)
    }
}

fn write_expr(f: &mut fmt::Formatter<'_>, expr: &Expr, pos: Position) -> fmt::Result {
    match expr {
        Expr::Term(t) => write!(f, "{}", t.term),
        Expr::Alt(branches) if pos == Position::Top => write_joined(f, branches, " | ", Position::Branch),
        Expr::Seq(items) if matches!(pos, Position::Top | Position::Branch) => {
            write_joined(f, items, " ", Position::Item)
        }
        Expr::Alt(_) | Expr::Seq(_) => {
            f.write_char('(')?;
            write_expr(f, expr, Position::Top)?;
            f.write_char(')')
        }
        Expr::Star(inner) => write_quantified(f, inner, '*', pos),
        Expr::Plus(inner) => write_quantified(f, inner, '+', pos),
        Expr::Optional(inner) => write_quantified(f, inner, '?', pos),
    }
}

fn write_quantified(f: &mut fmt::Formatter<'_>, inner: &Expr, op: char, pos: Position) -> fmt::Result {
    // A quantifier cannot stack directly on another one.
    if pos == Position::Operand {
        f.write_char('(')?;
        write_quantified(f, inner, op, Position::Top)?;
        return f.write_char(')');
    }
    write_expr(f, inner, Position::Operand)?;
    f.write_char(op)
}

fn write_joined(f: &mut fmt::Formatter<'_>, exprs: &[Expr], sep: &str, pos: Position) -> fmt::Result {
    for (i, expr) in exprs.iter().enumerate() {
        if i > 0 {
            f.write_str(sep)?;
        }
        write_expr(f, expr, pos)?;
    }
    Ok(())
}
