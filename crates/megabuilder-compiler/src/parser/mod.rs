//! Parser for the grammar notation.
//!
//! Zero-copy lexing into span tokens, then a recursive-descent pass that
//! builds the [`Expr`] tree directly and interns every term it meets.
//!
//! The parser is not resilient: the first error is fatal and is returned as
//! [`Error::GrammarParseError`](crate::Error::GrammarParseError) carrying a
//! single spanned diagnostic.

pub mod ast;
pub mod lexer;

mod core;
mod grammar;

#[cfg(test)]
mod ast_tests;
#[cfg(test)]
mod lexer_tests;

pub use ast::{Expr, TermExpr};
pub use core::{ParseResult, Parser};
pub use lexer::{Token, TokenKind};

use lexer::lex;

/// Parse with no nesting limit.
pub fn parse(source: &str) -> crate::Result<ParseResult> {
    Parser::new(source, lex(source)).parse()
}
