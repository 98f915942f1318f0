//! Parser state and low-level token operations.

use megabuilder_core::TermTable;
use rowan::{TextRange, TextSize};

use super::ast::Expr;
use super::lexer::{Token, TokenKind, token_text};
use crate::Error;
use crate::diagnostics::{DiagnosticBuilder, DiagnosticKind, Diagnostics};

#[derive(Debug)]
pub struct ParseResult {
    pub root: Expr,
    pub terms: TermTable,
}

/// Expects whitespace to be filtered out of `tokens` already (see [`lex`]).
///
/// [`lex`]: super::lexer::lex
pub struct Parser<'src> {
    pub(super) source: &'src str,
    pub(super) tokens: Vec<Token>,
    pub(super) pos: usize,
    pub(super) terms: TermTable,
    pub(super) diagnostics: Diagnostics,
    depth: u32,
    recursion_limit: Option<u32>,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str, tokens: Vec<Token>) -> Self {
        Self {
            source,
            tokens,
            pos: 0,
            terms: TermTable::new(),
            diagnostics: Diagnostics::new(),
            depth: 0,
            recursion_limit: None,
        }
    }

    /// Limit group nesting. None = unbounded.
    pub fn with_recursion_limit(mut self, limit: Option<u32>) -> Self {
        self.recursion_limit = limit;
        self
    }

    /// Parse the whole input. The first error aborts; no partial tree is returned.
    pub fn parse(mut self) -> Result<ParseResult, Error> {
        let root = self.parse_root()?;
        Ok(ParseResult {
            root,
            terms: self.terms,
        })
    }

    pub(super) fn current(&self) -> Option<TokenKind> {
        self.tokens.get(self.pos).map(|t| t.kind)
    }

    pub(super) fn currently_is(&self, kind: TokenKind) -> bool {
        self.current() == Some(kind)
    }

    pub(super) fn current_span(&self) -> TextRange {
        self.tokens
            .get(self.pos)
            .map_or_else(|| TextRange::empty(self.eof_offset()), |t| t.span)
    }

    pub(super) fn current_text(&self) -> &'src str {
        self.tokens
            .get(self.pos)
            .map_or("", |t| token_text(self.source, t))
    }

    pub(super) fn eof_offset(&self) -> TextSize {
        TextSize::from(self.source.len() as u32)
    }

    pub(super) fn eof(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Consume the current token, returning it.
    pub(super) fn bump(&mut self) -> Token {
        let token = self.tokens[self.pos];
        self.pos += 1;
        token
    }

    pub(super) fn eat(&mut self, kind: TokenKind) -> Option<Token> {
        if self.currently_is(kind) {
            Some(self.bump())
        } else {
            None
        }
    }

    /// Start a diagnostic at the current token (or at end of input).
    pub(super) fn report(&mut self, kind: DiagnosticKind) -> DiagnosticBuilder<'_> {
        let range = self.current_span();
        self.diagnostics.report(kind, range)
    }

    /// Turn the diagnostics collected so far into the fatal parse error.
    pub(super) fn fail(&mut self) -> Error {
        Error::GrammarParseError(std::mem::take(&mut self.diagnostics))
    }

    pub(super) fn enter_recursion(&mut self) -> Result<(), Error> {
        if let Some(limit) = self.recursion_limit
            && self.depth >= limit
        {
            return Err(Error::RecursionLimitExceeded);
        }
        self.depth += 1;
        Ok(())
    }

    pub(super) fn exit_recursion(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}
