//! Recursive-descent productions.
//!
//! ```text
//! alt   := seq ('|' seq)*
//! seq   := term+
//! term  := atom ('*' | '+' | '?')?
//! atom  := IDENT (':' IDENT)?  |  '(' alt ')'
//! ```

use megabuilder_core::Term;
use rowan::TextRange;

use super::ast::{Expr, TermExpr};
use super::core::Parser;
use super::lexer::{TokenKind, token_text};
use crate::Error;
use crate::diagnostics::DiagnosticKind;

type PResult<T> = Result<T, Error>;

impl Parser<'_> {
    pub(super) fn parse_root(&mut self) -> PResult<Expr> {
        let root = self.parse_alt()?;
        if !self.eof() {
            let found = self.current_text().to_string();
            self.report(DiagnosticKind::TrailingInput)
                .message(format!("unexpected `{found}`"))
                .emit();
            return Err(self.fail());
        }
        Ok(root)
    }

    fn parse_alt(&mut self) -> PResult<Expr> {
        let mut branches = vec![self.parse_seq()?];
        while self.eat(TokenKind::Pipe).is_some() {
            branches.push(self.parse_seq()?);
        }
        Ok(Expr::Alt(branches))
    }

    /// A sequence runs until `)`, `|` or end of input, and must not be empty.
    fn parse_seq(&mut self) -> PResult<Expr> {
        let mut items = vec![self.parse_term()?];
        while !self.eof()
            && !self.currently_is(TokenKind::ParenClose)
            && !self.currently_is(TokenKind::Pipe)
        {
            items.push(self.parse_term()?);
        }
        Ok(Expr::Seq(items))
    }

    fn parse_term(&mut self) -> PResult<Expr> {
        let atom = self.parse_atom()?;
        let quantified = match self.current() {
            Some(TokenKind::Star) => Expr::Star(Box::new(atom)),
            Some(TokenKind::Plus) => Expr::Plus(Box::new(atom)),
            Some(TokenKind::Question) => Expr::Optional(Box::new(atom)),
            _ => return Ok(atom),
        };
        self.bump();
        Ok(quantified)
    }

    fn parse_atom(&mut self) -> PResult<Expr> {
        match self.current() {
            Some(TokenKind::Ident) => self.parse_term_ref(),
            Some(TokenKind::ParenOpen) => self.parse_group(),
            Some(kind) => {
                self.report(DiagnosticKind::ExpectedTerm)
                    .message(format!("found {}", kind.describe()))
                    .emit();
                Err(self.fail())
            }
            None => {
                self.report(DiagnosticKind::ExpectedTerm)
                    .message("found end of input")
                    .emit();
                Err(self.fail())
            }
        }
    }

    /// `name` or `name:alias`.
    fn parse_term_ref(&mut self) -> PResult<Expr> {
        let name_token = self.bump();
        let name = token_text(self.source, &name_token).to_string();

        let Some(_colon) = self.eat(TokenKind::Colon) else {
            let id = self.terms.intern_plain(&name);
            return Ok(Expr::Term(TermExpr {
                id,
                term: Term::plain(name),
                span: name_token.span,
            }));
        };

        if !self.currently_is(TokenKind::Ident) {
            self.report(DiagnosticKind::ExpectedAlias)
                .related_to(format!("for term `{name}`"), name_token.span)
                .emit();
            return Err(self.fail());
        }
        let alias_token = self.bump();
        let alias = token_text(self.source, &alias_token).to_string();

        let id = self.terms.intern_aliased(&name, &alias);
        Ok(Expr::Term(TermExpr {
            id,
            term: Term::aliased(name, alias),
            span: TextRange::new(name_token.span.start(), alias_token.span.end()),
        }))
    }

    fn parse_group(&mut self) -> PResult<Expr> {
        let open = self.bump();
        self.enter_recursion()?;
        let inner = self.parse_alt()?;
        self.exit_recursion();

        if self.eat(TokenKind::ParenClose).is_none() {
            self.report(DiagnosticKind::UnclosedGroup)
                .related_to("group opened here", open.span)
                .emit();
            return Err(self.fail());
        }
        Ok(inner)
    }
}
