//! Packrat parser for Kiwi.
//!
//! Consumes a [`TokenList`] and produces a [`Module`] whose nodes live in an
//! [`AstArena`]. Every memoized rule application is cached per
//! `(rule, position)`, so parsing stays linear in the number of tokens even
//! with unlimited backtracking, and left-recursive rules such as
//! `sum: sum '+' term | term` are resolved by seed growing.
//!
//! There is no error recovery: a parse either yields a complete tree or a
//! single [`ParseError`] positioned at the furthest token the grammar failed
//! on.

mod config;
mod cursor;
mod error;
mod grammar;
mod memo;
mod rule;

pub use config::{ConfigError, GrammarConfig};
pub use cursor::Cursor;
pub use error::{Expected, ParseError};
pub use memo::{LeftRecursionFrame, MemoEntry, MemoKey, MemoStats};
pub use rule::Rule;

use std::sync::Once;

use kiwi_diagnostic::ErrorCode;
use kiwi_ir::{AstArena, ExprId, Module, Name, Span, StringInterner, Token, TokenKind, TokenList};
use rustc_hash::FxHashSet;
use tracing::debug;

use memo::{MemoCache, MemoHost, Memoizable};

/// Parser state. One instance parses one token list once.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    arena: AstArena,
    memo: MemoCache,
}

impl<'a> Parser<'a> {
    /// Create a parser with the Kiwi keyword sets.
    pub fn new(tokens: &'a TokenList, interner: &'a StringInterner) -> Self {
        Self::with_config(tokens, interner, &GrammarConfig::kiwi())
    }

    /// Create a parser with custom keyword sets.
    pub fn with_config(
        tokens: &'a TokenList,
        interner: &'a StringInterner,
        config: &GrammarConfig,
    ) -> Self {
        let hard_keywords: FxHashSet<Name> = config
            .hard_keywords()
            .map(|kw| interner.intern(kw))
            .collect();
        Parser {
            cursor: Cursor::new(tokens, interner, hard_keywords),
            arena: AstArena::with_capacity(tokens.len()),
            memo: MemoCache::default(),
        }
    }

    /// Parse a whole file: imports, then statements, then the end marker.
    pub fn parse_module(mut self) -> Result<ParseOutput, ParseError> {
        match self.start() {
            Some(module) => {
                debug!(
                    imports = module.imports.len(),
                    statements = module.statements.len(),
                    memo_entries = self.memo.len(),
                    "parsed module"
                );
                Ok(ParseOutput {
                    module,
                    arena: self.arena,
                    stats: self.memo.into_stats(),
                })
            }
            None => Err(self.failure()),
        }
    }

    /// Parse a single expression followed only by newlines and the end marker.
    pub fn parse_expression(self) -> Result<ExprOutput, ParseError> {
        self.parse_standalone(Self::expression)
    }

    /// Parse a `word`: a run of number and name tokens joined into one text.
    pub fn parse_word(self) -> Result<ExprOutput, ParseError> {
        self.parse_standalone(Self::word)
    }

    fn parse_standalone(
        mut self,
        rule: fn(&mut Self) -> Option<ExprId>,
    ) -> Result<ExprOutput, ParseError> {
        let parsed = rule(&mut self).and_then(|expr| {
            self.repeat0(Self::newline);
            self.end()?;
            Some(expr)
        });
        match parsed {
            Some(expr) => {
                debug!(memo_entries = self.memo.len(), "parsed expression");
                Ok(ExprOutput {
                    expr,
                    arena: self.arena,
                    stats: self.memo.into_stats(),
                })
            }
            None => Err(self.failure()),
        }
    }

    /// Memo statistics so far.
    pub fn stats(&self) -> &MemoStats {
        self.memo.stats()
    }

    /// Apply a memoized rule, growing the stack first if needed.
    #[inline]
    fn memoize<T: Memoizable>(&mut self, rule: Rule, body: fn(&mut Self) -> Option<T>) -> Option<T> {
        kiwi_stack::ensure_sufficient_stack(|| memo::memoize(self, rule, body))
    }

    /// Build the error for a failed parse from the furthest failure.
    fn failure(&self) -> ParseError {
        let furthest = self.cursor.furthest();
        let pos = furthest.position();
        let expected = furthest.expected().to_vec();
        let token = self
            .cursor
            .token_at(pos)
            .or_else(|| self.cursor.token_at(self.cursor.token_count().saturating_sub(1)));

        let mut error = match token {
            None => ParseError::new(ErrorCode::E1002, "unexpected end of input", Span::DUMMY),
            Some(token) if token.kind == TokenKind::EndMarker => {
                ParseError::new(ErrorCode::E1002, "unexpected end of input", token.span)
            }
            Some(token)
                if self.cursor.is_hard_keyword(token.text)
                    && expected.contains(&Expected::Identifier) =>
            {
                let text = self.cursor.interner().lookup(token.text);
                ParseError::new(
                    ErrorCode::E1003,
                    format!("`{text}` is a reserved keyword and cannot be used as a name"),
                    token.span,
                )
            }
            Some(token) => ParseError::new(
                ErrorCode::E1001,
                format!("unexpected {}", self.describe(token)),
                token.span,
            ),
        };
        error.found = token.map(|t| self.found_text(t)).unwrap_or_default();
        error.expected = expected;
        debug!(code = %error.code, pos, "parse failed");
        error
    }

    fn describe(&self, token: &Token) -> String {
        match token.kind {
            TokenKind::Name | TokenKind::Number | TokenKind::Op => {
                format!("`{}`", self.cursor.interner().lookup(token.text))
            }
            TokenKind::String => format!("string {:?}", self.cursor.interner().lookup(token.text)),
            kind => kind.display_name().to_string(),
        }
    }

    fn found_text(&self, token: &Token) -> String {
        match token.kind {
            TokenKind::Name | TokenKind::Number | TokenKind::Op | TokenKind::String => {
                self.cursor.interner().lookup(token.text).to_string()
            }
            kind => kind.display_name().to_string(),
        }
    }
}

impl MemoHost for Parser<'_> {
    #[inline]
    fn memo(&mut self) -> &mut MemoCache {
        &mut self.memo
    }

    #[inline]
    fn mark(&self) -> usize {
        self.cursor.mark()
    }

    #[inline]
    fn reset(&mut self, pos: usize) {
        self.cursor.reset(pos);
    }
}

/// A parsed module together with the arena its nodes live in.
#[derive(Debug)]
pub struct ParseOutput {
    pub module: Module,
    pub arena: AstArena,
    pub stats: MemoStats,
}

/// A parsed standalone expression.
#[derive(Debug)]
pub struct ExprOutput {
    pub expr: ExprId,
    pub arena: AstArena,
    pub stats: MemoStats,
}

/// Parse a token list with the Kiwi keyword sets.
pub fn parse(tokens: &TokenList, interner: &StringInterner) -> Result<ParseOutput, ParseError> {
    Parser::new(tokens, interner).parse_module()
}

/// Parse a token list with custom keyword sets.
pub fn parse_with_config(
    tokens: &TokenList,
    interner: &StringInterner,
    config: &GrammarConfig,
) -> Result<ParseOutput, ParseError> {
    Parser::with_config(tokens, interner, config).parse_module()
}

static TRACING_INIT: Once = Once::new();

/// Install a tracing subscriber filtered by `RUST_LOG`.
///
/// Does nothing when `RUST_LOG` is unset or a subscriber is already installed.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(EnvFilter::from_default_env())
                .try_init();
        }
    });
}

#[cfg(test)]
mod tests;
