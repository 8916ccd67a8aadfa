//! Token cursor.
//!
//! Positions are plain indices into the token list, so marking and resetting
//! are O(1). Every failed expectation is reported to the furthest-failure
//! tracker before returning `None`.

use kiwi_ir::{Name, Span, StringInterner, Token, TokenKind, TokenList};
use rustc_hash::FxHashSet;
use tracing::trace;

use crate::error::{Expected, FurthestFailure};

pub struct Cursor<'a> {
    tokens: &'a TokenList,
    interner: &'a StringInterner,
    hard_keywords: FxHashSet<Name>,
    pos: usize,
    furthest: FurthestFailure,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the first token. `hard_keywords` are never accepted
    /// by [`expect_name`](Self::expect_name).
    pub fn new(
        tokens: &'a TokenList,
        interner: &'a StringInterner,
        hard_keywords: FxHashSet<Name>,
    ) -> Self {
        Cursor {
            tokens,
            interner,
            hard_keywords,
            pos: 0,
            furthest: FurthestFailure::default(),
        }
    }

    pub fn interner(&self) -> &'a StringInterner {
        self.interner
    }

    #[inline]
    pub fn mark(&self) -> usize {
        self.pos
    }

    /// Move back (or forward) to a position returned by [`mark`](Self::mark).
    #[inline]
    pub fn reset(&mut self, pos: usize) {
        debug_assert!(pos <= self.tokens.len(), "reset past end of tokens");
        self.pos = pos;
    }

    /// Token at the current position, `None` once the end marker is consumed.
    #[inline]
    pub fn current(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_hard_keyword(&self, name: Name) -> bool {
        self.hard_keywords.contains(&name)
    }

    fn advance(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.pos)?;
        trace!(pos = self.pos, kind = ?token.kind, "advance");
        self.pos += 1;
        Some(token)
    }

    fn fail<T>(&mut self, expected: Expected) -> Option<T> {
        self.furthest.record(self.pos, expected);
        None
    }

    /// Consume a token of `kind`.
    pub fn expect_kind(&mut self, kind: TokenKind) -> Option<&'a Token> {
        match self.current() {
            Some(token) if token.kind == kind => self.advance(),
            _ => self.fail(Expected::Kind(kind)),
        }
    }

    /// Consume a token whose text is exactly `text`. Any kind matches except
    /// string literals, whose text is their contents.
    pub fn expect_literal(&mut self, text: &'static str) -> Option<&'a Token> {
        match self.current() {
            Some(token)
                if token.kind != TokenKind::String && self.interner.lookup(token.text) == text =>
            {
                self.advance()
            }
            _ => self.fail(Expected::Literal(text)),
        }
    }

    /// Consume a name token that is not a hard keyword.
    pub fn expect_name(&mut self) -> Option<&'a Token> {
        match self.current() {
            Some(token) if token.kind == TokenKind::Name && !self.is_hard_keyword(token.text) => {
                self.advance()
            }
            _ => self.fail(Expected::Identifier),
        }
    }

    /// Positive lookahead: run `f`, then restore the position whatever the
    /// outcome.
    pub fn lookahead(&mut self, f: impl FnOnce(&mut Self) -> bool) -> bool {
        let mark = self.mark();
        let matched = f(self);
        self.reset(mark);
        matched
    }

    /// Span from the token at `start` through the last consumed token.
    pub fn span_from(&self, start: usize) -> Span {
        let first = self.tokens.get(start).map_or(Span::DUMMY, |t| t.span);
        if self.pos <= start {
            return Span::point(first.start);
        }
        match self.tokens.get(self.pos - 1) {
            Some(last) => first.merge(last.span),
            None => first,
        }
    }

    pub(crate) fn furthest(&self) -> &FurthestFailure {
        &self.furthest
    }

    pub(crate) fn token_at(&self, pos: usize) -> Option<&'a Token> {
        self.tokens.get(pos)
    }
}
