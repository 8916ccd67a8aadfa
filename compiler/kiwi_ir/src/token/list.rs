use std::ops::Index;

use super::{Token, TokenKind};
use crate::Span;

/// Random-access token sequence terminated by an end marker.
///
/// Token sources build it with [`push`](TokenList::push) and close it with
/// [`finish`](TokenList::finish); [`from_vec`](TokenList::from_vec) does both.
#[derive(Clone, Default, Eq, PartialEq, Hash, Debug)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    pub fn new() -> Self {
        TokenList { tokens: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        TokenList {
            tokens: Vec::with_capacity(capacity),
        }
    }

    /// Build a finished list from raw tokens.
    pub fn from_vec(tokens: Vec<Token>) -> Self {
        let mut list = TokenList { tokens };
        list.finish();
        list
    }

    #[inline]
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    /// Append an end marker unless the list already ends with one.
    pub fn finish(&mut self) {
        if self.tokens.last().map(|t| t.kind) == Some(TokenKind::EndMarker) {
            return;
        }
        let end = self.tokens.last().map_or(0, |t| t.span.end);
        self.tokens
            .push(Token::marker(TokenKind::EndMarker, Span::point(end)));
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    #[inline]
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    pub fn iter(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter()
    }
}

impl Index<usize> for TokenList {
    type Output = Token;

    #[inline]
    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}
