//! Tokens as delivered by a Kiwi token source.
//!
//! The parser never looks at source text: it sees a positioned sequence of
//! [`Token`]s whose last element is an [`TokenKind::EndMarker`]. Keywords are
//! ordinary [`TokenKind::Name`] tokens; the parser decides which words are
//! reserved.

mod list;

use std::fmt;

use crate::{Name, Span};

pub use list::TokenList;

/// Token category.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenKind {
    /// Identifier or keyword.
    Name,
    /// Numeric literal, text as written.
    Number,
    /// String literal, text without quotes.
    String,
    /// Operator or punctuation, matched by exact text.
    Op,
    Newline,
    Indent,
    Dedent,
    /// End of input. Always the last token.
    EndMarker,
}

impl TokenKind {
    /// Name used in "expected ..." messages.
    pub fn display_name(self) -> &'static str {
        match self {
            TokenKind::Name => "identifier",
            TokenKind::Number => "number",
            TokenKind::String => "string",
            TokenKind::Op => "operator",
            TokenKind::Newline => "newline",
            TokenKind::Indent => "indent",
            TokenKind::Dedent => "dedent",
            TokenKind::EndMarker => "end of input",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A positioned token.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    pub kind: TokenKind,
    /// Exact token text. Empty for layout markers.
    pub text: Name,
    pub span: Span,
}

impl Token {
    #[inline]
    pub const fn new(kind: TokenKind, text: Name, span: Span) -> Self {
        Token { kind, text, span }
    }

    /// Layout or end marker with no text.
    #[inline]
    pub const fn marker(kind: TokenKind, span: Span) -> Self {
        Token {
            kind,
            text: Name::EMPTY,
            span,
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({:?}) @ {:?}", self.kind, self.text, self.span)
    }
}
