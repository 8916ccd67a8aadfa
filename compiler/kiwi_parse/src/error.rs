//! Parse errors and furthest-failure tracking.
//!
//! Alternatives fail all the time during backtracking; none of that is
//! reported. Only when the start rule fails does the parser build a
//! [`ParseError`], positioned at the furthest token any expectation failed on.
//! That is almost always where the input actually goes wrong.

use std::fmt;

use kiwi_diagnostic::{Diagnostic, ErrorCode};
use kiwi_ir::{Span, TokenKind};
use smallvec::SmallVec;

/// Something the parser was looking for.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Expected {
    /// A token of this kind.
    Kind(TokenKind),
    /// A token with exactly this text.
    Literal(&'static str),
    /// A name that is not a hard keyword.
    Identifier,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Kind(kind) => f.write_str(kind.display_name()),
            Expected::Literal(text) => write!(f, "'{text}'"),
            Expected::Identifier => f.write_str("identifier"),
        }
    }
}

/// Furthest position any expectation failed at, and what was expected there.
#[derive(Clone, Default, Debug)]
pub(crate) struct FurthestFailure {
    pos: usize,
    expected: SmallVec<[Expected; 8]>,
}

impl FurthestFailure {
    pub(crate) fn record(&mut self, pos: usize, expected: Expected) {
        if pos > self.pos {
            self.pos = pos;
            self.expected.clear();
        }
        if pos == self.pos && !self.expected.contains(&expected) {
            self.expected.push(expected);
        }
    }

    pub(crate) fn position(&self) -> usize {
        self.pos
    }

    pub(crate) fn expected(&self) -> &[Expected] {
        &self.expected
    }
}

/// Total parse failure.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ParseError {
    pub code: ErrorCode,
    pub message: String,
    /// Span of the offending token.
    pub span: Span,
    /// Everything that would have been accepted at `span`, in the order the
    /// grammar tried it.
    pub expected: Vec<Expected>,
    /// Text of the offending token, or its kind for layout tokens.
    pub found: String,
}

impl ParseError {
    pub fn new(code: ErrorCode, message: impl Into<String>, span: Span) -> Self {
        ParseError {
            code,
            message: message.into(),
            span,
            expected: Vec::new(),
            found: String::new(),
        }
    }

    /// `expected one of: a, b` summary, empty when nothing was recorded.
    pub fn expected_summary(&self) -> String {
        if self.expected.is_empty() {
            return String::new();
        }
        let items: Vec<String> = self.expected.iter().map(ToString::to_string).collect();
        format!("expected one of: {}", items.join(", "))
    }

    /// Convert to a full diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code)
            .with_message(&self.message)
            .with_label(self.span, self.code.title());
        if self.expected.is_empty() {
            diag
        } else {
            diag.with_note(self.expected_summary())
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} at {}", self.code, self.message, self.span)
    }
}

impl std::error::Error for ParseError {}
