//! The Kiwi rule set.
//!
//! Each grammar rule is a method on [`Parser`] returning `Option<T>`: `None`
//! is a local failure that drives backtracking, never a reported error. Rules
//! that go through [`Parser::memoize`] are packrat-cached and may be left
//! recursive.
//!
//! Ordered choice is written with [`one_of!`]; sequences use `?` and rely on
//! the enclosing choice (or the memo layer) to restore the cursor.

/// Ordered choice.
///
/// Tries each `|p| body` alternative in order from the same entry position
/// and yields the first `Some`. The cursor is reset to the entry position
/// after every failed alternative, so a failed choice leaves it untouched.
macro_rules! one_of {
    ($parser:expr; $(|$p:ident| $body:expr),+ $(,)?) => {{
        let parser = $parser;
        let mark = parser.cursor.mark();
        'alternatives: {
            $(
                let attempt = (|$p: &mut Self| $body)(&mut *parser);
                if attempt.is_some() {
                    break 'alternatives attempt;
                }
                parser.cursor.reset(mark);
            )+
            None
        }
    }};
}

mod expr;
mod function;
mod module;
mod namespace;
mod primary;
mod stmt;

use kiwi_ir::{
    DefaultedParam, Expr, ExprId, ExprKind, Name, Param, Stmt, StmtId, StmtKind, TokenKind,
};

use crate::Parser;

/// `annotations` result: targets, type expression and type arguments.
#[derive(Clone, Debug)]
pub(crate) struct Annotations {
    pub targets: Vec<ExprId>,
    pub ty: ExprId,
    pub args: Vec<ExprId>,
}

/// Namespace body split by visibility.
#[derive(Clone, Default, Debug)]
pub(crate) struct Buckets {
    pub private: Vec<StmtId>,
    pub public: Vec<StmtId>,
    pub default: Vec<StmtId>,
}

/// A `private:` or `public:` block with the unlabelled statements around it.
#[derive(Clone, Debug)]
pub(crate) struct LabelledBlock {
    pub before: Vec<StmtId>,
    pub body: Vec<StmtId>,
    pub after: Vec<StmtId>,
}

impl LabelledBlock {
    /// Unlabelled statements in source order.
    fn unlabelled(&self) -> impl Iterator<Item = StmtId> + '_ {
        self.before.iter().chain(&self.after).copied()
    }
}

/// Function parameter lists.
#[derive(Clone, Default, Debug)]
pub(crate) struct Signature {
    pub required: Vec<Param>,
    pub defaulted: Vec<DefaultedParam>,
}

impl Parser<'_> {
    /// Consume the token with text `text`.
    #[inline]
    pub(crate) fn lit(&mut self, text: &'static str) -> Option<()> {
        self.cursor.expect_literal(text).map(|_| ())
    }

    /// Consume a token of `kind`, returning its text.
    #[inline]
    pub(crate) fn token(&mut self, kind: TokenKind) -> Option<Name> {
        self.cursor.expect_kind(kind).map(|t| t.text)
    }

    /// A name that is not a hard keyword.
    #[inline]
    pub(crate) fn identifier(&mut self) -> Option<Name> {
        self.cursor.expect_name().map(|t| t.text)
    }

    pub(crate) fn comma(&mut self) -> Option<()> {
        self.lit(",")
    }

    pub(crate) fn newline(&mut self) -> Option<()> {
        self.token(TokenKind::Newline).map(|_| ())
    }

    pub(crate) fn indent(&mut self) -> Option<()> {
        self.token(TokenKind::Indent).map(|_| ())
    }

    pub(crate) fn dedent(&mut self) -> Option<()> {
        self.token(TokenKind::Dedent).map(|_| ())
    }

    /// `(NEWLINE | ';')+`
    pub(crate) fn separators(&mut self) -> Option<()> {
        self.repeat1(|p| one_of!(p; |q| q.newline(), |q| q.lit(";")))
            .map(|_| ())
    }

    /// `',' NEWLINE*`, the separator of case and match-key lists.
    pub(crate) fn list_separator(&mut self) -> Option<()> {
        self.comma()?;
        self.repeat0(Self::newline);
        Some(())
    }

    /// Zero or more matches of `item`.
    pub(crate) fn repeat0<T>(&mut self, mut item: impl FnMut(&mut Self) -> Option<T>) -> Vec<T> {
        let mut items = Vec::new();
        loop {
            let mark = self.cursor.mark();
            match item(self) {
                Some(value) => {
                    items.push(value);
                    if self.cursor.mark() == mark {
                        break;
                    }
                }
                None => {
                    self.cursor.reset(mark);
                    break;
                }
            }
        }
        items
    }

    /// One or more matches of `item`.
    pub(crate) fn repeat1<T>(&mut self, item: impl FnMut(&mut Self) -> Option<T>) -> Option<Vec<T>> {
        let items = self.repeat0(item);
        if items.is_empty() {
            None
        } else {
            Some(items)
        }
    }

    /// `sep.item+`: one `item`, then any number of `sep item`.
    pub(crate) fn gather<T>(
        &mut self,
        mut sep: impl FnMut(&mut Self) -> Option<()>,
        mut item: impl FnMut(&mut Self) -> Option<T>,
    ) -> Option<Vec<T>> {
        let mut items = vec![item(self)?];
        loop {
            let mark = self.cursor.mark();
            let next = sep(self).and_then(|()| item(self));
            match next {
                Some(value) => items.push(value),
                None => {
                    self.cursor.reset(mark);
                    break;
                }
            }
        }
        Some(items)
    }

    /// `','.expression+`
    pub(crate) fn expression_list(&mut self) -> Option<Vec<ExprId>> {
        self.gather(Self::comma, Self::expression)
    }

    /// `[item]`: run `item`, restoring the cursor if it fails.
    pub(crate) fn opt<T>(&mut self, item: impl FnOnce(&mut Self) -> Option<T>) -> Option<T> {
        let mark = self.cursor.mark();
        let value = item(self);
        if value.is_none() {
            self.cursor.reset(mark);
        }
        value
    }

    pub(crate) fn alloc_expr(&mut self, kind: ExprKind, start: usize) -> ExprId {
        let span = self.cursor.span_from(start);
        self.arena.alloc_expr(Expr::new(kind, span))
    }

    pub(crate) fn alloc_stmt(&mut self, kind: StmtKind, start: usize) -> StmtId {
        let span = self.cursor.span_from(start);
        self.arena.alloc_stmt(Stmt::new(kind, span))
    }
}
