//! Primaries, atoms and match expressions.

use kiwi_ir::{ExprId, ExprKind, MatchKey, TokenKind, TokenLiteral};

use crate::rule::Rule;
use crate::Parser;

impl Parser<'_> {
    /// ```text
    /// primary: "match" expression ':' key_block
    ///        | primary '.' NAME
    ///        | primary '(' arguments ')'
    ///        | primary '(' ')'
    ///        | atom
    /// ```
    pub(crate) fn primary(&mut self) -> Option<ExprId> {
        self.memoize(Rule::Primary, |p| {
            let start = p.cursor.mark();
            one_of!(p;
                |q| {
                    q.lit("match")?;
                    let subject = q.expression()?;
                    q.lit(":")?;
                    let keys = q.key_block()?;
                    Some(q.alloc_expr(ExprKind::MatchExpr { subject, keys }, start))
                },
                |q| {
                    let base = q.primary()?;
                    q.lit(".")?;
                    let name = q.identifier()?;
                    Some(q.alloc_expr(ExprKind::Attribute { base, name }, start))
                },
                |q| {
                    let callee = q.primary()?;
                    q.lit("(")?;
                    let args = q.arguments()?;
                    q.lit(")")?;
                    Some(q.alloc_expr(ExprKind::Call { callee, args }, start))
                },
                |q| {
                    let callee = q.primary()?;
                    q.lit("(")?;
                    q.lit(")")?;
                    Some(q.alloc_expr(ExprKind::Call { callee, args: Vec::new() }, start))
                },
                |q| q.atom(),
            )
        })
    }

    /// ```text
    /// atom: NAME | 'true' | 'false' | 'none' | 'promise'
    ///     | '@' NAME | STRING+ | NUMBER | '(' expression ')'
    /// ```
    fn atom(&mut self) -> Option<ExprId> {
        self.memoize(Rule::Atom, |p| {
            let start = p.cursor.mark();
            one_of!(p;
                |q| q.name_expr(),
                |q| q.token_literal(TokenLiteral::True, start),
                |q| q.token_literal(TokenLiteral::False, start),
                |q| q.token_literal(TokenLiteral::None, start),
                |q| q.token_literal(TokenLiteral::Promise, start),
                |q| {
                    q.lit("@")?;
                    let name = q.identifier()?;
                    Some(q.alloc_expr(ExprKind::Selector(name), start))
                },
                |q| q.strings(),
                |q| {
                    let text = q.token(TokenKind::Number)?;
                    Some(q.alloc_expr(ExprKind::Number(text), start))
                },
                |q| {
                    q.lit("(")?;
                    let inner = q.expression()?;
                    q.lit(")")?;
                    Some(inner)
                },
            )
        })
    }

    fn token_literal(&mut self, literal: TokenLiteral, start: usize) -> Option<ExprId> {
        self.lit(literal.as_str())?;
        Some(self.alloc_expr(ExprKind::Token(literal), start))
    }

    /// `NAME`: any name token except a hard keyword.
    fn name_expr(&mut self) -> Option<ExprId> {
        self.memoize(Rule::Name, |p| {
            let start = p.cursor.mark();
            let name = p.identifier()?;
            Some(p.alloc_expr(ExprKind::Name(name), start))
        })
    }

    /// `STRING+`, concatenated.
    fn strings(&mut self) -> Option<ExprId> {
        self.memoize(Rule::Strings, |p| {
            let start = p.cursor.mark();
            let parts = p.repeat1(|q| q.token(TokenKind::String))?;
            let interner = p.cursor.interner();
            let text = match parts.as_slice() {
                [single] => *single,
                _ => interner.intern(&parts.iter().map(|&part| interner.lookup(part)).collect::<String>()),
            };
            Some(p.alloc_expr(ExprKind::String(text), start))
        })
    }

    /// `arguments: ','.expression+ [','] &')'`
    fn arguments(&mut self) -> Option<Vec<ExprId>> {
        self.memoize(Rule::Arguments, |p| {
            let args = p.expression_list()?;
            p.opt(Self::comma);
            p.cursor
                .lookahead(|c| c.expect_literal(")").is_some())
                .then_some(args)
        })
    }

    /// `key_block: NEWLINE INDENT (',' NEWLINE*).match_key+ NEWLINE DEDENT`
    fn key_block(&mut self) -> Option<Vec<MatchKey>> {
        self.memoize(Rule::KeyBlock, |p| {
            p.newline()?;
            p.indent()?;
            let keys = p.gather(Self::list_separator, Self::match_key)?;
            p.newline()?;
            p.dedent()?;
            Some(keys)
        })
    }

    /// ```text
    /// match_key: "default" '->' expression
    ///          | expression "to" expression '->' expression
    ///          | expression '->' expression
    /// ```
    fn match_key(&mut self) -> Option<MatchKey> {
        self.memoize(Rule::MatchKey, |p| {
            one_of!(p;
                |q| {
                    q.lit("default")?;
                    q.lit("->")?;
                    let value = q.expression()?;
                    Some(MatchKey { from: None, to: None, value })
                },
                |q| {
                    let from = q.expression()?;
                    q.lit("to")?;
                    let to = q.expression()?;
                    q.lit("->")?;
                    let value = q.expression()?;
                    Some(MatchKey { from: Some(from), to: Some(to), value })
                },
                |q| {
                    let key = q.expression()?;
                    q.lit("->")?;
                    let value = q.expression()?;
                    Some(MatchKey { from: Some(key), to: Some(key), value })
                },
            )
        })
    }

    /// `word: (NUMBER | NAME)+`, joined into one text.
    pub(crate) fn word(&mut self) -> Option<ExprId> {
        self.memoize(Rule::Word, |p| {
            let start = p.cursor.mark();
            let parts = p.repeat1(|q| {
                one_of!(q;
                    |r| r.token(TokenKind::Number),
                    |r| r.identifier(),
                )
            })?;
            let interner = p.cursor.interner();
            let joined: String = parts.iter().map(|&part| interner.lookup(part)).collect();
            let text = interner.intern(&joined);
            Some(p.alloc_expr(ExprKind::Word(text), start))
        })
    }
}
