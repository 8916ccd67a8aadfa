//! Statements, blocks and control flow.

use kiwi_ir::{AugOperator, Case, ExprId, StmtId, StmtKind};

use super::Annotations;
use crate::rule::Rule;
use crate::Parser;

impl Parser<'_> {
    /// `statements: statement+`
    pub(crate) fn statements(&mut self) -> Option<Vec<StmtId>> {
        self.memoize(Rule::Statements, |p| p.repeat1(Self::statement))
    }

    /// `statement: simple_stmt (NEWLINE | ';')+ | compound_stmt`
    fn statement(&mut self) -> Option<StmtId> {
        self.memoize(Rule::Statement, |p| {
            one_of!(p;
                |q| {
                    let stmt = q.simple_stmt()?;
                    q.separators()?;
                    Some(stmt)
                },
                |q| q.compound_stmt(),
            )
        })
    }

    /// `statement_newline: simple_stmt NEWLINE+`
    fn statement_newline(&mut self) -> Option<StmtId> {
        self.memoize(Rule::StatementNewline, |p| {
            let stmt = p.simple_stmt()?;
            p.repeat1(Self::newline)?;
            Some(stmt)
        })
    }

    /// ```text
    /// simple_stmt: assignment | expression | return_stmt
    ///            | 'pass' | 'break' | 'continue'
    /// ```
    fn simple_stmt(&mut self) -> Option<StmtId> {
        self.memoize(Rule::SimpleStmt, |p| {
            let start = p.cursor.mark();
            one_of!(p;
                |q| q.assignment(),
                |q| {
                    let expr = q.expression()?;
                    Some(q.alloc_stmt(StmtKind::Expression(expr), start))
                },
                |q| q.return_stmt(),
                |q| q.keyword_stmt("pass", StmtKind::Pass, start),
                |q| q.keyword_stmt("break", StmtKind::Break, start),
                |q| q.keyword_stmt("continue", StmtKind::Continue, start),
            )
        })
    }

    fn keyword_stmt(&mut self, keyword: &'static str, kind: StmtKind, start: usize) -> Option<StmtId> {
        self.lit(keyword)?;
        Some(self.alloc_stmt(kind, start))
    }

    /// ```text
    /// compound_stmt: function_def | namespace_def | if_stmt
    ///              | while_stmt | match_stmt
    /// ```
    fn compound_stmt(&mut self) -> Option<StmtId> {
        self.memoize(Rule::CompoundStmt, |p| {
            one_of!(p;
                |q| q.function_def(),
                |q| q.namespace_def(),
                |q| q.if_stmt(),
                |q| q.while_stmt(),
                |q| q.match_stmt(),
            )
        })
    }

    /// ```text
    /// assignment: annotations '=' ','.expression+
    ///           | ','.expression+ '=' ','.expression+
    ///           | ','.expression+ augassign ','.expression+
    ///           | annotations
    /// ```
    fn assignment(&mut self) -> Option<StmtId> {
        self.memoize(Rule::Assignment, |p| {
            let start = p.cursor.mark();
            one_of!(p;
                |q| {
                    let Annotations { targets, ty, args } = q.annotations()?;
                    q.lit("=")?;
                    let values = q.expression_list()?;
                    Some(q.alloc_stmt(StmtKind::AnnAssignment { targets, ty, args, values }, start))
                },
                |q| {
                    let targets = q.expression_list()?;
                    q.lit("=")?;
                    let values = q.expression_list()?;
                    Some(q.alloc_stmt(StmtKind::Assignment { targets, values }, start))
                },
                |q| {
                    let targets = q.expression_list()?;
                    let op = q.augassign()?;
                    let values = q.expression_list()?;
                    Some(q.alloc_stmt(StmtKind::AugAssignment { targets, op, values }, start))
                },
                |q| {
                    let Annotations { targets, ty, args } = q.annotations()?;
                    Some(q.alloc_stmt(StmtKind::Annotation { targets, ty, args }, start))
                },
            )
        })
    }

    /// ```text
    /// annotations: expression ':' expression expression*
    ///            | ','.expression+ '->' expression expression*
    /// ```
    pub(crate) fn annotations(&mut self) -> Option<Annotations> {
        self.memoize(Rule::Annotations, |p| {
            one_of!(p;
                |q| {
                    let target = q.expression()?;
                    q.lit(":")?;
                    let ty = q.expression()?;
                    let args = q.repeat0(Self::expression);
                    Some(Annotations { targets: vec![target], ty, args })
                },
                |q| {
                    let targets = q.expression_list()?;
                    q.lit("->")?;
                    let ty = q.expression()?;
                    let args = q.repeat0(Self::expression);
                    Some(Annotations { targets, ty, args })
                },
            )
        })
    }

    /// `augassign: '+=' | '-=' | '*=' | '/=' | '%='`
    fn augassign(&mut self) -> Option<AugOperator> {
        self.memoize(Rule::AugAssign, |p| {
            AugOperator::ALL
                .into_iter()
                .find(|op| p.lit(op.as_symbol()).is_some())
        })
    }

    /// `return_stmt: 'return' expression`
    fn return_stmt(&mut self) -> Option<StmtId> {
        self.memoize(Rule::ReturnStmt, |p| {
            let start = p.cursor.mark();
            p.lit("return")?;
            let value = p.expression()?;
            Some(p.alloc_stmt(StmtKind::Return(value), start))
        })
    }

    /// `block: NEWLINE INDENT statements DEDENT NEWLINE | statement_newline`
    pub(crate) fn block(&mut self) -> Option<Vec<StmtId>> {
        self.memoize(Rule::Block, |p| {
            one_of!(p;
                |q| {
                    q.newline()?;
                    q.indent()?;
                    let body = q.statements()?;
                    q.dedent()?;
                    q.newline()?;
                    Some(body)
                },
                |q| q.statement_newline().map(|stmt| vec![stmt]),
            )
        })
    }

    /// ```text
    /// if_stmt: 'if' expression ':' block 'else' if_stmt
    ///        | 'if' expression ':' block 'else' ':' block
    ///        | 'if' expression ':' block
    /// ```
    fn if_stmt(&mut self) -> Option<StmtId> {
        self.memoize(Rule::IfStmt, |p| {
            let start = p.cursor.mark();
            let (cond, then_body) = p.if_head()?;
            let else_body = p
                .opt(|q| {
                    q.lit("else")?;
                    one_of!(q;
                        |r| r.if_stmt().map(|nested| vec![nested]),
                        |r| {
                            r.lit(":")?;
                            r.block()
                        },
                    )
                })
                .unwrap_or_default();
            Some(p.alloc_stmt(StmtKind::IfElse { cond, then_body, else_body }, start))
        })
    }

    fn if_head(&mut self) -> Option<(ExprId, Vec<StmtId>)> {
        self.lit("if")?;
        let cond = self.expression()?;
        self.lit(":")?;
        let body = self.block()?;
        Some((cond, body))
    }

    /// `while_stmt: 'while' expression ':' block`
    fn while_stmt(&mut self) -> Option<StmtId> {
        self.memoize(Rule::WhileStmt, |p| {
            let start = p.cursor.mark();
            p.lit("while")?;
            let cond = p.expression()?;
            p.lit(":")?;
            let body = p.block()?;
            Some(p.alloc_stmt(StmtKind::While { cond, body }, start))
        })
    }

    /// ```text
    /// match_stmt: "match" expression ':' NEWLINE INDENT
    ///             (',' NEWLINE*).case+ DEDENT NEWLINE
    /// ```
    fn match_stmt(&mut self) -> Option<StmtId> {
        self.memoize(Rule::MatchStmt, |p| {
            let start = p.cursor.mark();
            p.lit("match")?;
            let subject = p.expression()?;
            p.lit(":")?;
            p.newline()?;
            p.indent()?;
            let cases = p.gather(Self::list_separator, Self::case)?;
            p.dedent()?;
            p.newline()?;
            Some(p.alloc_stmt(StmtKind::MatchCase { subject, cases }, start))
        })
    }

    /// `case: "case" expression ':' block`
    fn case(&mut self) -> Option<Case> {
        self.memoize(Rule::Case, |p| {
            p.lit("case")?;
            let key = p.expression()?;
            p.lit(":")?;
            let body = p.block()?;
            Some(Case { key, body })
        })
    }
}
