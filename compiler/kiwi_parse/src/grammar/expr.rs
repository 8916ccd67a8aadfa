//! Operator-level expressions.
//!
//! `sum` and `term` are left recursive and fold left-associatively through
//! seed growing. Comparisons are flat chains.

use kiwi_ir::{BinaryOperator, CompareOperator, ExprId, ExprKind, UnaryOperator};

use crate::rule::Rule;
use crate::Parser;

impl Parser<'_> {
    /// ```text
    /// expression: lambda_def
    ///           | inversion '?' inversion ':' inversion
    ///           | inversion
    /// ```
    pub(crate) fn expression(&mut self) -> Option<ExprId> {
        self.memoize(Rule::Expression, |p| {
            let start = p.cursor.mark();
            one_of!(p;
                |q| q.lambda_def(),
                |q| {
                    let cond = q.inversion()?;
                    q.lit("?")?;
                    let then_branch = q.inversion()?;
                    q.lit(":")?;
                    let else_branch = q.inversion()?;
                    Some(q.alloc_expr(ExprKind::IfExpression { cond, then_branch, else_branch }, start))
                },
                |q| {
                    let value = q.inversion()?;
                    Some(q.alloc_expr(ExprKind::Expression(value), start))
                },
            )
        })
    }

    /// `lambda_def: "lambda" (','.NAME+ | [NAME]) ':' expression`
    fn lambda_def(&mut self) -> Option<ExprId> {
        self.memoize(Rule::LambdaDef, |p| {
            let start = p.cursor.mark();
            p.lit("lambda")?;
            let params = p
                .opt(|q| q.gather(Self::comma, Self::identifier))
                .unwrap_or_default();
            p.lit(":")?;
            let body = p.expression()?;
            Some(p.alloc_expr(ExprKind::LambdaDef { params, body }, start))
        })
    }

    /// `inversion: '!' inversion | comparison`
    fn inversion(&mut self) -> Option<ExprId> {
        self.memoize(Rule::Inversion, |p| {
            let start = p.cursor.mark();
            one_of!(p;
                |q| {
                    q.lit("!")?;
                    let operand = q.inversion()?;
                    Some(q.alloc_expr(ExprKind::UnaryOp { operand, op: UnaryOperator::Not }, start))
                },
                |q| q.comparison(),
            )
        })
    }

    /// `comparison: sum compare_op_sum_pair+ | sum`
    fn comparison(&mut self) -> Option<ExprId> {
        self.memoize(Rule::Comparison, |p| {
            let start = p.cursor.mark();
            one_of!(p;
                |q| {
                    let first = q.sum()?;
                    let pairs = q.repeat1(Self::compare_pair)?;
                    let mut operands = Vec::with_capacity(pairs.len() + 1);
                    operands.push(first);
                    let mut ops = Vec::with_capacity(pairs.len());
                    for (op, operand) in pairs {
                        ops.push(op);
                        operands.push(operand);
                    }
                    Some(q.alloc_expr(ExprKind::Compare { operands, ops }, start))
                },
                |q| q.sum(),
            )
        })
    }

    /// `('==' | '!=' | '<=' | '<' | '>=' | '>') sum`
    fn compare_pair(&mut self) -> Option<(CompareOperator, ExprId)> {
        let op = CompareOperator::ALL
            .into_iter()
            .find(|op| self.lit(op.as_symbol()).is_some())?;
        let operand = self.sum()?;
        Some((op, operand))
    }

    /// `sum: sum '+' term | sum '-' term | term`
    fn sum(&mut self) -> Option<ExprId> {
        self.memoize(Rule::Sum, |p| {
            let start = p.cursor.mark();
            one_of!(p;
                |q| q.binary(start, Self::sum, "+", BinaryOperator::Add, Self::term),
                |q| q.binary(start, Self::sum, "-", BinaryOperator::Sub, Self::term),
                |q| q.term(),
            )
        })
    }

    /// `term: term ('*' | '/' | '%') factor | factor`
    fn term(&mut self) -> Option<ExprId> {
        self.memoize(Rule::Term, |p| {
            let start = p.cursor.mark();
            one_of!(p;
                |q| q.binary(start, Self::term, "*", BinaryOperator::Mul, Self::factor),
                |q| q.binary(start, Self::term, "/", BinaryOperator::Div, Self::factor),
                |q| q.binary(start, Self::term, "%", BinaryOperator::Mod, Self::factor),
                |q| q.factor(),
            )
        })
    }

    /// `factor: '+' factor | '-' factor | power`
    fn factor(&mut self) -> Option<ExprId> {
        self.memoize(Rule::Factor, |p| {
            let start = p.cursor.mark();
            one_of!(p;
                |q| q.unary(start, "+", UnaryOperator::Plus),
                |q| q.unary(start, "-", UnaryOperator::Minus),
                |q| q.power(),
            )
        })
    }

    /// `power: primary '**' factor | primary`
    fn power(&mut self) -> Option<ExprId> {
        self.memoize(Rule::Power, |p| {
            let start = p.cursor.mark();
            one_of!(p;
                |q| q.binary(start, Self::primary, "**", BinaryOperator::Pow, Self::factor),
                |q| q.primary(),
            )
        })
    }

    /// `left OP right`
    fn binary(
        &mut self,
        start: usize,
        left: fn(&mut Self) -> Option<ExprId>,
        symbol: &'static str,
        op: BinaryOperator,
        right: fn(&mut Self) -> Option<ExprId>,
    ) -> Option<ExprId> {
        let left = left(self)?;
        self.lit(symbol)?;
        let right = right(self)?;
        Some(self.alloc_expr(ExprKind::BinaryOp { left, right, op }, start))
    }

    /// `OP factor`
    fn unary(&mut self, start: usize, symbol: &'static str, op: UnaryOperator) -> Option<ExprId> {
        self.lit(symbol)?;
        let operand = self.factor()?;
        Some(self.alloc_expr(ExprKind::UnaryOp { operand, op }, start))
    }
}
