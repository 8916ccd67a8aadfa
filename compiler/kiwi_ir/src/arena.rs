//! Contiguous storage for AST nodes.

use crate::ast::{Expr, Stmt};
use crate::{ExprId, StmtId};

/// Owns every expression and statement of one parse.
///
/// Nodes are only ever appended; an id stays valid for the arena's lifetime.
#[derive(Clone, Default, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AstArena {
    exprs: Vec<Expr>,
    stmts: Vec<Stmt>,
}

impl AstArena {
    pub fn new() -> Self {
        AstArena::default()
    }

    /// Arena sized for roughly `token_count` tokens of input.
    pub fn with_capacity(token_count: usize) -> Self {
        AstArena {
            exprs: Vec::with_capacity(token_count / 2),
            stmts: Vec::with_capacity(token_count / 8),
        }
    }

    /// # Panics
    /// Panics if more than `u32::MAX` expressions are allocated.
    pub fn alloc_expr(&mut self, expr: Expr) -> ExprId {
        let index = u32::try_from(self.exprs.len())
            .unwrap_or_else(|_| panic!("expression arena exceeded u32::MAX nodes"));
        self.exprs.push(expr);
        ExprId::new(index)
    }

    /// # Panics
    /// Panics if more than `u32::MAX` statements are allocated.
    pub fn alloc_stmt(&mut self, stmt: Stmt) -> StmtId {
        let index = u32::try_from(self.stmts.len())
            .unwrap_or_else(|_| panic!("statement arena exceeded u32::MAX nodes"));
        self.stmts.push(stmt);
        StmtId::new(index)
    }

    #[inline]
    pub fn get_expr(&self, id: ExprId) -> &Expr {
        &self.exprs[id.index()]
    }

    #[inline]
    pub fn get_stmt(&self, id: StmtId) -> &Stmt {
        &self.stmts[id.index()]
    }

    pub fn expr_count(&self) -> usize {
        self.exprs.len()
    }

    pub fn stmt_count(&self) -> usize {
        self.stmts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{ExprKind, StmtKind, TokenLiteral};
    use crate::Span;

    #[test]
    fn ids_are_sequential() {
        let mut arena = AstArena::new();
        let a = arena.alloc_expr(Expr::new(ExprKind::Token(TokenLiteral::True), Span::new(0, 4)));
        let b = arena.alloc_expr(Expr::new(ExprKind::Token(TokenLiteral::None), Span::new(5, 9)));
        assert_eq!(a.index(), 0);
        assert_eq!(b.index(), 1);
        assert_eq!(arena.get_expr(b).kind, ExprKind::Token(TokenLiteral::None));
        assert_eq!(arena.expr_count(), 2);
    }

    #[test]
    fn statements_are_separate_from_expressions() {
        let mut arena = AstArena::with_capacity(16);
        arena.alloc_expr(Expr::new(ExprKind::Token(TokenLiteral::True), Span::DUMMY));
        let s = arena.alloc_stmt(Stmt::new(StmtKind::Pass, Span::new(0, 4)));
        assert_eq!(s.index(), 0);
        assert_eq!(arena.get_stmt(s).kind, StmtKind::Pass);
        assert_eq!(arena.stmt_count(), 1);
    }
}
