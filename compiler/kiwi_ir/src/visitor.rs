//! Read-only traversal of the arena AST.
//!
//! Override `visit_*` to act on a node and call the matching `walk_*` to
//! continue into its children. Children are visited depth-first, left to
//! right, in source order.
//!
//! ```text
//! struct CountCalls(usize);
//!
//! impl<'ast> Visitor<'ast> for CountCalls {
//!     fn visit_expr(&mut self, expr: &'ast Expr, arena: &'ast AstArena) {
//!         if matches!(expr.kind, ExprKind::Call { .. }) {
//!             self.0 += 1;
//!         }
//!         walk_expr(self, expr, arena);
//!     }
//! }
//! ```

use crate::ast::{
    Alias, Case, DefaultedParam, Expr, ExprKind, MatchKey, Module, Param, ReturnParam, Stmt,
    StmtKind,
};
use crate::{AstArena, ExprId, StmtId};

pub trait Visitor<'ast> {
    fn visit_module(&mut self, module: &'ast Module, arena: &'ast AstArena) {
        walk_module(self, module, arena);
    }

    /// Imports have no child nodes.
    fn visit_alias(&mut self, alias: &'ast Alias) {
        let _ = alias;
    }

    fn visit_stmt(&mut self, stmt: &'ast Stmt, arena: &'ast AstArena) {
        walk_stmt(self, stmt, arena);
    }

    fn visit_stmt_id(&mut self, id: StmtId, arena: &'ast AstArena) {
        self.visit_stmt(arena.get_stmt(id), arena);
    }

    fn visit_expr(&mut self, expr: &'ast Expr, arena: &'ast AstArena) {
        walk_expr(self, expr, arena);
    }

    fn visit_expr_id(&mut self, id: ExprId, arena: &'ast AstArena) {
        self.visit_expr(arena.get_expr(id), arena);
    }

    fn visit_param(&mut self, param: &'ast Param, arena: &'ast AstArena) {
        walk_param(self, param, arena);
    }

    fn visit_case(&mut self, case: &'ast Case, arena: &'ast AstArena) {
        self.visit_expr_id(case.key, arena);
        walk_body(self, &case.body, arena);
    }

    fn visit_match_key(&mut self, key: &'ast MatchKey, arena: &'ast AstArena) {
        walk_match_key(self, key, arena);
    }
}

pub fn walk_module<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    module: &'ast Module,
    arena: &'ast AstArena,
) {
    for alias in &module.imports {
        visitor.visit_alias(alias);
    }
    walk_body(visitor, &module.statements, arena);
}

pub fn walk_body<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    body: &[StmtId],
    arena: &'ast AstArena,
) {
    for &stmt in body {
        visitor.visit_stmt_id(stmt, arena);
    }
}

fn walk_exprs<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    exprs: &[ExprId],
    arena: &'ast AstArena,
) {
    for &expr in exprs {
        visitor.visit_expr_id(expr, arena);
    }
}

pub fn walk_stmt<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    stmt: &'ast Stmt,
    arena: &'ast AstArena,
) {
    match &stmt.kind {
        StmtKind::Pass | StmtKind::Break | StmtKind::Continue => {}
        StmtKind::Return(value) | StmtKind::Expression(value) => {
            visitor.visit_expr_id(*value, arena);
        }
        StmtKind::Assignment { targets, values } => {
            walk_exprs(visitor, targets, arena);
            walk_exprs(visitor, values, arena);
        }
        StmtKind::AnnAssignment {
            targets,
            ty,
            args,
            values,
        } => {
            walk_exprs(visitor, targets, arena);
            visitor.visit_expr_id(*ty, arena);
            walk_exprs(visitor, args, arena);
            walk_exprs(visitor, values, arena);
        }
        StmtKind::AugAssignment {
            targets, values, ..
        } => {
            walk_exprs(visitor, targets, arena);
            walk_exprs(visitor, values, arena);
        }
        StmtKind::Annotation { targets, ty, args } => {
            walk_exprs(visitor, targets, arena);
            visitor.visit_expr_id(*ty, arena);
            walk_exprs(visitor, args, arena);
        }
        StmtKind::FuncDef {
            required_params,
            defaulted_params,
            return_type,
            delay,
            body,
            ..
        } => {
            for param in required_params {
                visitor.visit_param(param, arena);
            }
            for DefaultedParam { param, default } in defaulted_params {
                visitor.visit_param(param, arena);
                visitor.visit_expr_id(*default, arena);
            }
            if let Some(ReturnParam::Value(ty)) = return_type {
                visitor.visit_expr_id(*ty, arena);
            }
            if let Some(delay) = delay {
                visitor.visit_expr_id(*delay, arena);
            }
            walk_body(visitor, body, arena);
        }
        StmtKind::NamespaceDef {
            private_body,
            public_body,
            default_body,
            ..
        } => {
            walk_body(visitor, private_body, arena);
            walk_body(visitor, public_body, arena);
            walk_body(visitor, default_body, arena);
        }
        StmtKind::IfElse {
            cond,
            then_body,
            else_body,
        } => {
            visitor.visit_expr_id(*cond, arena);
            walk_body(visitor, then_body, arena);
            walk_body(visitor, else_body, arena);
        }
        StmtKind::While { cond, body } => {
            visitor.visit_expr_id(*cond, arena);
            walk_body(visitor, body, arena);
        }
        StmtKind::MatchCase { subject, cases } => {
            visitor.visit_expr_id(*subject, arena);
            for case in cases {
                visitor.visit_case(case, arena);
            }
        }
    }
}

pub fn walk_param<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    param: &'ast Param,
    arena: &'ast AstArena,
) {
    if let Param::Value(value) = param {
        walk_exprs(visitor, &value.targets, arena);
        visitor.visit_expr_id(value.ty, arena);
        walk_exprs(visitor, &value.args, arena);
    }
}

pub fn walk_match_key<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    key: &'ast MatchKey,
    arena: &'ast AstArena,
) {
    if let Some(from) = key.from {
        visitor.visit_expr_id(from, arena);
    }
    // `a -> v` stores `a` as both bounds; visit it once.
    if let Some(to) = key.to.filter(|to| Some(*to) != key.from) {
        visitor.visit_expr_id(to, arena);
    }
    visitor.visit_expr_id(key.value, arena);
}

pub fn walk_expr<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    expr: &'ast Expr,
    arena: &'ast AstArena,
) {
    match &expr.kind {
        ExprKind::Expression(inner) => visitor.visit_expr_id(*inner, arena),
        ExprKind::IfExpression {
            cond,
            then_branch,
            else_branch,
        } => {
            visitor.visit_expr_id(*cond, arena);
            visitor.visit_expr_id(*then_branch, arena);
            visitor.visit_expr_id(*else_branch, arena);
        }
        ExprKind::LambdaDef { body, .. } => visitor.visit_expr_id(*body, arena),
        ExprKind::UnaryOp { operand, .. } => visitor.visit_expr_id(*operand, arena),
        ExprKind::BinaryOp { left, right, .. } => {
            visitor.visit_expr_id(*left, arena);
            visitor.visit_expr_id(*right, arena);
        }
        ExprKind::Compare { operands, .. } => walk_exprs(visitor, operands, arena),
        ExprKind::Call { callee, args } => {
            visitor.visit_expr_id(*callee, arena);
            walk_exprs(visitor, args, arena);
        }
        ExprKind::Attribute { base, .. } => visitor.visit_expr_id(*base, arena),
        ExprKind::MatchExpr { subject, keys } => {
            visitor.visit_expr_id(*subject, arena);
            for key in keys {
                visitor.visit_match_key(key, arena);
            }
        }
        ExprKind::Name(_)
        | ExprKind::Number(_)
        | ExprKind::String(_)
        | ExprKind::Selector(_)
        | ExprKind::Token(_)
        | ExprKind::Word(_) => {}
    }
}
