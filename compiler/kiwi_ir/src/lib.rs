//! Kiwi IR: shared data structures of the Kiwi front end.
//!
//! - [`Span`] source locations
//! - [`Name`] interned identifiers and the [`StringInterner`]
//! - [`Token`] and [`TokenList`], the parser's input
//! - the arena AST ([`ast`], [`AstArena`], [`ExprId`], [`StmtId`])
//! - a read-only [`visitor`] and one-line [`render`]ing for dumps and tests

/// Compile-time assertion that a type has a specific size.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod arena;
pub mod ast;
mod ids;
mod interner;
mod name;
pub mod render;
mod span;
mod token;
pub mod visitor;

pub use arena::AstArena;
pub use ast::{
    Alias, AliasBinding, AugOperator, BinaryOperator, Case, CompareOperator, DefaultedParam,
    Expr, ExprKind, MatchKey, Module, Param, Parameter, RefParameter, ReturnParam, Stmt,
    StmtKind, TokenLiteral, UnaryOperator,
};
pub use ids::{ExprId, StmtId};
pub use interner::{InternError, StringInterner};
pub use name::Name;
pub use render::{render_expr, render_module, render_stmt, AstRenderer};
pub use span::Span;
pub use token::{Token, TokenKind, TokenList};
pub use visitor::Visitor;
