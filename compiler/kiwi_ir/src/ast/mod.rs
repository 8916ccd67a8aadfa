//! Kiwi syntax tree.
//!
//! Nodes live in an [`AstArena`](crate::AstArena) and refer to each other by
//! [`ExprId`](crate::ExprId) / [`StmtId`](crate::StmtId). The tree is built once by the
//! parser and never mutated afterwards.

mod expr;
mod operators;
mod stmt;

pub use expr::{Expr, ExprKind, MatchKey, TokenLiteral};
pub use operators::{AugOperator, BinaryOperator, CompareOperator, UnaryOperator};
pub use stmt::{Case, DefaultedParam, Param, Parameter, RefParameter, ReturnParam, Stmt, StmtKind};

use crate::{Name, StmtId, StringInterner};

/// Root of a parsed file.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Module {
    pub imports: Vec<Alias>,
    pub statements: Vec<StmtId>,
}

/// One imported module path.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Alias {
    /// Dotted path segments, never empty.
    pub path: Vec<Name>,
    pub binding: AliasBinding,
}

/// What an import binds.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AliasBinding {
    /// `import a.b as c` binds `c`; without `as`, the last path segment.
    Name(Name),
    /// `from a.b import c, d` binds each listed alias inside `a.b`.
    Members(Vec<Alias>),
}

impl Alias {
    /// `import path` without `as`.
    pub fn plain(path: Vec<Name>) -> Self {
        let bound = path.last().copied().unwrap_or(Name::EMPTY);
        Alias {
            path,
            binding: AliasBinding::Name(bound),
        }
    }

    /// The path joined with `.`.
    pub fn dotted(&self, interner: &StringInterner) -> String {
        let mut out = String::new();
        for (i, segment) in self.path.iter().enumerate() {
            if i > 0 {
                out.push('.');
            }
            out.push_str(interner.lookup(*segment));
        }
        out
    }
}
