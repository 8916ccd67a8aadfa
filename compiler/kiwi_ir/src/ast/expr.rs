//! Expression nodes.

use std::fmt;

use super::operators::{BinaryOperator, CompareOperator, UnaryOperator};
use crate::{ExprId, Name, Span};

/// Expression node.
#[derive(Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.span)
    }
}

/// Expression kinds.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExprKind {
    /// Marks a complete operator-level expression. Only produced for the
    /// plain (non-lambda, non-ternary) form of `expression`.
    Expression(ExprId),

    /// `cond ? then_branch : else_branch`
    IfExpression {
        cond: ExprId,
        then_branch: ExprId,
        else_branch: ExprId,
    },

    /// `lambda a, b: body`. Each name is a lambda parameter.
    LambdaDef { params: Vec<Name>, body: ExprId },

    UnaryOp {
        operand: ExprId,
        op: UnaryOperator,
    },

    BinaryOp {
        left: ExprId,
        right: ExprId,
        op: BinaryOperator,
    },

    /// Comparison chain: `operands.len() == ops.len() + 1`.
    Compare {
        operands: Vec<ExprId>,
        ops: Vec<CompareOperator>,
    },

    Call { callee: ExprId, args: Vec<ExprId> },

    /// `base.name`
    Attribute { base: ExprId, name: Name },

    /// `match subject: key -> value, ...` in expression position.
    MatchExpr {
        subject: ExprId,
        keys: Vec<MatchKey>,
    },

    Name(Name),

    /// Numeric literal, text as written.
    Number(Name),

    /// Adjacent string literals, concatenated.
    String(Name),

    /// `@name`
    Selector(Name),

    Token(TokenLiteral),

    /// Run of number and name tokens joined without separators.
    Word(Name),
}

/// Keyword literals.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenLiteral {
    True,
    False,
    None,
    Promise,
}

impl TokenLiteral {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::True => "true",
            Self::False => "false",
            Self::None => "none",
            Self::Promise => "promise",
        }
    }
}

/// One arm of a match expression.
///
/// `default -> v` has neither bound; `a -> v` has `from == to == a`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchKey {
    pub from: Option<ExprId>,
    pub to: Option<ExprId>,
    pub value: ExprId,
}

impl MatchKey {
    pub fn is_default(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }
}
