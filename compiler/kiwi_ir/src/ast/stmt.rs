//! Statement nodes and function signature pieces.

use std::fmt;

use super::operators::AugOperator;
use crate::{ExprId, Name, Span, StmtId};

/// Statement node.
#[derive(Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

impl Stmt {
    pub fn new(kind: StmtKind, span: Span) -> Self {
        Stmt { kind, span }
    }
}

impl fmt::Debug for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.span)
    }
}

/// Statement kinds.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StmtKind {
    Pass,
    Break,
    Continue,
    Return(ExprId),

    /// Expression statement.
    Expression(ExprId),

    /// `a, b = 1, 2`
    Assignment {
        targets: Vec<ExprId>,
        values: Vec<ExprId>,
    },

    /// `x: T args = value`
    AnnAssignment {
        targets: Vec<ExprId>,
        ty: ExprId,
        args: Vec<ExprId>,
        values: Vec<ExprId>,
    },

    AugAssignment {
        targets: Vec<ExprId>,
        op: AugOperator,
        values: Vec<ExprId>,
    },

    /// `x: T args` or `a, b -> T args` without a value.
    Annotation {
        targets: Vec<ExprId>,
        ty: ExprId,
        args: Vec<ExprId>,
    },

    FuncDef {
        name: Name,
        required_params: Vec<Param>,
        defaulted_params: Vec<DefaultedParam>,
        return_type: Option<ReturnParam>,
        /// `<- expr` promise clause.
        delay: Option<ExprId>,
        body: Vec<StmtId>,
    },

    NamespaceDef {
        name: Name,
        private_body: Vec<StmtId>,
        public_body: Vec<StmtId>,
        default_body: Vec<StmtId>,
    },

    /// `else if` chains nest as a single `IfElse` in `else_body`.
    IfElse {
        cond: ExprId,
        then_body: Vec<StmtId>,
        else_body: Vec<StmtId>,
    },

    While {
        cond: ExprId,
        body: Vec<StmtId>,
    },

    MatchCase {
        subject: ExprId,
        cases: Vec<Case>,
    },
}

/// `case key: body` arm of a match statement.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Case {
    pub key: ExprId,
    pub body: Vec<StmtId>,
}

/// Typed value parameter: `a, b -> T args` or `a: T args`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Parameter {
    pub targets: Vec<ExprId>,
    pub ty: ExprId,
    pub args: Vec<ExprId>,
}

/// Reference parameter introduced as `=name`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RefParameter {
    pub name: Name,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Param {
    Value(Parameter),
    Ref(RefParameter),
}

/// Parameter followed by `= default`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DefaultedParam {
    pub param: Param,
    pub default: ExprId,
}

/// Return annotation after `->`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReturnParam {
    Value(ExprId),
    Ref(RefParameter),
}
