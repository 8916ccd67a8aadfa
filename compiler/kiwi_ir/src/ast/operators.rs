//! Operator enums.

/// Prefix operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnaryOperator {
    /// `!`
    Not,
    /// `+`
    Plus,
    /// `-`
    Minus,
}

impl UnaryOperator {
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Not => "!",
            Self::Plus => "+",
            Self::Minus => "-",
        }
    }
}

/// Arithmetic binary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BinaryOperator {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Pow,
}

impl BinaryOperator {
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Pow => "**",
        }
    }
}

/// Operators of a comparison chain.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CompareOperator {
    Eq,
    NotEq,
    LtE,
    Lt,
    GtE,
    Gt,
}

impl CompareOperator {
    /// Every operator, in the order the grammar tries them.
    pub const ALL: [CompareOperator; 6] = [
        Self::Eq,
        Self::NotEq,
        Self::LtE,
        Self::Lt,
        Self::GtE,
        Self::Gt,
    ];

    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::LtE => "<=",
            Self::Lt => "<",
            Self::GtE => ">=",
            Self::Gt => ">",
        }
    }
}

/// Augmented assignment operators (`+=` and friends).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AugOperator {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
}

impl AugOperator {
    pub const ALL: [AugOperator; 5] = [Self::Add, Self::Sub, Self::Mul, Self::Div, Self::Mod];

    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Add => "+=",
            Self::Sub => "-=",
            Self::Mul => "*=",
            Self::Div => "/=",
            Self::Mod => "%=",
        }
    }
}
