//! Arena indices for AST nodes.
//!
//! Nodes refer to their children by 32-bit index into an [`AstArena`](crate::AstArena)
//! instead of boxing them.

use std::fmt;

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[repr(transparent)]
        pub struct $name(u32);

        impl $name {
            #[inline]
            pub const fn new(index: u32) -> Self {
                $name(index)
            }

            #[inline]
            pub const fn index(self) -> usize {
                self.0 as usize
            }

            #[inline]
            pub const fn raw(self) -> u32 {
                self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($name), "({})"), self.0)
            }
        }
    };
}

define_id!(
    /// Index of an [`Expr`](crate::ast::Expr) in the arena.
    ExprId
);

define_id!(
    /// Index of a [`Stmt`](crate::ast::Stmt) in the arena.
    StmtId
);

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{ExprId, StmtId};
    crate::static_assert_size!(ExprId, 4);
    crate::static_assert_size!(StmtId, 4);
}
