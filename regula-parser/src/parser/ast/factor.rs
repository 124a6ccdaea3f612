use std::{fmt, ops::Range};
use super::{expr::Expr, literal::{LitInt, LitSym}};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A parenthesized sub-expression, such as `(1 + 7)`.
///
/// The grammar allows exactly one level of parentheses; the parser rejects anything deeper.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Group {
    /// The expression inside the parentheses.
    pub expr: Expr,

    /// The region of the source code that this group was parsed from, including the parentheses.
    pub span: Range<usize>,
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({})", self.expr)
    }
}

/// A single factor of a term.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Factor {
    /// An integer literal, such as `2` or `144`.
    Integer(LitInt),

    /// A single letter symbol, such as `i` or `u`.
    Symbol(LitSym),

    /// A parenthesized sub-expression, such as `(1 + 7)`.
    Group(Group),
}

impl Factor {
    /// Returns the span of the factor.
    pub fn span(&self) -> Range<usize> {
        match self {
            Factor::Integer(int) => int.span.clone(),
            Factor::Symbol(sym) => sym.span.clone(),
            Factor::Group(group) => group.span.clone(),
        }
    }
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Factor::Integer(int) => int.fmt(f),
            Factor::Symbol(sym) => sym.fmt(f),
            Factor::Group(group) => group.fmt(f),
        }
    }
}
