use std::{fmt, ops::Range};
use super::term::Term;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A sum of signed terms, the root of the grammar.
///
/// There is always at least one term; an empty source parses into a single term with no factors.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Expr {
    /// The terms making up the expression.
    pub terms: Vec<Term>,

    /// The region of the source code that this expression was parsed from.
    pub span: Range<usize>,
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut iter = self.terms.iter();
        if let Some(term) = iter.next() {
            write!(f, "{}", term)?;
            for term in iter {
                write!(f, " + {}", term)?;
            }
        }
        Ok(())
    }
}
