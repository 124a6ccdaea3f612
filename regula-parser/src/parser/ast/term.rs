use std::{fmt, ops::Range};
use super::factor::Factor;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A signed product of factors, such as `-2ij` or `(1 + 7)i`.
///
/// Factors are juxtaposed; a `*` between them is accepted but not required. The sign is the
/// folded result of the `+` and `-` tokens that preceded the term, so `1 - -i` produces a
/// positive second term.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Term {
    /// Whether the term is negated.
    pub negative: bool,

    /// The factors making up the term. An empty list is the multiplicative identity; it only
    /// occurs when the whole source is empty.
    pub factors: Vec<Factor>,

    /// The region of the source code that this term was parsed from, including its sign tokens.
    pub span: Range<usize>,
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.negative {
            write!(f, "-")?;
        }
        let mut iter = self.factors.iter();
        if let Some(factor) = iter.next() {
            write!(f, "{}", factor)?;
            for factor in iter {
                write!(f, " * {}", factor)?;
            }
        }
        Ok(())
    }
}
