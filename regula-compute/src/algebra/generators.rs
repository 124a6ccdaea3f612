//! The generator table of an algebra.

use crate::error::{DuplicateGenerator, InvalidGenerator};
use regula_error::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A handle to one generator of an algebra.
///
/// A [`Gen`] is an index into the [`Generators`] table it was resolved against, not the display
/// character itself. Words built from handles cannot mention characters the algebra does not
/// declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Gen(pub(crate) usize);

/// The ordered table of generators of an algebra.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Generators {
    chars: Vec<char>,
}

impl Generators {
    /// Builds the generator table from the characters of the given string, in order.
    ///
    /// Generators must be ASCII letters and pairwise distinct. Error spans index into the given
    /// string.
    pub fn new(chars: &str) -> Result<Self, Error> {
        let mut table = Vec::new();
        for (at, ch) in chars.char_indices() {
            if !ch.is_ascii_alphabetic() {
                return Err(Error::new(
                    vec![at..at + ch.len_utf8()],
                    InvalidGenerator { ch },
                ));
            }
            if table.contains(&ch) {
                return Err(Error::new(vec![at..at + 1], DuplicateGenerator { ch }));
            }
            table.push(ch);
        }
        Ok(Self { chars: table })
    }

    /// The number of generators.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Returns true if the table declares no generators.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Resolves the generator displayed as the given character.
    pub fn get(&self, ch: char) -> Option<Gen> {
        self.chars.iter().position(|&known| known == ch).map(Gen)
    }

    /// The display character of the given generator.
    pub fn char(&self, gen: Gen) -> char {
        self.chars[gen.0]
    }

    /// Iterates over the generators in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = Gen> + '_ {
        (0..self.chars.len()).map(Gen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::error::{DuplicateGenerator, InvalidGenerator};
    use pretty_assertions::assert_eq;

    #[test]
    fn declaration_order_is_kept() {
        let generators = Generators::new("ijk").unwrap();
        assert_eq!(generators.len(), 3);
        assert_eq!(generators.get('j'), Some(Gen(1)));
        assert_eq!(generators.get('q'), None);
        assert_eq!(generators.char(Gen(2)), 'k');
    }

    #[test]
    fn non_letters_are_rejected() {
        let err = Generators::new("i2").unwrap_err();
        assert_eq!(err.spans, vec![1..2]);
        let kind = err.kind.as_any().downcast_ref::<InvalidGenerator>().unwrap();
        assert_eq!(kind, &InvalidGenerator { ch: '2' });
    }

    #[test]
    fn repeated_generators_are_rejected() {
        let err = Generators::new("iji").unwrap_err();
        assert_eq!(err.spans, vec![2..3]);
        let kind = err.kind.as_any().downcast_ref::<DuplicateGenerator>().unwrap();
        assert_eq!(kind, &DuplicateGenerator { ch: 'i' });
    }
}
