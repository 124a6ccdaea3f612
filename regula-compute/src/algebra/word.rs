//! Words: products of generators.

use std::fmt;

use super::generators::{Gen, Generators};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A product of generators, leftmost factor first.
///
/// The empty word is the multiplicative identity of the algebra and displays as `1`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Word {
    gens: Vec<Gen>,
}

impl Word {
    /// The empty word.
    pub fn identity() -> Self {
        Self { gens: Vec::new() }
    }

    /// Builds a word from the given generators.
    pub fn new(gens: Vec<Gen>) -> Self {
        Self { gens }
    }

    /// Builds the word `gen^power`.
    pub fn repeated(gen: Gen, power: usize) -> Self {
        Self {
            gens: vec![gen; power],
        }
    }

    /// The generators of the word, leftmost first.
    pub fn gens(&self) -> &[Gen] {
        &self.gens
    }

    /// The number of generators in the word.
    pub fn len(&self) -> usize {
        self.gens.len()
    }

    /// Returns true if the word is the multiplicative identity.
    pub fn is_identity(&self) -> bool {
        self.gens.is_empty()
    }

    /// Appends a generator to the right end of the word.
    pub fn push(&mut self, gen: Gen) {
        self.gens.push(gen);
    }

    /// Returns the concatenation `self · other`.
    pub fn concat(&self, other: &Word) -> Word {
        let mut gens = Vec::with_capacity(self.gens.len() + other.gens.len());
        gens.extend_from_slice(&self.gens);
        gens.extend_from_slice(&other.gens);
        Word { gens }
    }

    /// Returns true if `other` occurs as a contiguous subword of `self`.
    ///
    /// The empty word is a subword of every word.
    pub fn contains(&self, other: &Word) -> bool {
        if other.gens.is_empty() {
            return true;
        }
        self.gens
            .windows(other.gens.len())
            .any(|window| window == other.gens)
    }

    /// Displays the word, resolving generator characters through the given table.
    pub fn display<'a>(&'a self, generators: &'a Generators) -> WordDisplay<'a> {
        WordDisplay {
            word: self,
            generators,
        }
    }
}

/// Helper struct to display a [`Word`], which needs the generator table to resolve its
/// characters.
pub struct WordDisplay<'a> {
    word: &'a Word,
    generators: &'a Generators,
}

impl fmt::Display for WordDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.word.is_identity() {
            return write!(f, "1");
        }
        for &gen in self.word.gens() {
            write!(f, "{}", self.generators.char(gen))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    fn word(generators: &Generators, chars: &str) -> Word {
        Word::new(chars.chars().map(|ch| generators.get(ch).unwrap()).collect())
    }

    #[test]
    fn concat_keeps_order() {
        let generators = Generators::new("ij").unwrap();
        let left = word(&generators, "ij");
        let right = word(&generators, "ji");
        assert_eq!(left.concat(&right), word(&generators, "ijji"));
    }

    #[test]
    fn contains_is_contiguous() {
        let generators = Generators::new("ij").unwrap();
        let haystack = word(&generators, "iij");
        assert!(haystack.contains(&word(&generators, "ij")));
        assert!(haystack.contains(&word(&generators, "ii")));
        assert!(!haystack.contains(&word(&generators, "ji")));
        // both i's of "iji" are there, but not adjacent
        assert!(!word(&generators, "iji").contains(&word(&generators, "ii")));
    }

    #[test]
    fn every_word_contains_the_identity() {
        let generators = Generators::new("i").unwrap();
        assert!(word(&generators, "i").contains(&Word::identity()));
        assert!(Word::identity().contains(&Word::identity()));
    }

    #[test]
    fn identity_displays_as_one() {
        let generators = Generators::new("ij").unwrap();
        assert_eq!(Word::identity().display(&generators).to_string(), "1");
        assert_eq!(word(&generators, "iij").display(&generators).to_string(), "iij");
    }
}
