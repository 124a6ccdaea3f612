//! Terms and linear combinations: the working representation of algebra elements.
//!
//! The parser produces a raw syntax tree; [`LinComb::from_ast`] classifies it against a
//! generator table, splitting every product into a scalar part and a [`Word`] of generators.
//! Letters that are not generators stay symbolic in the scalar, so `2ui` classifies into the
//! scalar `2 * u` times the word `i`.

use crate::primitive::int_from_str;
use regula_error::Error;
use regula_parser::parser::{ast, Parser};
use std::{
    fmt,
    ops::{Add, Neg},
};

use super::{generators::Generators, scalar::Scalar, word::Word};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A scalar multiple of a word.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Term {
    /// The scalar coefficient.
    pub scalar: Scalar,

    /// The word of generators.
    pub word: Word,
}

impl Term {
    /// The multiplicative identity: scalar one on the empty word.
    pub fn identity() -> Self {
        Self {
            scalar: Scalar::one(),
            word: Word::identity(),
        }
    }

    /// Returns the term scaled by the given scalar.
    pub fn scale(&self, scalar: &Scalar) -> Term {
        Term {
            scalar: self.scalar.clone() * scalar.clone(),
            word: self.word.clone(),
        }
    }

    /// Displays the term, resolving generator characters through the given table.
    pub fn display<'a>(&'a self, generators: &'a Generators) -> TermDisplay<'a> {
        TermDisplay {
            term: self,
            generators,
        }
    }
}

/// A sum of [`Term`]s.
///
/// Equality ignores the order of the terms, matching the fixed point check of the rewrite
/// engine: two combinations are equal when they contain the same terms.
#[derive(Debug, Clone, Default, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LinComb {
    /// The terms of the sum.
    pub terms: Vec<Term>,
}

impl LinComb {
    /// Parses and classifies the given source against the given generator table.
    pub fn parse(source: &str, generators: &Generators) -> Result<Self, Error> {
        let expr = Parser::new(source).parse_full()?;
        Ok(Self::from_ast(&expr, generators))
    }

    /// Classifies a parsed expression: each term's integer factors multiply into the scalar,
    /// letters that resolve as generators extend the word, and all other letters become free
    /// scalar symbols. The result is combined.
    pub fn from_ast(expr: &ast::Expr, generators: &Generators) -> Self {
        let mut result = Self { terms: Vec::new() };
        for term in &expr.terms {
            result
                .terms
                .extend(Self::classify_term(term, generators).terms);
        }
        result.combine()
    }

    /// Classifies a single syntax tree term, distributing over any groups it contains.
    fn classify_term(term: &ast::Term, generators: &Generators) -> Self {
        let mut result = Self {
            terms: vec![Term::identity()],
        };
        for factor in &term.factors {
            match factor {
                ast::Factor::Integer(lit) => {
                    let scalar = Scalar::from_integer(int_from_str(&lit.value));
                    for term in &mut result.terms {
                        term.scalar *= scalar.clone();
                    }
                },
                ast::Factor::Symbol(sym) => match generators.get(sym.name) {
                    Some(gen) => {
                        for term in &mut result.terms {
                            term.word.push(gen);
                        }
                    },
                    None => {
                        let scalar = Scalar::named(&sym.name.to_string());
                        for term in &mut result.terms {
                            term.scalar *= scalar.clone();
                        }
                    },
                },
                ast::Factor::Group(group) => {
                    let inner = Self::from_ast(&group.expr, generators);
                    result = result.distribute(&inner);
                },
            }
        }
        if term.negative {
            -result
        } else {
            result
        }
    }

    /// Returns the full pairwise product of the two combinations: scalars multiply and words
    /// concatenate, left factor first.
    ///
    /// The result is deliberately not combined; the rewrite engine reduces the raw product.
    pub fn distribute(&self, rhs: &LinComb) -> LinComb {
        let mut terms = Vec::with_capacity(self.terms.len() * rhs.terms.len());
        for left in &self.terms {
            for right in &rhs.terms {
                terms.push(Term {
                    scalar: left.scalar.clone() * right.scalar.clone(),
                    word: left.word.concat(&right.word),
                });
            }
        }
        LinComb { terms }
    }

    /// Returns the combination scaled by the given scalar.
    pub fn scale(&self, scalar: &Scalar) -> LinComb {
        LinComb {
            terms: self.terms.iter().map(|term| term.scale(scalar)).collect(),
        }
    }

    /// Merges terms with equal words, keeping first-seen word order, and drops terms whose
    /// scalar collapsed to zero. The result has pairwise distinct words.
    pub fn combine(self) -> LinComb {
        let mut combined: Vec<Term> = Vec::new();
        for term in self.terms {
            match combined.iter_mut().find(|known| known.word == term.word) {
                Some(existing) => existing.scalar += term.scalar,
                None => combined.push(term),
            }
        }
        combined.retain(|term| !term.scalar.is_zero());
        LinComb { terms: combined }
    }

    /// Displays the combination, resolving generator characters through the given table.
    pub fn display<'a>(&'a self, generators: &'a Generators) -> LinCombDisplay<'a> {
        LinCombDisplay {
            lin_comb: self,
            generators,
        }
    }
}

/// Compares combinations as sums, ignoring the order of their terms.
impl PartialEq for LinComb {
    fn eq(&self, other: &Self) -> bool {
        self.terms.len() == other.terms.len()
            && self.terms.iter().all(|term| other.terms.contains(term))
    }
}

impl Add for LinComb {
    type Output = LinComb;

    /// Returns the combined sum of the two combinations.
    fn add(mut self, rhs: LinComb) -> LinComb {
        self.terms.extend(rhs.terms);
        self.combine()
    }
}

impl Neg for LinComb {
    type Output = LinComb;

    fn neg(self) -> LinComb {
        LinComb {
            terms: self
                .terms
                .into_iter()
                .map(|term| Term {
                    scalar: -term.scalar,
                    word: term.word,
                })
                .collect(),
        }
    }
}

/// Helper struct to display a [`Term`], which needs the generator table to resolve the
/// characters of its word.
pub struct TermDisplay<'a> {
    term: &'a Term,
    generators: &'a Generators,
}

impl fmt::Display for TermDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let Term { scalar, word } = self.term;
        let word = word.display(self.generators);
        if self.term.word.is_identity() {
            write!(f, "{}", scalar)
        } else if scalar.is_one() {
            write!(f, "{}", word)
        } else if scalar.is_minus_one() {
            write!(f, "-{}", word)
        } else if scalar.monomials().len() == 1 {
            write!(f, "{} * {}", scalar, word)
        } else {
            write!(f, "({}) * {}", scalar, word)
        }
    }
}

/// Helper struct to display a [`LinComb`].
pub struct LinCombDisplay<'a> {
    lin_comb: &'a LinComb,
    generators: &'a Generators,
}

impl fmt::Display for LinCombDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut terms = self.lin_comb.terms.iter();
        let Some(first) = terms.next() else {
            return write!(f, "0");
        };
        write!(f, "{}", first.display(self.generators))?;
        for term in terms {
            write!(f, " + {}", term.display(self.generators))?;
        }
        Ok(())
    }
}
