//! Assembly of regular representation matrices.
//!
//! The regular representation of an algebra sends each element to the matrix of left
//! multiplication by it. The assembly here stays fully symbolic: the generic element, with one
//! named coefficient per basis word, is multiplied against the column element, whose basis
//! words are tagged with [`Symbol::Column`] markers. Each monomial of the reduced product then
//! carries exactly one tag saying which basis column it came from, while the word it sits on
//! says which row it landed in; stripping the tag and accumulating the rest into that cell
//! rebuilds the whole matrix in one multiplication.

pub mod element;
pub mod matrix;

pub use matrix::{Matrix, Representation};

use crate::{
    algebra::{
        rewrite::multiply,
        rules::RuleSet,
        scalar::{Monomial, Scalar, Symbol},
    },
    error::{BadColumnTag, UnreducedTerm},
};
use regula_error::Error;

/// Splits the column tag off a monomial of the reduced product, returning the column index and
/// the monomial without the tag.
///
/// Every monomial of a well-formed product carries exactly one tag; anything else means the
/// inputs were not a generic element against a column element.
fn strip_column_tag(monomial: &Monomial) -> Result<(usize, Monomial), Error> {
    let mut column = None;
    let mut found = 0;
    let mut symbols = Vec::with_capacity(monomial.symbols.len().saturating_sub(1));
    for symbol in &monomial.symbols {
        match symbol {
            Symbol::Column(index) => {
                column = Some(*index);
                found += 1;
            },
            Symbol::Named(_) => symbols.push(symbol.clone()),
        }
    }
    match (column, found) {
        (Some(column), 1) => Ok((
            column,
            Monomial {
                coef: monomial.coef.clone(),
                symbols,
            },
        )),
        _ => Err(Error::without_span(BadColumnTag { found })),
    }
}

/// Builds the regular representation of the algebra defined by `rules`, with the given
/// coefficient names weighting the generic element.
///
/// Entry `(row, column)` of the returned matrix holds the coefficient of basis word `row` in
/// the product of the generic element with basis word `column`, so the matrix applied to a
/// coordinate vector is exactly left multiplication by the generic element.
pub fn regular_representation(coefs: &[&str], rules: &RuleSet) -> Result<Representation, Error> {
    let words = rules.element_words()?;
    let origin = rules.generic_element(coefs)?;
    let apply = rules.column_element()?;
    let product = multiply(&origin, &apply, rules)?;

    let mut matrix = Matrix::zero(words.len());
    for term in &product.terms {
        let Some(row) = words.iter().position(|word| *word == term.word) else {
            return Err(Error::without_span(UnreducedTerm {
                word: term.word.display(rules.generators()).to_string(),
            }));
        };
        for monomial in term.scalar.monomials() {
            let (column, stripped) = strip_column_tag(monomial)?;
            matrix[(row, column)] += Scalar::from_monomial(stripped);
        }
    }

    let labels = words
        .iter()
        .map(|word| word.display(rules.generators()).to_string())
        .collect();
    Ok(Representation { labels, matrix })
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::{algebra::generators::Generators, primitive::int};
    use pretty_assertions::assert_eq;

    fn named(name: &str) -> Scalar {
        Scalar::named(name)
    }

    #[test]
    fn cubic_extension_matrix() {
        let mut rules = RuleSet::new(Generators::new("i").unwrap());
        rules.add_powers(&[]).unwrap();
        rules.add_powers(&[('i', "u")]).unwrap();

        let repr = regular_representation(&["a", "b", "c"], &rules).unwrap();
        assert_eq!(repr.labels, ["1", "i", "ii"]);

        let mut expected = Matrix::zero(3);
        expected[(0, 0)] = named("a");
        expected[(0, 1)] = named("c") * named("u");
        expected[(0, 2)] = named("b") * named("u");
        expected[(1, 0)] = named("b");
        expected[(1, 1)] = named("a");
        expected[(1, 2)] = named("c") * named("u");
        expected[(2, 0)] = named("c");
        expected[(2, 1)] = named("b");
        expected[(2, 2)] = named("a");
        assert_eq!(repr.matrix, expected);
    }

    #[test]
    fn incomplete_rule_sets_leave_unreduced_products() {
        // i and j square away, but nothing reorders ji
        let mut rules = RuleSet::new(Generators::new("ij").unwrap());
        rules.add_powers(&[('i', "-1"), ('j', "-1")]).unwrap();

        let err = regular_representation(&["a", "b", "c", "d"], &rules).unwrap_err();
        let kind = err.kind.as_any().downcast_ref::<UnreducedTerm>().unwrap();
        assert_eq!(kind, &UnreducedTerm { word: "ji".to_owned() });
    }

    #[test]
    fn stripping_requires_exactly_one_tag() {
        let tagged = Monomial {
            coef: int(2),
            symbols: vec![Symbol::Named("a".to_owned()), Symbol::Column(1)],
        };
        let (column, stripped) = strip_column_tag(&tagged).unwrap();
        assert_eq!(column, 1);
        assert_eq!(stripped.coef, int(2));
        assert_eq!(stripped.symbols, vec![Symbol::Named("a".to_owned())]);

        let untagged = Monomial {
            coef: int(1),
            symbols: vec![Symbol::Named("a".to_owned())],
        };
        let err = strip_column_tag(&untagged).unwrap_err();
        let kind = err.kind.as_any().downcast_ref::<BadColumnTag>().unwrap();
        assert_eq!(kind, &BadColumnTag { found: 0 });

        let doubly_tagged = Monomial {
            coef: int(1),
            symbols: vec![Symbol::Column(0), Symbol::Column(1)],
        };
        let err = strip_column_tag(&doubly_tagged).unwrap_err();
        let kind = err.kind.as_any().downcast_ref::<BadColumnTag>().unwrap();
        assert_eq!(kind, &BadColumnTag { found: 2 });
    }
}
