//! Basis enumeration and generic elements of an algebra.

use crate::{
    algebra::{
        rules::RuleSet,
        scalar::Scalar,
        term::{LinComb, Term},
        word::Word,
    },
    error::{DuplicateCoefficient, MissingPowerRule, WrongCoefficientCount},
};
use regula_error::Error;

impl RuleSet {
    /// The basis monomials of the algebra: the identity word, then each generator's powers
    /// `g, g², ...` up to the power collapsed by its defining rule.
    ///
    /// A generator without a power rule has unbounded powers, which is an error here.
    pub fn basis_monomials(&self) -> Result<Vec<Word>, Error> {
        let mut basis = vec![Word::identity()];
        for gen in self.generators().iter() {
            let Some(level) = self.defining_level(gen) else {
                return Err(Error::without_span(MissingPowerRule {
                    ch: self.generators().char(gen),
                }));
            };
            for power in 1..=level + 1 {
                basis.push(Word::repeated(gen, power));
            }
        }
        Ok(basis)
    }

    /// The element words spanning the algebra: the identity, then the products of the distinct
    /// basis monomial pairs, in pair order.
    ///
    /// A pair whose product collapses into one of its factors, because one factor is the
    /// identity or occurs inside the other, contributes that factor instead of a new word; the
    /// duplicates this produces beyond the leading identity are skipped.
    pub fn element_words(&self) -> Result<Vec<Word>, Error> {
        let basis = self.basis_monomials()?;
        let mut words = vec![Word::identity()];
        for (at, left) in basis.iter().enumerate() {
            for right in basis.iter().skip(at + 1) {
                if left.is_identity() {
                    words.push(right.clone());
                } else if right.is_identity() {
                    words.push(left.clone());
                } else if !left.contains(right) && !right.contains(left) {
                    words.push(left.concat(right));
                }
            }
        }
        Ok(words)
    }

    /// The dimension of the algebra: the number of element words.
    pub fn dimension(&self) -> Result<usize, Error> {
        Ok(self.element_words()?.len())
    }

    /// Builds the generic element of the algebra: each element word weighted by one of the
    /// given coefficient names, in order.
    ///
    /// There must be exactly one name per element word, with no repeats.
    pub fn generic_element(&self, coefs: &[&str]) -> Result<LinComb, Error> {
        let words = self.element_words()?;
        if coefs.len() != words.len() {
            return Err(Error::without_span(WrongCoefficientCount {
                expected: words.len(),
                found: coefs.len(),
            }));
        }
        for (at, name) in coefs.iter().enumerate() {
            if coefs[..at].contains(name) {
                return Err(Error::without_span(DuplicateCoefficient {
                    name: (*name).to_owned(),
                }));
            }
        }
        Ok(LinComb {
            terms: words
                .into_iter()
                .zip(coefs)
                .map(|(word, name)| Term {
                    scalar: Scalar::named(name),
                    word,
                })
                .collect(),
        })
    }

    /// Builds the column element of the algebra: each element word weighted by the tag of its
    /// own column, so products against it can be traced back to the column they came from.
    pub fn column_element(&self) -> Result<LinComb, Error> {
        let words = self.element_words()?;
        Ok(LinComb {
            terms: words
                .into_iter()
                .enumerate()
                .map(|(column, word)| Term {
                    scalar: Scalar::column(column),
                    word,
                })
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::algebra::generators::Generators;
    use pretty_assertions::assert_eq;

    fn rendered(rules: &RuleSet, words: &[Word]) -> Vec<String> {
        words
            .iter()
            .map(|word| word.display(rules.generators()).to_string())
            .collect()
    }

    /// `i³ = u`.
    fn cubic_rules() -> RuleSet {
        let mut rules = RuleSet::new(Generators::new("i").unwrap());
        rules.add_powers(&[]).unwrap();
        rules.add_powers(&[('i', "u")]).unwrap();
        rules
    }

    /// `i³ = u` and `j² = v`.
    fn mixed_rules() -> RuleSet {
        let mut rules = RuleSet::new(Generators::new("ij").unwrap());
        rules.add_powers(&[('j', "v")]).unwrap();
        rules.add_powers(&[('i', "u")]).unwrap();
        rules
    }

    #[test]
    fn basis_runs_to_the_defining_power() {
        let rules = cubic_rules();
        let basis = rules.basis_monomials().unwrap();
        assert_eq!(rendered(&rules, &basis), ["1", "i", "ii"]);

        let basis = mixed_rules().basis_monomials().unwrap();
        assert_eq!(rendered(&mixed_rules(), &basis), ["1", "i", "ii", "j"]);
    }

    #[test]
    fn element_words_product_the_basis_pairs() {
        let rules = cubic_rules();
        let words = rules.element_words().unwrap();
        assert_eq!(rendered(&rules, &words), ["1", "i", "ii"]);
        assert_eq!(rules.dimension().unwrap(), 3);

        // ii · j is kept, but i · ii collapses into ii and is skipped
        let rules = mixed_rules();
        let words = rules.element_words().unwrap();
        assert_eq!(rendered(&rules, &words), ["1", "i", "ii", "j", "ij", "iij"]);
        assert_eq!(rules.dimension().unwrap(), 6);
    }

    #[test]
    fn generators_without_power_rules_have_no_basis() {
        let mut rules = RuleSet::new(Generators::new("ij").unwrap());
        rules.add_powers(&[('i', "-1")]).unwrap();
        let err = rules.basis_monomials().unwrap_err();
        let kind = err.kind.as_any().downcast_ref::<MissingPowerRule>().unwrap();
        assert_eq!(kind, &MissingPowerRule { ch: 'j' });
    }

    #[test]
    fn generic_elements_take_one_coefficient_per_word() {
        let rules = cubic_rules();
        let element = rules.generic_element(&["a", "b", "c"]).unwrap();
        assert_eq!(
            element.display(rules.generators()).to_string(),
            "a + b * i + c * ii",
        );

        let err = rules.generic_element(&["a", "b"]).unwrap_err();
        let kind = err
            .kind
            .as_any()
            .downcast_ref::<WrongCoefficientCount>()
            .unwrap();
        assert_eq!(kind, &WrongCoefficientCount { expected: 3, found: 2 });

        let err = rules.generic_element(&["a", "b", "a"]).unwrap_err();
        let kind = err
            .kind
            .as_any()
            .downcast_ref::<DuplicateCoefficient>()
            .unwrap();
        assert_eq!(kind, &DuplicateCoefficient { name: "a".to_owned() });
    }

    #[test]
    fn column_elements_tag_every_word() {
        let rules = cubic_rules();
        let element = rules.column_element().unwrap();
        assert_eq!(
            element.display(rules.generators()).to_string(),
            "x1 + x2 * i + x3 * ii",
        );
    }
}
