//! Rule sets: the rewrite rules defining an algebra.

use crate::error::{DuplicateRule, InvalidPair, UnknownGenerator};
use regula_error::Error;

use super::{
    generators::{Gen, Generators},
    term::LinComb,
};

/// The default bound on rewrite passes before reduction gives up with
/// [`DidNotConverge`](crate::error::DidNotConverge).
pub const DEFAULT_MAX_PASSES: usize = 1000;

/// The rules defining an algebra over its generators.
///
/// Two families of rules are supported. *Commutative* rules rewrite one adjacent pair of
/// generators into an arbitrary expression, like the quaternion relation `ji -> -ij`.
/// *Power* rules collapse a run of a single generator, like `i² -> -1`; they are grouped into
/// levels, where level zero holds the rules for squares, level one the rules for cubes, and so
/// on.
///
/// Rule right-hand sides are parsed and classified once, when the rule is added, so errors in
/// them surface at declaration time.
#[derive(Debug, Clone)]
pub struct RuleSet {
    generators: Generators,
    commutative: Vec<((Gen, Gen), LinComb)>,
    powers: Vec<Vec<(Gen, LinComb)>>,
    max_passes: usize,
}

impl RuleSet {
    /// Builds an empty rule set over the given generators.
    pub fn new(generators: Generators) -> Self {
        Self {
            generators,
            commutative: Vec::new(),
            powers: Vec::new(),
            max_passes: DEFAULT_MAX_PASSES,
        }
    }

    /// The generator table of the algebra.
    pub fn generators(&self) -> &Generators {
        &self.generators
    }

    /// Adds a rule rewriting the adjacent generator pair `pair` into the expression `rhs`.
    ///
    /// The right-hand side is classified against this rule set's generators, so letters in it
    /// that are not generators become free scalar symbols.
    pub fn add_commutative(&mut self, pair: &str, rhs: &str) -> Result<(), Error> {
        let mut gens = Vec::new();
        for (at, ch) in pair.char_indices() {
            match self.generators.get(ch) {
                Some(gen) => gens.push(gen),
                None => {
                    return Err(Error::new(
                        vec![at..at + ch.len_utf8()],
                        UnknownGenerator { ch },
                    ));
                },
            }
        }
        if gens.len() != 2 {
            return Err(Error::new(
                vec![0..pair.len()],
                InvalidPair { len: gens.len() },
            ));
        }
        let key = (gens[0], gens[1]);
        if self.commutative.iter().any(|(known, _)| *known == key) {
            return Err(Error::new(
                vec![0..pair.len()],
                DuplicateRule {
                    rule: pair.to_owned(),
                },
            ));
        }
        let rhs = LinComb::parse(rhs, &self.generators)?;
        self.commutative.push((key, rhs));
        Ok(())
    }

    /// Appends the next power level: the first call defines the rules for squares, the second
    /// for cubes, and so on. Pass an empty slice to leave a level without rules.
    ///
    /// A generator may have at most one power rule across all levels; the first one defines it.
    pub fn add_powers(&mut self, rules: &[(char, &str)]) -> Result<(), Error> {
        let mut level = Vec::with_capacity(rules.len());
        for &(ch, rhs) in rules {
            let Some(gen) = self.generators.get(ch) else {
                return Err(Error::without_span(UnknownGenerator { ch }));
            };
            if self.defining_level(gen).is_some() || level.iter().any(|(known, _)| *known == gen)
            {
                return Err(Error::without_span(DuplicateRule {
                    rule: ch.to_string(),
                }));
            }
            let rhs = LinComb::parse(rhs, &self.generators)?;
            level.push((gen, rhs));
        }
        self.powers.push(level);
        Ok(())
    }

    /// Caps the number of rewrite passes before reduction gives up.
    pub fn set_max_passes(&mut self, passes: usize) {
        self.max_passes = passes;
    }

    /// The current bound on rewrite passes.
    pub fn max_passes(&self) -> usize {
        self.max_passes
    }

    /// The right-hand side of the commutative rule for the given pair, if one exists.
    pub(crate) fn commutative_rhs(&self, pair: (Gen, Gen)) -> Option<&LinComb> {
        self.commutative
            .iter()
            .find_map(|(known, rhs)| (*known == pair).then_some(rhs))
    }

    /// The power levels, in order: level zero rewrites squares, level one cubes, and so on.
    pub(crate) fn power_levels(&self) -> &[Vec<(Gen, LinComb)>] {
        &self.powers
    }

    /// The index of the level holding the given generator's power rule, if it has one.
    pub(crate) fn defining_level(&self, gen: Gen) -> Option<usize> {
        self.powers
            .iter()
            .position(|level| level.iter().any(|(known, _)| *known == gen))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::error::{DuplicateRule, InvalidPair, UnknownGenerator};
    use pretty_assertions::assert_eq;
    use regula_parser::parser::error::UnclosedParen;

    #[test]
    fn rules_resolve_generators_at_declaration() {
        let mut rules = RuleSet::new(Generators::new("ij").unwrap());
        rules.add_powers(&[('i', "-1"), ('j', "-1")]).unwrap();
        rules.add_commutative("ji", "-1ij").unwrap();

        let i = rules.generators().get('i').unwrap();
        let j = rules.generators().get('j').unwrap();
        assert_eq!(rules.defining_level(i), Some(0));
        assert!(rules.commutative_rhs((j, i)).is_some());
        assert!(rules.commutative_rhs((i, j)).is_none());
    }

    #[test]
    fn pair_must_be_two_generators() {
        let mut rules = RuleSet::new(Generators::new("ij").unwrap());
        let err = rules.add_commutative("i", "1").unwrap_err();
        assert_eq!(err.spans, vec![0..1]);
        let kind = err.kind.as_any().downcast_ref::<InvalidPair>().unwrap();
        assert_eq!(kind, &InvalidPair { len: 1 });

        let err = rules.add_commutative("iji", "1").unwrap_err();
        let kind = err.kind.as_any().downcast_ref::<InvalidPair>().unwrap();
        assert_eq!(kind, &InvalidPair { len: 3 });
    }

    #[test]
    fn unknown_generators_are_rejected() {
        let mut rules = RuleSet::new(Generators::new("ij").unwrap());
        let err = rules.add_commutative("ik", "1").unwrap_err();
        assert_eq!(err.spans, vec![1..2]);
        let kind = err.kind.as_any().downcast_ref::<UnknownGenerator>().unwrap();
        assert_eq!(kind, &UnknownGenerator { ch: 'k' });

        let err = rules.add_powers(&[('k', "1")]).unwrap_err();
        let kind = err.kind.as_any().downcast_ref::<UnknownGenerator>().unwrap();
        assert_eq!(kind, &UnknownGenerator { ch: 'k' });
    }

    #[test]
    fn duplicate_rules_are_rejected() {
        let mut rules = RuleSet::new(Generators::new("ij").unwrap());
        rules.add_commutative("ji", "-1ij").unwrap();
        let err = rules.add_commutative("ji", "ij").unwrap_err();
        let kind = err.kind.as_any().downcast_ref::<DuplicateRule>().unwrap();
        assert_eq!(kind, &DuplicateRule { rule: "ji".to_owned() });

        // one defining rule per generator, across all levels
        rules.add_powers(&[('i', "-1")]).unwrap();
        let err = rules.add_powers(&[('i', "u")]).unwrap_err();
        let kind = err.kind.as_any().downcast_ref::<DuplicateRule>().unwrap();
        assert_eq!(kind, &DuplicateRule { rule: "i".to_owned() });
    }

    #[test]
    fn bad_right_hand_sides_surface_at_declaration() {
        let mut rules = RuleSet::new(Generators::new("i").unwrap());
        let err = rules.add_powers(&[('i', "(1 + u")]).unwrap_err();
        assert!(err.kind.as_any().downcast_ref::<UnclosedParen>().is_some());
    }
}
