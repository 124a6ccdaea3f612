//! Rule sets for classic low-dimensional algebras.
//!
//! These are ready-made fixtures: handy in tests, demos, and as templates for writing rule
//! sets of your own.

use crate::algebra::{generators::Generators, rules::RuleSet};
use once_cell::sync::Lazy;

/// The complex numbers: `i² = -1`.
pub static COMPLEX: Lazy<RuleSet> = Lazy::new(|| {
    let mut rules = RuleSet::new(Generators::new("i").unwrap());
    rules.add_powers(&[('i', "-1")]).unwrap();
    rules
});

/// The dual numbers: `e² = 0`.
pub static DUAL: Lazy<RuleSet> = Lazy::new(|| {
    let mut rules = RuleSet::new(Generators::new("e").unwrap());
    rules.add_powers(&[('e', "0")]).unwrap();
    rules
});

/// The split-complex numbers: `j² = 1`.
pub static SPLIT_COMPLEX: Lazy<RuleSet> = Lazy::new(|| {
    let mut rules = RuleSet::new(Generators::new("j").unwrap());
    rules.add_powers(&[('j', "1")]).unwrap();
    rules
});

/// The quaternions: `i² = j² = -1` with `ji = -ij`. The word `ij` plays `k`.
pub static QUATERNION: Lazy<RuleSet> = Lazy::new(|| {
    let mut rules = RuleSet::new(Generators::new("ij").unwrap());
    rules.add_powers(&[('i', "-1"), ('j', "-1")]).unwrap();
    rules.add_commutative("ji", "-1ij").unwrap();
    rules
});
