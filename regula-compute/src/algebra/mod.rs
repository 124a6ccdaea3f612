//! The term algebra: generators, words, scalars, linear combinations, and the rewrite engine
//! reducing them.
//!
//! An element of the algebra is a [`LinComb`]: a sum of [`Term`]s, each pairing a symbolic
//! [`Scalar`] with a [`Word`] of generators. The [`rules`] of an algebra say how words reduce;
//! [`rewrite`] drives those rules to a fixed point.

pub mod generators;
pub mod rewrite;
pub mod rules;
pub mod scalar;
pub mod term;
pub mod word;

pub use generators::{Gen, Generators};
pub use rewrite::{multiply, multiply_with_steps, normalize, normalize_with_steps};
pub use rules::RuleSet;
pub use scalar::{Scalar, Symbol};
pub use term::{LinComb, Term};
pub use word::Word;
