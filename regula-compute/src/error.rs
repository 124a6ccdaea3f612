//! Error kinds raised while declaring algebras, rewriting, and assembling representations.

use ariadne::Fmt;
use regula_attrs::ErrorKind;
use regula_error::{ErrorKind, EXPR};

/// A generator character outside the allowed alphabet.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("invalid generator: `{}`", ch),
    labels = ["generators must be ASCII letters"],
)]
pub struct InvalidGenerator {
    /// The offending character.
    pub ch: char,
}

/// The same generator was declared twice.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("generator `{}` is declared twice", ch),
    labels = ["second declaration here"],
    help = "generators must be pairwise distinct",
)]
pub struct DuplicateGenerator {
    /// The generator character in question.
    pub ch: char,
}

/// A rule mentions a character that is not a declared generator.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unknown generator: `{}`", ch),
    labels = ["this character is not a generator"],
    help = format!("add it to the string given to {} to declare it", "`Generators::new`".fg(EXPR)),
)]
pub struct UnknownGenerator {
    /// The character that failed to resolve.
    pub ch: char,
}

/// The left-hand side of a commutative rule was not a pair of generators.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "commutative rules rewrite adjacent generator pairs",
    labels = [format!("expected exactly 2 generators here, found {}", len)],
)]
pub struct InvalidPair {
    /// The number of generators actually given.
    pub len: usize,
}

/// Two rules rewrite the same left-hand side.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("duplicate rule for `{}`", rule),
    labels = ["a rule for this pattern already exists"],
)]
pub struct DuplicateRule {
    /// The rendered left-hand side of the rule.
    pub rule: String,
}

/// A generator has no defining power rule, so its powers never stop growing.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("generator `{}` has no power rule", ch),
    labels = ["the powers of this generator never reduce"],
    help = "every generator needs a power rule for the algebra to be finite-dimensional",
)]
pub struct MissingPowerRule {
    /// The generator with no defining rule.
    pub ch: char,
}

/// Rewriting failed to reach a fixed point within the pass limit.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "rewriting did not converge",
    labels = [format!("gave up after {} passes", passes)],
    help = format!(
        "check the rules for cycles, or raise the limit with {}",
        "`RuleSet::set_max_passes`".fg(EXPR),
    ),
)]
pub struct DidNotConverge {
    /// The number of passes that ran before giving up.
    pub passes: usize,
}

/// The number of coefficient names does not match the dimension of the algebra.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "wrong number of coefficients",
    labels = [format!("this algebra needs {} coefficients, found {}", expected, found)],
)]
pub struct WrongCoefficientCount {
    /// The dimension of the algebra.
    pub expected: usize,

    /// The number of names actually given.
    pub found: usize,
}

/// The same coefficient name labels two basis words.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("coefficient `{}` is used twice", name),
    labels = ["coefficient names must be pairwise distinct"],
)]
pub struct DuplicateCoefficient {
    /// The repeated name.
    pub name: String,
}

/// A product term reduced to a word that is not in the basis.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("product term `{}` is not a basis word", word),
    labels = ["this word never reduced to a basis word"],
    help = "the rule set is incomplete; add commutative or power rules covering this product",
)]
pub struct UnreducedTerm {
    /// The rendered word that failed to reduce.
    pub word: String,
}

/// A monomial of a decoded product carried the wrong number of column tags.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "malformed column tag",
    labels = [format!("expected exactly 1 column tag in this monomial, found {}", found)],
)]
pub struct BadColumnTag {
    /// The number of tags actually present.
    pub found: usize,
}
