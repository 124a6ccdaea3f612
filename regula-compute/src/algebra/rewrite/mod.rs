//! Reduction of linear combinations to normal form.
//!
//! Rewriting runs in rounds. Each round maps every term of the combination through the
//! [`commutative`] pass and then the [`power`] pass; each pass rewrites at most the first rule
//! match in the term's word, so a single term may take several rounds to settle. After each
//! round, terms with equal words are combined. The combination is reduced once a round leaves
//! it unchanged.
//!
//! A rule set with cyclic rules never settles, so the number of rounds is capped by
//! [`RuleSet::max_passes`]; hitting the cap is an error.

pub mod commutative;
pub mod power;
pub mod step;

use crate::{error::DidNotConverge, step_collector::StepCollector};
use regula_error::Error;
use std::ops::Range;

use self::step::Step;
use super::{
    generators::Gen,
    rules::RuleSet,
    term::{LinComb, Term},
    word::Word,
};

/// Replaces `gens[range]` with the words of the rule's right-hand side, carrying its scalars.
fn splice(gens: &[Gen], range: Range<usize>, rhs: &LinComb) -> LinComb {
    let terms = rhs
        .terms
        .iter()
        .map(|term| {
            let mut spliced =
                Vec::with_capacity(gens.len() - range.len() + term.word.len());
            spliced.extend_from_slice(&gens[..range.start]);
            spliced.extend_from_slice(term.word.gens());
            spliced.extend_from_slice(&gens[range.end..]);
            Term {
                scalar: term.scalar.clone(),
                word: Word::new(spliced),
            }
        })
        .collect();
    LinComb { terms }
}

/// Applies one commutative-then-power round to a single term. Replacement terms are rescaled
/// by the scalar of the term they replace.
fn reduce_term(
    term: &Term,
    rules: &RuleSet,
    step_collector: &mut dyn StepCollector<Step>,
) -> LinComb {
    let after_commutative = match commutative::reduce(&term.word, rules, step_collector) {
        Some(replacement) => replacement.scale(&term.scalar),
        None => LinComb {
            terms: vec![term.clone()],
        },
    };

    let mut terms = Vec::new();
    for term in after_commutative.terms {
        match power::reduce(&term.word, rules, step_collector) {
            Some(replacement) => terms.extend(replacement.scale(&term.scalar).terms),
            None => terms.push(term),
        }
    }
    LinComb { terms }
}

/// Base implementation of the reduction algorithm.
fn inner_normalize_with(
    lin_comb: &LinComb,
    rules: &RuleSet,
    step_collector: &mut dyn StepCollector<Step>,
) -> Result<LinComb, Error> {
    let mut current = lin_comb.clone();
    for _ in 0..rules.max_passes() {
        let mut terms = Vec::new();
        for term in &current.terms {
            terms.extend(reduce_term(term, rules, step_collector).terms);
        }
        let next = LinComb { terms }.combine();

        if next == current {
            return Ok(next);
        }
        current = next;
    }

    Err(Error::without_span(DidNotConverge {
        passes: rules.max_passes(),
    }))
}

/// Reduces the given combination to its normal form under the given rules.
pub fn normalize(lin_comb: &LinComb, rules: &RuleSet) -> Result<LinComb, Error> {
    inner_normalize_with(lin_comb, rules, &mut ())
}

/// Reduces the given combination to its normal form under the given rules. The steps applied
/// by the rewrite engine are also collected and returned. This is useful for debugging, and
/// also for displaying the rules used to the user.
pub fn normalize_with_steps(
    lin_comb: &LinComb,
    rules: &RuleSet,
) -> Result<(LinComb, Vec<Step>), Error> {
    let mut steps = Vec::new();
    let lin_comb = inner_normalize_with(lin_comb, rules, &mut steps)?;
    Ok((lin_comb, steps))
}

/// Multiplies two algebra elements: the fully distributed product, reduced to normal form.
pub fn multiply(lhs: &LinComb, rhs: &LinComb, rules: &RuleSet) -> Result<LinComb, Error> {
    normalize(&lhs.distribute(rhs), rules)
}

/// Multiplies two algebra elements, also collecting the rewrite steps applied.
pub fn multiply_with_steps(
    lhs: &LinComb,
    rhs: &LinComb,
    rules: &RuleSet,
) -> Result<(LinComb, Vec<Step>), Error> {
    normalize_with_steps(&lhs.distribute(rhs), rules)
}
