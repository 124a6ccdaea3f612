//! The commutative pass: rewrites the first adjacent generator pair with a rule.

use crate::{
    algebra::{rules::RuleSet, term::LinComb, word::Word},
    step_collector::StepCollector,
};

use super::step::Step;

/// Applies the first matching commutative rule to the word, scanning pairs left to right.
///
/// Returns the rule's right-hand side spliced into the word in place of the matched pair, or
/// `None` if no rule matches anywhere.
pub fn reduce(
    word: &Word,
    rules: &RuleSet,
    step_collector: &mut dyn StepCollector<Step>,
) -> Option<LinComb> {
    let gens = word.gens();
    for at in 0..gens.len().saturating_sub(1) {
        let pair = (gens[at], gens[at + 1]);
        let Some(rhs) = rules.commutative_rhs(pair) else {
            continue;
        };

        let generators = rules.generators();
        step_collector.push(Step::Commutative {
            left: generators.char(pair.0),
            right: generators.char(pair.1),
        });
        return Some(super::splice(gens, at..at + 2, rhs));
    }

    None
}
