//! The power pass: collapses the first run of a single generator with a rule.

use crate::{
    algebra::{rules::RuleSet, term::LinComb, word::Word},
    step_collector::StepCollector,
};

use super::step::Step;

/// Applies the first matching power rule to the word.
///
/// The scan is position-major: at each position, run lengths `k = 2, 3, ...` are tried in step
/// with the rule levels, so a run of `k` equal generators only rewrites through that
/// generator's rule in level `k - 2`. The shortest run at the leftmost position wins.
///
/// Returns the rule's right-hand side spliced into the word in place of the matched run, or
/// `None` if no rule matches anywhere.
pub fn reduce(
    word: &Word,
    rules: &RuleSet,
    step_collector: &mut dyn StepCollector<Step>,
) -> Option<LinComb> {
    let gens = word.gens();
    for at in 0..gens.len().saturating_sub(1) {
        for (level_index, level) in rules.power_levels().iter().enumerate() {
            let k = level_index + 2;
            if at + k > gens.len() {
                break;
            }
            if gens[at..at + k].iter().any(|&gen| gen != gens[at]) {
                continue;
            }
            let Some(rhs) = level
                .iter()
                .find_map(|(gen, rhs)| (*gen == gens[at]).then_some(rhs))
            else {
                continue;
            };

            step_collector.push(Step::Power {
                gen: rules.generators().char(gens[at]),
                power: k,
            });
            return Some(super::splice(gens, at..at + k, rhs));
        }
    }

    None
}
