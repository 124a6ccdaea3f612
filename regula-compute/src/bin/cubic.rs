//! Builds the regular representation of the cubic extension `Q[i]` with `i³ = u`, printing the
//! intermediate elements along the way, then the quaternions for comparison.

use regula_compute::algebra::rewrite::multiply;
use regula_compute::algebra::{Generators, RuleSet};
use regula_compute::presets::QUATERNION;
use regula_compute::repr::regular_representation;

fn main() {
    let mut rules = RuleSet::new(Generators::new("i").unwrap());
    rules.add_powers(&[]).unwrap();
    rules.add_powers(&[('i', "u")]).unwrap();

    let apply = rules.column_element().unwrap();
    println!("column element: {}", apply.display(rules.generators()));

    let origin = rules.generic_element(&["a", "b", "c"]).unwrap();
    println!("generic element: {}", origin.display(rules.generators()));

    let product = multiply(&origin, &apply, &rules).unwrap();
    println!("product: {}", product.display(rules.generators()));

    println!();
    println!("{}", regular_representation(&["a", "b", "c"], &rules).unwrap());

    println!();
    println!(
        "{}",
        regular_representation(&["a", "b", "c", "d"], &QUATERNION).unwrap(),
    );
}
