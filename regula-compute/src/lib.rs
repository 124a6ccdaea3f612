//! Symbolic construction of regular representations of finite-dimensional algebras.
//!
//! An algebra over the rationals is described by a [`RuleSet`](algebra::RuleSet): a set of
//! generators together with rewrite rules saying how products of generators reduce. From the
//! rules alone, this crate enumerates a basis of the algebra and builds the matrix of left
//! multiplication by a fully generic element, with symbolic entries.
//!
//! ```
//! use regula_compute::algebra::{Generators, RuleSet};
//! use regula_compute::repr::regular_representation;
//!
//! let mut rules = RuleSet::new(Generators::new("i")?);
//! rules.add_powers(&[('i', "-1")])?;
//!
//! // left multiplication by a + bi, in the basis (1, i)
//! let repr = regular_representation(&["a", "b"], &rules)?;
//! assert_eq!(repr.labels, ["1", "i"]);
//! assert_eq!(repr.to_string(), "basis: 1, i\n[a, -b]\n[b,  a]\n");
//! # Ok::<(), regula_error::Error>(())
//! ```

pub mod algebra;
pub mod error;
pub mod presets;
pub mod primitive;
pub mod repr;
pub mod step_collector;
