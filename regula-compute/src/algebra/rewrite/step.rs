/// Possible rewrite steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// An adjacent generator pair was rewritten by a commutative rule, such as `ji -> -ij`.
    Commutative {
        /// The left generator of the matched pair.
        left: char,

        /// The right generator of the matched pair.
        right: char,
    },

    /// A run of one generator was collapsed by a power rule, such as `iii -> u`.
    Power {
        /// The generator whose run matched.
        gen: char,

        /// The length of the matched run.
        power: usize,
    },
}
