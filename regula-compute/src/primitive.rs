//! Functions to construct [`Integer`]s from various types.

use rug::Integer;

/// Creates an [`Integer`] with the given value.
pub fn int<T>(n: T) -> Integer
where
    Integer: From<T>,
{
    Integer::from(n)
}

/// Creates an [`Integer`] from a string slice containing a decimal integer.
///
/// The tokenizer only produces digit runs, so parsing cannot fail.
pub fn int_from_str(s: &str) -> Integer {
    Integer::from_str_radix(s, 10).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn int_from_str_handles_big_values() {
        assert_eq!(int_from_str("3"), int(3));
        assert_eq!(
            int_from_str("170141183460469231731687303715884105728"),
            int(1) << 127,
        );
    }
}
