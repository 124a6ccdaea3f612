//! Scalars: sums of integer-coefficient monomials in free symbols.
//!
//! Scalars are the coefficients of the algebra. They stay symbolic, so a matrix entry can hold
//! a polynomial like `a - 2 * b` rather than a number. Arithmetic keeps every scalar combined:
//! like monomials merge as they are added and zero monomials are dropped, so the zero scalar is
//! always the empty sum.

use crate::primitive::int;
use rug::Integer;
use std::{
    fmt,
    ops::{Add, AddAssign, Mul, MulAssign, Neg},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single indeterminate appearing in a monomial.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Symbol {
    /// A named coefficient or free symbol, such as `a` or `u`.
    Named(String),

    /// A tag marking which basis column a monomial was multiplied in from.
    Column(usize),
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Symbol::Named(name) => write!(f, "{}", name),
            // column tags display one-based
            Symbol::Column(index) => write!(f, "x{}", index + 1),
        }
    }
}

/// One product of an integer coefficient and zero or more symbols.
///
/// The symbols are kept sorted, so two monomials are alike exactly when their symbol lists are
/// equal.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Monomial {
    /// The integer coefficient.
    pub coef: Integer,

    /// The symbols of the monomial, sorted.
    pub symbols: Vec<Symbol>,
}

impl Monomial {
    /// Returns true if the two monomials can be merged into one.
    fn is_like(&self, other: &Self) -> bool {
        self.symbols == other.symbols
    }
}

/// A scalar: a sum of [`Monomial`]s with pairwise distinct symbol lists.
#[derive(Debug, Clone, Default, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Scalar {
    monomials: Vec<Monomial>,
}

impl Scalar {
    /// The zero scalar: the empty sum.
    pub fn zero() -> Self {
        Self::default()
    }

    /// The scalar one.
    pub fn one() -> Self {
        Self::from_integer(int(1))
    }

    /// Builds a constant scalar.
    pub fn from_integer(n: Integer) -> Self {
        if n == 0 {
            return Self::zero();
        }
        Self {
            monomials: vec![Monomial {
                coef: n,
                symbols: Vec::new(),
            }],
        }
    }

    /// Builds a scalar holding a single monomial.
    pub fn from_monomial(monomial: Monomial) -> Self {
        let mut scalar = Self::zero();
        scalar.push(monomial);
        scalar
    }

    /// Builds the free symbol with the given name.
    pub fn named(name: &str) -> Self {
        Self {
            monomials: vec![Monomial {
                coef: int(1),
                symbols: vec![Symbol::Named(name.to_owned())],
            }],
        }
    }

    /// Builds the tag for the given basis column.
    pub fn column(index: usize) -> Self {
        Self {
            monomials: vec![Monomial {
                coef: int(1),
                symbols: vec![Symbol::Column(index)],
            }],
        }
    }

    /// The monomials of the scalar, in first-seen order.
    pub fn monomials(&self) -> &[Monomial] {
        &self.monomials
    }

    /// Returns true if the scalar is zero.
    pub fn is_zero(&self) -> bool {
        self.monomials.is_empty()
    }

    /// Returns true if the scalar is the constant one.
    pub fn is_one(&self) -> bool {
        matches!(
            &self.monomials[..],
            [monomial] if monomial.symbols.is_empty() && monomial.coef == 1
        )
    }

    /// Returns true if the scalar is the constant negative one.
    pub fn is_minus_one(&self) -> bool {
        matches!(
            &self.monomials[..],
            [monomial] if monomial.symbols.is_empty() && monomial.coef == -1
        )
    }

    /// Adds a monomial to the sum, merging it into a like monomial if one exists.
    fn push(&mut self, monomial: Monomial) {
        if monomial.coef == 0 {
            return;
        }
        match self.monomials.iter().position(|known| known.is_like(&monomial)) {
            Some(at) => {
                self.monomials[at].coef += monomial.coef;
                if self.monomials[at].coef == 0 {
                    self.monomials.remove(at);
                }
            },
            None => self.monomials.push(monomial),
        }
    }
}

/// Compares scalars as sums, ignoring the order of their monomials.
impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        self.monomials.len() == other.monomials.len()
            && self.monomials.iter().all(|monomial| other.monomials.contains(monomial))
    }
}

impl Add for Scalar {
    type Output = Scalar;

    fn add(mut self, rhs: Scalar) -> Scalar {
        self += rhs;
        self
    }
}

impl AddAssign for Scalar {
    fn add_assign(&mut self, rhs: Scalar) {
        for monomial in rhs.monomials {
            self.push(monomial);
        }
    }
}

impl Mul for Scalar {
    type Output = Scalar;

    fn mul(self, rhs: Scalar) -> Scalar {
        let mut out = Scalar::zero();
        for left in &self.monomials {
            for right in &rhs.monomials {
                let mut symbols = Vec::with_capacity(left.symbols.len() + right.symbols.len());
                symbols.extend_from_slice(&left.symbols);
                symbols.extend_from_slice(&right.symbols);
                symbols.sort();
                out.push(Monomial {
                    coef: left.coef.clone() * right.coef.clone(),
                    symbols,
                });
            }
        }
        out
    }
}

impl MulAssign for Scalar {
    fn mul_assign(&mut self, rhs: Scalar) {
        *self = std::mem::take(self) * rhs;
    }
}

impl Neg for Scalar {
    type Output = Scalar;

    fn neg(mut self) -> Scalar {
        for monomial in &mut self.monomials {
            monomial.coef *= -1;
        }
        self
    }
}

/// Writes the magnitude of the monomial; the caller renders the sign.
fn fmt_monomial(f: &mut fmt::Formatter, monomial: &Monomial) -> fmt::Result {
    let coef = monomial.coef.clone().abs();
    if monomial.symbols.is_empty() {
        return write!(f, "{}", coef);
    }
    if coef != 1 {
        write!(f, "{} * ", coef)?;
    }
    let mut symbols = monomial.symbols.iter();
    if let Some(symbol) = symbols.next() {
        write!(f, "{}", symbol)?;
        for symbol in symbols {
            write!(f, " * {}", symbol)?;
        }
    }
    Ok(())
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut monomials = self.monomials.iter();
        let Some(first) = monomials.next() else {
            return write!(f, "0");
        };
        if first.coef < 0 {
            write!(f, "-")?;
        }
        fmt_monomial(f, first)?;
        for monomial in monomials {
            write!(f, "{}", if monomial.coef < 0 { " - " } else { " + " })?;
            fmt_monomial(f, monomial)?;
        }
        Ok(())
    }
}
