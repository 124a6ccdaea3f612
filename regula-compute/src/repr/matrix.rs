//! Matrices of scalar polynomials.

use crate::algebra::scalar::Scalar;
use std::{
    fmt,
    ops::{Add, Index, IndexMut, Neg},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A square matrix of [`Scalar`]s, indexed by `(row, column)`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Matrix {
    dim: usize,
    cells: Vec<Scalar>,
}

impl Matrix {
    /// The zero matrix of the given dimension.
    pub fn zero(dim: usize) -> Self {
        Self {
            dim,
            cells: vec![Scalar::zero(); dim * dim],
        }
    }

    /// The dimension of the matrix.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Iterates over the rows of the matrix.
    pub fn rows(&self) -> impl Iterator<Item = &[Scalar]> {
        self.cells.chunks(self.dim)
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = Scalar;

    fn index(&self, (row, col): (usize, usize)) -> &Scalar {
        &self.cells[row * self.dim + col]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Scalar {
        &mut self.cells[row * self.dim + col]
    }
}

impl Add for Matrix {
    type Output = Matrix;

    /// Adds the matrices cell-wise.
    ///
    /// **This function panics if the dimensions differ.**
    fn add(mut self, rhs: Matrix) -> Matrix {
        assert_eq!(self.dim, rhs.dim);
        for (cell, other) in self.cells.iter_mut().zip(rhs.cells) {
            *cell += other;
        }
        self
    }
}

impl Neg for Matrix {
    type Output = Matrix;

    fn neg(self) -> Matrix {
        Matrix {
            dim: self.dim,
            cells: self.cells.into_iter().map(Neg::neg).collect(),
        }
    }
}

impl fmt::Display for Matrix {
    /// Renders the matrix as one bracketed row per line, with cells padded so the columns line
    /// up.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let rendered: Vec<String> = self.cells.iter().map(|cell| cell.to_string()).collect();
        let mut widths = vec![0; self.dim];
        for (at, cell) in rendered.iter().enumerate() {
            let col = at % self.dim;
            widths[col] = widths[col].max(cell.len());
        }
        for row in 0..self.dim {
            write!(f, "[")?;
            for col in 0..self.dim {
                if col > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{:>width$}", rendered[row * self.dim + col], width = widths[col])?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}

/// The regular representation of an algebra: the matrix of left multiplication by the generic
/// element, in the element word basis.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Representation {
    /// The rendered element words labeling the rows and columns, in order.
    pub labels: Vec<String>,

    /// The matrix itself.
    pub matrix: Matrix,
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "basis: {}", self.labels.join(", "))?;
        write!(f, "{}", self.matrix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    fn sample() -> Matrix {
        let mut matrix = Matrix::zero(2);
        matrix[(0, 0)] = Scalar::named("a");
        matrix[(0, 1)] = -Scalar::named("b");
        matrix[(1, 0)] = Scalar::named("b");
        matrix[(1, 1)] = Scalar::named("a");
        matrix
    }

    #[test]
    fn indexing_is_row_major() {
        let matrix = sample();
        assert_eq!(matrix[(0, 1)], -Scalar::named("b"));
        let rows: Vec<_> = matrix.rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1][0], Scalar::named("b"));
    }

    #[test]
    fn addition_is_cell_wise() {
        let sum = sample() + sample();
        let two = Scalar::named("a") + Scalar::named("a");
        assert_eq!(sum[(0, 0)], two);
        assert_eq!(sum[(1, 1)], two);
    }

    #[test]
    fn negation_flips_every_cell() {
        let negated = -sample();
        assert_eq!(negated[(0, 1)], Scalar::named("b"));
        assert_eq!(negated[(1, 0)], -Scalar::named("b"));
    }

    #[test]
    fn display_pads_columns() {
        let mut matrix = sample();
        matrix[(1, 1)] = Scalar::named("a") + Scalar::named("b");
        assert_eq!(matrix.to_string(), "[a,    -b]\n[b, a + b]\n");
    }

    #[test]
    fn representations_lead_with_their_basis() {
        let repr = Representation {
            labels: vec!["1".to_owned(), "i".to_owned()],
            matrix: sample(),
        };
        assert_eq!(repr.to_string(), "basis: 1, i\n[a, -b]\n[b, a]\n");
    }
}
