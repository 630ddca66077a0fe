use num_traits::{Float, NumCast};

use crate::matrix::matrix::Matrix;

/// Single numeric-zero threshold shared by elimination, classification and formatting.
pub const EPSILON: f64 = 1e-10;

pub trait RealElement:  // Avoid repeating all the traits
    Float + std::fmt::Display + std::fmt::Debug + Send + Sync
{
    fn tolerance() -> Self {
        <Self as NumCast>::from(EPSILON).unwrap_or_else(Self::epsilon)
    }

    #[inline(always)]
    fn is_negligible(&self) -> bool {
        self.abs() <= Self::tolerance()
    }

    #[inline(always)]
    fn is_unit(&self) -> bool {
        (*self - Self::one()).is_negligible()
    }
}

impl<T> RealElement for T where T: Float + std::fmt::Display + std::fmt::Debug + Send + Sync {}

/// Augmented matrix: the last column holds the constant terms.
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixGen<T> {
    pub cols: usize,
    pub rows: usize,
    pub cells: Vec<T>,
}

impl<T: RealElement> Matrix<T> for MatrixGen<T> {
    fn from_list(lines: Vec<Vec<T>>) -> Self {
        let cols = lines.iter().map(|l| l.len()).max().unwrap_or(0);
        let rows = lines.len();

        MatrixGen {
            rows,
            cols,
            cells: lines
                .into_iter()
                .flat_map(|l| {
                    let missing = cols - l.len();
                    l.into_iter().chain(std::iter::repeat(T::zero()).take(missing))
                })
                .collect(),
        }
    }

    fn to_list(&self) -> Vec<Vec<T>> {
        if self.cols == 0 {
            return vec![vec![]; self.rows];
        }
        self.cells
            .chunks(self.cols)
            .map(|line| line.into())
            .collect()
    }

    fn swap_rows(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        for k in 0..self.cols {
            self.cells.swap(i * self.cols + k, j * self.cols + k);
        }
    }

    fn is_ref(&self) -> bool {
        self.pivot_columns().is_some()
    }

    fn is_rref(&self) -> bool {
        let pivots = match self.pivot_columns() {
            Some(p) => p,
            None => return false,
        };

        for (row, pivot_col) in pivots.iter().enumerate() {
            for r in 0..self.rows {
                if r != row && !self.at(r, *pivot_col).is_negligible() {
                    return false;
                }
            }
        }
        true
    }

    #[inline(always)]
    fn at(&self, row: usize, col: usize) -> T {
        self.cells[row * self.cols + col]
    }
}

impl<T: RealElement> MatrixGen<T> {
    pub fn new(rows: usize, cols: usize) -> MatrixGen<T> {
        MatrixGen {
            rows,
            cols,
            cells: vec![T::zero(); rows * cols],
        }
    }

    #[inline(always)]
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        self.cells[row * self.cols + col] = value;
    }

    pub fn row(&self, row: usize) -> &[T] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    /// Number of unknowns, i.e. every column but the constant one.
    pub fn vars(&self) -> usize {
        self.cols.saturating_sub(1)
    }

    /// Column of the leading (first non-negligible) entry of `row`.
    pub fn leading_col(&self, row: usize) -> Option<usize> {
        self.row(row).iter().position(|x| !x.is_negligible())
    }

    // Pivot column of each non-zero row, or None when the matrix is not in
    // row echelon form.
    fn pivot_columns(&self) -> Option<Vec<usize>> {
        let mut pivots = vec![];

        for i in 0..self.rows {
            match self.leading_col(i) {
                None => {
                    if (i + 1..self.rows).any(|r| self.leading_col(r).is_some()) {
                        return None;
                    }
                    break;
                }
                Some(col) => {
                    if let Some(&prev) = pivots.last() {
                        if col <= prev {
                            return None;
                        }
                    }
                    if !self.at(i, col).is_unit() {
                        return None;
                    }
                    pivots.push(col);
                }
            }
        }
        Some(pivots)
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
