use crate::matrix::matrix::Matrix;
use crate::matrix::matrix_gen::{MatrixGen, RealElement};

// Forward (Gaussian) and full (Gauss-Jordan) elimination over an augmented
// matrix, recording a snapshot after every applied transformation.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EliminationMode {
    /// Zeros below each pivot only.
    RowEchelon,
    /// Zeros above and below each pivot.
    GaussJordan,
}

#[derive(Debug, Clone)]
pub struct Step<T> {
    pub description: String,
    pub matrix: MatrixGen<T>,
}

#[derive(Debug, Clone)]
pub struct Elimination<T> {
    pub result: MatrixGen<T>,
    pub steps: Vec<Step<T>>,
}

pub fn row_echelon<T: RealElement>(matrix: &MatrixGen<T>) -> Elimination<T> {
    eliminate(matrix, EliminationMode::RowEchelon)
}

pub fn gauss_jordan<T: RealElement>(matrix: &MatrixGen<T>) -> Elimination<T> {
    eliminate(matrix, EliminationMode::GaussJordan)
}

/// Runs elimination on a copy of `matrix`; the input is never modified.
///
/// Pivots are searched leftmost column first, then top-down from the current
/// target row, so a given input always yields the same step sequence.
pub fn eliminate<T: RealElement>(matrix: &MatrixGen<T>, mode: EliminationMode) -> Elimination<T> {
    let mut mat = matrix.clone();
    let mut steps = vec![];
    let mut lead = 0;

    for r in 0..mat.rows {
        let pivot = loop {
            if lead >= mat.cols {
                break None;
            }
            match (r..mat.rows).find(|&i| !mat.at(i, lead).is_negligible()) {
                Some(i) => break Some(i),
                None => lead += 1,
            }
        };

        let pivot_row = match pivot {
            Some(i) => i,
            // remaining rows are zero in the remaining columns
            None => break,
        };

        if pivot_row != r {
            mat.swap_rows(pivot_row, r);
            steps.push(Step {
                description: format!(
                    "Swap row {} with row {} (pivot in column {}).",
                    r + 1,
                    pivot_row + 1,
                    lead + 1
                ),
                matrix: mat.clone(),
            });
        }

        let pivot_val = mat.at(r, lead);
        if !pivot_val.is_unit() {
            for k in 0..mat.cols {
                let v = mat.at(r, k) / pivot_val;
                mat.set(r, k, v);
            }
            steps.push(Step {
                description: format!("Make pivot 1 in row {} (divide by {:.3}).", r + 1, pivot_val),
                matrix: mat.clone(),
            });
        }

        let targets: Vec<usize> = match mode {
            EliminationMode::RowEchelon => (r + 1..mat.rows).collect(),
            EliminationMode::GaussJordan => (0..mat.rows).filter(|&i| i != r).collect(),
        };

        // A pivot within tolerance of 1 is left undivided, so factors are
        // taken relative to its actual value.
        let pivot_val = mat.at(r, lead);
        let mut eliminated = false;
        for i in targets {
            if mat.at(i, lead).is_negligible() {
                continue;
            }
            let factor = mat.at(i, lead) / pivot_val;
            for k in 0..mat.cols {
                let v = mat.at(i, k) - factor * mat.at(r, k);
                mat.set(i, k, v);
            }
            mat.set(i, lead, T::zero());
            eliminated = true;
        }

        if eliminated {
            let description = match mode {
                EliminationMode::RowEchelon => {
                    format!("Eliminate below pivot in column {}.", lead + 1)
                }
                EliminationMode::GaussJordan => {
                    format!("Eliminate above & below pivot in column {}.", lead + 1)
                }
            };
            steps.push(Step {
                description,
                matrix: mat.clone(),
            });
        }

        lead += 1;
    }

    Elimination { result: mat, steps }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
