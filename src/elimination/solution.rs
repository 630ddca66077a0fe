use crate::matrix::matrix::Matrix;
use crate::matrix::matrix_gen::{MatrixGen, RealElement};

/// Solves a row echelon matrix from the last variable up.
///
/// Expects pivots on the diagonal, which holds whenever the system was
/// classified as unique. A negligible diagonal entry leaves that unknown at 0.
pub fn back_substitution<T: RealElement>(matrix: &MatrixGen<T>) -> Vec<T> {
    let vars = matrix.vars();
    let constant = matrix.cols - 1;
    let mut x = vec![T::zero(); vars];

    for i in (0..matrix.rows.min(vars)).rev() {
        let mut acc = matrix.at(i, constant);
        for j in i + 1..vars {
            acc = acc - matrix.at(i, j) * x[j];
        }

        let diag = matrix.at(i, i);
        if diag.is_negligible() {
            continue;
        }
        x[i] = acc / diag;
    }

    x
}

/// Reads the solution straight off a reduced row echelon matrix.
pub fn extract_solution<T: RealElement>(matrix: &MatrixGen<T>) -> Vec<T> {
    let constant = matrix.cols - 1;
    (0..matrix.vars())
        .map(|i| {
            if i < matrix.rows {
                matrix.at(i, constant)
            } else {
                T::zero()
            }
        })
        .collect()
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elimination::analysis::{analyze_system, SolutionKind};
    use crate::elimination::elimination::{gauss_jordan, row_echelon};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_back_substitution() {
        let m = MatrixGen::<f64>::from_list(vec![vec![1.0, 1.0, 2.0], vec![2.0, 1.0, 3.0]]);
        let x = back_substitution(&row_echelon(&m).result);
        assert_eq!(x.len(), 2);
        assert!((x[0] - 1.0).abs() < 1e-9);
        assert!((x[1] - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_extract_solution() {
        let m = MatrixGen::<f64>::from_list(vec![
            vec![1.0, 0.0, 0.0, 2.0],
            vec![0.0, 1.0, 0.0, 3.0],
            vec![0.0, 0.0, 1.0, -1.0],
        ]);
        assert_eq!(extract_solution(&m), vec![2.0, 3.0, -1.0]);
    }

    #[test]
    fn test_back_substitution_ignores_trailing_zero_rows() {
        let m = MatrixGen::<f64>::from_list(vec![
            vec![1.0, 0.0, 1.0],
            vec![0.0, 1.0, 2.0],
            vec![1.0, 1.0, 3.0],
        ]);
        let echelon = row_echelon(&m).result;
        assert_eq!(analyze_system(&echelon), SolutionKind::Unique);

        let x = back_substitution(&echelon);
        assert!((x[0] - 1.0).abs() < 1e-9);
        assert!((x[1] - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_back_substitution_degenerate_pivot() {
        let m = MatrixGen::<f64>::from_list(vec![vec![1.0, 2.0, 5.0], vec![0.0, 0.0, 0.0]]);
        let x = back_substitution(&m);
        assert_eq!(x, vec![5.0, 0.0]);
    }

    #[test]
    fn test_extract_solution_short_matrix() {
        let m = MatrixGen::<f64>::from_list(vec![vec![1.0, 0.0, 0.0, 4.0]]);
        assert_eq!(extract_solution(&m), vec![4.0, 0.0, 0.0]);
    }

    #[test]
    fn test_both_methods_agree() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..100 {
            let n = rng.gen_range(1..6);
            // diagonally dominant, so always full rank
            let lines: Vec<Vec<f64>> = (0..n)
                .map(|i| {
                    (0..=n)
                        .map(|j| {
                            let v = rng.gen_range(-10.0..10.0);
                            if i == j {
                                v + if v < 0.0 { -100.0 } else { 100.0 }
                            } else {
                                v
                            }
                        })
                        .collect()
                })
                .collect();
            let m = MatrixGen::from_list(lines);

            let echelon = row_echelon(&m).result;
            let reduced = gauss_jordan(&m).result;
            assert_eq!(analyze_system(&echelon), SolutionKind::Unique);
            assert_eq!(analyze_system(&reduced), SolutionKind::Unique);

            let a = back_substitution(&echelon);
            let b = extract_solution(&reduced);
            for (x, y) in a.iter().zip(b.iter()) {
                assert!((x - y).abs() < 1e-6, "{:?} != {:?}", a, b);
            }

            // the solution satisfies the original equations
            for i in 0..n {
                let lhs: f64 = (0..n).map(|j| m.at(i, j) * a[j]).sum();
                assert!((lhs - m.at(i, n)).abs() < 1e-6);
            }
        }
    }
}
