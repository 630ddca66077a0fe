use std::fmt;

use crate::matrix::matrix_gen::{MatrixGen, RealElement};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolutionKind {
    Unique,
    Infinite,
    None,
}

impl SolutionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SolutionKind::Unique => "unique",
            SolutionKind::Infinite => "infinite",
            SolutionKind::None => "none",
        }
    }
}

impl fmt::Display for SolutionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rank {
    /// Non-zero rows over the coefficient columns.
    pub rank: usize,
    /// Non-zero rows over every column, constants included.
    pub rank_aug: usize,
}

/// Row counts are only meaningful once `matrix` is in (reduced) row echelon form.
pub fn rank<T: RealElement>(matrix: &MatrixGen<T>) -> Rank {
    let vars = matrix.vars();
    let non_zero = |width: usize| {
        (0..matrix.rows)
            .filter(|&i| matrix.row(i)[..width].iter().any(|x| !x.is_negligible()))
            .count()
    };

    Rank {
        rank: non_zero(vars),
        rank_aug: non_zero(matrix.cols),
    }
}

pub fn analyze_system<T: RealElement>(matrix: &MatrixGen<T>) -> SolutionKind {
    let Rank { rank, rank_aug } = rank(matrix);

    if rank != rank_aug {
        SolutionKind::None
    } else if rank < matrix.vars() {
        SolutionKind::Infinite
    } else {
        SolutionKind::Unique
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elimination::elimination::{gauss_jordan, row_echelon};
    use crate::matrix::matrix::Matrix;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_unique() {
        let m = MatrixGen::<f64>::from_list(vec![vec![1.0, 1.0, 2.0], vec![2.0, 1.0, 3.0]]);
        let echelon = row_echelon(&m).result;
        assert_eq!(rank(&echelon), Rank { rank: 2, rank_aug: 2 });
        assert_eq!(analyze_system(&echelon), SolutionKind::Unique);
    }

    #[test]
    fn test_infinite() {
        let m = MatrixGen::<f64>::from_list(vec![vec![1.0, 1.0, 1.0], vec![2.0, 2.0, 2.0]]);
        let echelon = row_echelon(&m).result;
        assert_eq!(rank(&echelon), Rank { rank: 1, rank_aug: 1 });
        assert_eq!(analyze_system(&echelon), SolutionKind::Infinite);
    }

    #[test]
    fn test_none() {
        let m = MatrixGen::<f64>::from_list(vec![vec![0.0, 0.0, 1.0], vec![0.0, 0.0, 0.0]]);
        let echelon = row_echelon(&m).result;
        assert_eq!(rank(&echelon), Rank { rank: 0, rank_aug: 1 });
        assert_eq!(analyze_system(&echelon), SolutionKind::None);
        assert_eq!(analyze_system(&echelon).to_string(), "none");
    }

    #[test]
    fn test_inconsistent_after_elimination() {
        let m = MatrixGen::<f64>::from_list(vec![
            vec![1.0, 2.0, 3.0],
            vec![2.0, 4.0, 7.0],
        ]);
        assert_eq!(analyze_system(&gauss_jordan(&m).result), SolutionKind::None);
    }

    #[test]
    fn test_overdetermined_consistent() {
        let m = MatrixGen::<f64>::from_list(vec![
            vec![1.0, 0.0, 1.0],
            vec![0.0, 1.0, 2.0],
            vec![1.0, 1.0, 3.0],
        ]);
        assert_eq!(analyze_system(&row_echelon(&m).result), SolutionKind::Unique);
    }

    #[test]
    fn test_rank_bounds() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let rows = rng.gen_range(1..6);
            let cols = rng.gen_range(2..6);
            let lines: Vec<Vec<f64>> = (0..rows)
                .map(|_| (0..cols).map(|_| rng.gen_range(-3..=3) as f64).collect())
                .collect();
            let echelon = row_echelon(&MatrixGen::from_list(lines)).result;

            let Rank { rank, rank_aug } = rank(&echelon);
            assert!(rank <= rank_aug);
            assert!(rank_aug <= rows);
        }
    }
}
