use itertools::Itertools;

use crate::matrix::matrix_gen::{MatrixGen, RealElement};

/// Upper bound on displayed decimals.
pub const MAX_PRECISION: usize = 17;

/// Fixed-point rendering; negligible values print as a plain zero.
pub fn format_value<T: RealElement>(value: T, precision: usize) -> String {
    let precision = precision.min(MAX_PRECISION);
    let value = if value.is_negligible() { T::zero() } else { value };
    format!("{:.*}", precision, value)
}

// Shortest representation that round-trips, e.g. `2` or `0.5`.
fn format_number<T: RealElement>(value: T) -> String {
    // `-0.0 + 0.0` is `+0.0`
    format!("{}", value + T::zero())
}

pub fn format_matrix<T: RealElement>(matrix: &MatrixGen<T>, precision: usize) -> String {
    (0..matrix.rows)
        .map(|i| {
            matrix
                .row(i)
                .iter()
                .map(|v| format_value(*v, precision))
                .join(" ")
        })
        .join("\n")
}

/// One linear equation per row, e.g. `2x1 - 0.5x3 = 4`.
pub fn format_equations<T: RealElement>(matrix: &MatrixGen<T>) -> String {
    let vars = matrix.vars();

    (0..matrix.rows)
        .map(|i| {
            let row = matrix.row(i);
            let mut eq = String::new();

            for (j, coeff) in row[..vars].iter().enumerate() {
                if coeff.is_negligible() {
                    continue;
                }
                let sign = match (eq.is_empty(), coeff.is_sign_negative()) {
                    (true, false) => "",
                    (true, true) => "-",
                    (false, false) => " + ",
                    (false, true) => " - ",
                };
                eq.push_str(&format!("{}{}x{}", sign, format_number(coeff.abs()), j + 1));
            }

            if eq.is_empty() {
                eq.push('0');
            }
            format!("{} = {}", eq, format_number(row[vars]))
        })
        .join("\n")
}

pub fn format_solution<T: RealElement>(solution: &[T], precision: usize) -> String {
    solution
        .iter()
        .enumerate()
        .map(|(i, v)| format!("x{} = {}", i + 1, format_value(*v, precision)))
        .join("\n")
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
