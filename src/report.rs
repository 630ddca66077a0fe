use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use rayon::prelude::*;
use std::fmt;

use crate::elimination::analysis::{analyze_system, SolutionKind};
use crate::elimination::elimination::{eliminate, Elimination, EliminationMode};
use crate::elimination::solution::{back_substitution, extract_solution};
use crate::format::{format_equations, format_matrix, format_solution, MAX_PRECISION};
use crate::matrix::matrix_gen::{MatrixGen, RealElement};
use crate::utils::log_step;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Gaussian,
    GaussJordan,
}

impl Method {
    pub fn from_name(name: &str) -> Result<Method, String> {
        match name.to_lowercase().as_str() {
            "gaussian" | "gauss" => Ok(Method::Gaussian),
            "gaussjordan" | "gauss_jordan" | "gauss-jordan" => Ok(Method::GaussJordan),
            _ => Err(format!("Unknown elimination method: {}", name)),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Method::Gaussian => "gaussian",
            Method::GaussJordan => "gaussJordan",
        }
    }

    pub fn mode(&self) -> EliminationMode {
        match self {
            Method::Gaussian => EliminationMode::RowEchelon,
            Method::GaussJordan => EliminationMode::GaussJordan,
        }
    }

    fn title(&self) -> &'static str {
        match self {
            Method::Gaussian => "Gaussian",
            Method::GaussJordan => "Gauss-Jordan",
        }
    }

    fn form(&self) -> &'static str {
        match self {
            Method::Gaussian => "Row Echelon Form",
            Method::GaussJordan => "Reduced Row Echelon Form",
        }
    }
}

#[pyclass]
#[derive(Debug, Clone)]
pub struct SolverConfig {
    pub method: Method,
    /// Decimals used for matrices and solution values.
    #[pyo3(get)]
    pub precision: usize,
    /// Print every step while solving.
    #[pyo3(get, set)]
    pub verbose: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            method: Method::Gaussian,
            precision: 3,
            verbose: false,
        }
    }
}

#[pymethods]
impl SolverConfig {
    #[new]
    #[pyo3(signature = (method="gaussian", precision=3, verbose=false))]
    fn py_new(method: &str, precision: usize, verbose: bool) -> PyResult<Self> {
        let method = Method::from_name(method).map_err(PyValueError::new_err)?;
        check_precision(precision).map_err(PyValueError::new_err)?;
        Ok(SolverConfig {
            method,
            precision,
            verbose,
        })
    }

    #[setter]
    fn set_precision(&mut self, precision: usize) -> PyResult<()> {
        check_precision(precision).map_err(PyValueError::new_err)?;
        self.precision = precision;
        Ok(())
    }

    #[getter]
    fn method(&self) -> &'static str {
        self.method.name()
    }

    #[setter]
    fn set_method(&mut self, name: &str) -> PyResult<()> {
        self.method = Method::from_name(name).map_err(PyValueError::new_err)?;
        Ok(())
    }

    fn __repr__(&self) -> String {
        format!(
            "SolverConfig(method='{}', precision={}, verbose={})",
            self.method.name(),
            self.precision,
            if self.verbose { "True" } else { "False" }
        )
    }
}

pub fn check_precision(precision: usize) -> Result<(), String> {
    if precision > MAX_PRECISION {
        return Err(format!(
            "Precision {} too large: at most {} decimals",
            precision, MAX_PRECISION
        ));
    }
    Ok(())
}

#[derive(Debug, Clone)]
pub struct Report<T> {
    pub original: MatrixGen<T>,
    pub method: Method,
    pub elimination: Elimination<T>,
    pub kind: SolutionKind,
    /// Present only when `kind` is unique.
    pub solution: Option<Vec<T>>,
    pub precision: usize,
}

impl<T: RealElement> Report<T> {
    pub fn render(&self) -> String {
        let p = self.precision;
        let mut out = format!("Original Matrix:\n{}\n\n", format_matrix(&self.original, p));
        out += &format!("System of Equations:\n{}\n\n", format_equations(&self.original));

        if !self.elimination.steps.is_empty() {
            out += &format!("{} Elimination Steps:\n", self.method.title());
            for (i, step) in self.elimination.steps.iter().enumerate() {
                out += &format!(
                    "Step {}: {}\n{}\n\n",
                    i + 1,
                    step.description,
                    format_matrix(&step.matrix, p)
                );
            }
        }

        out += &format!(
            "{}:\n{}\n\n",
            self.method.form(),
            format_matrix(&self.elimination.result, p)
        );

        match (&self.kind, &self.solution) {
            (SolutionKind::Unique, Some(solution)) => {
                out += &format!("Solution:\n{}\n", format_solution(solution, p));
                out += "\nThe system has 1 solution.\n";
            }
            (SolutionKind::Infinite, _) => out += "The system has infinitely many solutions.\n",
            _ => out += "The system has no solution.\n",
        }
        out
    }
}

impl<T: RealElement> fmt::Display for Report<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

/// Eliminates, classifies and, for a unique system, solves `matrix`.
pub fn solve<T: RealElement>(matrix: &MatrixGen<T>, config: &SolverConfig) -> Report<T> {
    let elimination = eliminate(matrix, config.method.mode());
    let kind = analyze_system(&elimination.result);

    let solution = match (kind, config.method) {
        (SolutionKind::Unique, Method::Gaussian) => Some(back_substitution(&elimination.result)),
        (SolutionKind::Unique, Method::GaussJordan) => Some(extract_solution(&elimination.result)),
        _ => None,
    };

    if config.verbose {
        for (i, step) in elimination.steps.iter().enumerate() {
            log_step(i + 1, &step.description);
        }
        match kind {
            SolutionKind::Unique => println!("[ ] Unique solution found"),
            SolutionKind::Infinite => println!("[!] Infinitely many solutions"),
            SolutionKind::None => println!("[!] No solution"),
        }
    }

    Report {
        original: matrix.clone(),
        method: config.method,
        elimination,
        kind,
        solution,
        precision: config.precision,
    }
}

/// Solves independent systems in parallel.
pub fn solve_batch<T: RealElement>(matrices: &[MatrixGen<T>], config: &SolverConfig) -> Vec<Report<T>> {
    matrices.par_iter().map(|m| solve(m, config)).collect()
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
