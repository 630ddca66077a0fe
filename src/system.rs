use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyType;

use crate::elimination::analysis::analyze_system;
use crate::elimination::elimination::eliminate;
use crate::matrix::matrix::Matrix;
use crate::matrix::matrix_gen::MatrixGen;
use crate::report::{solve, solve_batch, Method, SolverConfig};
use crate::utils::parse_lines;

// --------------------------------------------------
//                      PYTHON
// --------------------------------------------------

/// An augmented matrix entered by the caller, kept untouched by every solve.
#[pyclass]
#[derive(Debug, Clone)]
pub struct LinearSystem {
    pub matrix: MatrixGen<f64>,
}

#[pymethods]
impl LinearSystem {
    #[new]
    pub fn new(rows: usize, cols: usize) -> PyResult<Self> {
        check_dimensions(rows, cols).map_err(PyValueError::new_err)?;
        Ok(LinearSystem {
            matrix: MatrixGen::new(rows, cols),
        })
    }

    #[classmethod]
    pub fn from_list(_cls: &Bound<PyType>, lines: Vec<Vec<f64>>) -> PyResult<Self> {
        LinearSystem::from_rows(lines).map_err(PyValueError::new_err)
    }

    /// Non-numeric cells are read as 0.
    #[classmethod]
    pub fn from_strings(_cls: &Bound<PyType>, lines: Vec<Vec<String>>) -> PyResult<Self> {
        LinearSystem::from_rows(parse_lines(&lines)).map_err(PyValueError::new_err)
    }

    pub fn to_list(&self) -> Vec<Vec<f64>> {
        self.matrix.to_list()
    }

    #[getter]
    pub fn rows(&self) -> usize {
        self.matrix.rows
    }

    #[getter]
    pub fn cols(&self) -> usize {
        self.matrix.cols
    }

    /// Sets one cell; `row` and `col` are 1-based.
    pub fn modify(&mut self, row: usize, col: usize, value: f64) -> PyResult<()> {
        self.set_cell(row, col, value).map_err(PyValueError::new_err)
    }

    pub fn is_ref(&self) -> bool {
        self.matrix.is_ref()
    }

    pub fn is_rref(&self) -> bool {
        self.matrix.is_rref()
    }

    #[pyo3(signature = (method="gaussian"))]
    pub fn analyze(&self, method: &str) -> PyResult<&'static str> {
        let method = Method::from_name(method).map_err(PyValueError::new_err)?;
        Ok(analyze_system(&eliminate(&self.matrix, method.mode()).result).as_str())
    }

    #[pyo3(signature = (method="gaussian"))]
    pub fn solution(&self, method: &str) -> PyResult<Option<Vec<f64>>> {
        let config = SolverConfig {
            method: Method::from_name(method).map_err(PyValueError::new_err)?,
            ..SolverConfig::default()
        };
        Ok(solve(&self.matrix, &config).solution)
    }

    #[pyo3(signature = (config=None))]
    pub fn solve(&self, config: Option<SolverConfig>) -> String {
        solve(&self.matrix, &config.unwrap_or_default()).render()
    }

    fn __repr__(&self) -> String {
        format!("LinearSystem(rows={}, cols={})", self.matrix.rows, self.matrix.cols)
    }
}

impl LinearSystem {
    pub fn from_rows(lines: Vec<Vec<f64>>) -> Result<Self, String> {
        let matrix = MatrixGen::from_list(lines);
        check_dimensions(matrix.rows, matrix.cols)?;
        Ok(LinearSystem { matrix })
    }

    pub fn set_cell(&mut self, row: usize, col: usize, value: f64) -> Result<(), String> {
        if row < 1 || row > self.matrix.rows || col < 1 || col > self.matrix.cols {
            return Err("Invalid row or column number.".into());
        }
        self.matrix.set(row - 1, col - 1, value);
        Ok(())
    }
}

/// Largest number of cells a system may hold.
pub const MAX_CELLS: usize = 1 << 20;

pub fn check_dimensions(rows: usize, cols: usize) -> Result<(), String> {
    if rows < 1 || cols < 2 {
        return Err(format!(
            "Invalid dimensions {}x{}: need at least 1 row and 2 columns",
            rows, cols
        ));
    }
    match rows.checked_mul(cols) {
        Some(cells) if cells <= MAX_CELLS => Ok(()),
        _ => Err(format!(
            "Invalid dimensions {}x{}: at most {} cells",
            rows, cols, MAX_CELLS
        )),
    }
}

/// Full textual report for one system.
#[pyfunction]
#[pyo3(signature = (lines, method="gaussian"))]
pub fn solve_system(lines: Vec<Vec<f64>>, method: &str) -> PyResult<String> {
    let system = LinearSystem::from_rows(lines).map_err(PyValueError::new_err)?;
    let config = SolverConfig {
        method: Method::from_name(method).map_err(PyValueError::new_err)?,
        ..SolverConfig::default()
    };
    Ok(solve(&system.matrix, &config).render())
}

/// Reports for many independent systems, solved in parallel.
#[pyfunction]
#[pyo3(signature = (systems, method="gaussian"))]
pub fn solve_systems(systems: Vec<Vec<Vec<f64>>>, method: &str) -> PyResult<Vec<String>> {
    let matrices = systems
        .into_iter()
        .map(|lines| LinearSystem::from_rows(lines).map(|s| s.matrix))
        .collect::<Result<Vec<_>, String>>()
        .map_err(PyValueError::new_err)?;
    let config = SolverConfig {
        method: Method::from_name(method).map_err(PyValueError::new_err)?,
        ..SolverConfig::default()
    };
    Ok(solve_batch(&matrices, &config)
        .iter()
        .map(|report| report.render())
        .collect())
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
