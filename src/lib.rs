use pyo3::prelude::*;

pub mod elimination {
    pub mod analysis;
    pub mod elimination;
    pub mod solution;
}
pub mod matrix {
    pub mod matrix;
    pub mod matrix_gen;
}

pub mod format;
pub mod report;
pub mod system;
pub mod utils;

/// A Python module implemented in Rust.
#[pymodule]
fn gauss_solver(_py: Python, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<system::LinearSystem>()?;
    m.add_class::<report::SolverConfig>()?;
    m.add_function(wrap_pyfunction!(system::solve_system, m)?)?;
    m.add_function(wrap_pyfunction!(system::solve_systems, m)?)?;
    Ok(())
}
