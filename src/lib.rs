use pyo3::prelude::*;
use pyo3_stub_gen::define_stub_info_gatherer;

use model::{PyEdge, PyNode, PyRailNetwork};
use routing::{PyPathResult, PyRankedPath, find_path, find_ranked_paths};

pub mod model;
pub mod routing;

/// Rail route pathfinding implemented in Rust.
#[pymodule]
fn railpath(m: &Bound<'_, PyModule>) -> PyResult<()> {
    pyo3_log::init();

    m.add_class::<PyNode>()?;
    m.add_class::<PyEdge>()?;
    m.add_class::<PyRailNetwork>()?;

    m.add_class::<PyPathResult>()?;
    m.add_class::<PyRankedPath>()?;
    m.add_function(wrap_pyfunction!(find_path, m)?)?;
    m.add_function(wrap_pyfunction!(find_ranked_paths, m)?)?;
    Ok(())
}

define_stub_info_gatherer!(stub_info);
