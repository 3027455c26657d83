use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;
use pyo3_stub_gen::derive::{gen_stub_pyclass, gen_stub_pyfunction};

use crate::model::PyRailNetwork;
use railpath_core::prelude::*;

/// Route found by a search
#[gen_stub_pyclass]
#[pyclass(name = "PathResult")]
#[derive(Clone)]
pub struct PyPathResult {
    /// Node ids from start to goal inclusive
    #[pyo3(get)]
    pub path: Vec<String>,
    #[pyo3(get)]
    pub total_distance: f64,
    #[pyo3(get)]
    pub total_time: f64,
    #[pyo3(get)]
    pub total_cost: f64,
    #[pyo3(get)]
    pub efficiency: f64,
    #[pyo3(get)]
    pub average_congestion: f64,
    /// Criterion that drove the search
    #[pyo3(get)]
    pub criterion: String,
    #[pyo3(get)]
    pub weighted_cost: f64,
}

impl From<PathResult> for PyPathResult {
    fn from(result: PathResult) -> Self {
        PyPathResult {
            path: result.path,
            total_distance: result.total_distance,
            total_time: result.total_time,
            total_cost: result.total_cost,
            efficiency: result.efficiency,
            average_congestion: result.average_congestion,
            criterion: result.criterion.to_string(),
            weighted_cost: result.weighted_cost,
        }
    }
}

/// Candidate of the ranked multi-objective search
#[gen_stub_pyclass]
#[pyclass(name = "RankedPath")]
#[derive(Clone)]
pub struct PyRankedPath {
    #[pyo3(get)]
    pub result: PyPathResult,
    #[pyo3(get)]
    pub score: f64,
    #[pyo3(get)]
    pub algorithm: String,
}

/// Find the best path for one criterion
///
/// Parameters
/// ----------
/// network : RailNetwork
/// start, goal : str
///     Node ids
/// criterion : str, default="time"
///     One of ``time``, ``distance``, ``cost``, ``efficiency``. Unknown names
///     fall back to ``time``.
/// algorithm : str, default="dijkstra"
///     One of ``dijkstra``, ``astar``, ``bidirectional``
///
/// Returns
/// -------
/// PathResult or None
///     None when the goal is unreachable
#[pyfunction]
#[gen_stub_pyfunction]
#[pyo3(signature = (network, start, goal, criterion="time", algorithm="dijkstra"))]
pub fn find_path(
    py: Python<'_>,
    network: &PyRailNetwork,
    start: &str,
    goal: &str,
    criterion: &str,
    algorithm: &str,
) -> PyResult<Option<PyPathResult>> {
    let criterion = OptimizationCriterion::from(criterion);
    let algorithm: Algorithm = algorithm.parse().map_err(PyValueError::new_err)?;
    let graph = &network.graph;

    let result = py
        .detach(|| {
            railpath_core::find_path(
                graph,
                start,
                goal,
                criterion,
                algorithm,
                &EuclideanDistance,
            )
        })
        .map_err(|e| PyRuntimeError::new_err(format!("Route calculation failed: {e}")))?;

    Ok(result.map(PyPathResult::from))
}

/// Rank distinct paths found under all criteria by a weighted composite score
///
/// Returns at most three candidates, best first. An empty list means the goal
/// is unreachable.
#[pyfunction]
#[gen_stub_pyfunction]
#[pyo3(signature = (network, start, goal, time=0.4, distance=0.2, cost=0.2, efficiency=0.2))]
#[allow(clippy::too_many_arguments)]
pub fn find_ranked_paths(
    py: Python<'_>,
    network: &PyRailNetwork,
    start: &str,
    goal: &str,
    time: f64,
    distance: f64,
    cost: f64,
    efficiency: f64,
) -> PyResult<Vec<PyRankedPath>> {
    let weights = ObjectiveWeights {
        time,
        distance,
        cost,
        efficiency,
    };
    let graph = &network.graph;

    let ranked = py
        .detach(|| multi_objective(graph, start, goal, &EuclideanDistance, &weights))
        .map_err(|e| PyRuntimeError::new_err(format!("Ranked routing failed: {e}")))?;

    Ok(ranked
        .into_iter()
        .map(|entry| PyRankedPath {
            result: entry.result.into(),
            score: entry.score,
            algorithm: entry.algorithm.to_string(),
        })
        .collect())
}
