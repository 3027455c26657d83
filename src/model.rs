use railpath_core::prelude::*;

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3_stub_gen::derive::{gen_stub_pyclass, gen_stub_pymethods};

fn parse_kind(kind: &str) -> PyResult<NodeKind> {
    match kind.to_ascii_lowercase().as_str() {
        "station" => Ok(NodeKind::Station),
        "junction" => Ok(NodeKind::Junction),
        "depot" => Ok(NodeKind::Depot),
        other => Err(PyValueError::new_err(format!("Unknown node kind: {other}"))),
    }
}

fn parse_status(status: &str) -> PyResult<NodeStatus> {
    match status.to_ascii_lowercase().as_str() {
        "operational" => Ok(NodeStatus::Operational),
        "maintenance" => Ok(NodeStatus::Maintenance),
        "closed" => Ok(NodeStatus::Closed),
        other => Err(PyValueError::new_err(format!(
            "Unknown node status: {other}"
        ))),
    }
}

/// Node
///
/// A station, junction or depot of the rail network. Coordinates are planar
/// and feed the A* heuristic.
#[gen_stub_pyclass]
#[pyclass(name = "Node")]
#[derive(Clone)]
pub struct PyNode {
    pub(crate) inner: Node,
}

#[gen_stub_pymethods]
#[pymethods]
impl PyNode {
    #[new]
    #[pyo3(signature = (id, name, x, y, kind="station", capacity=0, status="operational"))]
    pub fn new(
        id: String,
        name: String,
        x: f64,
        y: f64,
        kind: &str,
        capacity: u32,
        status: &str,
    ) -> PyResult<Self> {
        let mut inner = Node::new(id, name, x, y);
        inner.kind = parse_kind(kind)?;
        inner.capacity = capacity;
        inner.status = parse_status(status)?;
        Ok(PyNode { inner })
    }

    #[getter]
    fn id(&self) -> String {
        self.inner.id.clone()
    }

    #[getter]
    fn name(&self) -> String {
        self.inner.name.clone()
    }

    /// Coordinates as (x, y)
    #[getter]
    fn coordinates(&self) -> (f64, f64) {
        (self.inner.position.x(), self.inner.position.y())
    }

    fn __repr__(&self) -> String {
        format!(
            "Node(id={:?}, name={:?}, x={}, y={})",
            self.inner.id,
            self.inner.name,
            self.inner.position.x(),
            self.inner.position.y()
        )
    }
}

/// Edge
///
/// A rail segment. Traversable in both directions regardless of the declared
/// order of its endpoints.
#[gen_stub_pyclass]
#[pyclass(name = "Edge")]
#[derive(Clone)]
pub struct PyEdge {
    pub(crate) inner: Edge,
}

#[gen_stub_pymethods]
#[pymethods]
impl PyEdge {
    #[new]
    #[pyo3(signature = (from_id, to_id, distance, base_time, cost, congestion=0.0, track_condition=1.0))]
    pub fn new(
        from_id: String,
        to_id: String,
        distance: f64,
        base_time: f64,
        cost: f64,
        congestion: f64,
        track_condition: f64,
    ) -> Self {
        let inner = Edge::new(from_id, to_id, distance, base_time, cost)
            .with_congestion(congestion)
            .with_track_condition(track_condition);
        PyEdge { inner }
    }

    fn __repr__(&self) -> String {
        format!(
            "Edge({:?} -> {:?}, distance={}, base_time={})",
            self.inner.from, self.inner.to, self.inner.distance, self.inner.base_time
        )
    }
}

/// RailNetwork
///
/// Immutable routing graph built from node and edge records. Every edge is
/// usable in both directions. Construction validates the whole topology, so
/// searches never encounter dangling references.
///
/// Example:
///
/// .. code-block:: python
///
///     network = RailNetwork([Node("A", "Alpha", 0, 0), Node("B", "Bravo", 3, 4)],
///                           [Edge("A", "B", 5.0, 4.0, 120.0)])
///     result = find_path(network, "A", "B", criterion="time")
///
/// Raises
/// ------
/// ValueError
///     If node ids repeat, an edge references an unknown node, or an edge
///     carries negative or out-of-range attributes
#[gen_stub_pyclass]
#[pyclass(name = "RailNetwork")]
pub struct PyRailNetwork {
    pub(crate) graph: RailGraph,
}

#[gen_stub_pymethods]
#[pymethods]
impl PyRailNetwork {
    #[new]
    pub fn new(nodes: Vec<PyRef<'_, PyNode>>, edges: Vec<PyRef<'_, PyEdge>>) -> PyResult<Self> {
        let nodes = nodes.iter().map(|n| n.inner.clone()).collect();
        let edges = edges.iter().map(|e| e.inner.clone()).collect();
        let graph = RailGraph::new(nodes, edges).map_err(|e| {
            PyValueError::new_err(format!("Failed to build rail network: {e}"))
        })?;
        Ok(PyRailNetwork { graph })
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    fn __repr__(&self) -> String {
        format!(
            "RailNetwork with {} nodes and {} edges",
            self.graph.node_count(),
            self.graph.edge_count()
        )
    }

    fn __str__(&self) -> String {
        self.__repr__()
    }
}
