use fixedbitset::FixedBitSet;
use thiserror::Error;

use crate::routing::weight::{OptimizationCriterion, edge_weight};
use crate::{ArcIdx, NodeIdx, RailGraph};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SearchError {
    #[error("Unknown node: {0}")]
    UnknownNode(String),
    #[error("Search exceeded the step limit of {0} expansions")]
    StepLimitExceeded(usize),
    #[error("Path cost to node {0} overflows")]
    CostOverflow(String),
}

/// Bound on the outer loop of every search.
///
/// Each expansion settles one node, so a well-formed graph never needs more
/// than one step per node. The bound only trips on malformed input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchLimits {
    /// Maximum number of expansions; `None` derives it from the node count
    pub max_steps: Option<usize>,
}

impl SearchLimits {
    pub fn step_limit(&self, graph: &RailGraph) -> usize {
        self.max_steps.unwrap_or(graph.node_count() + 1)
    }
}

/// Per-query working state of one search direction.
///
/// Never shared between queries; the graph itself stays read-only.
#[derive(Debug)]
pub struct SearchState {
    /// Best known weighted cost from the root, `INFINITY` when unreached
    pub cost: Vec<f64>,
    /// Arc through which each node was last improved
    pub previous: Vec<Option<ArcIdx>>,
    /// Nodes whose cost is final
    pub settled: FixedBitSet,
    /// Reached but not yet settled nodes
    pub open: FixedBitSet,
}

impl SearchState {
    pub fn new(num_nodes: usize, root: NodeIdx) -> Self {
        let mut state = SearchState {
            cost: vec![f64::INFINITY; num_nodes],
            previous: vec![None; num_nodes],
            settled: FixedBitSet::with_capacity(num_nodes),
            open: FixedBitSet::with_capacity(num_nodes),
        };
        state.cost[root] = 0.0;
        state.open.insert(root);
        state
    }

    /// Open node with the lowest priority, scanning the whole open set.
    /// Ties go to the lowest node index.
    pub fn min_open(&self, priority: impl Fn(NodeIdx, f64) -> f64) -> Option<(NodeIdx, f64)> {
        let mut best: Option<(NodeIdx, f64)> = None;
        for node in self.open.ones() {
            let p = priority(node, self.cost[node]);
            if best.is_none_or(|(_, current)| p < current) {
                best = Some((node, p));
            }
        }
        best
    }

    /// Moves a node from the open set to the settled set
    pub fn settle(&mut self, node: NodeIdx) {
        self.open.set(node, false);
        self.settled.insert(node);
    }

    /// Lowers the cost of `node` if `candidate` is an improvement.
    /// Returns true only on a strict improvement.
    pub fn relax(&mut self, node: NodeIdx, candidate: f64, via: ArcIdx) -> bool {
        if candidate < self.cost[node] {
            self.cost[node] = candidate;
            self.previous[node] = Some(via);
            self.open.insert(node);
            true
        } else {
            false
        }
    }

    /// Settles `node` and relaxes its arcs to unsettled neighbours.
    /// Fails once a candidate cost is no longer finite.
    pub fn expand(
        &mut self,
        graph: &RailGraph,
        node: NodeIdx,
        criterion: OptimizationCriterion,
    ) -> Result<(), SearchError> {
        self.settle(node);
        let base = self.cost[node];
        for (arc_idx, arc) in graph.outgoing(node) {
            if self.settled.contains(arc.head) {
                continue;
            }
            let candidate = base + edge_weight(graph.edge(arc.edge), criterion);
            if !candidate.is_finite() {
                return Err(SearchError::CostOverflow(graph.node(arc.head).id.clone()));
            }
            self.relax(arc.head, candidate, arc_idx);
        }
        Ok(())
    }

    /// Lowest tentative cost among open nodes, `INFINITY` when the open set is empty
    pub fn frontier_min(&self) -> f64 {
        self.open
            .ones()
            .map(|node| self.cost[node])
            .fold(f64::INFINITY, f64::min)
    }
}

/// Resolves start and goal ids to node indices
pub fn resolve_endpoints(
    graph: &RailGraph,
    start: &str,
    goal: &str,
) -> Result<(NodeIdx, NodeIdx), SearchError> {
    let lookup = |id: &str| {
        graph
            .node_idx(id)
            .ok_or_else(|| SearchError::UnknownNode(id.to_string()))
    };
    Ok((lookup(start)?, lookup(goal)?))
}
