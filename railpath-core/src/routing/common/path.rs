use serde::{Deserialize, Serialize};

use super::state::SearchState;
use crate::routing::weight::{OptimizationCriterion, edge_weight};
use crate::{ArcIdx, EdgeIdx, NodeIdx, RailGraph};

/// Route found by a search, with aggregates over raw edge quantities
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathResult {
    /// Node ids from start to goal inclusive
    pub path: Vec<String>,
    /// Kilometres
    pub total_distance: f64,
    /// Minutes at nominal speed
    pub total_time: f64,
    pub total_cost: f64,
    /// See [`efficiency_score`]
    pub efficiency: f64,
    /// Mean congestion over traversed edges
    pub average_congestion: f64,
    /// Criterion that drove the search
    pub criterion: OptimizationCriterion,
    /// Sum of criterion weights along the path
    pub weighted_cost: f64,
}

impl PathResult {
    /// Builds the result for a route given as consecutive nodes and the edges between them
    pub(crate) fn from_route(
        graph: &RailGraph,
        nodes: &[NodeIdx],
        edges: &[EdgeIdx],
        criterion: OptimizationCriterion,
    ) -> Self {
        let mut total_distance = 0.0;
        let mut total_time = 0.0;
        let mut total_cost = 0.0;
        let mut congestion = 0.0;
        let mut weighted_cost = 0.0;

        for &idx in edges {
            let edge = graph.edge(idx);
            total_distance += edge.distance;
            total_time += edge.base_time;
            total_cost += edge.cost;
            congestion += edge.congestion;
            weighted_cost += edge_weight(edge, criterion);
        }

        #[allow(clippy::cast_precision_loss)]
        let average_congestion = if edges.is_empty() {
            0.0
        } else {
            congestion / edges.len() as f64
        };

        PathResult {
            path: nodes.iter().map(|&n| graph.node(n).id.clone()).collect(),
            total_distance,
            total_time,
            total_cost,
            efficiency: efficiency_score(total_distance, total_time, total_cost),
            average_congestion,
            criterion,
            weighted_cost,
        }
    }

    /// Number of traversed edges
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// `round((distance / time * 0.7 + distance / cost * 0.3) * 100)`.
///
/// A term whose denominator is zero contributes nothing.
pub fn efficiency_score(distance: f64, time: f64, cost: f64) -> f64 {
    let per_time = if time > 0.0 { distance / time } else { 0.0 };
    let per_cost = if cost > 0.0 { distance / cost } else { 0.0 };
    ((per_time * 0.7 + per_cost * 0.3) * 100.0).round()
}

/// Arcs from the root of `state` to `node`, in travel order
pub(crate) fn trace_arcs(graph: &RailGraph, state: &SearchState, node: NodeIdx) -> Vec<ArcIdx> {
    let mut arcs = Vec::new();
    let mut current = node;
    // A predecessor chain never revisits a node, the bound only guards against corruption
    while let Some(arc_idx) = state.previous[current] {
        arcs.push(arc_idx);
        current = graph.arc(arc_idx).tail;
        if arcs.len() > graph.node_count() {
            break;
        }
    }
    arcs.reverse();
    arcs
}

/// Result for the route from the root of `state` to `goal`
pub(crate) fn reconstruct(
    graph: &RailGraph,
    state: &SearchState,
    start: NodeIdx,
    goal: NodeIdx,
    criterion: OptimizationCriterion,
) -> PathResult {
    let arcs = trace_arcs(graph, state, goal);
    let mut nodes = Vec::with_capacity(arcs.len() + 1);
    nodes.push(start);
    nodes.extend(arcs.iter().map(|&a| graph.arc(a).head));
    let edges: Vec<EdgeIdx> = arcs.iter().map(|&a| graph.arc(a).edge).collect();
    PathResult::from_route(graph, &nodes, &edges, criterion)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn efficiency_formula() {
        // 20/10 * 0.7 + 20/40 * 0.3 = 1.55
        assert!((efficiency_score(20.0, 10.0, 40.0) - 155.0).abs() < 1e-9);
    }

    #[test]
    fn efficiency_guards_zero_denominators() {
        assert!(efficiency_score(0.0, 0.0, 0.0).abs() < f64::EPSILON);
        assert!((efficiency_score(10.0, 10.0, 0.0) - 70.0).abs() < 1e-9);
        assert!((efficiency_score(10.0, 0.0, 10.0) - 30.0).abs() < 1e-9);
    }
}
