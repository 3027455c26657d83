use super::common::frontier::{Frontier, best_first};
use super::common::{PathResult, SearchError, SearchLimits};
use super::weight::OptimizationCriterion;
use crate::RailGraph;

/// Dijkstra's algorithm for the cheapest path under one criterion.
///
/// Stops as soon as the goal is settled. Aggregates of the returned path are
/// sums of raw edge quantities, whatever criterion drove the search.
///
/// # Errors
///
/// Returns an error if `start` or `goal` is not a node of the graph.
pub fn dijkstra(
    graph: &RailGraph,
    start: &str,
    goal: &str,
    criterion: OptimizationCriterion,
) -> Result<Option<PathResult>, SearchError> {
    dijkstra_with_limits(graph, start, goal, criterion, SearchLimits::default())
}

/// [`dijkstra`] with an explicit bound on expansions
///
/// # Errors
///
/// Returns an error on unknown endpoints or when the step limit is exceeded.
pub fn dijkstra_with_limits(
    graph: &RailGraph,
    start: &str,
    goal: &str,
    criterion: OptimizationCriterion,
    limits: SearchLimits,
) -> Result<Option<PathResult>, SearchError> {
    best_first(graph, start, goal, criterion, Frontier::Uniform, limits)
}
