use super::common::frontier::{Frontier, best_first};
use super::common::{PathResult, SearchError, SearchLimits};
use super::heuristic::Heuristic;
use super::weight::OptimizationCriterion;
use crate::RailGraph;

/// A* search guided by an injected heuristic.
///
/// The open set is scanned for the lowest `g + h` on every step. With
/// [`EuclideanDistance`](super::EuclideanDistance) the result is optimal for
/// the distance criterion; for the other criteria the estimate is only a
/// ranking aid and the path may be suboptimal.
///
/// # Errors
///
/// Returns an error if `start` or `goal` is not a node of the graph.
pub fn a_star(
    graph: &RailGraph,
    start: &str,
    goal: &str,
    criterion: OptimizationCriterion,
    heuristic: &dyn Heuristic,
) -> Result<Option<PathResult>, SearchError> {
    a_star_with_limits(
        graph,
        start,
        goal,
        criterion,
        heuristic,
        SearchLimits::default(),
    )
}

/// [`a_star`] with an explicit bound on expansions
///
/// # Errors
///
/// Returns an error on unknown endpoints or when the step limit is exceeded.
pub fn a_star_with_limits(
    graph: &RailGraph,
    start: &str,
    goal: &str,
    criterion: OptimizationCriterion,
    heuristic: &dyn Heuristic,
    limits: SearchLimits,
) -> Result<Option<PathResult>, SearchError> {
    best_first(
        graph,
        start,
        goal,
        criterion,
        Frontier::Guided(heuristic),
        limits,
    )
}
