//! Best-first frontier expansion shared by Dijkstra and A*

use super::path::{PathResult, reconstruct};
use super::state::{SearchError, SearchLimits, SearchState, resolve_endpoints};
use crate::routing::heuristic::Heuristic;
use crate::routing::weight::OptimizationCriterion;
use crate::{NodeIdx, RailGraph};

/// How the next node to expand is chosen
#[derive(Clone, Copy)]
pub(crate) enum Frontier<'h> {
    /// Lowest cost from the start
    Uniform,
    /// Lowest cost from the start plus the heuristic estimate to the goal
    Guided(&'h dyn Heuristic),
}

impl Frontier<'_> {
    fn priority(&self, graph: &RailGraph, node: NodeIdx, goal: NodeIdx, cost: f64) -> f64 {
        match self {
            Frontier::Uniform => cost,
            Frontier::Guided(heuristic) => {
                cost + heuristic.estimate(graph.node(node), graph.node(goal))
            }
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Frontier::Uniform => "dijkstra",
            Frontier::Guided(_) => "a*",
        }
    }
}

/// Expands the frontier until the goal is settled or nothing reachable is left.
///
/// Every expansion settles one node and relaxes its arcs to unsettled
/// neighbours. Returns `Ok(None)` when the goal is unreachable.
pub(crate) fn best_first(
    graph: &RailGraph,
    start: &str,
    goal: &str,
    criterion: OptimizationCriterion,
    frontier: Frontier<'_>,
    limits: SearchLimits,
) -> Result<Option<PathResult>, SearchError> {
    let (start_idx, goal_idx) = resolve_endpoints(graph, start, goal)?;
    let step_limit = limits.step_limit(graph);
    let mut state = SearchState::new(graph.node_count(), start_idx);
    let mut steps = 0;

    while let Some((current, _)) =
        state.min_open(|node, cost| frontier.priority(graph, node, goal_idx, cost))
    {
        if current == goal_idx {
            let result = reconstruct(graph, &state, start_idx, goal_idx, criterion);
            log::debug!(
                "{} {start} -> {goal} ({criterion}): {} hops, cost {:.3}, {steps} expansions",
                frontier.name(),
                result.hops(),
                result.weighted_cost
            );
            return Ok(Some(result));
        }

        steps += 1;
        if steps > step_limit {
            return Err(SearchError::StepLimitExceeded(step_limit));
        }

        state.expand(graph, current, criterion)?;
    }

    log::debug!(
        "{} {start} -> {goal} ({criterion}): unreachable after {steps} expansions",
        frontier.name()
    );
    Ok(None)
}
