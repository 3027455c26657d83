//! Bidirectional search meeting in the middle
//!
//! A forward frontier grows from the start and a backward frontier from the
//! goal. Edges are mirrored in the graph and weights do not depend on the
//! direction of travel, so the backward search walks the same arcs.
//! Whenever a node is settled by one side and already settled by the other,
//! the sum of both costs is a candidate route length. The search keeps
//! expanding after the first meeting and stops once neither frontier can
//! produce a cheaper meeting point.

use super::common::path::trace_arcs;
use super::common::state::resolve_endpoints;
use super::common::{PathResult, SearchError, SearchLimits, SearchState};
use super::weight::OptimizationCriterion;
use crate::{EdgeIdx, NodeIdx, RailGraph};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Forward,
    Backward,
}

struct Meeting {
    node: NodeIdx,
    cost: f64,
}

/// Bidirectional Dijkstra for the cheapest path under one criterion.
///
/// # Errors
///
/// Returns an error if `start` or `goal` is not a node of the graph.
pub fn bidirectional(
    graph: &RailGraph,
    start: &str,
    goal: &str,
    criterion: OptimizationCriterion,
) -> Result<Option<PathResult>, SearchError> {
    bidirectional_with_limits(graph, start, goal, criterion, SearchLimits::default())
}

/// [`bidirectional`] with an explicit bound on expansions per direction
///
/// # Errors
///
/// Returns an error on unknown endpoints or when the step limit is exceeded.
pub fn bidirectional_with_limits(
    graph: &RailGraph,
    start: &str,
    goal: &str,
    criterion: OptimizationCriterion,
    limits: SearchLimits,
) -> Result<Option<PathResult>, SearchError> {
    let (start_idx, goal_idx) = resolve_endpoints(graph, start, goal)?;
    if start_idx == goal_idx {
        return Ok(Some(PathResult::from_route(
            graph,
            &[start_idx],
            &[],
            criterion,
        )));
    }

    let step_limit = limits.step_limit(graph);
    let mut forward = SearchState::new(graph.node_count(), start_idx);
    let mut backward = SearchState::new(graph.node_count(), goal_idx);
    let mut best: Option<Meeting> = None;
    let mut steps = 0;

    loop {
        for direction in [Direction::Forward, Direction::Backward] {
            let (this, other) = match direction {
                Direction::Forward => (&mut forward, &backward),
                Direction::Backward => (&mut backward, &forward),
            };

            // An exhausted side has settled its whole component
            let Some((node, _)) = this.min_open(|_, cost| cost) else {
                return Ok(finish(graph, &forward, &backward, best, start, goal, criterion));
            };
            this.expand(graph, node, criterion)?;

            if other.settled.contains(node) {
                let cost = this.cost[node] + other.cost[node];
                if !cost.is_finite() {
                    return Err(SearchError::CostOverflow(graph.node(node).id.clone()));
                }
                if best.as_ref().is_none_or(|meeting| cost < meeting.cost) {
                    log::trace!(
                        "Meeting at {} ({direction:?}) with cost {cost:.3}",
                        graph.node(node).id
                    );
                    best = Some(Meeting { node, cost });
                }
            }
        }

        steps += 1;
        if steps > step_limit {
            return Err(SearchError::StepLimitExceeded(step_limit));
        }

        if let Some(meeting) = &best {
            if forward.frontier_min().min(backward.frontier_min()) >= meeting.cost {
                return Ok(finish(graph, &forward, &backward, best, start, goal, criterion));
            }
        }
    }
}

/// Joins start -> meeting point with meeting point -> goal
fn finish(
    graph: &RailGraph,
    forward: &SearchState,
    backward: &SearchState,
    best: Option<Meeting>,
    start: &str,
    goal: &str,
    criterion: OptimizationCriterion,
) -> Option<PathResult> {
    let Some(meeting) = best else {
        log::debug!("bidirectional {start} -> {goal} ({criterion}): unreachable");
        return None;
    };

    let forward_arcs = trace_arcs(graph, forward, meeting.node);
    let backward_arcs = trace_arcs(graph, backward, meeting.node);

    let mut nodes: Vec<NodeIdx> = Vec::with_capacity(forward_arcs.len() + backward_arcs.len() + 1);
    let mut edges: Vec<EdgeIdx> = Vec::with_capacity(forward_arcs.len() + backward_arcs.len());

    if let Some(&first) = forward_arcs.first() {
        nodes.push(graph.arc(first).tail);
    } else {
        nodes.push(meeting.node);
    }
    for &arc_idx in &forward_arcs {
        let arc = graph.arc(arc_idx);
        nodes.push(arc.head);
        edges.push(arc.edge);
    }
    // Backward arcs point from the goal towards the meeting point
    for &arc_idx in backward_arcs.iter().rev() {
        let arc = graph.arc(arc_idx);
        nodes.push(arc.tail);
        edges.push(arc.edge);
    }

    let result = PathResult::from_route(graph, &nodes, &edges, criterion);
    log::debug!(
        "bidirectional {start} -> {goal} ({criterion}): meeting at {}, {} hops, cost {:.3}",
        graph.node(meeting.node).id,
        result.hops(),
        result.weighted_cost
    );
    Some(result)
}
