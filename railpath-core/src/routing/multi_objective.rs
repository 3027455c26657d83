//! Multi-objective route ranking
//!
//! Runs Dijkstra and A* once per criterion, drops candidates that repeat a
//! node sequence already seen, and ranks the rest by a weighted composite of
//! normalised time, distance and cost plus the raw efficiency score.

use std::cmp::Ordering;

use itertools::Itertools;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::algorithm::{Algorithm, find_path};
use super::common::{PathResult, SearchError};
use super::heuristic::Heuristic;
use super::weight::OptimizationCriterion;
use crate::{MAX_RANKED_PATHS, RailGraph};

/// Minutes at which the time score reaches its floor scale
pub const TIME_SCALE: f64 = 1000.0;
/// Kilometres at which the distance score reaches its floor scale
pub const DISTANCE_SCALE: f64 = 5000.0;
/// Cost units at which the cost score reaches its floor scale
pub const COST_SCALE: f64 = 10000.0;

/// Relative importance of each metric in the composite score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObjectiveWeights {
    pub time: f64,
    pub distance: f64,
    pub cost: f64,
    pub efficiency: f64,
}

impl Default for ObjectiveWeights {
    fn default() -> Self {
        Self {
            time: 0.4,
            distance: 0.2,
            cost: 0.2,
            efficiency: 0.2,
        }
    }
}

impl ObjectiveWeights {
    /// Composite score of a path, higher is better
    pub fn score(&self, path: &PathResult) -> f64 {
        let normalise = |raw: f64, scale: f64| (100.0 - raw / scale).max(0.0);

        self.time * normalise(path.total_time, TIME_SCALE)
            + self.distance * normalise(path.total_distance, DISTANCE_SCALE)
            + self.cost * normalise(path.total_cost, COST_SCALE)
            + self.efficiency * path.efficiency
    }
}

/// One ranked candidate of the multi-objective search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedPath {
    #[serde(flatten)]
    pub result: PathResult,
    pub score: f64,
    pub algorithm: Algorithm,
}

/// Best distinct paths across all criteria and both single-criterion solvers.
///
/// Returns at most [`MAX_RANKED_PATHS`] entries sorted by descending score.
/// Candidates are generated in a fixed order (criteria in declaration order,
/// Dijkstra before A*), so ties and duplicates resolve deterministically.
/// An empty vector means the goal is unreachable.
///
/// # Errors
///
/// Returns an error if `start` or `goal` is not a node of the graph.
pub fn multi_objective(
    graph: &RailGraph,
    start: &str,
    goal: &str,
    heuristic: &dyn Heuristic,
    weights: &ObjectiveWeights,
) -> Result<Vec<RankedPath>, SearchError> {
    let runs: Vec<(OptimizationCriterion, Algorithm)> = OptimizationCriterion::ALL
        .into_iter()
        .cartesian_product([Algorithm::Dijkstra, Algorithm::AStar])
        .collect();

    let candidates = runs
        .par_iter()
        .map(|&(criterion, algorithm)| {
            find_path(graph, start, goal, criterion, algorithm, heuristic)
                .map(|found| found.map(|result| (result, algorithm)))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut ranked: Vec<RankedPath> = candidates
        .into_iter()
        .flatten()
        .unique_by(|(result, _)| result.path.clone())
        .map(|(result, algorithm)| RankedPath {
            score: weights.score(&result),
            result,
            algorithm,
        })
        .collect();

    // Stable sort keeps generation order among equal scores
    ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    ranked.truncate(MAX_RANKED_PATHS);

    log::debug!(
        "multi-objective {start} -> {goal}: {} ranked paths",
        ranked.len()
    );
    Ok(ranked)
}
