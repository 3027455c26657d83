use std::fmt;

use serde::{Deserialize, Serialize};

use super::common::{PathResult, SearchError};
use super::heuristic::Heuristic;
use super::weight::OptimizationCriterion;
use super::{a_star, bidirectional, dijkstra};
use crate::RailGraph;

/// Single-criterion solver
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    #[default]
    Dijkstra,
    #[serde(alias = "a_star", alias = "a*")]
    AStar,
    Bidirectional,
}

impl Algorithm {
    pub fn as_str(self) -> &'static str {
        match self {
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::AStar => "astar",
            Algorithm::Bidirectional => "bidirectional",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "astar" | "a_star" | "a*" => Ok(Algorithm::AStar),
            "bidirectional" => Ok(Algorithm::Bidirectional),
            other => Err(format!("Unknown algorithm: {other}")),
        }
    }
}

/// Runs one solver. The heuristic is only consulted by A*.
///
/// # Errors
///
/// Returns an error if `start` or `goal` is not a node of the graph.
pub fn find_path(
    graph: &RailGraph,
    start: &str,
    goal: &str,
    criterion: OptimizationCriterion,
    algorithm: Algorithm,
    heuristic: &dyn Heuristic,
) -> Result<Option<PathResult>, SearchError> {
    match algorithm {
        Algorithm::Dijkstra => dijkstra(graph, start, goal, criterion),
        Algorithm::AStar => a_star(graph, start, goal, criterion, heuristic),
        Algorithm::Bidirectional => bidirectional(graph, start, goal, criterion),
    }
}
