//! Route pathfinding over a rail network with dynamic, congestion-aware
//! edge weights.
//!
//! The network is supplied wholesale as node and edge records and compiled
//! into an immutable [`RailGraph`]. Searches never mutate the graph, so one
//! graph can serve many concurrent queries.

pub mod error;
pub mod model;
pub mod prelude;
pub mod routing;

pub use error::Error;
pub use model::{Edge, Node, NodeKind, NodeStatus, RailGraph};
pub use routing::{
    Algorithm, EuclideanDistance, Heuristic, ObjectiveWeights, OptimizationCriterion, PathResult,
    RankedPath, SearchError, SearchLimits, a_star, bidirectional, dijkstra, edge_weight,
    find_path, multi_objective,
};

/// Dense index of a node inside a [`RailGraph`]
pub type NodeIdx = usize;
/// Index of a declared edge inside a [`RailGraph`]
pub type EdgeIdx = usize;
/// Index of a directed arc (declared edge or its mirror) inside a [`RailGraph`]
pub type ArcIdx = usize;

/// Number of candidates returned by the multi-objective search
pub const MAX_RANKED_PATHS: usize = 3;
