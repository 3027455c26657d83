pub use crate::MAX_RANKED_PATHS;

// Re-export key components
pub use crate::model::{Edge, Node, NodeKind, NodeStatus, RailGraph};
pub use crate::routing::{
    Algorithm, EuclideanDistance, Heuristic, ObjectiveWeights, OptimizationCriterion, PathResult,
    RankedPath, SearchError, SearchLimits, a_star, bidirectional, dijkstra, edge_weight,
    find_path, multi_objective,
};

// Index types
pub use crate::{ArcIdx, EdgeIdx, NodeIdx};

pub use crate::Error;
