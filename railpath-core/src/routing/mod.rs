// Route searches over a rail graph

pub mod algorithm;
pub mod astar;
pub mod bidirectional;
pub mod common;
pub mod dijkstra;
pub mod heuristic;
pub mod multi_objective;
pub mod weight;

pub use algorithm::{Algorithm, find_path};
pub use astar::{a_star, a_star_with_limits};
pub use bidirectional::{bidirectional, bidirectional_with_limits};
pub use common::{PathResult, SearchError, SearchLimits, efficiency_score};
pub use dijkstra::{dijkstra, dijkstra_with_limits};
pub use heuristic::{EuclideanDistance, Heuristic};
pub use multi_objective::{ObjectiveWeights, RankedPath, multi_objective};
pub use weight::{OptimizationCriterion, edge_weight};
