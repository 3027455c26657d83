//! Working state, frontier expansion and path reconstruction shared by all searches

pub(crate) mod frontier;
pub mod path;
pub mod state;

pub use path::{PathResult, efficiency_score};
pub use state::{SearchError, SearchLimits, SearchState};
