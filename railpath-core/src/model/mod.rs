//! Data model for rail network routing
//!
//! Contains the raw node and edge records and the compiled graph built from them.

pub mod graph;
pub mod network;

pub use graph::{Arc, RailGraph};
pub use network::{Edge, Node, NodeKind, NodeStatus};
