use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum Error {
    #[error("Duplicate node id: {0}")]
    DuplicateNode(String),
    #[error("Edge {from} -> {to} references unknown node {missing}")]
    UnknownEdgeEndpoint {
        from: String,
        to: String,
        missing: String,
    },
    #[error("Invalid edge {from} -> {to}: {reason}")]
    InvalidEdge {
        from: String,
        to: String,
        reason: String,
    },
}
