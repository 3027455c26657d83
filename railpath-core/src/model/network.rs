//! Rail network records - nodes and edges as supplied by the caller

use geo::Point;
use serde::{Deserialize, Serialize};

/// Role of a node in the network. Informational only, never used in scoring.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    #[default]
    Station,
    Junction,
    Depot,
}

/// Operational status of a node. Informational only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeStatus {
    #[default]
    Operational,
    Maintenance,
    Closed,
}

/// Rail network node (station, junction or depot)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Unique identifier within a graph
    pub id: String,
    /// Display name
    pub name: String,
    /// Planar coordinates, input of the A* heuristic
    pub position: Point<f64>,
    #[serde(default)]
    pub kind: NodeKind,
    #[serde(default)]
    pub capacity: u32,
    #[serde(default)]
    pub status: NodeStatus,
}

impl Node {
    pub fn new(id: impl Into<String>, name: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            position: Point::new(x, y),
            kind: NodeKind::default(),
            capacity: 0,
            status: NodeStatus::default(),
        }
    }
}

/// Rail segment between two nodes.
///
/// Declared with a direction, but the graph always inserts the mirror
/// segment as well, so the effective topology is undirected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub from: String,
    pub to: String,
    /// Physical length in kilometres
    pub distance: f64,
    /// Traversal time at nominal speed in minutes
    pub base_time: f64,
    /// Current congestion level, 0.0 and up
    #[serde(default)]
    pub congestion: f64,
    /// Track condition score, 1.0 is perfect
    #[serde(default = "perfect_condition")]
    pub track_condition: f64,
    /// Flat monetary cost of the traversal
    pub cost: f64,
}

fn perfect_condition() -> f64 {
    1.0
}

impl Edge {
    /// Segment with no congestion and perfect track condition
    pub fn new(
        from: impl Into<String>,
        to: impl Into<String>,
        distance: f64,
        base_time: f64,
        cost: f64,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            distance,
            base_time,
            congestion: 0.0,
            track_condition: 1.0,
            cost,
        }
    }

    #[must_use]
    pub fn with_congestion(mut self, congestion: f64) -> Self {
        self.congestion = congestion;
        self
    }

    #[must_use]
    pub fn with_track_condition(mut self, track_condition: f64) -> Self {
        self.track_condition = track_condition;
        self
    }

    /// Checks every attribute, describing the first invalid one
    pub(crate) fn validate(&self) -> Result<(), String> {
        let quantities = [
            ("distance", self.distance),
            ("base_time", self.base_time),
            ("congestion", self.congestion),
            ("cost", self.cost),
        ];
        for (field, value) in quantities {
            if !value.is_finite() || value < 0.0 {
                return Err(format!(
                    "{field} must be a finite non-negative number, got {value}"
                ));
            }
        }
        if !(0.0..=1.0).contains(&self.track_condition) {
            return Err(format!(
                "track_condition must lie in [0, 1], got {}",
                self.track_condition
            ));
        }
        Ok(())
    }
}
