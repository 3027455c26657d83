//! Dynamic edge weights derived from congestion and track condition

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::Edge;

/// Quantity a search minimises
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum OptimizationCriterion {
    #[default]
    Time,
    Distance,
    Cost,
    /// Time and cost combined
    Efficiency,
}

impl OptimizationCriterion {
    pub const ALL: [OptimizationCriterion; 4] = [
        OptimizationCriterion::Time,
        OptimizationCriterion::Distance,
        OptimizationCriterion::Cost,
        OptimizationCriterion::Efficiency,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            OptimizationCriterion::Time => "time",
            OptimizationCriterion::Distance => "distance",
            OptimizationCriterion::Cost => "cost",
            OptimizationCriterion::Efficiency => "efficiency",
        }
    }
}

impl From<&str> for OptimizationCriterion {
    /// Unrecognized names fall back to `Time`
    fn from(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "time" => OptimizationCriterion::Time,
            "distance" => OptimizationCriterion::Distance,
            "cost" => OptimizationCriterion::Cost,
            "efficiency" => OptimizationCriterion::Efficiency,
            other => {
                log::warn!("Unrecognized optimization criterion {other:?}, falling back to time");
                OptimizationCriterion::Time
            }
        }
    }
}

impl From<String> for OptimizationCriterion {
    fn from(name: String) -> Self {
        OptimizationCriterion::from(name.as_str())
    }
}

impl fmt::Display for OptimizationCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cost of traversing `edge` under `criterion`.
///
/// Congestion scales the weight by `1 + congestion / 2`, a degraded track by
/// `2 - condition`. Distance ignores both.
pub fn edge_weight(edge: &Edge, criterion: OptimizationCriterion) -> f64 {
    let congestion_multiplier = 1.0 + edge.congestion * 0.5;
    let condition_multiplier = 2.0 - edge.track_condition;

    match criterion {
        OptimizationCriterion::Time => {
            edge.base_time * congestion_multiplier * condition_multiplier
        }
        OptimizationCriterion::Distance => edge.distance,
        OptimizationCriterion::Cost => edge.cost * congestion_multiplier,
        OptimizationCriterion::Efficiency => {
            (edge.base_time + edge.cost * 0.1) * congestion_multiplier * condition_multiplier
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment() -> Edge {
        Edge::new("A", "B", 40.0, 10.0, 200.0)
            .with_congestion(1.0)
            .with_track_condition(0.5)
    }

    #[test]
    fn weights_per_criterion() {
        let edge = segment();
        // congestion multiplier 1.5, condition multiplier 1.5
        assert!((edge_weight(&edge, OptimizationCriterion::Time) - 22.5).abs() < 1e-9);
        assert!((edge_weight(&edge, OptimizationCriterion::Distance) - 40.0).abs() < 1e-9);
        assert!((edge_weight(&edge, OptimizationCriterion::Cost) - 300.0).abs() < 1e-9);
        assert!((edge_weight(&edge, OptimizationCriterion::Efficiency) - 67.5).abs() < 1e-9);
    }

    #[test]
    fn nominal_conditions_leave_base_values() {
        let edge = Edge::new("A", "B", 40.0, 10.0, 200.0);
        assert!((edge_weight(&edge, OptimizationCriterion::Time) - 10.0).abs() < 1e-9);
        assert!((edge_weight(&edge, OptimizationCriterion::Cost) - 200.0).abs() < 1e-9);
    }

    #[test]
    fn unknown_criterion_falls_back_to_time() {
        assert_eq!(
            OptimizationCriterion::from("scenic"),
            OptimizationCriterion::Time
        );
        assert_eq!(
            OptimizationCriterion::from(" Distance "),
            OptimizationCriterion::Distance
        );
        let parsed: OptimizationCriterion = serde_json::from_str("\"warp\"").unwrap();
        assert_eq!(parsed, OptimizationCriterion::Time);
        assert_eq!(
            serde_json::to_string(&OptimizationCriterion::Efficiency).unwrap(),
            "\"efficiency\""
        );
    }
}
