use geo::{Distance, Euclidean};

use crate::model::Node;

/// Estimate of the remaining cost from a node to the goal, used to guide A*.
///
/// Implemented for plain closures so callers can inject their own estimates.
pub trait Heuristic: Sync {
    fn estimate(&self, node: &Node, goal: &Node) -> f64;
}

/// Straight-line distance between node coordinates.
///
/// Admissible for the distance criterion when coordinates share the unit of
/// edge distances. Under the other criteria it only ranks the frontier.
#[derive(Debug, Clone, Copy, Default)]
pub struct EuclideanDistance;

impl Heuristic for EuclideanDistance {
    fn estimate(&self, node: &Node, goal: &Node) -> f64 {
        Euclidean.distance(node.position, goal.position)
    }
}

impl<F> Heuristic for F
where
    F: Fn(&Node, &Node) -> f64 + Sync,
{
    fn estimate(&self, node: &Node, goal: &Node) -> f64 {
        self(node, goal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn euclidean_estimate() {
        let a = Node::new("A", "A", 0.0, 0.0);
        let b = Node::new("B", "B", 3.0, 4.0);
        assert!((EuclideanDistance.estimate(&a, &b) - 5.0).abs() < 1e-9);
        assert!(EuclideanDistance.estimate(&b, &b).abs() < 1e-9);
    }

    #[test]
    fn closures_are_heuristics() {
        let zero = |_: &Node, _: &Node| 0.0;
        let a = Node::new("A", "A", 0.0, 0.0);
        assert!(zero.estimate(&a, &a).abs() < f64::EPSILON);
    }
}
