#![allow(dead_code)]

use std::collections::HashSet;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use railpath_core::prelude::*;

pub fn node_id(idx: usize) -> String {
    format!("N{idx}")
}

/// Random connected-ish network with `n` nodes on a 100 x 100 plane.
///
/// Edge distances never undercut the straight line between their endpoints,
/// so the Euclidean heuristic stays consistent for the distance criterion.
/// No self loops and no parallel edges.
pub fn random_network(seed: u64, n: usize, extra_edges: usize) -> (Vec<Node>, Vec<Edge>) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let nodes: Vec<Node> = (0..n)
        .map(|i| {
            let x = rng.gen_range(0.0..100.0);
            let y = rng.gen_range(0.0..100.0);
            Node::new(node_id(i), format!("Node {i}"), x, y)
        })
        .collect();

    let mut pairs: HashSet<(usize, usize)> = HashSet::new();
    let mut edges = Vec::new();
    let mut add = |a: usize, b: usize, rng: &mut ChaCha8Rng, edges: &mut Vec<Edge>| {
        let key = (a.min(b), a.max(b));
        if a == b || !pairs.insert(key) {
            return;
        }
        let dx = nodes[a].position.x() - nodes[b].position.x();
        let dy = nodes[a].position.y() - nodes[b].position.y();
        let straight = dx.hypot(dy);
        edges.push(
            Edge::new(
                node_id(a),
                node_id(b),
                straight * rng.gen_range(1.0..1.6),
                rng.gen_range(1.0..60.0),
                rng.gen_range(10.0..500.0),
            )
            .with_congestion(rng.gen_range(0.0..3.0))
            .with_track_condition(rng.gen_range(0.0..=1.0)),
        );
    };

    // Random tree over most nodes, the last node is sometimes left isolated
    let tree_nodes = if rng.gen_bool(0.2) { n - 1 } else { n };
    for i in 1..tree_nodes {
        let parent = rng.gen_range(0..i);
        add(i, parent, &mut rng, &mut edges);
    }
    for _ in 0..extra_edges {
        let a = rng.gen_range(0..tree_nodes);
        let b = rng.gen_range(0..tree_nodes);
        add(a, b, &mut rng, &mut edges);
    }

    (nodes, edges)
}

pub fn random_graph(seed: u64, n: usize, extra_edges: usize) -> RailGraph {
    let (nodes, edges) = random_network(seed, n, extra_edges);
    RailGraph::new(nodes, edges).unwrap()
}

/// Nodes A, B, C with A-B, B-C short and A-C long
pub fn triangle(ab_congestion: f64) -> RailGraph {
    let nodes = vec![
        Node::new("A", "Alpha", 0.0, 0.0),
        Node::new("B", "Bravo", 10.0, 0.0),
        Node::new("C", "Charlie", 20.0, 0.0),
    ];
    let edges = vec![
        Edge::new("A", "B", 10.0, 5.0, 100.0).with_congestion(ab_congestion),
        Edge::new("B", "C", 10.0, 5.0, 100.0),
        Edge::new("A", "C", 30.0, 12.0, 100.0),
    ];
    RailGraph::new(nodes, edges).unwrap()
}

pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-6 * (1.0 + a.abs().max(b.abs()))
}
