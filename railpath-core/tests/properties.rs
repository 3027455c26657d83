mod common;

use common::{approx_eq, node_id, random_graph, triangle};
use petgraph::algo::all_simple_paths;
use petgraph::graph::{NodeIndex, UnGraph};
use railpath_core::prelude::*;

/// Cheapest simple path cost by brute force, `None` when unreachable
fn exhaustive_best(
    graph: &RailGraph,
    start: usize,
    goal: usize,
    criterion: OptimizationCriterion,
) -> Option<f64> {
    let mut oracle: UnGraph<(), f64> = UnGraph::new_undirected();
    let indices: Vec<NodeIndex> = (0..graph.node_count()).map(|_| oracle.add_node(())).collect();
    for edge in graph.edges() {
        let a = graph.node_idx(&edge.from).unwrap();
        let b = graph.node_idx(&edge.to).unwrap();
        oracle.add_edge(indices[a], indices[b], edge_weight(edge, criterion));
    }

    all_simple_paths::<Vec<NodeIndex>, _>(&oracle, indices[start], indices[goal], 0, None)
        .map(|path| {
            path.windows(2)
                .map(|pair| {
                    let edge = oracle.find_edge(pair[0], pair[1]).unwrap();
                    oracle[edge]
                })
                .sum::<f64>()
        })
        .reduce(f64::min)
}

#[test]
fn dijkstra_is_optimal_against_exhaustive_search() {
    for seed in 0..12 {
        let graph = random_graph(seed, 5 + (seed as usize % 4), 6);
        let goal = graph.node_count() - 1;
        for criterion in OptimizationCriterion::ALL {
            let found = dijkstra(&graph, &node_id(0), &node_id(goal), criterion).unwrap();
            let oracle = exhaustive_best(&graph, 0, goal, criterion);
            match (found, oracle) {
                (Some(result), Some(best)) => assert!(
                    approx_eq(result.weighted_cost, best),
                    "seed {seed} {criterion}: dijkstra {} vs exhaustive {best}",
                    result.weighted_cost
                ),
                (None, None) => {}
                (found, oracle) => panic!("seed {seed} {criterion}: {found:?} vs {oracle:?}"),
            }
        }
    }
}

#[test]
fn a_star_matches_dijkstra_on_distance() {
    for seed in 100..130 {
        let graph = random_graph(seed, 12, 15);
        let start = node_id(0);
        let goal = node_id(graph.node_count() - 1);
        let guided = a_star(
            &graph,
            &start,
            &goal,
            OptimizationCriterion::Distance,
            &EuclideanDistance,
        )
        .unwrap();
        let exact = dijkstra(&graph, &start, &goal, OptimizationCriterion::Distance).unwrap();
        assert_eq!(guided.is_some(), exact.is_some(), "seed {seed}");
        if let (Some(guided), Some(exact)) = (guided, exact) {
            assert!(
                approx_eq(guided.weighted_cost, exact.weighted_cost),
                "seed {seed}: a* {} vs dijkstra {}",
                guided.weighted_cost,
                exact.weighted_cost
            );
        }
    }
}

#[test]
fn bidirectional_matches_dijkstra_on_random_graphs() {
    for seed in 200..230 {
        let n = 5 + (seed as usize % 11);
        let graph = random_graph(seed, n, n);
        let start = node_id(0);
        let goal = node_id(n - 1);
        for criterion in OptimizationCriterion::ALL {
            let meet = bidirectional(&graph, &start, &goal, criterion).unwrap();
            let exact = dijkstra(&graph, &start, &goal, criterion).unwrap();
            assert_eq!(meet.is_some(), exact.is_some(), "seed {seed} {criterion}");
            if let (Some(meet), Some(exact)) = (meet, exact) {
                assert!(
                    approx_eq(meet.weighted_cost, exact.weighted_cost),
                    "seed {seed} {criterion}: bidirectional {} vs dijkstra {}",
                    meet.weighted_cost,
                    exact.weighted_cost
                );
                assert_eq!(meet.path.first(), Some(&start));
                assert_eq!(meet.path.last(), Some(&goal));
            }
        }
    }
}

#[test]
fn default_step_limit_covers_full_exploration() {
    // A single line forces every solver to settle each line node before the
    // far end, and the island goal forces exhausting the whole component
    let mut nodes: Vec<Node> = (0..40)
        .map(|i| Node::new(node_id(i), format!("Node {i}"), i as f64, 0.0))
        .collect();
    nodes.push(Node::new("Island", "Island", 0.0, 50.0));
    let edges = (1..40)
        .map(|i| Edge::new(node_id(i - 1), node_id(i), 1.0, 1.0, 1.0))
        .collect();
    let graph = RailGraph::new(nodes, edges).unwrap();

    for criterion in OptimizationCriterion::ALL {
        for algorithm in [Algorithm::Dijkstra, Algorithm::AStar, Algorithm::Bidirectional] {
            let far = find_path(&graph, "N0", "N39", criterion, algorithm, &EuclideanDistance)
                .unwrap()
                .unwrap();
            assert_eq!(far.path.len(), 40, "{algorithm} {criterion}");

            let island =
                find_path(&graph, "N0", "Island", criterion, algorithm, &EuclideanDistance);
            assert!(matches!(island, Ok(None)), "{algorithm} {criterion}");
        }
    }
}

#[test]
fn start_equals_goal_for_every_solver() {
    let graph = triangle(0.0);
    for criterion in OptimizationCriterion::ALL {
        for algorithm in [Algorithm::Dijkstra, Algorithm::AStar, Algorithm::Bidirectional] {
            let result = find_path(&graph, "B", "B", criterion, algorithm, &EuclideanDistance)
                .unwrap()
                .unwrap();
            assert_eq!(result.path, vec!["B"]);
            assert_eq!(result.total_distance, 0.0);
            assert_eq!(result.total_time, 0.0);
            assert_eq!(result.total_cost, 0.0);
            assert_eq!(result.efficiency, 0.0);
            assert_eq!(result.average_congestion, 0.0);
            assert_eq!(result.weighted_cost, 0.0);
        }
    }
}

#[test]
fn all_solvers_agree_on_unreachability() {
    let nodes = vec![
        Node::new("A", "A", 0.0, 0.0),
        Node::new("B", "B", 1.0, 0.0),
        Node::new("C", "C", 5.0, 5.0),
        Node::new("D", "D", 6.0, 5.0),
    ];
    let edges = vec![
        Edge::new("A", "B", 1.0, 1.0, 1.0),
        Edge::new("C", "D", 1.0, 1.0, 1.0),
    ];
    let graph = RailGraph::new(nodes, edges).unwrap();

    for criterion in OptimizationCriterion::ALL {
        for algorithm in [Algorithm::Dijkstra, Algorithm::AStar, Algorithm::Bidirectional] {
            let result = find_path(&graph, "A", "D", criterion, algorithm, &EuclideanDistance);
            assert_eq!(result, Ok(None), "{algorithm} {criterion}");
        }
    }
    let ranked = multi_objective(
        &graph,
        "A",
        "D",
        &EuclideanDistance,
        &ObjectiveWeights::default(),
    )
    .unwrap();
    assert!(ranked.is_empty());
}

#[test]
fn multi_objective_results_are_distinct_and_sorted() {
    for seed in 300..320 {
        let graph = random_graph(seed, 10, 14);
        let goal = node_id(graph.node_count() - 1);
        let ranked = multi_objective(
            &graph,
            &node_id(0),
            &goal,
            &EuclideanDistance,
            &ObjectiveWeights::default(),
        )
        .unwrap();

        assert!(ranked.len() <= MAX_RANKED_PATHS);
        for (i, a) in ranked.iter().enumerate() {
            for b in &ranked[i + 1..] {
                assert_ne!(a.result.path, b.result.path, "seed {seed}");
                assert!(a.score >= b.score, "seed {seed}");
            }
        }
    }
}

#[test]
fn distance_prefers_two_hops_over_direct_edge() {
    let graph = triangle(0.0);
    let result = dijkstra(&graph, "A", "C", OptimizationCriterion::Distance)
        .unwrap()
        .unwrap();
    assert_eq!(result.path, vec!["A", "B", "C"]);
    assert_eq!(result.total_distance, 20.0);
}

#[test]
fn congestion_flips_time_optimal_route_only() {
    let graph = triangle(5.0);
    // 12 < 5 * 3.5 + 5
    let by_time = dijkstra(&graph, "A", "C", OptimizationCriterion::Time)
        .unwrap()
        .unwrap();
    assert_eq!(by_time.path, vec!["A", "C"]);

    let by_distance = dijkstra(&graph, "A", "C", OptimizationCriterion::Distance)
        .unwrap()
        .unwrap();
    assert_eq!(by_distance.path, vec!["A", "B", "C"]);
    assert_eq!(by_distance.total_distance, 20.0);
    assert!(approx_eq(by_distance.average_congestion, 2.5));
}

#[test]
fn graph_is_shared_across_threads() {
    let graph = random_graph(7, 15, 20);
    let goal = node_id(graph.node_count() - 1);
    let expected = dijkstra(&graph, &node_id(0), &goal, OptimizationCriterion::Cost).unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                scope.spawn(|| {
                    dijkstra(&graph, &node_id(0), &goal, OptimizationCriterion::Cost).unwrap()
                })
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
