use petgraph::algo::{dijkstra, min_spanning_tree};
use petgraph::data::Element;
use petgraph::graph::DiGraph;
use petgraph::visit::EdgeRef;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use spanpath::algo::{
    minimum_spanning_forest, shortest_paths, BellmanFord, DisjointSet, KruskalBuilder,
    StepDecision,
};
use spanpath::datasets;
use spanpath::graph::io::{from_ron_str, to_ron_string};
use spanpath::graph::{Distance, Idx, IndexVec, NodeId, NodeNaming, Weight, WeightedGraph};

fn n(raw: u32) -> NodeId {
    NodeId::new(raw)
}

fn random_graph(rng: &mut StdRng, weights: std::ops::RangeInclusive<Weight>) -> WeightedGraph {
    let node_count = rng.random_range(1..=12usize);
    let edge_count = rng.random_range(0..=30usize);
    let edges: Vec<(usize, usize, Weight)> = (0..edge_count)
        .map(|_| {
            (
                rng.random_range(0..node_count),
                rng.random_range(0..node_count),
                rng.random_range(weights.clone()),
            )
        })
        .collect();
    WeightedGraph::from_edges(node_count, edges).unwrap()
}

/// Dense Prim, restarted from every node not yet in the forest.
fn prim_forest_weight(graph: &WeightedGraph) -> Weight {
    let size = graph.node_count();
    let mut cheapest: IndexVec<NodeId, IndexVec<NodeId, Option<Weight>>> =
        IndexVec::from_elem(IndexVec::from_elem(None, size), size);
    for edge in graph.edges().iter().filter(|edge| !edge.is_self_loop()) {
        for (a, b) in [(edge.source, edge.destination), (edge.destination, edge.source)] {
            let slot = &mut cheapest[a][b];
            *slot = Some(slot.map_or(edge.weight, |w| w.min(edge.weight)));
        }
    }

    let mut in_tree = IndexVec::from_elem(false, size);
    let mut total = 0;
    for root in graph.nodes() {
        if in_tree[root] {
            continue;
        }
        let mut best: IndexVec<NodeId, Option<Weight>> = IndexVec::from_elem(None, size);
        best[root] = Some(0);
        loop {
            let next = graph
                .nodes()
                .filter(|&node| !in_tree[node])
                .filter_map(|node| best[node].map(|w| (w, node)))
                .min();
            let Some((weight, node)) = next else { break };
            in_tree[node] = true;
            total += weight;
            for other in graph.nodes() {
                if let Some(w) = cheapest[node][other] {
                    if !in_tree[other] && best[other].is_none_or(|b| w < b) {
                        best[other] = Some(w);
                    }
                }
            }
        }
    }
    total
}

fn petgraph_forest_weight(graph: &WeightedGraph) -> Weight {
    min_spanning_tree(&graph.to_petgraph())
        .filter_map(|element| match element {
            Element::Edge { weight, .. } => Some(weight),
            Element::Node { .. } => None,
        })
        .sum()
}

#[test]
fn fiber_network_spanning_tree() {
    let dataset = datasets::fiber_hubs().unwrap();
    let forest = minimum_spanning_forest(&dataset.graph).unwrap();

    assert_eq!(forest.edge_count(), 6);
    assert_eq!(forest.total_weight, 76);
    assert!(forest.is_spanning_tree());

    let skipped: Vec<(String, String)> = forest
        .rejected()
        .map(|step| {
            (
                dataset.labels.label(step.edge.source),
                dataset.labels.label(step.edge.destination),
            )
        })
        .collect();
    assert_eq!(skipped, vec![("C".to_string(), "D".to_string())]);
    // The scan stops after F-G; C-G is never examined.
    assert_eq!(forest.steps.len(), 7);
}

#[test]
fn transaction_network_distances_from_a() {
    let dataset = datasets::transaction_network().unwrap();
    let paths = shortest_paths(&dataset.graph, n(0)).unwrap();

    assert!(!paths.has_negative_cycle());
    let costs: Vec<Option<Weight>> = paths.distances.iter().map(|d| d.finite()).collect();
    let expected = [0, 4, 10, 10, 10, 17, 13, 13, 19, 26];
    assert_eq!(costs, expected.map(Some).to_vec());
    assert_eq!(paths.rounds, 9);
}

#[test]
fn injected_negative_link_flips_detection() {
    let dataset = datasets::transaction_network_with_cycle().unwrap();
    let paths = shortest_paths(&dataset.graph, n(0)).unwrap();
    assert!(paths.has_negative_cycle());

    let b = dataset.labels.indices_of("B")[0];
    let d_right = dataset.labels.indices_of("D (Right)")[0];
    assert!(paths
        .violations
        .iter()
        .any(|edge| edge.touches(b) || edge.touches(d_right)));
}

#[test]
fn isolated_node_is_unreachable_and_outside_the_tree() {
    let graph = WeightedGraph::from_edges(4, [(0, 1, 2), (1, 2, 3)]).unwrap();

    let forest = minimum_spanning_forest(&graph).unwrap();
    assert!(forest.edges.iter().all(|edge| !edge.touches(n(3))));
    assert_eq!(forest.component_count(), 2);

    let paths = shortest_paths(&graph.bidirected(), n(0)).unwrap();
    assert_eq!(paths.distance(n(3)), Some(Distance::Unreachable));
    assert_eq!(paths.unreachable().collect::<Vec<_>>(), vec![n(3)]);
}

#[test]
fn graph_survives_a_ron_file_round() {
    let dataset = datasets::fiber_hubs().unwrap();
    let text = to_ron_string(&dataset.graph).unwrap();
    let parsed: WeightedGraph = from_ron_str(&text).unwrap();
    assert_eq!(
        minimum_spanning_forest(&parsed).unwrap().total_weight,
        minimum_spanning_forest(&dataset.graph).unwrap().total_weight
    );
}

#[test]
fn random_forests_are_acyclic_and_minimal() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..200 {
        let graph = random_graph(&mut rng, -5..=20);
        let forest = KruskalBuilder::new().build(&graph).unwrap();

        assert!(forest.edge_count() <= graph.node_count().saturating_sub(1));
        let mut sets = DisjointSet::new(graph.node_count());
        for edge in &forest.edges {
            assert!(sets.union(edge.source, edge.destination).unwrap(), "cycle in forest");
        }
        // Every rejected edge joins nodes the forest already connects.
        for step in forest.steps.iter().filter(|s| s.decision == StepDecision::Rejected) {
            assert!(sets.same_set(step.edge.source, step.edge.destination).unwrap());
        }

        assert_eq!(forest.total_weight, prim_forest_weight(&graph));
        assert_eq!(forest.total_weight, petgraph_forest_weight(&graph));
    }
}

#[test]
fn random_paths_satisfy_the_relaxed_edge_bound() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..200 {
        let graph = random_graph(&mut rng, -3..=15);
        let source = n(rng.random_range(0..graph.node_count() as u32));
        let paths = shortest_paths(&graph, source).unwrap();

        // A negative cycle through the source can pull its distance below zero.
        if paths.has_negative_cycle() {
            continue;
        }
        assert_eq!(paths.distance(source), Some(Distance::Finite(0)));
        for edge in graph.edges().iter() {
            if let Some(from) = paths.distances[edge.source].finite() {
                assert!(paths.distances[edge.destination] <= Distance::Finite(from + edge.weight));
            }
        }
    }
}

#[test]
fn non_negative_weights_match_dijkstra_and_never_cycle() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        let graph = random_graph(&mut rng, 0..=25);
        let source = n(rng.random_range(0..graph.node_count() as u32));
        let paths = BellmanFord::new().early_exit(true).solve(&graph, source).unwrap();
        assert!(!paths.has_negative_cycle());

        let mut directed = DiGraph::<(), Weight>::new();
        let indices: Vec<_> = graph.nodes().map(|_| directed.add_node(())).collect();
        for edge in graph.edges().iter() {
            directed.add_edge(
                indices[edge.source.index()],
                indices[edge.destination.index()],
                edge.weight,
            );
        }
        let expected = dijkstra(&directed, indices[source.index()], None, |e| *e.weight());

        for node in graph.nodes() {
            let want = expected
                .get(&indices[node.index()])
                .map_or(Distance::Unreachable, |&cost| Distance::Finite(cost));
            assert_eq!(paths.distances[node], want);
        }
    }
}
