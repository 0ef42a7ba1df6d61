//! Built-in sample networks and queues used by the command line demos.
use crate::graph::core::{GraphError, WeightedGraph};
use crate::graph::naming::Labels;
use crate::queue::Entry;

/// A graph together with the labels used to report on it.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub name: &'static str,
    pub graph: WeightedGraph,
    pub labels: Labels,
}

pub const DATASET_NAMES: &[&str] = &[
    "fiber-hubs",
    "transactions",
    "transactions-cycle",
    "workstations",
];

pub fn by_name(name: &str) -> Result<Option<Dataset>, GraphError> {
    let dataset = match name {
        "fiber-hubs" => fiber_hubs()?,
        "transactions" => transaction_network()?,
        "transactions-cycle" => transaction_network_with_cycle()?,
        "workstations" => workstations()?,
        _ => return Ok(None),
    };
    Ok(Some(dataset))
}

fn letters(count: usize) -> Labels {
    Labels::new((0..count).map(|idx| ((b'A' + idx as u8) as char).to_string()))
}

/// Seven city hubs A..G; one record per link, for Kruskal.
pub fn fiber_hubs() -> Result<Dataset, GraphError> {
    let graph = WeightedGraph::from_edges(
        7,
        [
            (0, 1, 6),
            (1, 2, 11),
            (1, 3, 5),
            (2, 3, 17),
            (2, 6, 25),
            (3, 4, 22),
            (4, 5, 10),
            (5, 6, 22),
        ],
    )?;
    Ok(Dataset {
        name: "fiber-hubs",
        graph,
        labels: letters(7),
    })
}

/// Ten-branch transaction network, each link stored in both directions.
/// Branches D and G are drawn as two junction nodes each.
pub fn transaction_network() -> Result<Dataset, GraphError> {
    let mut graph = WeightedGraph::with_edge_limit(10, 40);
    for (a, b, weight) in [
        (0usize, 1usize, 4),
        (0, 3, 16),
        (1, 2, 6),
        (1, 3, 6),
        (1, 4, 7),
        (2, 7, 9),
        (3, 5, 7),
        (3, 4, 0),
        (4, 6, 3),
        (5, 6, 10),
        (5, 8, 2),
        (6, 7, 0),
        (6, 8, 10),
        (7, 9, 13),
    ] {
        graph.add_bidirectional_edge(a, b, weight)?;
    }
    Ok(Dataset {
        name: "transactions",
        graph,
        labels: Labels::new([
            "A",
            "B",
            "C",
            "D (Left)",
            "D (Right)",
            "E",
            "F",
            "G (Top)",
            "G (Bottom)",
            "H",
        ]),
    })
}

/// [`transaction_network`] plus a -10 link between B and D (Right), which
/// closes a negative cycle reachable from A.
pub fn transaction_network_with_cycle() -> Result<Dataset, GraphError> {
    let mut dataset = transaction_network()?;
    dataset.graph.add_bidirectional_edge(4, 1, -10)?;
    dataset.name = "transactions-cycle";
    Ok(dataset)
}

/// Seven workstations A..G for the traversal demo.
pub fn workstations() -> Result<Dataset, GraphError> {
    let mut dataset = fiber_hubs()?;
    dataset.name = "workstations";
    Ok(dataset)
}

pub fn job_priorities() -> Vec<Entry<String>> {
    [42, 17, 93, 28, 65, 81, 54, 60, 99, 73, 88]
        .into_iter()
        .enumerate()
        .map(|(idx, priority)| Entry::new(((b'A' + idx as u8) as char).to_string(), priority))
        .collect()
}

pub fn passengers() -> Vec<Entry<String>> {
    [
        ("Alice", 30),
        ("Brian", 55),
        ("Chen", 85),
        ("Fatima", 90),
        ("Noah", 45),
        ("Sofia", 70),
    ]
    .into_iter()
    .map(|(name, risk)| Entry::new(name.to_string(), risk))
    .collect()
}
