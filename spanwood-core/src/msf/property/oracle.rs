//! Sequential Kruskal oracle for forest property verification.
//!
//! Every minimum spanning forest of a graph has the same total weight and
//! the same number of trees, so those are the quantities compared. Edge
//! sets may legitimately differ when weights tie.

use super::types::ForestFixture;

/// Result of the sequential Kruskal oracle.
#[derive(Clone, Debug, PartialEq)]
pub(super) struct OracleForest {
    /// Total weight of the forest.
    pub total_weight: f64,
    /// Number of edges in the forest.
    pub edge_count: usize,
    /// Number of trees, isolated nodes included.
    pub component_count: usize,
}

/// Computes a minimum spanning forest with sequential Kruskal.
pub(super) fn sequential_kruskal(fixture: &ForestFixture) -> OracleForest {
    let mut edges: Vec<_> = fixture
        .edges
        .iter()
        .filter(|(start, end, _)| start != end)
        .copied()
        .collect();
    edges.sort_unstable_by_key(|&(_, _, weight)| weight);

    let mut parent: Vec<usize> = (0..fixture.node_count).collect();
    let mut total_weight = 0.0;
    let mut edge_count = 0;

    for (start, end, weight) in edges {
        let start_root = find_root(&mut parent, start);
        let end_root = find_root(&mut parent, end);
        if start_root != end_root {
            parent[end_root] = start_root;
            total_weight += f64::from(weight);
            edge_count += 1;
        }
    }

    OracleForest {
        total_weight,
        edge_count,
        component_count: fixture.node_count - edge_count,
    }
}

/// Path-halving find for union-find verification.
pub(super) fn find_root(parent: &mut [usize], mut node: usize) -> usize {
    while parent[node] != node {
        parent[node] = parent[parent[node]];
        node = parent[node];
    }
    node
}
