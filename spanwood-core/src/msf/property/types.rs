//! Fixture types for forest property tests.

use crate::graph::{Direction, Graph, Labelling};

/// Shape of a generated graph.
///
/// Each shape stresses a different part of the algorithm: the number of
/// stale queue entries, tie handling, or the restart across components.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum GraphShape {
    /// Roughly `1.5n` edges over a connected backbone, with the odd self-loop.
    Sparse,
    /// Close to a complete graph, so most queued edges go stale.
    Dense,
    /// Weights drawn from a tiny set, so ties are everywhere.
    ManyIdentical,
    /// Several components with no edges between them, plus isolated nodes.
    Disconnected,
}

/// A generated weighted graph, described as plain data so a failing case
/// prints readably.
#[derive(Clone, Debug)]
pub(super) struct ForestFixture {
    /// Number of nodes, labelled `0..node_count`.
    pub node_count: usize,
    /// Order in which the nodes are added to the graph.
    pub insertion_order: Vec<usize>,
    /// Undirected edges with integral weights. No pair appears twice.
    pub edges: Vec<(usize, usize, u16)>,
    /// Shape used during generation.
    pub shape: GraphShape,
}

impl ForestFixture {
    /// Builds the undirected labelled graph this fixture describes.
    pub(super) fn graph(&self) -> Graph<usize, f64> {
        let mut graph =
            Graph::with_capacity(Direction::Undirected, Labelling::Labelled, self.node_count);
        for node in &self.insertion_order {
            graph.add_node(*node);
        }
        for (start, end, weight) in &self.edges {
            // Pairs are unique and both endpoints exist, so every insert lands.
            let _ = graph.add_edge(*start, *end, Some(f64::from(*weight)));
        }
        graph
    }
}
