//! Minimum spanning forest construction with Prim's algorithm.
//!
//! Trees are seeded from the graph's nodes in insertion order. Each tree is
//! grown from its most recently claimed node (the frontier): that node's
//! edges to unvisited neighbours join the priority queue, and the cheapest
//! queued edge that still leads somewhere new is accepted. Queue entries
//! whose end was claimed in the meantime are dropped lazily when popped.
//!
//! A disconnected graph produces one tree per connected component.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::hash::Hash;

use tracing::{debug, info, instrument};

use crate::error::MsfError;
use crate::graph::{Edge, Graph};
use crate::queue::IndexedPriorityQueue;

/// The edges of a minimum spanning forest in the order they were accepted.
///
/// Every edge is oriented from the node already in its tree to the node it
/// brought in, so reading the edges in order replays how each tree was
/// built. The order is not sorted by weight.
#[derive(Clone, Debug, PartialEq)]
pub struct MinimumSpanningForest<V, L> {
    edges: Vec<Edge<V, L>>,
    component_count: usize,
    total_weight: f64,
}

impl<V, L> MinimumSpanningForest<V, L> {
    /// Returns the accepted edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge<V, L>] { &self.edges }

    /// Returns the number of accepted edges.
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` when no edge was accepted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Returns the number of trees, counting isolated nodes as trees of
    /// their own.
    #[must_use]
    #[rustfmt::skip]
    pub const fn component_count(&self) -> usize { self.component_count }

    /// Returns `true` when the forest spans a single connected component.
    #[must_use]
    pub const fn is_tree(&self) -> bool {
        self.component_count == 1
    }

    /// Returns the sum of the accepted edges' weights.
    #[must_use]
    #[rustfmt::skip]
    pub const fn total_weight(&self) -> f64 { self.total_weight }

    /// Consumes the forest, returning its edges.
    #[must_use]
    pub fn into_edges(self) -> Vec<Edge<V, L>> {
        self.edges
    }

    /// Iterates over the accepted edges.
    pub fn iter(&self) -> std::slice::Iter<'_, Edge<V, L>> {
        self.edges.iter()
    }
}

impl<'a, V, L> IntoIterator for &'a MinimumSpanningForest<V, L> {
    type Item = &'a Edge<V, L>;
    type IntoIter = std::slice::Iter<'a, Edge<V, L>>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.iter()
    }
}

impl<V, L> IntoIterator for MinimumSpanningForest<V, L> {
    type Item = Edge<V, L>;
    type IntoIter = std::vec::IntoIter<Edge<V, L>>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.into_iter()
    }
}

type ByWeight<'g, V, L> = fn(&&'g Edge<V, L>, &&'g Edge<V, L>) -> Ordering;
type Frontier<'g, V, L> = IndexedPriorityQueue<&'g Edge<V, L>, ByWeight<'g, V, L>>;

fn edge_weight<V, L: Clone + Into<f64>>(edge: &Edge<V, L>) -> f64 {
    edge.weight().unwrap_or(f64::INFINITY)
}

fn compare_weights<V, L: Clone + Into<f64>>(left: &&Edge<V, L>, right: &&Edge<V, L>) -> Ordering {
    edge_weight(left).total_cmp(&edge_weight(right))
}

/// Computes a minimum spanning forest of an undirected, labelled graph,
/// reading each label as the edge weight.
///
/// Equal weights are broken by the queue's unspecified tie order, so graphs
/// with repeated weights may yield different (equally light) forests. NaN
/// weights sort after every other weight.
///
/// # Errors
/// Returns [`MsfError::DirectedGraph`] for directed input and
/// [`MsfError::UnlabelledGraph`] when the graph carries no labels.
///
/// # Examples
/// ```
/// use spanwood_core::{Graph, minimum_spanning_forest};
///
/// let mut graph = Graph::undirected_labelled();
/// for node in ["a", "b", "c"] {
///     graph.add_node(node);
/// }
/// graph.add_edge("a", "b", Some(1.0))?;
/// graph.add_edge("b", "c", Some(2.0))?;
/// graph.add_edge("a", "c", Some(5.0))?;
///
/// let forest = minimum_spanning_forest(&graph)?;
/// assert_eq!(forest.len(), 2);
/// assert_eq!(forest.total_weight(), 3.0);
/// assert!(forest.is_tree());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[instrument(
    name = "core.minimum_spanning_forest",
    err,
    skip(graph),
    fields(nodes = graph.num_nodes(), edges = graph.num_edges()),
)]
pub fn minimum_spanning_forest<V, L>(
    graph: &Graph<V, L>,
) -> Result<MinimumSpanningForest<V, L>, MsfError>
where
    V: Clone + Eq + Hash,
    L: Clone + Into<f64>,
{
    if graph.is_directed() {
        return Err(MsfError::DirectedGraph);
    }
    if !graph.is_labelled() {
        return Err(MsfError::UnlabelledGraph);
    }

    let node_count = graph.num_nodes();
    let mut visited: HashSet<&V> = HashSet::with_capacity(node_count);
    let mut frontier: Frontier<'_, V, L> =
        IndexedPriorityQueue::new(compare_weights::<V, L> as ByWeight<'_, V, L>);
    let mut edges = Vec::with_capacity(node_count.saturating_sub(1));
    let mut total_weight = 0.0;
    let mut component_count = 0_usize;

    for seed in graph.nodes() {
        if visited.len() == node_count {
            break;
        }
        if !visited.insert(seed) {
            continue;
        }
        component_count = component_count.saturating_add(1);

        let mut current = seed;
        let mut tree_edges = 0_usize;
        while visited.len() < node_count {
            for edge in graph.edges_from(current)? {
                if !visited.contains(edge.end()) {
                    frontier.push(edge);
                }
            }

            let Some(cheapest) = pop_fresh(&mut frontier, &visited) else {
                break;
            };
            visited.insert(cheapest.end());
            total_weight += edge_weight(cheapest);
            edges.push(cheapest.clone());
            tree_edges = tree_edges.saturating_add(1);
            current = cheapest.end();
        }
        frontier.clear();
        debug!(component = component_count, edges = tree_edges, "tree complete");
    }

    info!(
        edges = edges.len(),
        components = component_count,
        total_weight,
        "minimum spanning forest computed"
    );
    Ok(MinimumSpanningForest {
        edges,
        component_count,
        total_weight,
    })
}

/// Pops until an edge leading to an unvisited node turns up, discarding the
/// stale entries on the way.
fn pop_fresh<'g, V, L>(
    frontier: &mut Frontier<'g, V, L>,
    visited: &HashSet<&'g V>,
) -> Option<&'g Edge<V, L>>
where
    V: Eq + Hash,
{
    while let Ok(candidate) = frontier.pop() {
        if !visited.contains(candidate.end()) {
            return Some(candidate);
        }
    }
    None
}

#[cfg(test)]
mod property;
