//! Sparse adjacency-map graph over arbitrary hashable node values.
//!
//! Every node owns a map of its outgoing edges keyed by the end node, so
//! membership, label lookup and edge removal are constant time. Nodes are
//! kept in insertion order, which is the order [`Graph::nodes`] yields them
//! and therefore the order in which a forest computation seeds its trees.
//!
//! Undirected graphs store each connection twice, once per direction, with
//! the same label on both halves. Both halves count toward
//! [`Graph::num_edges`].

mod edge;

use std::borrow::Borrow;
use std::hash::Hash;

use indexmap::IndexMap;
use indexmap::map::Entry;

use crate::error::GraphError;

pub use self::edge::Edge;

/// Whether edges are one-way or mirrored.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Direction {
    /// An edge `a -> b` says nothing about `b -> a`.
    Directed,
    /// Adding `a - b` also adds the mirror `b - a` with the same label.
    Undirected,
}

/// Whether every edge must carry a label.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Labelling {
    /// Every edge requires a label at insertion time.
    Labelled,
    /// Labels are optional and label lookups are rejected.
    Unlabelled,
}

type Outgoing<V, L> = IndexMap<V, Edge<V, L>>;

/// A simple graph (at most one edge per ordered node pair) with a fixed
/// [`Direction`] and [`Labelling`].
///
/// Node arguments can never be null, so the only malformed call is an
/// unlabelled edge on a labelled graph, reported as
/// [`GraphError::MissingLabel`]. Requests that are already satisfied or
/// cannot apply (duplicate node, missing endpoint, absent edge) return
/// `false` instead.
///
/// The graph is not synchronised; mutating it while another routine iterates
/// over it is prevented by the borrow checker within one thread and left to
/// the caller across threads.
///
/// # Examples
/// ```
/// use spanwood_core::Graph;
///
/// let mut graph = Graph::undirected_labelled();
/// graph.add_node("turin");
/// graph.add_node("milan");
/// assert_eq!(graph.add_edge("turin", "milan", Some(125.0)), Ok(true));
///
/// assert!(graph.contains_edge("milan", "turin"));
/// assert_eq!(graph.label("milan", "turin"), Ok(Some(&125.0)));
/// assert_eq!(graph.num_edges(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct Graph<V, L> {
    adjacency: IndexMap<V, Outgoing<V, L>>,
    direction: Direction,
    labelling: Labelling,
    edge_count: usize,
}

impl<V, L> Graph<V, L>
where
    V: Clone + Eq + Hash,
    L: Clone,
{
    /// Creates an empty graph.
    #[must_use]
    pub fn new(direction: Direction, labelling: Labelling) -> Self {
        Self::with_capacity(direction, labelling, 0)
    }

    /// Creates an empty graph with room for `nodes` nodes.
    #[must_use]
    pub fn with_capacity(direction: Direction, labelling: Labelling, nodes: usize) -> Self {
        Self {
            adjacency: IndexMap::with_capacity(nodes),
            direction,
            labelling,
            edge_count: 0,
        }
    }

    /// Creates an empty undirected graph whose edges carry labels.
    #[must_use]
    pub fn undirected_labelled() -> Self {
        Self::new(Direction::Undirected, Labelling::Labelled)
    }

    /// Creates an empty undirected graph without labels.
    #[must_use]
    pub fn undirected_unlabelled() -> Self {
        Self::new(Direction::Undirected, Labelling::Unlabelled)
    }

    /// Creates an empty directed graph whose edges carry labels.
    #[must_use]
    pub fn directed_labelled() -> Self {
        Self::new(Direction::Directed, Labelling::Labelled)
    }

    /// Creates an empty directed graph without labels.
    #[must_use]
    pub fn directed_unlabelled() -> Self {
        Self::new(Direction::Directed, Labelling::Unlabelled)
    }

    /// Returns the direction fixed at construction.
    #[must_use]
    #[rustfmt::skip]
    pub const fn direction(&self) -> Direction { self.direction }

    /// Returns the labelling fixed at construction.
    #[must_use]
    #[rustfmt::skip]
    pub const fn labelling(&self) -> Labelling { self.labelling }

    /// Returns `true` when edges are one-way.
    #[must_use]
    pub const fn is_directed(&self) -> bool {
        matches!(self.direction, Direction::Directed)
    }

    /// Returns `true` when every edge carries a label.
    #[must_use]
    pub const fn is_labelled(&self) -> bool {
        matches!(self.labelling, Labelling::Labelled)
    }

    /// Inserts `node` with no edges.
    ///
    /// Returns `false` when the node is already present.
    pub fn add_node(&mut self, node: V) -> bool {
        match self.adjacency.entry(node) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(IndexMap::new());
                true
            }
        }
    }

    /// Inserts an edge from `start` to `end`, plus its mirror when the graph
    /// is undirected.
    ///
    /// Returns `Ok(false)` when either endpoint is missing or the edge
    /// already exists. A self-loop is a single physical edge even in an
    /// undirected graph.
    ///
    /// # Errors
    /// Returns [`GraphError::MissingLabel`] when the graph is labelled and
    /// `label` is `None`. The graph is left untouched.
    pub fn add_edge(&mut self, start: V, end: V, label: Option<L>) -> Result<bool, GraphError> {
        if self.is_labelled() && label.is_none() {
            return Err(GraphError::MissingLabel);
        }
        if !self.contains_node(&start)
            || !self.contains_node(&end)
            || self.contains_edge(&start, &end)
        {
            return Ok(false);
        }

        let edge = Edge::new(start, end, label);
        if !self.is_directed() && edge.start() != edge.end() {
            let mirror = edge.reversed();
            self.insert_edge(mirror);
        }
        self.insert_edge(edge);
        Ok(true)
    }

    fn insert_edge(&mut self, edge: Edge<V, L>) {
        if let Some(outgoing) = self.adjacency.get_mut(edge.start()) {
            outgoing.insert(edge.end().clone(), edge);
            self.edge_count = self.edge_count.saturating_add(1);
        }
    }

    /// Returns `true` when `node` is part of the graph.
    #[must_use]
    pub fn contains_node<Q>(&self, node: &Q) -> bool
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.adjacency.contains_key(node)
    }

    /// Returns `true` when the edge `start -> end` is stored.
    ///
    /// In an undirected graph the mirror makes both directions findable.
    #[must_use]
    pub fn contains_edge<Q>(&self, start: &Q, end: &Q) -> bool
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.edge(start, end).is_some()
    }

    /// Removes `node` together with every edge that enters or leaves it.
    ///
    /// Runs in O(N): incoming edges are found by probing every other node's
    /// outgoing map. The insertion order of the remaining nodes is kept.
    /// Returns `false` when the node is absent.
    pub fn remove_node<Q>(&mut self, node: &Q) -> bool
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let Some(outgoing) = self.adjacency.shift_remove(node) else {
            return false;
        };
        self.edge_count = self.edge_count.saturating_sub(outgoing.len());

        for others in self.adjacency.values_mut() {
            if others.swap_remove(node).is_some() {
                self.edge_count = self.edge_count.saturating_sub(1);
            }
        }
        true
    }

    /// Removes the edge `start -> end`, and its mirror when undirected.
    ///
    /// Runs in O(1). The last edge leaving `start` takes the removed edge's
    /// slot, so the order of the remaining outgoing edges may change.
    /// Returns `false` when the edge is absent, leaving the edge count
    /// unchanged.
    pub fn remove_edge<Q>(&mut self, start: &Q, end: &Q) -> bool
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        if !self.detach(start, end) {
            return false;
        }
        if !self.is_directed() && start != end {
            self.detach(end, start);
        }
        true
    }

    fn detach<Q>(&mut self, start: &Q, end: &Q) -> bool
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let removed = self
            .adjacency
            .get_mut(start)
            .and_then(|outgoing| outgoing.swap_remove(end))
            .is_some();
        if removed {
            self.edge_count = self.edge_count.saturating_sub(1);
        }
        removed
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn num_nodes(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of stored edges; undirected connections count
    /// twice.
    #[must_use]
    #[rustfmt::skip]
    pub const fn num_edges(&self) -> usize { self.edge_count }

    /// Returns `true` when the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Iterates over the nodes in insertion order.
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = &V> {
        self.adjacency.keys()
    }

    /// Iterates over every stored edge, grouped by start node.
    pub fn edges(&self) -> impl Iterator<Item = &Edge<V, L>> {
        self.adjacency.values().flat_map(IndexMap::values)
    }

    /// Iterates over the end nodes of the edges leaving `node`.
    ///
    /// # Errors
    /// Returns [`GraphError::NodeNotFound`] when `node` is absent.
    pub fn neighbours<Q>(&self, node: &Q) -> Result<Neighbours<'_, V, L>, GraphError>
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.adjacency
            .get(node)
            .map(|outgoing| Neighbours {
                inner: outgoing.keys(),
            })
            .ok_or(GraphError::NodeNotFound)
    }

    /// Iterates over the edges leaving `node`.
    ///
    /// # Errors
    /// Returns [`GraphError::NodeNotFound`] when `node` is absent.
    pub fn edges_from<Q>(&self, node: &Q) -> Result<EdgesFrom<'_, V, L>, GraphError>
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.adjacency
            .get(node)
            .map(|outgoing| EdgesFrom {
                inner: outgoing.values(),
            })
            .ok_or(GraphError::NodeNotFound)
    }

    /// Returns the stored edge `start -> end`.
    #[must_use]
    pub fn edge<Q>(&self, start: &Q, end: &Q) -> Option<&Edge<V, L>>
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.adjacency.get(start)?.get(end)
    }

    /// Returns the label of `start -> end`, or `None` when no such edge
    /// exists.
    ///
    /// # Errors
    /// Returns [`GraphError::NotLabelled`] when the graph does not carry
    /// labels.
    pub fn label<Q>(&self, start: &Q, end: &Q) -> Result<Option<&L>, GraphError>
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        if !self.is_labelled() {
            return Err(GraphError::NotLabelled);
        }
        Ok(self.edge(start, end).and_then(Edge::label))
    }
}

/// Iterator over the end nodes of the edges leaving one node, returned by
/// [`Graph::neighbours`].
#[derive(Clone, Debug)]
pub struct Neighbours<'a, V, L> {
    inner: indexmap::map::Keys<'a, V, Edge<V, L>>,
}

impl<'a, V, L> Iterator for Neighbours<'a, V, L> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V, L> ExactSizeIterator for Neighbours<'_, V, L> {}

/// Iterator over the edges leaving one node, returned by
/// [`Graph::edges_from`].
#[derive(Clone, Debug)]
pub struct EdgesFrom<'a, V, L> {
    inner: indexmap::map::Values<'a, V, Edge<V, L>>,
}

impl<'a, V, L> Iterator for EdgesFrom<'a, V, L> {
    type Item = &'a Edge<V, L>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V, L> ExactSizeIterator for EdgesFrom<'_, V, L> {}
