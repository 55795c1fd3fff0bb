//! Builder for configuring [`Graph`] instances.
//!
//! Collects the direction, labelling and a node-capacity hint before the
//! node and label types are chosen at [`GraphBuilder::build`].

use std::hash::Hash;

use crate::graph::{Direction, Graph, Labelling};

/// Configures and constructs [`Graph`] instances.
///
/// Defaults to an undirected, labelled graph with no preallocation, which is
/// the shape the spanning forest routine accepts.
///
/// # Examples
/// ```
/// use spanwood_core::{Direction, Graph, GraphBuilder, Labelling};
///
/// let graph: Graph<u32, f64> = GraphBuilder::new()
///     .with_direction(Direction::Directed)
///     .with_labelling(Labelling::Unlabelled)
///     .with_capacity(16)
///     .build();
/// assert!(graph.is_directed());
/// assert!(!graph.is_labelled());
/// assert!(graph.is_empty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphBuilder {
    direction: Direction,
    labelling: Labelling,
    capacity: usize,
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self {
            direction: Direction::Undirected,
            labelling: Labelling::Labelled,
            capacity: 0,
        }
    }
}

impl GraphBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use spanwood_core::{Direction, GraphBuilder, Labelling};
    ///
    /// let builder = GraphBuilder::new();
    /// assert_eq!(builder.direction(), Direction::Undirected);
    /// assert_eq!(builder.labelling(), Labelling::Labelled);
    /// assert_eq!(builder.capacity(), 0);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the edge direction.
    #[must_use]
    pub const fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Overrides whether edges must carry labels.
    #[must_use]
    pub const fn with_labelling(mut self, labelling: Labelling) -> Self {
        self.labelling = labelling;
        self
    }

    /// Preallocates room for `nodes` nodes.
    #[must_use]
    pub const fn with_capacity(mut self, nodes: usize) -> Self {
        self.capacity = nodes;
        self
    }

    /// Returns the configured direction.
    #[must_use]
    #[rustfmt::skip]
    pub const fn direction(&self) -> Direction { self.direction }

    /// Returns the configured labelling.
    #[must_use]
    #[rustfmt::skip]
    pub const fn labelling(&self) -> Labelling { self.labelling }

    /// Returns the node-capacity hint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn capacity(&self) -> usize { self.capacity }

    /// Builds an empty graph with the configured shape.
    #[must_use]
    pub fn build<V, L>(&self) -> Graph<V, L>
    where
        V: Clone + Eq + Hash,
        L: Clone,
    {
        Graph::with_capacity(self.direction, self.labelling, self.capacity)
    }
}
