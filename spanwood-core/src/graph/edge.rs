//! Edge value type whose identity is its ordered endpoint pair.

use std::fmt;
use std::hash::{Hash, Hasher};

/// A directed connection from `start` to `end` carrying an optional label.
///
/// Equality and hashing consider only the endpoints: two edges between the
/// same ordered pair are the same edge whatever their labels say. This lets a
/// set or queue of edges reject a second candidate for a pair that is already
/// present.
///
/// # Examples
/// ```
/// use spanwood_core::Edge;
///
/// let light = Edge::new("a", "b", Some(1.0));
/// let heavy = Edge::new("a", "b", Some(9.0));
/// assert_eq!(light, heavy);
/// assert_ne!(light, light.reversed());
/// ```
#[derive(Clone, Debug)]
pub struct Edge<V, L> {
    start: V,
    end: V,
    label: Option<L>,
}

impl<V, L> Edge<V, L> {
    /// Creates an edge from `start` to `end`.
    #[must_use]
    pub const fn new(start: V, end: V, label: Option<L>) -> Self {
        Self { start, end, label }
    }

    /// Returns the node the edge leaves.
    #[must_use]
    #[rustfmt::skip]
    pub const fn start(&self) -> &V { &self.start }

    /// Returns the node the edge enters.
    #[must_use]
    #[rustfmt::skip]
    pub const fn end(&self) -> &V { &self.end }

    /// Returns the label, if the edge carries one.
    #[must_use]
    pub const fn label(&self) -> Option<&L> {
        self.label.as_ref()
    }

    /// Splits the edge into `(start, end, label)`.
    #[must_use]
    pub fn into_parts(self) -> (V, V, Option<L>) {
        (self.start, self.end, self.label)
    }
}

impl<V: Clone, L: Clone> Edge<V, L> {
    /// Returns the mirror edge `end -> start` with the same label.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self::new(self.end.clone(), self.start.clone(), self.label.clone())
    }
}

impl<V, L: Clone + Into<f64>> Edge<V, L> {
    /// Interprets the label as a numeric weight.
    #[must_use]
    pub fn weight(&self) -> Option<f64> {
        self.label.clone().map(Into::into)
    }
}

impl<V: PartialEq, L> PartialEq for Edge<V, L> {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.end == other.end
    }
}

impl<V: Eq, L> Eq for Edge<V, L> {}

impl<V: Hash, L> Hash for Edge<V, L> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.start.hash(state);
        self.end.hash(state);
    }
}

impl<V: fmt::Display, L: fmt::Display> fmt::Display for Edge<V, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.label {
            Some(label) => write!(f, "[{}]--({label})--[{}]", self.start, self.end),
            None => write!(f, "[{}]--[{}]", self.start, self.end),
        }
    }
}
