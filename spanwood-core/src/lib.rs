//! Spanwood core library.
//!
//! Provides a sparse [`Graph`] keyed by arbitrary hashable nodes, an
//! [`IndexedPriorityQueue`] that can drop any queued element in O(log N),
//! and [`minimum_spanning_forest`], which grows one Prim tree per connected
//! component of an undirected, weighted graph.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod builder;
mod error;
mod graph;
mod msf;
mod queue;

#[cfg(test)]
mod test_utils;

pub use crate::{
    builder::GraphBuilder,
    error::{GraphError, GraphErrorCode, MsfError, MsfErrorCode, QueueError, QueueErrorCode},
    graph::{Direction, Edge, EdgesFrom, Graph, Labelling, Neighbours},
    msf::{MinimumSpanningForest, minimum_spanning_forest},
    queue::{Comparator, IndexedPriorityQueue, NaturalOrder},
};
