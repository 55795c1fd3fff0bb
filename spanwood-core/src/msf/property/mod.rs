//! Property-based tests for the Prim minimum spanning forest.
//!
//! Checks total weight and component count against a sequential Kruskal
//! oracle, and validates the structural invariants of every forest
//! (acyclicity, edge count, growth order, labels preserved) across several
//! graph shapes.

mod equivalence;
mod oracle;
mod strategies;
mod structural;
mod types;
