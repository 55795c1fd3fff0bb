//! Benchmark support crate for spanwood.
//!
//! Provides seeded synthetic graphs and parameter types used by the
//! Criterion benchmarks for the priority queue and the minimum spanning
//! forest.

pub mod error;
pub mod params;
pub mod source;
