//! Strategy builders for forest property tests.
//!
//! Graphs are generated from a seeded [`SmallRng`] so proptest only has to
//! shrink the shape and the seed, and rstest cases can replay a fixed seed.

use std::collections::BTreeSet;

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::types::{ForestFixture, GraphShape};

/// Minimum node count for generated graphs.
const MIN_NODES: usize = 8;
/// Maximum node count for sparse and tie-heavy graphs.
const MAX_NODES: usize = 64;
/// Maximum node count for dense graphs.
const DENSE_MAX_NODES: usize = 24;

/// Generates forest fixtures across every graph shape.
pub(super) fn forest_fixture_strategy() -> impl Strategy<Value = ForestFixture> {
    let shape = prop_oneof![
        1 => Just(GraphShape::Sparse),
        1 => Just(GraphShape::Dense),
        2 => Just(GraphShape::ManyIdentical),
        1 => Just(GraphShape::Disconnected),
    ];
    (shape, any::<u64>()).prop_map(|(shape, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(shape, &mut rng)
    })
}

/// Generates a fixture of the given shape.
pub(super) fn generate_fixture(shape: GraphShape, rng: &mut SmallRng) -> ForestFixture {
    match shape {
        GraphShape::Sparse => generate_sparse(rng),
        GraphShape::Dense => generate_probabilistic(rng, shape, DENSE_MAX_NODES, (0.7, 0.95), 1..=1000),
        GraphShape::ManyIdentical => generate_probabilistic(rng, shape, MAX_NODES, (0.1, 0.3), 1..=3),
        GraphShape::Disconnected => generate_disconnected(rng),
    }
}

/// Collects unique undirected pairs, so the fixture never asks the graph to
/// insert the same edge twice.
#[derive(Default)]
struct EdgeSet {
    seen: BTreeSet<(usize, usize)>,
    edges: Vec<(usize, usize, u16)>,
}

impl EdgeSet {
    fn insert(&mut self, start: usize, end: usize, weight: u16) {
        if self.seen.insert((start.min(end), start.max(end))) {
            self.edges.push((start, end, weight));
        }
    }
}

fn shuffled_nodes(node_count: usize, rng: &mut SmallRng) -> Vec<usize> {
    let mut order: Vec<usize> = (0..node_count).collect();
    order.shuffle(rng);
    order
}

/// A random spanning backbone plus about `n / 2` extra edges.
fn generate_sparse(rng: &mut SmallRng) -> ForestFixture {
    let node_count = rng.gen_range(MIN_NODES..=MAX_NODES);
    let mut edges = EdgeSet::default();

    for node in 1..node_count {
        let parent = rng.gen_range(0..node);
        edges.insert(parent, node, rng.gen_range(1..=500));
    }
    for _ in 0..node_count / 2 {
        let start = rng.gen_range(0..node_count);
        let end = rng.gen_range(0..node_count);
        edges.insert(start, end, rng.gen_range(1..=500));
    }

    ForestFixture {
        node_count,
        insertion_order: shuffled_nodes(node_count, rng),
        edges: edges.edges,
        shape: GraphShape::Sparse,
    }
}

/// Adds each unordered pair with a probability drawn from `probability`.
fn generate_probabilistic(
    rng: &mut SmallRng,
    shape: GraphShape,
    max_nodes: usize,
    probability: (f64, f64),
    weights: std::ops::RangeInclusive<u16>,
) -> ForestFixture {
    let node_count = rng.gen_range(MIN_NODES..=max_nodes);
    let edge_probability = rng.gen_range(probability.0..=probability.1);
    let mut edges = EdgeSet::default();

    for start in 0..node_count {
        for end in (start + 1)..node_count {
            if rng.gen_bool(edge_probability) {
                edges.insert(start, end, rng.gen_range(weights.clone()));
            }
        }
    }

    ForestFixture {
        node_count,
        insertion_order: shuffled_nodes(node_count, rng),
        edges: edges.edges,
        shape,
    }
}

/// Two to four dense-ish components followed by a few isolated nodes.
fn generate_disconnected(rng: &mut SmallRng) -> ForestFixture {
    let components = rng.gen_range(2..=4);
    let mut edges = EdgeSet::default();
    let mut offset = 0;

    for _ in 0..components {
        let size = rng.gen_range(3..=12);
        for node in 1..size {
            let parent = rng.gen_range(0..node);
            edges.insert(offset + parent, offset + node, rng.gen_range(1..=100));
        }
        for start in 0..size {
            for end in (start + 1)..size {
                if rng.gen_bool(0.3) {
                    edges.insert(offset + start, offset + end, rng.gen_range(1..=100));
                }
            }
        }
        offset += size;
    }
    let node_count = offset + rng.gen_range(0..=3);

    ForestFixture {
        node_count,
        insertion_order: shuffled_nodes(node_count, rng),
        edges: edges.edges,
        shape: GraphShape::Disconnected,
    }
}
