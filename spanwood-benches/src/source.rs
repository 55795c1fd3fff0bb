//! Seeded synthetic graph generation.

use rand::{Rng, SeedableRng, rngs::SmallRng};
use spanwood_core::{Graph, GraphBuilder};

use crate::error::BenchSetupError;

/// Configuration for a synthetic weighted graph.
#[derive(Clone, Debug)]
pub struct SyntheticGraphConfig {
    /// Number of nodes to generate.
    pub node_count: usize,
    /// Random edges added per node on top of each component's backbone.
    pub degree: usize,
    /// Number of components the nodes are split into.
    pub components: usize,
    /// RNG seed for reproducibility.
    pub seed: u64,
}

/// Builds an undirected, labelled graph with `components` connected pieces.
///
/// Nodes are assigned to components round-robin. Each component gets a
/// random spanning backbone, then every node gains `degree` random edges to
/// nodes of its own component. Weights are uniform in `[1, 1000)`.
///
/// # Errors
/// Returns [`BenchSetupError::ZeroValue`] when `node_count` or `components`
/// is zero.
///
/// # Examples
/// ```
/// use spanwood_benches::source::{SyntheticGraphConfig, generate_graph};
///
/// let graph = generate_graph(&SyntheticGraphConfig {
///     node_count: 10,
///     degree: 2,
///     components: 2,
///     seed: 7,
/// })?;
/// assert_eq!(graph.num_nodes(), 10);
/// # Ok::<(), spanwood_benches::error::BenchSetupError>(())
/// ```
pub fn generate_graph(config: &SyntheticGraphConfig) -> Result<Graph<usize, f64>, BenchSetupError> {
    if config.node_count == 0 {
        return Err(BenchSetupError::ZeroValue {
            context: "node_count",
        });
    }
    if config.components == 0 {
        return Err(BenchSetupError::ZeroValue {
            context: "components",
        });
    }

    let mut rng = SmallRng::seed_from_u64(config.seed);
    let mut graph = GraphBuilder::new()
        .with_capacity(config.node_count)
        .build();
    let mut members: Vec<Vec<usize>> = vec![Vec::new(); config.components];

    for node in 0..config.node_count {
        graph.add_node(node);
        if let Some(component) = members.get_mut(node % config.components) {
            component.push(node);
        }
    }

    for component in &members {
        for (position, &node) in component.iter().enumerate().skip(1) {
            if let Some(&parent) = component.get(rng.gen_range(0..position)) {
                graph.add_edge(parent, node, Some(rng.gen_range(1.0..1000.0)))?;
            }
        }
        for &node in component {
            for _ in 0..config.degree {
                if let Some(&other) = component.get(rng.gen_range(0..component.len())) {
                    graph.add_edge(node, other, Some(rng.gen_range(1.0..1000.0)))?;
                }
            }
        }
    }

    Ok(graph)
}
