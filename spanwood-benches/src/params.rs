//! Benchmark parameter types, rendered as Criterion benchmark ids.

use std::fmt;

/// Parameters for a forest benchmark run.
#[derive(Clone, Debug)]
pub struct ForestBenchParams {
    /// Number of nodes in the graph.
    pub node_count: usize,
    /// Average number of edges per node.
    pub degree: usize,
    /// Number of disconnected components.
    pub components: usize,
}

impl fmt::Display for ForestBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "n={},d={},c={}",
            self.node_count, self.degree, self.components
        )
    }
}

/// Parameters for a priority queue benchmark run.
#[derive(Clone, Debug)]
pub struct QueueBenchParams {
    /// Number of elements pushed before draining.
    pub element_count: usize,
}

impl fmt::Display for QueueBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={}", self.element_count)
    }
}
