//! Oracle equivalence: Prim and Kruskal agree on weight and shape.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::msf::minimum_spanning_forest;

use super::oracle::sequential_kruskal;
use super::types::ForestFixture;

/// Runs the oracle equivalence property for the given fixture.
pub(super) fn run_oracle_equivalence_property(fixture: &ForestFixture) -> TestCaseResult {
    let graph = fixture.graph();
    let forest = minimum_spanning_forest(&graph).map_err(|err| {
        TestCaseError::fail(format!("forest failed: {err} (shape={:?})", fixture.shape))
    })?;
    let oracle = sequential_kruskal(fixture);

    // Weights are integral, so both sums are exact whatever the order.
    if forest.total_weight() != oracle.total_weight {
        return Err(TestCaseError::fail(format!(
            "total weight {} differs from oracle {} (shape={:?}, nodes={}, edges={})",
            forest.total_weight(),
            oracle.total_weight,
            fixture.shape,
            fixture.node_count,
            fixture.edges.len(),
        )));
    }
    if forest.len() != oracle.edge_count {
        return Err(TestCaseError::fail(format!(
            "edge count {} differs from oracle {}",
            forest.len(),
            oracle.edge_count,
        )));
    }
    if forest.component_count() != oracle.component_count {
        return Err(TestCaseError::fail(format!(
            "component count {} differs from oracle {}",
            forest.component_count(),
            oracle.component_count,
        )));
    }
    Ok(())
}
