//! Structural invariants of every forest:
//!
//! - **Acyclicity**: no accepted edge closes a cycle.
//! - **Edge count**: `V - C` edges for `C` trees.
//! - **Growth order**: each edge leads to a node nothing has claimed yet.
//! - **Faithfulness**: each edge exists in the graph with the same label.

use std::collections::HashSet;

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::msf::minimum_spanning_forest;

use super::oracle::find_root;
use super::types::ForestFixture;

/// Runs the structural invariant property for the given fixture.
pub(super) fn run_structural_invariants_property(fixture: &ForestFixture) -> TestCaseResult {
    let graph = fixture.graph();
    let forest = minimum_spanning_forest(&graph).map_err(|err| {
        TestCaseError::fail(format!("forest failed: {err} (shape={:?})", fixture.shape))
    })?;

    let mut parent: Vec<usize> = (0..fixture.node_count).collect();
    let mut claimed = HashSet::with_capacity(fixture.node_count);

    for (index, edge) in forest.edges().iter().enumerate() {
        let (start, end) = (*edge.start(), *edge.end());
        if start == end {
            return Err(TestCaseError::fail(format!("edge {index}: self-loop on {start}")));
        }
        if graph.label(&start, &end) != Ok(edge.label()) {
            return Err(TestCaseError::fail(format!(
                "edge {index}: {start}-{end} does not match the graph"
            )));
        }

        let start_root = find_root(&mut parent, start);
        let end_root = find_root(&mut parent, end);
        if start_root == end_root {
            return Err(TestCaseError::fail(format!("edge {index}: {start}-{end} closes a cycle")));
        }
        parent[end_root] = start_root;

        claimed.insert(start);
        if !claimed.insert(end) {
            return Err(TestCaseError::fail(format!(
                "edge {index}: {end} was claimed before {start}-{end} reached it"
            )));
        }
    }

    if forest.len() + forest.component_count() != fixture.node_count {
        return Err(TestCaseError::fail(format!(
            "{} edges and {} trees do not cover {} nodes",
            forest.len(),
            forest.component_count(),
            fixture.node_count,
        )));
    }
    Ok(())
}
