//! Benchmark setup error type.
//!
//! Lets setup functions propagate failures with `?` instead of panicking
//! inside Criterion closures.

use spanwood_core::{GraphError, MsfError};

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Building the synthetic graph failed.
    #[error("graph construction failed: {0}")]
    Graph(#[from] GraphError),
    /// Computing the forest failed.
    #[error("forest computation failed: {0}")]
    Forest(#[from] MsfError),
    /// A zero value was passed where a non-zero integer was required.
    #[error("expected a non-zero value for {context}")]
    ZeroValue {
        /// A description of the parameter that was unexpectedly zero.
        context: &'static str,
    },
}
