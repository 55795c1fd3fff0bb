use std::io;
use std::num::ParseFloatError;

use spanwood_core::GraphError;
use thiserror::Error;

/// Failures raised while loading an edge list. Line numbers are 1-based.
#[derive(Debug, Error)]
pub enum EdgeListError {
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
    #[error("line {line}: expected 3 comma-separated fields but found {found}")]
    FieldCount { line: usize, found: usize },
    #[error("line {line}: node name must not be empty")]
    EmptyNode { line: usize },
    #[error("line {line}: weight `{value}` is not a number")]
    InvalidWeight {
        line: usize,
        value: String,
        #[source]
        source: ParseFloatError,
    },
    #[error("line {line}: weight {value} is not finite")]
    NonFiniteWeight { line: usize, value: f64 },
    #[error("line {line}: {source}")]
    Graph {
        line: usize,
        #[source]
        source: GraphError,
    },
}

impl EdgeListError {
    /// Returns the offending line when the failure is tied to one record.
    #[must_use]
    pub const fn line(&self) -> Option<usize> {
        match self {
            Self::Io(_) => None,
            Self::FieldCount { line, .. }
            | Self::EmptyNode { line }
            | Self::InvalidWeight { line, .. }
            | Self::NonFiniteWeight { line, .. }
            | Self::Graph { line, .. } => Some(*line),
        }
    }
}
