//! Command-line interface orchestration for spanwood.
//!
//! Loads a `from,to,weight` edge list, computes its minimum spanning forest,
//! and renders the accepted edges with their count and total weight.

mod commands;

pub use commands::{Cli, CliError, ExecutionSummary, render_summary, report_failure, run_cli};
