use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use spanwood_core::{MinimumSpanningForest, MsfError, minimum_spanning_forest};
use spanwood_providers_edgelist::{EdgeListError, EdgeListProvider};
use thiserror::Error;
use tracing::{Span, error, field, info, instrument};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "spanwood",
    about = "Compute the minimum spanning forest of a weighted edge list."
)]
pub struct Cli {
    /// Path to a text file with one `from,to,weight` record per line.
    pub path: PathBuf,

    /// Override name for the data source (defaults to the file name).
    #[arg(long)]
    pub name: Option<String>,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// File I/O failed while opening the input.
    #[error("failed to open `{path}`")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The edge list could not be parsed.
    #[error(transparent)]
    EdgeList(#[from] EdgeListError),
    /// The forest could not be computed.
    #[error(transparent)]
    Forest(#[from] MsfError),
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Name of the loaded data source.
    pub data_source: String,
    /// Number of non-blank records read.
    pub records: usize,
    /// Records skipped because their pair was already connected.
    pub duplicates: usize,
    /// The computed forest.
    pub forest: MinimumSpanningForest<String, f64>,
}

/// Executes the command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when the input cannot be read or parsed.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use spanwood_cli::cli::{Cli, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "A,B,1\nB,C,2\nA,C,5\n")?;
/// let cli = Cli {
///     path: file.path().to_path_buf(),
///     name: Some("triangle".into()),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.data_source, "triangle");
/// assert_eq!(summary.forest.total_weight(), 3.0);
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(path = field::Empty, override_name = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    let Cli { path, name } = cli;
    let span = Span::current();
    span.record("path", field::display(path.display()));
    span.record(
        "override_name",
        field::display(name.as_deref().unwrap_or("<derived>")),
    );

    let chosen_name = derive_data_source_name(&path, name.as_deref());
    let reader = open_edge_list_reader(&path)?;
    let provider = EdgeListProvider::try_from_reader(chosen_name, reader)?;
    let forest = minimum_spanning_forest(provider.graph())?;

    info!(
        data_source = provider.name(),
        edges = forest.len(),
        components = forest.component_count(),
        "command completed"
    );
    Ok(ExecutionSummary {
        data_source: provider.name().to_owned(),
        records: provider.records(),
        duplicates: provider.duplicates(),
        forest,
    })
}

#[instrument(name = "cli.open_edge_list", fields(path = field::Empty))]
pub(super) fn open_edge_list_reader(path: &Path) -> Result<BufReader<File>, CliError> {
    Span::current().record("path", field::display(path.display()));
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

/// Logs a failed run at `ERROR` with its full cause chain.
///
/// Forest failures also carry their stable `code`, plus `graph_code` when a
/// graph operation was the cause.
pub fn report_failure(err: &anyhow::Error) {
    let (code, graph_code) = err
        .downcast_ref::<CliError>()
        .and_then(|cli_error| match cli_error {
            CliError::Forest(forest) => Some((Some(forest.code()), forest.graph_code())),
            _ => None,
        })
        .unwrap_or((None, None));

    let chain = format!("{err:#}");
    error!(
        error = %chain,
        code = code.map(|code| field::display(code.as_str())),
        graph_code = graph_code.map(|code| field::display(code.as_str())),
        "command execution failed"
    );
}

pub(super) fn derive_data_source_name(path: &Path, override_name: Option<&str>) -> String {
    if let Some(name) = override_name {
        return name.to_owned();
    }

    path.file_stem()
        .and_then(|value| value.to_str())
        .map(ToOwned::to_owned)
        .unwrap_or_else(|| "data_source".to_owned())
}

/// Renders the forest in `summary` to `writer`: one `[start]--(weight)--[end]`
/// line per accepted edge, then the edge count and the total weight.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use spanwood_cli::cli::{ExecutionSummary, render_summary};
/// # use spanwood_core::{Graph, minimum_spanning_forest};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let mut graph = Graph::undirected_labelled();
/// graph.add_node("A".to_owned());
/// graph.add_node("B".to_owned());
/// graph.add_edge("A".to_owned(), "B".to_owned(), Some(4.0))?;
/// let summary = ExecutionSummary {
///     data_source: "demo".into(),
///     records: 1,
///     duplicates: 0,
///     forest: minimum_spanning_forest(&graph)?,
/// };
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// assert_eq!(
///     String::from_utf8(buffer)?,
///     "[A]--(4)--[B]\nNumber of edges: 1\nTotal weight: 4\n"
/// );
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    for edge in summary.forest.edges() {
        writeln!(writer, "{edge}")?;
    }
    writeln!(writer, "Number of edges: {}", summary.forest.len())?;
    writeln!(writer, "Total weight: {}", summary.forest.total_weight())?;
    Ok(())
}
