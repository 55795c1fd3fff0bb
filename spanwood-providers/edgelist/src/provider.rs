//! Edge-list provider implementation.
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use spanwood_core::Graph;
use tracing::{debug, info, instrument};

use crate::errors::EdgeListError;
use crate::record::EdgeRecord;

/// An undirected, weighted graph loaded from `from,to,weight` lines.
///
/// Nodes are added in the order they first appear. A record naming a pair
/// that is already connected is skipped and counted, whichever way round
/// the pair is written.
#[derive(Debug)]
pub struct EdgeListProvider {
    name: String,
    graph: Graph<String, f64>,
    records: usize,
    duplicates: usize,
}

impl EdgeListProvider {
    /// Returns the data source name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the loaded graph.
    #[must_use]
    pub const fn graph(&self) -> &Graph<String, f64> {
        &self.graph
    }

    /// Consumes the provider, returning the loaded graph.
    #[must_use]
    pub fn into_graph(self) -> Graph<String, f64> {
        self.graph
    }

    /// Returns the number of non-blank records read.
    #[must_use]
    pub const fn records(&self) -> usize {
        self.records
    }

    /// Returns how many records were skipped because their pair was already
    /// connected.
    #[must_use]
    pub const fn duplicates(&self) -> usize {
        self.duplicates
    }

    /// Loads an edge list from the file at `path`.
    ///
    /// # Errors
    /// Returns [`EdgeListError::Io`] when the file cannot be opened or read,
    /// and the errors of [`EdgeRecord::parse`] for malformed records.
    pub fn try_from_path(
        name: impl Into<String>,
        path: impl AsRef<Path>,
    ) -> Result<Self, EdgeListError> {
        let file = File::open(path)?;
        Self::try_from_reader(name, BufReader::new(file))
    }

    /// Loads an edge list from any buffered reader.
    ///
    /// # Examples
    /// ```
    /// use spanwood_providers_edgelist::EdgeListProvider;
    ///
    /// let input = "a,b,1\nb,c,2\n\nc,a,5\nb,a,7\n";
    /// let provider = EdgeListProvider::try_from_reader("demo", input.as_bytes())?;
    /// assert_eq!(provider.records(), 4);
    /// assert_eq!(provider.duplicates(), 1);
    /// assert_eq!(provider.graph().num_nodes(), 3);
    /// # Ok::<(), spanwood_providers_edgelist::EdgeListError>(())
    /// ```
    ///
    /// # Errors
    /// Returns [`EdgeListError::Io`] when reading fails and the errors of
    /// [`EdgeRecord::parse`] for malformed records.
    pub fn try_from_reader<R: BufRead>(
        name: impl Into<String>,
        reader: R,
    ) -> Result<Self, EdgeListError> {
        load(name.into(), reader)
    }
}

#[instrument(name = "edgelist.load", err, skip(reader, name), fields(data_source = %name))]
fn load<R: BufRead>(name: String, reader: R) -> Result<EdgeListProvider, EdgeListError> {
    let mut graph = Graph::undirected_labelled();
    let mut records = 0_usize;
    let mut duplicates = 0_usize;

    for (index, text) in reader.lines().enumerate() {
        let line = index.saturating_add(1);
        let Some(record) = EdgeRecord::parse(line, &text?)? else {
            continue;
        };
        records = records.saturating_add(1);

        let EdgeRecord { from, to, weight } = record;
        graph.add_node(from.clone());
        graph.add_node(to.clone());
        let inserted = graph
            .add_edge(from, to, Some(weight))
            .map_err(|source| EdgeListError::Graph { line, source })?;
        if !inserted {
            duplicates = duplicates.saturating_add(1);
            debug!(line, "skipping duplicate edge");
        }
    }

    info!(
        records,
        duplicates,
        nodes = graph.num_nodes(),
        "edge list loaded"
    );
    Ok(EdgeListProvider {
        name,
        graph,
        records,
        duplicates,
    })
}
