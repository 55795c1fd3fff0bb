//! Tests covering edge-list parsing and graph ingestion.
use std::io::Write;

use rstest::rstest;
use spanwood_core::minimum_spanning_forest;
use spanwood_test_support::tracing::RecordingLayer;
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;

use super::{EdgeListError, EdgeListProvider, EdgeRecord};

#[rstest]
#[case::plain("A,B,1", "A", "B", 1.0)]
#[case::padded("  Faro ,  Lagos,  0.5  ", "Faro", "Lagos", 0.5)]
#[case::negative("x,y,-3e2", "x", "y", -300.0)]
#[case::self_loop("n,n,4", "n", "n", 4.0)]
fn parses_records(#[case] text: &str, #[case] from: &str, #[case] to: &str, #[case] weight: f64) {
    let record = EdgeRecord::parse(1, text)
        .expect("record is well formed")
        .expect("record is not blank");
    assert_eq!(record.from, from);
    assert_eq!(record.to, to);
    assert_eq!(record.weight, weight);
}

#[rstest]
#[case::empty("")]
#[case::spaces("    ")]
#[case::carriage_return("\r")]
fn blank_lines_yield_nothing(#[case] text: &str) {
    assert_eq!(EdgeRecord::parse(3, text).expect("blank lines are fine"), None);
}

#[rstest]
#[case::too_few("A,B", 2)]
#[case::too_many("A,B,1,2", 4)]
#[case::no_commas("just words", 1)]
fn rejects_wrong_field_count(#[case] text: &str, #[case] found: usize) {
    let err = EdgeRecord::parse(7, text).expect_err("field count is wrong");
    assert!(matches!(err, EdgeListError::FieldCount { line: 7, found: f } if f == found));
    assert_eq!(err.line(), Some(7));
}

#[rstest]
#[case::from(" ,B,1")]
#[case::to("A,,1")]
fn rejects_empty_node_names(#[case] text: &str) {
    let err = EdgeRecord::parse(2, text).expect_err("node name is empty");
    assert!(matches!(err, EdgeListError::EmptyNode { line: 2 }));
}

#[rstest]
#[case::word("A,B,far")]
#[case::blank("A,B,")]
fn rejects_unparsable_weights(#[case] text: &str) {
    let err = EdgeRecord::parse(4, text).expect_err("weight is not a number");
    assert!(matches!(err, EdgeListError::InvalidWeight { line: 4, .. }));
}

#[rstest]
#[case::nan("A,B,NaN")]
#[case::infinity("A,B,inf")]
#[case::negative_infinity("A,B,-infinity")]
fn rejects_non_finite_weights(#[case] text: &str) {
    let err = EdgeRecord::parse(5, text).expect_err("weight is not finite");
    assert!(matches!(err, EdgeListError::NonFiniteWeight { line: 5, .. }));
}

#[rstest]
fn loads_graph_in_first_seen_order() {
    let input = "Lisbon,Porto,313\nPorto,Braga,55\n\nLisbon,Faro,278\n";
    let provider = EdgeListProvider::try_from_reader("portugal", input.as_bytes())
        .expect("input is well formed");

    assert_eq!(provider.name(), "portugal");
    assert_eq!(provider.records(), 3);
    assert_eq!(provider.duplicates(), 0);

    let graph = provider.graph();
    assert!(!graph.is_directed());
    assert!(graph.is_labelled());
    let nodes: Vec<&str> = graph.nodes().map(String::as_str).collect();
    assert_eq!(nodes, vec!["Lisbon", "Porto", "Braga", "Faro"]);
    assert_eq!(graph.label("Braga", "Porto"), Ok(Some(&55.0)));
}

#[rstest]
#[case::same_direction("A,B,1\nA,B,9\n")]
#[case::reversed("A,B,1\nB,A,9\n")]
fn duplicate_pairs_keep_first_weight(#[case] input: &str) {
    let provider =
        EdgeListProvider::try_from_reader("dupes", input.as_bytes()).expect("input is well formed");
    assert_eq!(provider.records(), 2);
    assert_eq!(provider.duplicates(), 1);
    assert_eq!(provider.graph().label("A", "B"), Ok(Some(&1.0)));
}

#[rstest]
fn errors_report_the_physical_line() {
    let input = "A,B,1\n\nB,C,lots\n";
    let err = EdgeListProvider::try_from_reader("bad", input.as_bytes())
        .expect_err("third line is malformed");
    assert_eq!(err.line(), Some(3));
    assert_eq!(err.to_string(), "line 3: weight `lots` is not a number");
}

#[rstest]
fn loads_from_path() -> anyhow::Result<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    writeln!(file, "A,B,4")?;
    writeln!(file, "C,D,7")?;
    file.flush()?;

    let provider = EdgeListProvider::try_from_path("file", file.path())?;
    let forest = minimum_spanning_forest(provider.graph())?;
    assert_eq!(forest.total_weight(), 11.0);
    assert_eq!(forest.component_count(), 2);
    assert_eq!(provider.into_graph().num_nodes(), 4);
    Ok(())
}

#[rstest]
fn missing_file_is_an_io_error() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let err = EdgeListProvider::try_from_path("missing", dir.path().join("absent.csv"))
        .expect_err("file does not exist");
    assert!(matches!(err, EdgeListError::Io(_)));
    assert_eq!(err.line(), None);
    Ok(())
}

#[rstest]
fn load_is_instrumented() {
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());
    let input = "A,B,1\nB,A,2\n";

    let provider = tracing::subscriber::with_default(subscriber, || {
        EdgeListProvider::try_from_reader("traced", input.as_bytes())
    })
    .expect("input is well formed");
    assert_eq!(provider.duplicates(), 1);

    let span = layer.span("edgelist.load").expect("edgelist.load span must exist");
    assert_eq!(span.field("data_source"), Some("traced"));
    assert!(layer.has_event(Level::DEBUG, "skipping duplicate edge"));
    assert!(layer.has_event(Level::INFO, "edge list loaded"));
}
