//! Ingestion contract tests across the public API.

use plexus_core::errors::IngestError;
use plexus_core::events::{EventDispatcher, LoadSource};
use plexus_core::types::EdgeId;
use plexus_graph::color::CategoryPalette;
use plexus_graph::ingest::{build_edge_graph, merge_node_attributes, IngestMode};
use plexus_graph::session::GraphSession;

fn build(text: &str, mode: IngestMode) -> Result<plexus_graph::ingest::GraphBuild, IngestError> {
    build_edge_graph(text, mode, LoadSource::Combined, &EventDispatcher::new())
}

#[test]
fn two_rows_three_nodes_two_edges() {
    let result = build("Source,Target\nA,B\nB,C", IngestMode::Combined).unwrap();
    let nodes: Vec<&str> = result.graph.node_ids().collect();
    assert_eq!(nodes, ["A", "B", "C"]);

    let edge_ids: Vec<String> = result.graph.edges().map(|e| e.id.to_string()).collect();
    assert_eq!(edge_ids, ["edge_0", "edge_1"]);
    assert_eq!(result.edge_meta.len(), 2);
}

#[test]
fn duplicate_rows_are_two_distinct_edges() {
    let result = build("Source,Target\nA,B\nA,B", IngestMode::Combined).unwrap();
    assert_eq!(result.graph.node_count(), 2);
    assert_eq!(result.graph.edge_count(), 2);
    assert!(result.edge_meta.contains_key(&EdgeId::new(0)));
    assert!(result.edge_meta.contains_key(&EdgeId::new(1)));
}

#[test]
fn blank_lines_are_ignored_without_warnings() {
    let result = build("Source,Target\n\nA,B\n   \nB,C\n", IngestMode::Combined).unwrap();
    assert_eq!(result.stats.edges, 2);
    assert_eq!(result.stats.rows_skipped, 0);
}

#[test]
fn commit_to_session_replaces_edge_meta_but_merges_node_meta() {
    let mut session = GraphSession::new(CategoryPalette::default());

    let first = build(
        "Source,Target,AffiliatedPapers\nA,B,p1|p2",
        IngestMode::Combined,
    )
    .unwrap();
    session.replace_graph(first.graph, first.edge_meta);
    merge_node_attributes(
        "Node,NodeType\nA,university",
        &mut session,
        &EventDispatcher::new(),
    )
    .unwrap();

    let meta = session.edge_metadata(EdgeId::new(0)).unwrap();
    assert_eq!(meta.papers.as_slice(), ["p1", "p2"]);

    // A second edge-bearing load rebuilds the universe from scratch.
    let second = build("Source,Target\nX,Y", IngestMode::Combined).unwrap();
    session.replace_graph(second.graph, second.edge_meta);

    assert!(session.graph().contains_node("X"));
    assert!(!session.graph().contains_node("A"));
    let meta = session.edge_metadata(EdgeId::new(0)).unwrap();
    assert!(meta.papers.is_empty());
    // The attribute map is never cleared.
    assert_eq!(
        session.node_attributes("A").unwrap().category.as_deref(),
        Some("university")
    );
}

#[test]
fn split_mode_fails_fast_without_mutation() {
    let err = build(
        "Source,Target,AffiliatedPapers\nA,B,p1",
        IngestMode::EdgeFile,
    )
    .unwrap_err();
    assert_eq!(
        err,
        IngestError::MissingRequiredColumn {
            column: "AffiliatedOrganizations".into()
        }
    );
}

#[test]
fn split_mode_weight_defaults_per_row() {
    let text = "Source,Target,AffiliatedPapers,AffiliatedOrganizations,AffiliatedOrganizationNames,EdgeWeight\n\
                A,B,p1,o1,Org One,5\n\
                B,C,p2,o2,Org Two,not-a-number";
    let result = build(text, IngestMode::EdgeFile).unwrap();
    assert_eq!(result.edge_meta[&EdgeId::new(0)].weight, Some(5.0));
    assert_eq!(result.edge_meta[&EdgeId::new(1)].weight, Some(1.0));
    assert_eq!(result.edge_meta[&EdgeId::new(1)].effective_weight(), 1.0);
}

#[test]
fn category_colors_are_deterministic_across_runs() {
    let text = "Node,NodeType\nA,alpha\nB,beta\nC,alpha\nD,gamma";
    let mut colors = Vec::new();
    for _ in 0..2 {
        let mut session = GraphSession::new(CategoryPalette::default());
        merge_node_attributes(text, &mut session, &EventDispatcher::new()).unwrap();
        colors.push([
            session.palette().get("alpha").map(str::to_string),
            session.palette().get("beta").map(str::to_string),
            session.palette().get("gamma").map(str::to_string),
        ]);
    }
    assert_eq!(colors[0], colors[1]);
    assert!(colors[0].iter().all(|c| c.is_some()));
}
