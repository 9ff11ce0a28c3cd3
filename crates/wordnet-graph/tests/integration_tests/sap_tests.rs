//! SAP queries over edge-list files.

use wordnet_graph::{GraphError, Sap};

use crate::common::fixtures::{DIGRAPH1, DIGRAPH1_ANSWERS, DIGRAPH2};
use crate::common::helpers::load_digraph;

#[test]
fn test_digraph1_known_answers() {
    println!("\n=== TEST: digraph1 known answers ===");

    let (graph, _dir) = load_digraph(DIGRAPH1);
    assert_eq!(graph.vertex_count(), 13);
    assert_eq!(graph.edge_count(), 11);

    let mut sap = Sap::new(graph);
    for &(v, w, length, ancestor) in DIGRAPH1_ANSWERS {
        let result = sap.query([v], [w]).expect("query failed");
        println!(
            "  length = {}, ancestor = {}",
            result.length_or_sentinel(),
            result.ancestor_or_sentinel()
        );
        assert_eq!(result.length_or_sentinel(), length, "length({}, {})", v, w);
        assert_eq!(result.ancestor_or_sentinel(), ancestor, "ancestor({}, {})", v, w);
    }

    println!("=== PASSED: digraph1 known answers ===\n");
}

#[test]
fn test_digraph2_cycle_is_queryable() {
    let (graph, _dir) = load_digraph(DIGRAPH2);
    let mut sap = Sap::new(graph);

    // 1 -> 0 and 5 -> 0 beat the long way round the cycle
    assert_eq!(sap.length(1, 5).unwrap(), Some(2));
    assert_eq!(sap.ancestor(1, 5).unwrap(), Some(0));

    // 2 reaches 4 directly; 4 is its own ancestor
    assert_eq!(sap.length(2, 4).unwrap(), Some(2));
    assert_eq!(sap.ancestor(2, 4).unwrap(), Some(4));

    // 0 is a sink: everything else reaches it, it reaches nothing
    assert_eq!(sap.length(0, 3).unwrap(), Some(3));
    assert_eq!(sap.ancestor(0, 3).unwrap(), Some(0));
}

#[test]
fn test_set_queries_on_digraph1() {
    let (graph, _dir) = load_digraph(DIGRAPH1);
    let mut sap = Sap::new(graph);

    // 11 -> 10 -> 5 and 9 -> 5; 7 -> 3 -> 1 is farther from both
    assert_eq!(sap.length_sets([7, 11], [9]).unwrap(), Some(3));
    assert_eq!(sap.ancestor_sets([7, 11], [9]).unwrap(), Some(5));

    // 12 and 10 share the ancestor 10 at distance 1
    assert_eq!(sap.length_sets([12, 2], [10, 6]).unwrap(), Some(1));
    assert_eq!(sap.ancestor_sets([12, 2], [10, 6]).unwrap(), Some(10));
}

#[test]
fn test_path_to_on_digraph1() {
    let (graph, _dir) = load_digraph(DIGRAPH1);
    let mut sap = Sap::new(graph);

    let path = sap.path_to([9], [12]).unwrap().expect("path exists");
    assert_eq!(path.ancestor, 5);
    assert_eq!(path.length, 3);
    assert_eq!(path.left, vec![9, 5]);
    assert_eq!(path.right, vec![12, 10, 5]);

    assert!(sap.path_to([1], [6]).unwrap().is_none());
}

#[test]
fn test_invalid_queries_leave_engine_usable() {
    let (graph, _dir) = load_digraph(DIGRAPH1);
    let mut sap = Sap::new(graph);

    assert!(matches!(
        sap.length(3, 13),
        Err(GraphError::VertexOutOfRange {
            vertex: 13,
            vertex_count: 13
        })
    ));
    let empty: Vec<usize> = Vec::new();
    assert!(matches!(
        sap.length_sets(empty, [1]),
        Err(GraphError::MissingInput(_))
    ));

    assert_eq!(sap.length(3, 11).unwrap(), Some(4));
}

#[test]
fn test_malformed_edge_list_file() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = crate::common::helpers::write_file(dir.path(), "bad.txt", "3\n2\n0 1\n");

    let err = wordnet_graph::Digraph::from_path(&path).unwrap_err();
    assert!(matches!(err, GraphError::Parse { .. }), "{:?}", err);
}
