use astar_engine::graph::{parse_edge_list, EdgeRecord, Graph, GraphStore, LoadOptions};
use astar_engine::Error;

const TRIANGLE: &str = "A B 1\nB C 2\nA C 4\n";

#[test]
fn test_parse_skips_comments_and_blank_lines() {
    let text = "# header comment\n\nA B 1\n   \n  # indented comment\nB C 2.5\n";
    let graph = parse_edge_list(text, LoadOptions::default()).unwrap();

    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.neighbors("A"), vec![("B", 1.0)]);
    assert_eq!(graph.neighbors("B"), vec![("C", 2.5)]);
}

#[test]
fn test_parse_accepts_any_whitespace() {
    let graph = parse_edge_list("A\tB   3\n  B C\t1e-1  \n", LoadOptions::default()).unwrap();
    assert_eq!(graph.edge_weight("A", "B"), Some(3.0));
    assert_eq!(graph.edge_weight("B", "C"), Some(0.1));
}

#[test]
fn test_destination_only_node_has_no_neighbors() {
    let graph = parse_edge_list(TRIANGLE, LoadOptions::default()).unwrap();

    assert!(graph.contains("C"));
    assert!(graph.neighbors("C").is_empty());
    assert!(!graph.contains("Z"));
    assert!(graph.neighbors("Z").is_empty());
}

#[test]
fn test_undirected_inserts_both_directions() {
    let graph = parse_edge_list(TRIANGLE, LoadOptions::undirected()).unwrap();

    assert_eq!(graph.edge_count(), 6);
    assert_eq!(graph.edge_weight("B", "A"), Some(1.0));
    assert_eq!(graph.edge_weight("C", "B"), Some(2.0));
    assert_eq!(graph.edge_weight("C", "A"), Some(4.0));
}

#[test]
fn test_neighbors_keep_insertion_order_and_parallel_edges() {
    let graph = parse_edge_list("A C 5\nA B 1\nA C 2\n", LoadOptions::default()).unwrap();

    assert_eq!(graph.neighbors("A"), vec![("C", 5.0), ("B", 1.0), ("C", 2.0)]);
    assert_eq!(graph.edge_weight("A", "C"), Some(2.0));
    assert_eq!(graph.nodes().collect::<Vec<_>>(), vec!["A", "C", "B"]);
}

#[test]
fn test_wrong_field_count_is_malformed() {
    let err = parse_edge_list("A B 1\nA B\n", LoadOptions::default()).unwrap_err();
    assert!(matches!(err, Error::MalformedEdge { line: 2, .. }), "got {:?}", err);

    let err = parse_edge_list("A B 1 extra\n", LoadOptions::default()).unwrap_err();
    assert!(matches!(err, Error::MalformedEdge { line: 1, .. }), "got {:?}", err);
}

#[test]
fn test_unparsable_weight_is_malformed() {
    let err = parse_edge_list("# c\nA B one\n", LoadOptions::default()).unwrap_err();
    match err {
        Error::MalformedEdge { line, reason } => {
            assert_eq!(line, 2);
            assert!(reason.contains("one"), "reason was {}", reason);
        }
        other => panic!("expected MalformedEdge, got {:?}", other),
    }
}

#[test]
fn test_negative_and_non_finite_weights_are_rejected() {
    for (text, line) in [("A B -1\n", 1), ("A B 1\nB C NaN\n", 2), ("A B inf\n", 1)] {
        let err = parse_edge_list(text, LoadOptions::default()).unwrap_err();
        assert!(
            matches!(err, Error::MalformedEdge { line: l, .. } if l == line),
            "{:?} gave {:?}",
            text,
            err
        );
    }
}

#[test]
fn test_build_from_records_reports_position() {
    let edges = vec![EdgeRecord::new("a", "b", 1.0), EdgeRecord::new("b", "c", -2.0)];
    let err = GraphStore::build(edges, false).unwrap_err();
    assert!(matches!(err, Error::MalformedEdge { line: 2, .. }));
}

#[test]
fn test_zero_weight_edges_are_allowed() {
    let graph = parse_edge_list("A B 0\nB A 0.0\n", LoadOptions::default()).unwrap();
    assert_eq!(graph.edge_weight("A", "B"), Some(0.0));
}

#[test]
fn test_edge_list_round_trip() {
    let graph = parse_edge_list(TRIANGLE, LoadOptions::undirected()).unwrap();

    let mut buffer = Vec::new();
    graph.write_edge_list(&mut buffer).unwrap();
    let text = String::from_utf8(buffer).unwrap();
    let reread = parse_edge_list(&text, LoadOptions::default()).unwrap();

    assert_eq!(reread.edge_count(), graph.edge_count());
    for from in graph.nodes() {
        assert_eq!(reread.neighbors(from), graph.neighbors(from));
    }
}

#[test]
fn test_empty_input_gives_empty_graph() {
    let graph = parse_edge_list("# nothing here\n\n", LoadOptions::default()).unwrap();
    assert_eq!(graph.node_count(), 0);
    assert_eq!(graph.edge_count(), 0);
}
