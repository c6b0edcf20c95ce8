//! Integration tests for loading graphs from disk.

use std::io::Write;
use std::path::PathBuf;

use argm_graph::{Graph, GraphBuilder, GraphError, NodeId};
use quickcheck::{Arbitrary, Gen, quickcheck};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn loads_fixture_file() {
    let g: Graph<String, String> = Graph::from_path(fixture("molecule.grf")).unwrap();
    assert_eq!(g.node_count(), 4);
    assert_eq!(g.edge_count(), 6);
    assert_eq!(g.node_attr(NodeId::new(1)), "O");
    assert_eq!(
        g.has_edge(NodeId::new(1), NodeId::new(0)).map(String::as_str),
        Some("double")
    );
    assert_eq!(g.in_degree(NodeId::new(0)), 3);
}

#[test]
fn loads_from_temp_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "2\n0\n1\n1\n0 1\n1\n1 0").unwrap();

    let g: Graph<String, String> = Graph::from_path(file.path()).unwrap();
    assert!(g.has_edge(NodeId::new(0), NodeId::new(1)).is_some());
    assert!(g.has_edge(NodeId::new(1), NodeId::new(0)).is_some());
}

#[test]
fn missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.grf");
    let err = Graph::<String, String>::from_path(&path).unwrap_err();
    match err {
        GraphError::Io { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("unexpected error {other:?}"),
    }
}

#[derive(Clone, Debug)]
struct SmallGraph(Graph<u8, u8>);

impl Arbitrary for SmallGraph {
    fn arbitrary(g: &mut Gen) -> Self {
        let nodes = usize::arbitrary(g) % 6;
        let mut builder = GraphBuilder::new();
        for _ in 0..nodes {
            builder.add_node(u8::arbitrary(g));
        }
        if nodes > 0 {
            for _ in 0..usize::arbitrary(g) % 12 {
                let a = NodeId::new(usize::arbitrary(g) % nodes);
                let b = NodeId::new(usize::arbitrary(g) % nodes);
                // duplicates are rejected
                let _ = builder.add_edge(a, b, u8::arbitrary(g));
            }
        }
        Self(builder.build())
    }
}

quickcheck! {
    fn prop_text_round_trip(g: SmallGraph) -> bool {
        let text = g.0.to_string();
        let back: Graph<u8, u8> = text.parse().unwrap();
        back.node_count() == g.0.node_count()
            && back.edge_count() == g.0.edge_count()
            && g.0.edges().all(|(a, b, attr)| back.has_edge(a, b) == Some(attr))
            && g.0.node_attrs().all(|(n, attr)| back.node_attr(n) == attr)
    }
}
