#![allow(dead_code)]

use std::sync::Once;

use itertools::Itertools;

use argm_common::{GraphSpec, MatchKind, NodeId, NodePair};
use argm_graph::Graph;
use argm_subgraph::Mapping;

static INIT: Once = Once::new();

/// Configures logging for the test runner.
pub fn setup_test_logging() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

pub fn graph_from_spec(spec: &GraphSpec) -> Graph {
    Graph::from_edges(spec.nodes, &spec.arcs()).expect("test graph specs are well formed")
}

/// Every mapping of `kind` found by trying all injections, sorted.
pub fn brute_force<N, E>(pattern: &Graph<N, E>, target: &Graph<N, E>, kind: MatchKind) -> Vec<Mapping> {
    let (n1, n2) = (pattern.node_count(), target.node_count());
    if n1 > n2 || (kind == MatchKind::Isomorphism && n1 != n2) {
        return Vec::new();
    }

    let mut found: Vec<Mapping> = (0..n2)
        .permutations(n1)
        .filter(|image| {
            (0..n1).cartesian_product(0..n1).all(|(u, v)| {
                let e1 = pattern.has_edge(NodeId::new(u), NodeId::new(v)).is_some();
                let e2 = target
                    .has_edge(NodeId::new(image[u]), NodeId::new(image[v]))
                    .is_some();
                match kind {
                    MatchKind::Isomorphism | MatchKind::InducedSubgraph => e1 == e2,
                    MatchKind::Monomorphism => !e1 || e2,
                }
            })
        })
        .map(|image| {
            Mapping::from_pairs(image.into_iter().enumerate().map(|(p, t)| NodePair::new(p, t)))
        })
        .collect();
    found.sort();
    found
}
