//! Common test cases and definitions for ARGM.
//!
//! This module defines small structural graphs (patterns and targets) with
//! known match counts, shared by the engine tests and benchmarks.

use crate::config::{Config, MatchKind};

/// An unattributed graph given as an arc list.
#[derive(Debug, Clone)]
pub struct GraphSpec {
    /// Short human readable name.
    pub name: &'static str,
    /// Number of nodes, ids `0..nodes`.
    pub nodes: usize,
    /// Edge list.
    pub edges: &'static [(usize, usize)],
    /// When true every edge stands for both arcs `a -> b` and `b -> a`.
    pub undirected: bool,
}

impl GraphSpec {
    /// Expands the edge list into directed arcs.
    pub fn arcs(&self) -> Vec<(usize, usize)> {
        if self.undirected {
            self.edges
                .iter()
                .flat_map(|&(a, b)| [(a, b), (b, a)])
                .collect()
        } else {
            self.edges.to_vec()
        }
    }
}

/// A complete test case definition.
#[derive(Debug, Clone)]
pub struct TestCase {
    /// The name of the test case.
    pub name: &'static str,
    /// The configuration for the search.
    pub config: Config,
    /// The graph to search for.
    pub pattern: &'static GraphSpec,
    /// The graph to search in.
    pub target: &'static GraphSpec,
    /// The expected number of matches.
    pub expected_matches: usize,
}

// #####################
// GRAPHS
// #####################
lazy_static::lazy_static! {
    pub static ref EDGE: GraphSpec = GraphSpec {
        name: "edge",
        nodes: 2,
        edges: &[(0, 1)],
        undirected: true,
    };
    pub static ref PATH3: GraphSpec = GraphSpec {
        name: "path3",
        nodes: 3,
        edges: &[(0, 1), (1, 2)],
        undirected: true,
    };
    pub static ref PATH4: GraphSpec = GraphSpec {
        name: "path4",
        nodes: 4,
        edges: &[(0, 1), (1, 2), (2, 3)],
        undirected: true,
    };
    pub static ref PATH5: GraphSpec = GraphSpec {
        name: "path5",
        nodes: 5,
        edges: &[(0, 1), (1, 2), (2, 3), (3, 4)],
        undirected: true,
    };
    pub static ref TRIANGLE: GraphSpec = GraphSpec {
        name: "triangle",
        nodes: 3,
        edges: &[(0, 1), (1, 2), (2, 0)],
        undirected: true,
    };
    pub static ref CYCLE4: GraphSpec = GraphSpec {
        name: "cycle4",
        nodes: 4,
        edges: &[(0, 1), (1, 2), (2, 3), (3, 0)],
        undirected: true,
    };
    pub static ref K4: GraphSpec = GraphSpec {
        name: "k4",
        nodes: 4,
        edges: &[(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)],
        undirected: true,
    };
    pub static ref STAR3: GraphSpec = GraphSpec {
        name: "star3",
        nodes: 4,
        edges: &[(0, 1), (0, 2), (0, 3)],
        undirected: true,
    };
    pub static ref STAR3_RELABELED: GraphSpec = GraphSpec {
        name: "star3_relabeled",
        nodes: 4,
        edges: &[(2, 0), (2, 1), (2, 3)],
        undirected: true,
    };
    pub static ref DI_CYCLE3: GraphSpec = GraphSpec {
        name: "di_cycle3",
        nodes: 3,
        edges: &[(0, 1), (1, 2), (2, 0)],
        undirected: false,
    };
    pub static ref DI_PATH3: GraphSpec = GraphSpec {
        name: "di_path3",
        nodes: 3,
        edges: &[(0, 1), (1, 2)],
        undirected: false,
    };
}

// #####################
// TEST CASES
// #####################
lazy_static::lazy_static! {
    pub static ref BASIC_TEST_CASES: Vec<TestCase> = vec![
        TestCase {
            name: "triangle_iso_triangle",
            config: Config::for_kind(MatchKind::Isomorphism),
            pattern: &TRIANGLE,
            target: &TRIANGLE,
            expected_matches: 6,
        },
        TestCase {
            name: "k4_iso_k4",
            config: Config::for_kind(MatchKind::Isomorphism),
            pattern: &K4,
            target: &K4,
            expected_matches: 24,
        },
        TestCase {
            name: "star3_iso_star3_relabeled",
            config: Config::for_kind(MatchKind::Isomorphism),
            pattern: &STAR3,
            target: &STAR3_RELABELED,
            expected_matches: 6,
        },
        TestCase {
            name: "path4_iso_cycle4",
            config: Config::for_kind(MatchKind::Isomorphism),
            pattern: &PATH4,
            target: &CYCLE4,
            expected_matches: 0,
        },
        TestCase {
            name: "triangle_iso_path3",
            config: Config::for_kind(MatchKind::Isomorphism),
            pattern: &TRIANGLE,
            target: &PATH3,
            expected_matches: 0,
        },
        TestCase {
            name: "di_cycle3_iso_di_cycle3",
            config: Config::for_kind(MatchKind::Isomorphism),
            pattern: &DI_CYCLE3,
            target: &DI_CYCLE3,
            expected_matches: 3,
        },
        TestCase {
            name: "path4_mono_cycle4",
            config: Config::for_kind(MatchKind::Monomorphism),
            pattern: &PATH4,
            target: &CYCLE4,
            expected_matches: 8,
        },
        TestCase {
            name: "path4_induced_cycle4",
            config: Config::for_kind(MatchKind::InducedSubgraph),
            pattern: &PATH4,
            target: &CYCLE4,
            expected_matches: 0,
        },
        TestCase {
            name: "path3_induced_cycle4",
            config: Config::for_kind(MatchKind::InducedSubgraph),
            pattern: &PATH3,
            target: &CYCLE4,
            expected_matches: 8,
        },
        TestCase {
            name: "path3_induced_path5",
            config: Config::for_kind(MatchKind::InducedSubgraph),
            pattern: &PATH3,
            target: &PATH5,
            expected_matches: 6,
        },
        TestCase {
            name: "path3_mono_path5",
            config: Config::for_kind(MatchKind::Monomorphism),
            pattern: &PATH3,
            target: &PATH5,
            expected_matches: 6,
        },
        TestCase {
            name: "edge_mono_triangle",
            config: Config::for_kind(MatchKind::Monomorphism),
            pattern: &EDGE,
            target: &TRIANGLE,
            expected_matches: 6,
        },
        TestCase {
            name: "triangle_mono_path3",
            config: Config::for_kind(MatchKind::Monomorphism),
            pattern: &TRIANGLE,
            target: &PATH3,
            expected_matches: 0,
        },
        TestCase {
            name: "di_path3_mono_di_cycle3",
            config: Config::for_kind(MatchKind::Monomorphism),
            pattern: &DI_PATH3,
            target: &DI_CYCLE3,
            expected_matches: 3,
        },
        TestCase {
            name: "di_path3_induced_di_cycle3",
            config: Config::for_kind(MatchKind::InducedSubgraph),
            pattern: &DI_PATH3,
            target: &DI_CYCLE3,
            expected_matches: 0,
        },
        TestCase {
            name: "triangle_mono_k4",
            config: Config::for_kind(MatchKind::Monomorphism),
            pattern: &TRIANGLE,
            target: &K4,
            expected_matches: 24,
        },
    ];
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(&EDGE, 2)]
    #[case(&TRIANGLE, 6)]
    #[case(&DI_CYCLE3, 3)]
    fn arcs_expand_undirected_edges(#[case] spec: &GraphSpec, #[case] expected: usize) {
        assert_eq!(spec.arcs().len(), expected);
    }

    #[test]
    fn case_names_are_unique() {
        let mut names: Vec<_> = BASIC_TEST_CASES.iter().map(|c| c.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), BASIC_TEST_CASES.len());
    }
}
