//! Line-oriented text format.
//!
//! ```text
//! # comment lines and blank lines are ignored
//! 3            <- node count
//! 0 red        <- one line per node: id, optional attribute
//! 1 green
//! 2 blue
//! 1            <- number of arcs leaving node 0
//! 0 1 heavy    <- from, to, optional attribute
//! 1            <- arcs leaving node 1
//! 1 2
//! 0            <- arcs leaving node 2
//! ```
//!
//! Missing attributes parse as `Default::default()`; attributes run to the
//! end of the line.

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::{FromStr, Lines};

use argm_common::NodeId;

use crate::builder::GraphBuilder;
use crate::error::GraphError;
use crate::graph::Graph;

struct Reader<'a> {
    lines: std::iter::Enumerate<Lines<'a>>,
    line: usize,
}

impl<'a> Reader<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines().enumerate(),
            line: 0,
        }
    }

    fn next_line(&mut self) -> Result<(usize, &'a str), GraphError> {
        for (idx, raw) in self.lines.by_ref() {
            self.line = idx + 1;
            let trimmed = raw.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            return Ok((self.line, trimmed));
        }
        Err(GraphError::UnexpectedEof { line: self.line })
    }

    fn finish(mut self) -> Result<(), GraphError> {
        match self.next_line() {
            Ok((line, text)) => Err(GraphError::parse(line, format!("trailing content {text:?}"))),
            Err(GraphError::UnexpectedEof { .. }) => Ok(()),
            Err(err) => Err(err),
        }
    }
}

/// Splits off the leading token; the remainder keeps its interior spacing.
fn split_token(text: &str) -> (&str, Option<&str>) {
    match text.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, Some(rest.trim_start())),
        None => (text, None),
    }
}

fn parse_index(line: usize, token: &str, what: &str) -> Result<usize, GraphError> {
    token
        .parse()
        .map_err(|_| GraphError::parse(line, format!("invalid {what} {token:?}")))
}

fn parse_attr<T>(line: usize, rest: Option<&str>) -> Result<T, GraphError>
where
    T: FromStr + Default,
    T::Err: fmt::Display,
{
    match rest.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(T::default()),
        Some(text) => text
            .parse()
            .map_err(|e| GraphError::parse(line, format!("invalid attribute {text:?}: {e}"))),
    }
}

impl<N, E> Graph<N, E>
where
    N: FromStr + Default,
    N::Err: fmt::Display,
    E: FromStr + Default,
    E::Err: fmt::Display,
{
    /// Parses a graph from the text format described in this module.
    ///
    /// # Errors
    /// Returns the first malformed, out-of-order or inconsistent line.
    pub fn parse(text: &str) -> Result<Self, GraphError> {
        let mut reader = Reader::new(text);

        let (line, count) = reader.next_line()?;
        let node_count = parse_index(line, count, "node count")?;

        let mut builder = GraphBuilder::new();
        for expected in 0..node_count {
            let (line, text) = reader.next_line()?;
            let (id, attr) = split_token(text);
            let id = parse_index(line, id, "node id")?;
            if id != expected {
                return Err(GraphError::NodeOrder {
                    line,
                    expected,
                    found: id,
                });
            }
            builder.add_node(parse_attr(line, attr)?);
        }

        for from in 0..node_count {
            let (line, count) = reader.next_line()?;
            let arcs = parse_index(line, count, "edge count")?;
            for _ in 0..arcs {
                let (line, text) = reader.next_line()?;
                let (src, rest) = split_token(text);
                let Some((dst, attr)) = rest.map(split_token) else {
                    return Err(GraphError::parse(line, "expected `<from> <to> [attr]`"));
                };
                let src = parse_index(line, src, "source node")?;
                if src != from {
                    return Err(GraphError::NodeOrder {
                        line,
                        expected: from,
                        found: src,
                    });
                }
                let dst = parse_index(line, dst, "target node")?;
                let attr = parse_attr(line, attr)?;
                builder.add_edge(NodeId::new(src), NodeId::new(dst), attr)?;
            }
        }

        reader.finish()?;
        Ok(builder.build())
    }

    /// Reads and parses a graph file.
    ///
    /// # Errors
    /// Fails if the file cannot be read or does not parse.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, GraphError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| GraphError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let graph = Self::parse(&text)?;
        tracing::debug!(
            "loaded {:?}: {} nodes, {} arcs",
            path,
            graph.node_count(),
            graph.edge_count()
        );
        Ok(graph)
    }
}

impl<N, E> FromStr for Graph<N, E>
where
    N: FromStr + Default,
    N::Err: fmt::Display,
    E: FromStr + Default,
    E::Err: fmt::Display,
{
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn write_entry(f: &mut fmt::Formatter<'_>, head: &str, attr: &dyn fmt::Display) -> fmt::Result {
    let attr = attr.to_string();
    if attr.is_empty() {
        writeln!(f, "{head}")
    } else {
        writeln!(f, "{head} {attr}")
    }
}

impl<N: fmt::Display, E: fmt::Display> fmt::Display for Graph<N, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.node_count())?;
        for (id, attr) in self.node_attrs() {
            write_entry(f, &id.to_string(), attr)?;
        }
        for node in self.node_ids() {
            writeln!(f, "{}", self.out_degree(node))?;
            for (succ, attr) in self.out_edges(node) {
                write_entry(f, &format!("{node} {succ}"), attr)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const COLORED: &str = "\
# three coloured nodes
3
0 red
1 green
2 blue

1
0 1 heavy
1
1 2
0
";

    #[test]
    fn parses_attributes_and_defaults() {
        let g: Graph<String, String> = Graph::parse(COLORED).unwrap();
        assert_eq!(g.node_count(), 3);
        assert_eq!(g.node_attr(NodeId::new(2)), "blue");
        assert_eq!(
            g.has_edge(NodeId::new(0), NodeId::new(1)).map(String::as_str),
            Some("heavy")
        );
        assert_eq!(
            g.has_edge(NodeId::new(1), NodeId::new(2)).map(String::as_str),
            Some("")
        );
    }

    #[test]
    fn display_round_trips() {
        let g: Graph<String, String> = COLORED.parse().unwrap();
        let again: Graph<String, String> = g.to_string().parse().unwrap();
        assert_eq!(g, again);
    }

    #[test]
    fn numeric_attributes() {
        let g: Graph<u32, i64> = Graph::parse("2\n0 5\n1\n1\n0 1 -3\n0\n").unwrap();
        assert_eq!(*g.node_attr(NodeId::new(0)), 5);
        assert_eq!(*g.node_attr(NodeId::new(1)), 0);
        assert_eq!(g.has_edge(NodeId::new(0), NodeId::new(1)), Some(&-3));
    }

    #[rstest]
    #[case("2\n0\n1\n1\n0  1\n0\n", None)]
    #[case("2\n0\n1\n1\n0 \t1\n0\n", None)]
    #[case("2\n0\n1\n1\n0\t1   7\n0\n", Some(7))]
    #[case("2\n0   4\n1\n1\n0 1 \t 7\n0\n", Some(7))]
    fn tolerates_runs_of_whitespace(#[case] text: &str, #[case] attr: Option<u32>) {
        let g = Graph::<u32, u32>::parse(text).unwrap();
        assert_eq!(
            g.has_edge(NodeId::new(0), NodeId::new(1)),
            Some(&attr.unwrap_or_default())
        );
    }

    #[rstest]
    #[case("", "end of input")]
    #[case("x\n", "invalid node count")]
    #[case("2\n1\n0\n0\n0\n", "expected node 0")]
    #[case("2\n0\n1\n1\n1 0\n0\n", "expected node 0")]
    #[case("2\n0\n1\n1\n0 5\n0\n", "out of range")]
    #[case("2\n0\n1\n2\n0 1\n0 1\n0\n", "Duplicate edge")]
    #[case("1\n0\n0\n7\n", "trailing content")]
    #[case("1\n0 notanumber\n0\n", "invalid attribute")]
    #[case("2\n0\n1\n1\n0\n0\n", "expected `<from> <to> [attr]`")]
    fn rejects_malformed_input(#[case] text: &str, #[case] needle: &str) {
        let err = Graph::<u32, u32>::parse(text).unwrap_err();
        assert!(
            err.to_string().contains(needle),
            "error {err:?} does not mention {needle:?}"
        );
    }
}
