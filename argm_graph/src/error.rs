//! Error types for graph construction and loading.

use std::path::PathBuf;

use thiserror::Error;

use argm_common::NodeId;

/// Errors that can occur while building or loading a graph.
#[derive(Debug, Error)]
pub enum GraphError {
    /// The graph file could not be read.
    #[error("Failed to read graph file {path:?}: {source}")]
    Io {
        /// File that failed to load.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The input ended before the graph was complete.
    #[error("Unexpected end of input after line {line}")]
    UnexpectedEof {
        /// Last line that was read.
        line: usize,
    },

    /// A line could not be parsed.
    #[error("Parse error on line {line}: {message}")]
    Parse {
        /// 1-based line number.
        line: usize,
        /// What went wrong.
        message: String,
    },

    /// A node id appeared out of sequence.
    #[error("Line {line}: expected node {expected}, found {found}")]
    NodeOrder {
        /// 1-based line number.
        line: usize,
        /// The id the format requires at this point.
        expected: usize,
        /// The id that was read.
        found: usize,
    },

    /// An edge refers to a node that does not exist.
    #[error("Node {node} out of range for graph with {count} nodes")]
    NodeOutOfRange {
        /// Offending node id.
        node: NodeId,
        /// Number of nodes in the graph.
        count: usize,
    },

    /// The same arc was added twice.
    #[error("Duplicate edge {from} -> {to}")]
    DuplicateEdge {
        /// Source node.
        from: NodeId,
        /// Destination node.
        to: NodeId,
    },
}

impl GraphError {
    /// Create a parse error.
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }
}
