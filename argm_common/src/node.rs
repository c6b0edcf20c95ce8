//! Node identifiers shared by graphs, states and match results.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Index of a node inside a single graph.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct NodeId(usize);

impl NodeId {
    /// Wraps a raw node index.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the raw node index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for NodeId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl From<NodeId> for usize {
    fn from(id: NodeId) -> Self {
        id.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A pattern node paired with a target node.
///
/// Used both for candidate extensions of a partial mapping and for entries
/// of a completed mapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodePair {
    /// Node of the first (pattern) graph.
    pub pattern: NodeId,
    /// Node of the second (target) graph.
    pub target: NodeId,
}

impl NodePair {
    /// Creates a pair from raw indices.
    #[must_use]
    pub const fn new(pattern: usize, target: usize) -> Self {
        Self {
            pattern: NodeId(pattern),
            target: NodeId(target),
        }
    }
}

impl From<(NodeId, NodeId)> for NodePair {
    fn from((pattern, target): (NodeId, NodeId)) -> Self {
        Self { pattern, target }
    }
}

impl fmt::Display for NodePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.pattern, self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_display_and_conversion() {
        let pair = NodePair::from((NodeId::new(2), NodeId::from(7)));
        assert_eq!(pair, NodePair::new(2, 7));
        assert_eq!(pair.to_string(), "2 -> 7");
        assert_eq!(usize::from(pair.target), 7);
    }

    #[test]
    fn node_id_serializes_as_plain_integer() {
        let json = serde_json::to_string(&NodeId::new(4)).unwrap();
        assert_eq!(json, "4");
    }
}
