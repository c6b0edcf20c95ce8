use std::collections::HashSet;

use argm_common::NodeId;

use crate::error::GraphError;
use crate::graph::{Edge, Graph};

/// Incremental graph constructor.
///
/// Checks endpoint ranges and rejects repeated arcs; [`GraphBuilder::build`]
/// freezes the result into an immutable [`Graph`].
#[derive(Clone, Debug)]
pub struct GraphBuilder<N = (), E = ()> {
    nodes: Vec<N>,
    edges: Vec<Edge<E>>,
    seen: HashSet<(NodeId, NodeId)>,
}

impl<N, E> Default for GraphBuilder<N, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N, E> GraphBuilder<N, E> {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            seen: HashSet::new(),
        }
    }

    /// Creates a builder with `count` default-attributed nodes.
    #[must_use]
    pub fn with_nodes(count: usize) -> Self
    where
        N: Default,
    {
        let mut builder = Self::new();
        builder.nodes.resize_with(count, N::default);
        builder
    }

    /// Number of nodes added so far.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Adds a node and returns its id.
    pub fn add_node(&mut self, attr: N) -> NodeId {
        self.nodes.push(attr);
        NodeId::new(self.nodes.len() - 1)
    }

    /// Adds the arc `from -> to`.
    ///
    /// # Errors
    /// Fails if either endpoint does not exist or the arc is already present.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, attr: E) -> Result<(), GraphError> {
        self.check_node(from)?;
        self.check_node(to)?;
        if !self.seen.insert((from, to)) {
            return Err(GraphError::DuplicateEdge { from, to });
        }
        self.edges.push(Edge { from, to, attr });
        Ok(())
    }

    /// Adds the arcs `a -> b` and `b -> a` with the same attribute.
    ///
    /// A self loop is added once.
    ///
    /// # Errors
    /// Same conditions as [`GraphBuilder::add_edge`].
    pub fn add_undirected_edge(&mut self, a: NodeId, b: NodeId, attr: E) -> Result<(), GraphError>
    where
        E: Clone,
    {
        if a != b {
            self.add_edge(b, a, attr.clone())?;
        }
        self.add_edge(a, b, attr)
    }

    fn check_node(&self, node: NodeId) -> Result<(), GraphError> {
        if node.index() < self.nodes.len() {
            Ok(())
        } else {
            Err(GraphError::NodeOutOfRange {
                node,
                count: self.nodes.len(),
            })
        }
    }

    /// Freezes the builder into a graph.
    #[must_use]
    pub fn build(self) -> Graph<N, E> {
        tracing::trace!(
            "building graph with {} nodes and {} arcs",
            self.nodes.len(),
            self.edges.len()
        );
        Graph::from_parts(self.nodes, self.edges)
    }
}
