use std::slice;

use argm_common::NodeId;

use crate::builder::GraphBuilder;
use crate::error::GraphError;

/// Adjacency entry: the node at the other end and the edge it travels along.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Adjacent {
    pub(crate) node: NodeId,
    pub(crate) edge: usize,
}

/// A stored arc.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Edge<E> {
    pub(crate) from: NodeId,
    pub(crate) to: NodeId,
    pub(crate) attr: E,
}

/// Directed attributed relational graph.
///
/// Adjacency lists are sorted by neighbour id so edge lookup is a binary
/// search and neighbour iteration order is deterministic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Graph<N = (), E = ()> {
    nodes: Vec<N>,
    edges: Vec<Edge<E>>,
    out_adj: Vec<Vec<Adjacent>>,
    in_adj: Vec<Vec<Adjacent>>,
}

impl<N, E> Graph<N, E> {
    pub(crate) fn from_parts(nodes: Vec<N>, edges: Vec<Edge<E>>) -> Self {
        let mut out_adj = vec![Vec::new(); nodes.len()];
        let mut in_adj = vec![Vec::new(); nodes.len()];

        for (idx, edge) in edges.iter().enumerate() {
            out_adj[edge.from.index()].push(Adjacent {
                node: edge.to,
                edge: idx,
            });
            in_adj[edge.to.index()].push(Adjacent {
                node: edge.from,
                edge: idx,
            });
        }

        for list in out_adj.iter_mut().chain(in_adj.iter_mut()) {
            list.sort_unstable_by_key(|adj| adj.node);
        }

        Self {
            nodes,
            edges,
            out_adj,
            in_adj,
        }
    }

    /// Starts an empty builder.
    #[must_use]
    pub fn builder() -> GraphBuilder<N, E> {
        GraphBuilder::new()
    }

    /// Number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of arcs.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Iterates node ids in ascending order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(NodeId::new)
    }

    /// Attribute of `node`.
    ///
    /// # Panics
    /// Panics if `node` is not a node of this graph.
    #[must_use]
    pub fn node_attr(&self, node: NodeId) -> &N {
        &self.nodes[node.index()]
    }

    /// Attribute of the arc `from -> to`, if the arc exists.
    #[must_use]
    pub fn has_edge(&self, from: NodeId, to: NodeId) -> Option<&E> {
        let list = self.out_adj.get(from.index())?;
        list.binary_search_by_key(&to, |adj| adj.node)
            .ok()
            .map(|pos| &self.edges[list[pos].edge].attr)
    }

    /// Arcs leaving `node`, as `(successor, attr)`.
    ///
    /// # Panics
    /// Panics if `node` is not a node of this graph.
    #[must_use]
    pub fn out_edges(&self, node: NodeId) -> NeighborIter<'_, E> {
        NeighborIter {
            adj: self.out_adj[node.index()].iter(),
            edges: &self.edges,
        }
    }

    /// Arcs entering `node`, as `(predecessor, attr)`.
    ///
    /// # Panics
    /// Panics if `node` is not a node of this graph.
    #[must_use]
    pub fn in_edges(&self, node: NodeId) -> NeighborIter<'_, E> {
        NeighborIter {
            adj: self.in_adj[node.index()].iter(),
            edges: &self.edges,
        }
    }

    /// Number of arcs leaving `node`.
    ///
    /// # Panics
    /// Panics if `node` is not a node of this graph.
    #[must_use]
    pub fn out_degree(&self, node: NodeId) -> usize {
        self.out_adj[node.index()].len()
    }

    /// Number of arcs entering `node`.
    ///
    /// # Panics
    /// Panics if `node` is not a node of this graph.
    #[must_use]
    pub fn in_degree(&self, node: NodeId) -> usize {
        self.in_adj[node.index()].len()
    }

    /// All arcs in insertion order, as `(from, to, attr)`.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId, &E)> + '_ {
        self.edges.iter().map(|e| (e.from, e.to, &e.attr))
    }

    /// All node attributes in id order.
    pub fn node_attrs(&self) -> impl Iterator<Item = (NodeId, &N)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .map(|(idx, attr)| (NodeId::new(idx), attr))
    }
}

impl Graph {
    /// Builds an unattributed directed graph from an arc list.
    ///
    /// # Errors
    /// Fails on out-of-range endpoints and repeated arcs.
    pub fn from_edges(nodes: usize, arcs: &[(usize, usize)]) -> Result<Self, GraphError> {
        let mut builder = GraphBuilder::with_nodes(nodes);
        for &(a, b) in arcs {
            builder.add_edge(NodeId::new(a), NodeId::new(b), ())?;
        }
        Ok(builder.build())
    }

    /// Builds an unattributed graph where every edge becomes two arcs.
    ///
    /// # Errors
    /// Fails on out-of-range endpoints and repeated edges.
    pub fn undirected(nodes: usize, edges: &[(usize, usize)]) -> Result<Self, GraphError> {
        let mut builder = GraphBuilder::with_nodes(nodes);
        for &(a, b) in edges {
            builder.add_undirected_edge(NodeId::new(a), NodeId::new(b), ())?;
        }
        Ok(builder.build())
    }
}

/// Iterator over the neighbours of one node together with the edge attribute.
#[derive(Clone, Debug)]
pub struct NeighborIter<'g, E> {
    adj: slice::Iter<'g, Adjacent>,
    edges: &'g [Edge<E>],
}

impl<'g, E> Iterator for NeighborIter<'g, E> {
    type Item = (NodeId, &'g E);

    fn next(&mut self) -> Option<Self::Item> {
        self.adj
            .next()
            .map(|adj| (adj.node, &self.edges[adj.edge].attr))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.adj.size_hint()
    }
}

impl<E> ExactSizeIterator for NeighborIter<'_, E> {}
