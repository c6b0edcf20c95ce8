//! Attributed relational graphs for the ARGM matcher.
//!
//! Graphs are directed, carry one attribute per node and per edge, and are
//! immutable once built. Every matching state shares them read-only.

mod builder;
mod error;
mod graph;
mod text;

pub use builder::GraphBuilder;
pub use error::GraphError;
pub use graph::{Graph, NeighborIter};

pub use argm_common::NodeId;
