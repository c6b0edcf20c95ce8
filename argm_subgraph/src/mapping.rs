//! Owned match results.

use std::collections::HashSet;

use contracts::*;
use serde::Serialize;

use argm_common::{NodeId, NodePair};

/// A collection of mappings found during a search.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct MatchSet {
    /// Mappings in discovery order.
    pub items: Vec<Mapping>,
}

impl MatchSet {
    /// Creates a set from a list of mappings.
    #[must_use]
    pub const fn new(items: Vec<Mapping>) -> Self {
        Self { items }
    }

    /// Returns true if no matches were found.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the count of found matches.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    /// Mappings in discovery order.
    pub fn iter(&self) -> std::slice::Iter<'_, Mapping> {
        self.items.iter()
    }
}

impl IntoIterator for MatchSet {
    type Item = Mapping;
    type IntoIter = std::vec::IntoIter<Mapping>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a MatchSet {
    type Item = &'a Mapping;
    type IntoIter = std::slice::Iter<'a, Mapping>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// A complete correspondence between pattern and target nodes.
///
/// Pairs are kept in the order the state reported them, which for
/// [`crate::Vf2State`] is ascending pattern id.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Mapping {
    pairs: Vec<NodePair>,
}

impl Mapping {
    /// Checks that no pattern or target node appears twice.
    pub fn is_injective(&self) -> bool {
        let mut pattern = HashSet::with_capacity(self.pairs.len());
        let mut target = HashSet::with_capacity(self.pairs.len());
        self.pairs
            .iter()
            .all(|p| pattern.insert(p.pattern) && target.insert(p.target))
    }

    /// Collects `pairs` in the given order.
    #[debug_ensures(ret.is_injective())]
    pub fn from_pairs(pairs: impl IntoIterator<Item = NodePair>) -> Self {
        Self {
            pairs: pairs.into_iter().collect(),
        }
    }

    /// The pairs, in the order the state reported them.
    #[must_use]
    pub fn pairs(&self) -> &[NodePair] {
        &self.pairs
    }

    /// Number of mapped pattern nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns true for the mapping of an empty pattern.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Resolves a pattern node to its matched target node.
    #[must_use]
    pub fn target_of(&self, pattern: NodeId) -> Option<NodeId> {
        self.pairs
            .iter()
            .find(|p| p.pattern == pattern)
            .map(|p| p.target)
    }

    /// Resolves a target node back to the pattern node mapped onto it.
    #[must_use]
    pub fn pattern_of(&self, target: NodeId) -> Option<NodeId> {
        self.pairs
            .iter()
            .find(|p| p.target == target)
            .map(|p| p.pattern)
    }

    /// Sorted target nodes covered by this mapping.
    ///
    /// Mappings related by a pattern automorphism share a signature.
    #[must_use]
    pub fn target_signature(&self) -> Vec<NodeId> {
        let mut nodes: Vec<NodeId> = self.pairs.iter().map(|p| p.target).collect();
        nodes.sort_unstable();
        nodes
    }
}
