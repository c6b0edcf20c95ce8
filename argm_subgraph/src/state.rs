//! The partial-mapping contract consumed by the search engines.

use std::ops::Deref;

use argm_common::{NodeId, NodePair};

/// A checkpointable partial mapping between a pattern and a target graph.
///
/// The search engines only ever read a state they did not create. To try an
/// extension they clone it, call [`MatchState::add_pair`] on the clone and
/// later [`MatchState::backtrack`] it before discarding it; see [`Branch`].
///
/// Implementations own every feasibility and ordering decision:
/// - [`MatchState::next_pair`] defines exploration order and exhaustion,
/// - [`MatchState::is_feasible_pair`] defines which extensions are legal,
/// - [`MatchState::is_goal`] and [`MatchState::is_dead`] define completion
///   and pruning.
///
/// A clone must be independent of its source: extending the clone is never
/// observable through the original.
pub trait MatchState: Clone {
    /// True iff the partial mapping is complete.
    fn is_goal(&self) -> bool;

    /// True iff no goal is reachable by extending this partial mapping.
    fn is_dead(&self) -> bool;

    /// The next untried candidate after `prev`, or `None` once exhausted.
    ///
    /// `prev == None` requests the first candidate.
    fn next_pair(&self, prev: Option<NodePair>) -> Option<NodePair>;

    /// True iff adding `pair` keeps the mapping consistent.
    fn is_feasible_pair(&self, pair: NodePair) -> bool;

    /// Extends the mapping in place. Only defined for feasible pairs.
    fn add_pair(&mut self, pair: NodePair);

    /// Undoes the most recent [`MatchState::add_pair`].
    fn backtrack(&mut self);

    /// Number of pairs in the core set.
    fn core_len(&self) -> usize;

    /// Writes the core set into the two buffers, `pattern[i]` corresponding
    /// to `target[i]` for `i < core_len()`.
    fn core_set(&self, pattern: &mut [NodeId], target: &mut [NodeId]);

    /// Node counts of the pattern and target graphs.
    fn node_counts(&self) -> (usize, usize);

    /// Size that output buffers must have: the larger node count.
    fn buffer_len(&self) -> usize {
        let (pattern, target) = self.node_counts();
        pattern.max(target)
    }
}

/// A clone of a parent state extended by exactly one pair.
///
/// The branch owns its state; dropping it rolls the extension back and then
/// frees the clone, on every exit path including early termination.
#[derive(Debug)]
pub struct Branch<S: MatchState> {
    state: S,
}

impl<S: MatchState> Branch<S> {
    /// Clones `parent` and adds `pair` to the clone.
    pub fn extend(parent: &S, pair: NodePair) -> Self {
        let mut state = parent.clone();
        state.add_pair(pair);
        Self { state }
    }
}

impl<S: MatchState> Deref for Branch<S> {
    type Target = S;

    fn deref(&self) -> &S {
        &self.state
    }
}

impl<S: MatchState> Drop for Branch<S> {
    fn drop(&mut self) {
        self.state.backtrack();
    }
}
