//! Reusable core-set buffers and the borrowed view visitors receive.

use std::alloc::{Layout, handle_alloc_error};

use argm_common::{NodeId, NodePair};

use crate::mapping::Mapping;
use crate::state::MatchState;

/// The two core-set buffers handed to visitors.
///
/// Sized once per search to `max(n1, n2)` and reused for every goal.
#[derive(Clone, Debug)]
pub struct MatchBuffers {
    pattern: Vec<NodeId>,
    target: Vec<NodeId>,
}

/// Reserves `len` ids or aborts the process.
///
/// Buffer exhaustion is the only failure the engine does not report through
/// its return values.
fn alloc_ids(len: usize) -> Vec<NodeId> {
    let mut ids = Vec::new();
    if ids.try_reserve_exact(len).is_err() {
        tracing::error!("cannot allocate match buffers for {} nodes", len);
        handle_alloc_error(
            Layout::array::<NodeId>(len).unwrap_or_else(|_| Layout::new::<NodeId>()),
        );
    }
    ids.resize(len, NodeId::default());
    ids
}

impl MatchBuffers {
    /// Allocates both buffers with `len` slots.
    #[must_use]
    pub fn with_len(len: usize) -> Self {
        Self {
            pattern: alloc_ids(len),
            target: alloc_ids(len),
        }
    }

    /// Allocates buffers large enough for any mapping reachable from `state`.
    #[must_use]
    pub fn for_state<S: MatchState>(state: &S) -> Self {
        Self::with_len(state.buffer_len())
    }

    /// Slots per buffer.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pattern.len()
    }

    /// Returns true for buffers sized for two empty graphs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pattern.is_empty()
    }

    /// Mutable access to both buffers at once.
    pub fn slices_mut(&mut self) -> (&mut [NodeId], &mut [NodeId]) {
        (&mut self.pattern, &mut self.target)
    }

    /// The first `len` entries of both buffers.
    #[must_use]
    pub fn view(&self, len: usize) -> MatchView<'_> {
        MatchView {
            pattern: &self.pattern[..len],
            target: &self.target[..len],
        }
    }

    /// Copies the core set of `state` in and views it.
    pub fn fill<S: MatchState>(&mut self, state: &S) -> MatchView<'_> {
        state.core_set(&mut self.pattern, &mut self.target);
        self.view(state.core_len())
    }
}

/// A completed mapping as seen by a visitor.
///
/// Borrows the search buffers: copy it out with [`MatchView::to_mapping`]
/// to keep it past the callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatchView<'a> {
    pattern: &'a [NodeId],
    target: &'a [NodeId],
}

impl<'a> MatchView<'a> {
    /// Pattern nodes; `pattern()[i]` maps to `target()[i]`.
    #[must_use]
    pub const fn pattern(&self) -> &'a [NodeId] {
        self.pattern
    }

    /// Target nodes, parallel to [`MatchView::pattern`].
    #[must_use]
    pub const fn target(&self) -> &'a [NodeId] {
        self.target
    }

    /// Number of mapped pairs.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.pattern.len()
    }

    /// Returns true for the match of an empty pattern.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.pattern.is_empty()
    }

    /// The mapping as pairs, in core-set order.
    pub fn pairs(self) -> impl ExactSizeIterator<Item = NodePair> + 'a {
        self.pattern
            .iter()
            .zip(self.target)
            .map(|(&p, &t)| NodePair::from((p, t)))
    }

    /// Owned copy of the mapping.
    #[must_use]
    pub fn to_mapping(self) -> Mapping {
        Mapping::from_pairs(self.pairs())
    }
}
