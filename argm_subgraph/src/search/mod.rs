//! Search engines over any [`MatchState`].
//!
//! Every engine treats the state it is given as read-only: extensions are
//! tried on [`Branch`] clones which roll themselves back when dropped. The
//! enumerators thread [`ControlFlow`] so a visitor's `Break` unwinds the
//! whole search at once.

mod buffers;
mod iterative;

use std::iter;
use std::ops::ControlFlow;

use contracts::*;

use argm_common::{NodeId, NodePair};

use crate::mapping::Mapping;
use crate::state::{Branch, MatchState};

pub use self::buffers::{MatchBuffers, MatchView};
pub use self::iterative::visit_all_iterative;

/// First feasible candidate after `prev`.
fn next_feasible<S: MatchState>(state: &S, mut prev: Option<NodePair>) -> Option<NodePair> {
    loop {
        let pair = state.next_pair(prev)?;
        if state.is_feasible_pair(pair) {
            return Some(pair);
        }
        tracing::trace!("pruned {} at depth {}", pair, state.core_len());
        prev = Some(pair);
    }
}

/// Feasible candidates of `state` in the order the state yields them.
fn candidates<S: MatchState>(state: &S) -> impl Iterator<Item = NodePair> + '_ {
    iter::successors(next_feasible(state, None), move |&pair| {
        next_feasible(state, Some(pair))
    })
}

/// Depth-first search for the first goal reachable from `state`.
///
/// On success the core set is written to `pattern`/`target` and its length
/// returned. Both buffers must hold at least [`MatchState::buffer_len`]
/// entries.
#[debug_requires(
    pattern.len() >= state.buffer_len() && target.len() >= state.buffer_len(),
    "match buffers must hold max(n1, n2) entries"
)]
pub fn find_first<S: MatchState>(
    state: &S,
    pattern: &mut [NodeId],
    target: &mut [NodeId],
) -> Option<usize> {
    if state.is_goal() {
        state.core_set(pattern, target);
        return Some(state.core_len());
    }
    if state.is_dead() {
        return None;
    }

    for pair in candidates(state) {
        let branch = Branch::extend(state, pair);
        if let Some(len) = find_first(&*branch, pattern, target) {
            return Some(len);
        }
    }
    None
}

/// [`find_first`] with internally allocated buffers.
pub fn first_match<S: MatchState>(state: &S) -> Option<Mapping> {
    let mut buffers = MatchBuffers::for_state(state);
    let (pattern, target) = buffers.slices_mut();
    let len = find_first(state, pattern, target)?;
    Some(buffers.view(len).to_mapping())
}

/// Visits every goal reachable from `state` until `visitor` breaks.
///
/// Returns the number of goals visited, including the one whose visit
/// returned `Break`.
pub fn visit_all<S, F>(state: &S, mut visitor: F) -> usize
where
    S: MatchState,
    F: FnMut(MatchView<'_>) -> ControlFlow<()>,
{
    let mut buffers = MatchBuffers::for_state(state);
    let mut visited = 0;
    // stop or exhaustion both end the search
    let _ = explore_all(state, &mut buffers, &mut visitor, &mut visited);
    visited
}

fn explore_all<S, F>(
    state: &S,
    buffers: &mut MatchBuffers,
    visitor: &mut F,
    visited: &mut usize,
) -> ControlFlow<()>
where
    S: MatchState,
    F: FnMut(MatchView<'_>) -> ControlFlow<()>,
{
    if state.is_goal() {
        *visited += 1;
        tracing::trace!("goal #{} at depth {}", visited, state.core_len());
        return visitor(buffers.fill(state));
    }
    if state.is_dead() {
        return ControlFlow::Continue(());
    }

    for pair in candidates(state) {
        let branch = Branch::extend(state, pair);
        explore_all(&*branch, buffers, visitor, visited)?;
    }
    ControlFlow::Continue(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vf2::Vf2State;
    use argm_common::MatchKind;
    use argm_graph::Graph;

    #[test]
    fn no_match_between_triangle_and_path() {
        let tri = Graph::undirected(3, &[(0, 1), (1, 2), (2, 0)]).unwrap();
        let path = Graph::undirected(3, &[(0, 1), (1, 2)]).unwrap();
        let st = Vf2State::new(&tri, &path, MatchKind::Isomorphism);

        assert_eq!(first_match(&st), None);
        let mut calls = 0;
        assert_eq!(
            visit_all(&st, |_| {
                calls += 1;
                ControlFlow::Continue(())
            }),
            0
        );
        assert_eq!(calls, 0);
    }

    #[test]
    fn first_match_is_identity_on_path() {
        let path = Graph::undirected(3, &[(0, 1), (1, 2)]).unwrap();
        let st = Vf2State::new(&path, &path, MatchKind::Isomorphism);
        let m = first_match(&st).unwrap();
        assert_eq!(
            m.pairs(),
            &[NodePair::new(0, 0), NodePair::new(1, 1), NodePair::new(2, 2)]
        );
    }

    #[test]
    fn break_stops_the_whole_search() {
        let k4 = Graph::undirected(4, &[(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]).unwrap();
        let st = Vf2State::new(&k4, &k4, MatchKind::Isomorphism);
        let mut seen = 0;
        let visited = visit_all(&st, |_| {
            seen += 1;
            if seen == 5 {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });
        assert_eq!(visited, 5);
        assert_eq!(seen, 5);
        assert_eq!(st.core_len(), 0);
    }

    #[test]
    fn seeded_search_keeps_the_seed() {
        let tri = Graph::undirected(3, &[(0, 1), (1, 2), (2, 0)]).unwrap();
        let st = Vf2State::new(&tri, &tri, MatchKind::Isomorphism)
            .seeded(&[NodePair::new(0, 1)])
            .unwrap();

        assert_eq!(visit_all(&st, |_| ControlFlow::Continue(())), 2);
        let m = first_match(&st).unwrap();
        assert_eq!(m.target_of(NodeId::new(0)), Some(NodeId::new(1)));
        assert_eq!(st.core_len(), 1);
    }

    #[test]
    fn empty_pattern_has_one_empty_match() {
        let empty = Graph::from_edges(0, &[]).unwrap();
        let st = Vf2State::new(&empty, &empty, MatchKind::Isomorphism);
        let mut sizes = Vec::new();
        let visited = visit_all(&st, |m| {
            sizes.push(m.len());
            ControlFlow::Continue(())
        });
        assert_eq!(visited, 1);
        assert_eq!(sizes, vec![0]);
    }
}
