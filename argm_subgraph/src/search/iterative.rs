//! Enumeration on an explicit heap stack.
//!
//! Yields the same goals in the same order as [`super::visit_all`] without
//! growing the call stack with the mapping depth. Each frame remembers the
//! last candidate it descended into, so popping a finished child resumes the
//! sibling loop of its parent.

use std::ops::ControlFlow;

use argm_common::NodePair;

use super::buffers::{MatchBuffers, MatchView};
use super::next_feasible;
use crate::state::{Branch, MatchState};

/// The caller's state at the bottom of the stack, clones above it.
enum Level<'s, S: MatchState> {
    Root(&'s S),
    Child(Branch<S>),
}

impl<S: MatchState> Level<'_, S> {
    fn state(&self) -> &S {
        match self {
            Level::Root(state) => state,
            Level::Child(branch) => branch,
        }
    }
}

struct Frame<'s, S: MatchState> {
    level: Level<'s, S>,
    /// Candidate most recently descended into from this frame.
    cursor: Option<NodePair>,
}

/// Iterative counterpart of [`super::visit_all`].
pub fn visit_all_iterative<S, F>(state: &S, mut visitor: F) -> usize
where
    S: MatchState,
    F: FnMut(MatchView<'_>) -> ControlFlow<()>,
{
    let mut buffers = MatchBuffers::for_state(state);
    let mut visited = 0;
    let mut stack: Vec<Frame<'_, S>> = Vec::with_capacity(state.buffer_len() + 1);
    let mut entering = Some(Level::Root(state));

    loop {
        if let Some(level) = entering.take() {
            let current = level.state();
            if current.is_goal() {
                visited += 1;
                tracing::trace!("goal #{} at depth {}", visited, current.core_len());
                if visitor(buffers.fill(current)).is_break() {
                    drop(level);
                    // roll back innermost first
                    while stack.pop().is_some() {}
                    return visited;
                }
                continue;
            }
            if current.is_dead() {
                continue;
            }
            stack.push(Frame {
                level,
                cursor: None,
            });
        }

        let Some(frame) = stack.last_mut() else {
            break;
        };
        match next_feasible(frame.level.state(), frame.cursor) {
            Some(pair) => {
                frame.cursor = Some(pair);
                entering = Some(Level::Child(Branch::extend(frame.level.state(), pair)));
            }
            None => {
                stack.pop();
            }
        }
    }

    visited
}
