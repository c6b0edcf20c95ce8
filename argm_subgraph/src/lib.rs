//! Subgraph isomorphism search for attributed relational graphs.
//!
//! The engines in [`search`] explore any [`MatchState`]; [`Vf2State`] is the
//! built-in state implementing the VF2 rules for isomorphism, induced
//! subgraph isomorphism and monomorphism. [`SubgraphMatcher`] ties a state,
//! an engine and a [`Config`] together.

mod compat;
mod mapping;
pub mod search;
mod state;
mod vf2;

use std::collections::HashSet;
use std::ops::ControlFlow;

use argm_common::{Config, Dedupe, SearchStrategy};
use argm_graph::Graph;

pub use crate::compat::{AttrCompat, ExactAttrs, IgnoreAttrs, PolicyAttrs};
pub use crate::mapping::{Mapping, MatchSet};
pub use crate::search::{
    MatchBuffers, MatchView, find_first, first_match, visit_all, visit_all_iterative,
};
pub use crate::state::{Branch, MatchState};
pub use crate::vf2::{SeedError, Vf2State};

/// Runs one configured search between a pattern and a target graph.
pub struct SubgraphMatcher<'g, 'cfg, N, E> {
    pattern: &'g Graph<N, E>,
    target: &'g Graph<N, E>,
    config: &'cfg Config,
}

/// Logs each visited goal and breaks after `limit` of them.
fn bounded<F>(limit: Option<usize>, mut visitor: F) -> impl FnMut(MatchView<'_>) -> ControlFlow<()>
where
    F: FnMut(MatchView<'_>) -> ControlFlow<()>,
{
    let mut seen = 0usize;
    move |view| {
        seen += 1;
        tracing::debug!("match #{}: {} pairs", seen, view.len());
        visitor(view)?;
        match limit {
            Some(limit) if seen >= limit => ControlFlow::Break(()),
            _ => ControlFlow::Continue(()),
        }
    }
}

impl<'g, 'cfg, N, E> SubgraphMatcher<'g, 'cfg, N, E>
where
    N: PartialEq,
    E: PartialEq,
{
    /// Borrows both graphs and the configuration; no search runs yet.
    #[must_use]
    pub const fn new(pattern: &'g Graph<N, E>, target: &'g Graph<N, E>, config: &'cfg Config) -> Self {
        Self {
            pattern,
            target,
            config,
        }
    }

    /// Finds every match of `pattern` in `target` under `config`.
    pub fn enumerate_all(
        pattern: &'g Graph<N, E>,
        target: &'g Graph<N, E>,
        config: &'cfg Config,
    ) -> MatchSet {
        Self::new(pattern, target, config).enumerate()
    }

    /// Fresh search state for this pattern/target pair.
    #[must_use]
    pub fn state(&self) -> Vf2State<'g, N, E, PolicyAttrs> {
        Vf2State::with_compat(
            self.pattern,
            self.target,
            self.config.kind,
            PolicyAttrs(self.config.attrs),
        )
    }

    fn log_start(&self) {
        tracing::info!(
            "{} search: {}-node pattern, {}-node target, {:?} engine",
            self.config.kind,
            self.pattern.node_count(),
            self.target.node_count(),
            self.config.strategy
        );
    }

    fn run<F>(&self, visitor: F) -> usize
    where
        F: FnMut(MatchView<'_>) -> ControlFlow<()>,
    {
        let state = self.state();
        match self.config.strategy {
            SearchStrategy::Recursive => visit_all(&state, visitor),
            SearchStrategy::Iterative => visit_all_iterative(&state, visitor),
        }
    }

    /// The first match in enumeration order, or `None` when `max_matches`
    /// is `Some(0)`.
    pub fn first(&self) -> Option<Mapping> {
        if self.config.max_matches == Some(0) {
            return None;
        }
        self.log_start();
        let found = first_match(&self.state());
        tracing::info!("first match: {}", if found.is_some() { "found" } else { "none" });
        found
    }

    /// Calls `visitor` for each match, stopping early on `Break` or once
    /// `max_matches` matches have been visited. Returns the visit count.
    pub fn visit<F>(&self, visitor: F) -> usize
    where
        F: FnMut(MatchView<'_>) -> ControlFlow<()>,
    {
        if self.config.max_matches == Some(0) {
            return 0;
        }
        self.log_start();
        let visited = self.run(bounded(self.config.max_matches, visitor));
        tracing::info!("visited {} matches", visited);
        visited
    }

    /// Collects matches, collapsing them by target node set if configured.
    ///
    /// `max_matches` bounds the number of collected (post-dedupe) mappings.
    pub fn enumerate(&self) -> MatchSet {
        let limit = self.config.max_matches.unwrap_or(usize::MAX);
        let mut set = MatchSet::default();
        if limit == 0 {
            return set;
        }
        self.log_start();

        let dedupe = self.config.dedupe == Dedupe::TargetSet;
        let mut signatures = HashSet::new();
        let visited = self.run(bounded(None, |view| {
            let mapping = view.to_mapping();
            if dedupe && !signatures.insert(mapping.target_signature()) {
                tracing::trace!("dropping duplicate target set {:?}", mapping.target_signature());
                return ControlFlow::Continue(());
            }
            set.items.push(mapping);
            if set.len() >= limit {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        }));

        tracing::info!("collected {} of {} visited matches", set.len(), visited);
        set
    }

    /// Number of matches [`SubgraphMatcher::enumerate`] would return.
    pub fn count(&self) -> usize {
        match self.config.dedupe {
            Dedupe::None => self.visit(|_| ControlFlow::Continue(())),
            Dedupe::TargetSet => self.enumerate().len(),
        }
    }
}

/// Finds every match of `pattern` in `target` under `config`.
pub fn enumerate_all<N, E>(pattern: &Graph<N, E>, target: &Graph<N, E>, config: &Config) -> MatchSet
where
    N: PartialEq,
    E: PartialEq,
{
    SubgraphMatcher::enumerate_all(pattern, target, config)
}
