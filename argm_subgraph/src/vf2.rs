//! VF2 partial-mapping state.
//!
//! One state type serves graph isomorphism, induced subgraph isomorphism and
//! monomorphism; the [`MatchKind`] selects the goal, dead and look-ahead
//! rules. Each side keeps depth-stamped terminal sets: `inn[v]`/`out[v]`
//! hold the core length at which `v` entered the in/out terminal set (or 0),
//! so rollback only has to clear the stamps equal to the current depth.

use std::fmt;

use contracts::*;
use thiserror::Error;

use argm_common::{MatchKind, NodeId, NodePair};
use argm_graph::Graph;

use crate::compat::{AttrCompat, IgnoreAttrs};
use crate::state::MatchState;

/// Errors raised when seeding a state with a fixed partial mapping.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SeedError {
    /// A seed pair names a node outside either graph.
    #[error("Seed pair {pair} is out of range")]
    OutOfRange {
        /// The rejected pair.
        pair: NodePair,
    },
    /// A seed pair reuses a node or violates compatibility.
    #[error("Seed pair {pair} is not feasible")]
    Infeasible {
        /// The rejected pair.
        pair: NodePair,
    },
}

/// Which terminal category the next pattern node is drawn from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Category {
    Both,
    Out,
    In,
    Any,
}

/// Per-graph bookkeeping.
#[derive(Clone, Debug, PartialEq, Eq)]
struct Side {
    core: Vec<Option<NodeId>>,
    inn: Vec<usize>,
    out: Vec<usize>,
    in_len: usize,
    out_len: usize,
    both_len: usize,
}

/// Neighbour tallies used by the look-ahead rule.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Tally {
    term_in: usize,
    term_out: usize,
    new: usize,
}

impl Tally {
    fn count(&mut self, side: &Side, node: NodeId) {
        let i = node.index();
        if side.inn[i] != 0 {
            self.term_in += 1;
        }
        if side.out[i] != 0 {
            self.term_out += 1;
        }
        if side.inn[i] == 0 && side.out[i] == 0 {
            self.new += 1;
        }
    }

    const fn total(&self) -> usize {
        self.term_in + self.term_out + self.new
    }
}

impl Side {
    fn new(nodes: usize) -> Self {
        Self {
            core: vec![None; nodes],
            inn: vec![0; nodes],
            out: vec![0; nodes],
            in_len: 0,
            out_len: 0,
            both_len: 0,
        }
    }

    fn partner(&self, node: NodeId) -> Option<NodeId> {
        self.core[node.index()]
    }

    fn eligible(&self, i: usize, category: Category) -> bool {
        self.core[i].is_none()
            && match category {
                Category::Both => self.inn[i] != 0 && self.out[i] != 0,
                Category::Out => self.out[i] != 0,
                Category::In => self.inn[i] != 0,
                Category::Any => true,
            }
    }

    fn mark_in(&mut self, node: NodeId, depth: usize) {
        let i = node.index();
        if self.inn[i] == 0 {
            self.inn[i] = depth;
            self.in_len += 1;
            if self.out[i] != 0 {
                self.both_len += 1;
            }
        }
    }

    fn mark_out(&mut self, node: NodeId, depth: usize) {
        let i = node.index();
        if self.out[i] == 0 {
            self.out[i] = depth;
            self.out_len += 1;
            if self.inn[i] != 0 {
                self.both_len += 1;
            }
        }
    }

    fn unmark(&mut self, node: NodeId, depth: usize) {
        let i = node.index();
        let was_both = self.inn[i] != 0 && self.out[i] != 0;
        let mut cleared = false;
        if self.inn[i] == depth {
            self.inn[i] = 0;
            self.in_len -= 1;
            cleared = true;
        }
        if self.out[i] == depth {
            self.out[i] = 0;
            self.out_len -= 1;
            cleared = true;
        }
        if was_both && cleared {
            self.both_len -= 1;
        }
    }

    #[debug_requires(self.core[node.index()].is_none(), "node already matched")]
    #[debug_ensures(self.both_len <= self.in_len.min(self.out_len))]
    fn extend<N, E>(&mut self, graph: &Graph<N, E>, node: NodeId, partner: NodeId, depth: usize) {
        self.core[node.index()] = Some(partner);
        self.mark_in(node, depth);
        self.mark_out(node, depth);
        for (pred, _) in graph.in_edges(node) {
            self.mark_in(pred, depth);
        }
        for (succ, _) in graph.out_edges(node) {
            self.mark_out(succ, depth);
        }
    }

    #[debug_requires(self.core[node.index()].is_some(), "node not matched")]
    #[debug_ensures(self.core[node.index()].is_none())]
    fn retract<N, E>(&mut self, graph: &Graph<N, E>, node: NodeId, depth: usize) {
        self.unmark(node, depth);
        for (pred, _) in graph.in_edges(node) {
            self.unmark(pred, depth);
        }
        for (succ, _) in graph.out_edges(node) {
            self.unmark(succ, depth);
        }
        self.core[node.index()] = None;
    }
}

/// VF2 state over a pattern graph and a target graph.
///
/// Cloning copies the bookkeeping vectors and shares the graphs.
pub struct Vf2State<'g, N, E, C = IgnoreAttrs> {
    pattern: &'g Graph<N, E>,
    target: &'g Graph<N, E>,
    compat: C,
    kind: MatchKind,
    s1: Side,
    s2: Side,
    /// Pairs in insertion order; the top is what `backtrack` undoes.
    trail: Vec<NodePair>,
}

impl<'g, N, E> Vf2State<'g, N, E, IgnoreAttrs> {
    /// Empty structural mapping between `pattern` and `target`.
    pub fn new(pattern: &'g Graph<N, E>, target: &'g Graph<N, E>, kind: MatchKind) -> Self {
        Self::with_compat(pattern, target, kind, IgnoreAttrs)
    }
}

impl<'g, N, E, C: AttrCompat<N, E> + Clone> Vf2State<'g, N, E, C> {
    /// Empty mapping that also checks attributes with `compat`.
    pub fn with_compat(
        pattern: &'g Graph<N, E>,
        target: &'g Graph<N, E>,
        kind: MatchKind,
        compat: C,
    ) -> Self {
        Self {
            pattern,
            target,
            compat,
            kind,
            s1: Side::new(pattern.node_count()),
            s2: Side::new(target.node_count()),
            trail: Vec::with_capacity(pattern.node_count().min(target.node_count())),
        }
    }

    /// Extends the state with fixed `seed` pairs, checking each one.
    ///
    /// # Errors
    /// Fails on the first pair that is out of range or infeasible.
    pub fn seeded(mut self, seed: &[NodePair]) -> Result<Self, SeedError> {
        for &pair in seed {
            if pair.pattern.index() >= self.pattern.node_count()
                || pair.target.index() >= self.target.node_count()
            {
                return Err(SeedError::OutOfRange { pair });
            }
            if self.s1.partner(pair.pattern).is_some()
                || self.s2.partner(pair.target).is_some()
                || !self.is_feasible_pair(pair)
            {
                return Err(SeedError::Infeasible { pair });
            }
            self.add_pair(pair);
        }
        Ok(self)
    }

    /// The kind of correspondence this state searches for.
    pub const fn kind(&self) -> MatchKind {
        self.kind
    }

    /// Pairs in the order they were added.
    pub fn trail(&self) -> &[NodePair] {
        &self.trail
    }

    /// Target node currently mapped to `node`, if any.
    pub fn target_of(&self, node: NodeId) -> Option<NodeId> {
        self.s1.partner(node)
    }

    fn category(&self) -> Category {
        let core_len = self.trail.len();
        let (s1, s2) = (&self.s1, &self.s2);
        if s1.both_len > core_len && s2.both_len > core_len {
            Category::Both
        } else if s1.out_len > core_len && s2.out_len > core_len {
            Category::Out
        } else if s1.in_len > core_len && s2.in_len > core_len {
            Category::In
        } else {
            Category::Any
        }
    }

    fn self_loops_agree(&self, n1: NodeId, n2: NodeId) -> bool {
        match (self.pattern.has_edge(n1, n1), self.target.has_edge(n2, n2)) {
            (Some(a1), Some(a2)) => self.compat.edges(a1, a2),
            (Some(_), None) => false,
            (None, Some(_)) => self.kind == MatchKind::Monomorphism,
            (None, None) => true,
        }
    }

    /// Checks edges between `n1` and the pattern core against the target
    /// and tallies the unmatched pattern neighbours.
    fn pattern_side(&self, n1: NodeId, n2: NodeId) -> Option<Tally> {
        let mut tally = Tally::default();
        for (other1, attr1) in self.pattern.out_edges(n1) {
            if other1 == n1 {
                continue;
            }
            match self.s1.partner(other1) {
                Some(other2) => {
                    let attr2 = self.target.has_edge(n2, other2)?;
                    if !self.compat.edges(attr1, attr2) {
                        return None;
                    }
                }
                None => tally.count(&self.s1, other1),
            }
        }
        for (other1, attr1) in self.pattern.in_edges(n1) {
            if other1 == n1 {
                continue;
            }
            match self.s1.partner(other1) {
                Some(other2) => {
                    let attr2 = self.target.has_edge(other2, n2)?;
                    if !self.compat.edges(attr1, attr2) {
                        return None;
                    }
                }
                None => tally.count(&self.s1, other1),
            }
        }
        Some(tally)
    }

    /// Mirror of [`Self::pattern_side`]. Monomorphisms do not require target
    /// edges to exist in the pattern.
    fn target_side(&self, n1: NodeId, n2: NodeId) -> Option<Tally> {
        let induced = self.kind != MatchKind::Monomorphism;
        let mut tally = Tally::default();
        for (other2, _) in self.target.out_edges(n2) {
            if other2 == n2 {
                continue;
            }
            match self.s2.partner(other2) {
                Some(other1) => {
                    if induced && self.pattern.has_edge(n1, other1).is_none() {
                        return None;
                    }
                }
                None => tally.count(&self.s2, other2),
            }
        }
        for (other2, _) in self.target.in_edges(n2) {
            if other2 == n2 {
                continue;
            }
            match self.s2.partner(other2) {
                Some(other1) => {
                    if induced && self.pattern.has_edge(other1, n1).is_none() {
                        return None;
                    }
                }
                None => tally.count(&self.s2, other2),
            }
        }
        Some(tally)
    }
}

impl<N, E, C: Clone> Clone for Vf2State<'_, N, E, C> {
    fn clone(&self) -> Self {
        Self {
            pattern: self.pattern,
            target: self.target,
            compat: self.compat.clone(),
            kind: self.kind,
            s1: self.s1.clone(),
            s2: self.s2.clone(),
            trail: self.trail.clone(),
        }
    }
}

impl<N, E, C> fmt::Debug for Vf2State<'_, N, E, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vf2State")
            .field("kind", &self.kind)
            .field("pattern_nodes", &self.pattern.node_count())
            .field("target_nodes", &self.target.node_count())
            .field("trail", &self.trail)
            .finish_non_exhaustive()
    }
}

impl<N, E, C> MatchState for Vf2State<'_, N, E, C>
where
    C: AttrCompat<N, E> + Clone,
{
    fn is_goal(&self) -> bool {
        let core_len = self.trail.len();
        core_len == self.pattern.node_count()
            && (self.kind != MatchKind::Isomorphism || core_len == self.target.node_count())
    }

    fn is_dead(&self) -> bool {
        let (s1, s2) = (&self.s1, &self.s2);
        let (n1, n2) = (self.pattern.node_count(), self.target.node_count());
        match self.kind {
            MatchKind::Isomorphism => {
                n1 != n2
                    || s1.both_len != s2.both_len
                    || s1.out_len != s2.out_len
                    || s1.in_len != s2.in_len
            }
            MatchKind::InducedSubgraph | MatchKind::Monomorphism => {
                n1 > n2
                    || s1.both_len > s2.both_len
                    || s1.out_len > s2.out_len
                    || s1.in_len > s2.in_len
            }
        }
    }

    fn next_pair(&self, prev: Option<NodePair>) -> Option<NodePair> {
        let (n1, n2) = (self.pattern.node_count(), self.target.node_count());
        let (mut p1, mut p2) = match prev {
            None => (0, 0),
            Some(pair) => (pair.pattern.index(), pair.target.index() + 1),
        };

        let category = self.category();
        while p1 < n1 && !self.s1.eligible(p1, category) {
            p1 += 1;
            p2 = 0;
        }
        while p2 < n2 && !self.s2.eligible(p2, category) {
            p2 += 1;
        }

        (p1 < n1 && p2 < n2).then(|| NodePair::new(p1, p2))
    }

    fn is_feasible_pair(&self, pair: NodePair) -> bool {
        let NodePair {
            pattern: n1,
            target: n2,
        } = pair;
        debug_assert!(self.s1.partner(n1).is_none() && self.s2.partner(n2).is_none());

        if !self
            .compat
            .nodes(self.pattern.node_attr(n1), self.target.node_attr(n2))
        {
            return false;
        }
        if !self.self_loops_agree(n1, n2) {
            return false;
        }

        let Some(t1) = self.pattern_side(n1, n2) else {
            return false;
        };
        let Some(t2) = self.target_side(n1, n2) else {
            return false;
        };

        match self.kind {
            MatchKind::Isomorphism => t1 == t2,
            MatchKind::InducedSubgraph => {
                t1.term_in <= t2.term_in && t1.term_out <= t2.term_out && t1.new <= t2.new
            }
            MatchKind::Monomorphism => {
                t1.term_in <= t2.term_in && t1.term_out <= t2.term_out && t1.total() <= t2.total()
            }
        }
    }

    fn add_pair(&mut self, pair: NodePair) {
        let depth = self.trail.len() + 1;
        self.s1.extend(self.pattern, pair.pattern, pair.target, depth);
        self.s2.extend(self.target, pair.target, pair.pattern, depth);
        self.trail.push(pair);
    }

    fn backtrack(&mut self) {
        let depth = self.trail.len();
        let Some(pair) = self.trail.pop() else {
            return;
        };
        self.s1.retract(self.pattern, pair.pattern, depth);
        self.s2.retract(self.target, pair.target, depth);
    }

    fn core_len(&self) -> usize {
        self.trail.len()
    }

    fn core_set(&self, pattern: &mut [NodeId], target: &mut [NodeId]) {
        debug_assert!(pattern.len() >= self.trail.len() && target.len() >= self.trail.len());
        let matched = self
            .s1
            .core
            .iter()
            .enumerate()
            .filter_map(|(i, partner)| partner.map(|p| (NodeId::new(i), p)));
        for (slot, (n1, n2)) in matched.enumerate() {
            pattern[slot] = n1;
            target[slot] = n2;
        }
    }

    fn node_counts(&self) -> (usize, usize) {
        (self.pattern.node_count(), self.target.node_count())
    }
}
