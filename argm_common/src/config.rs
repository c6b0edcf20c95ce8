//! Configuration for the graph matching search.
//!
//! This module exposes a small, stable surface for consumers (for example,
//! the `argm_subgraph` crate and the `argm` binary) to parameterize how
//! matching should behave.
//!
//! The main concepts are:
//! - kind: which correspondence is searched for (isomorphism, induced
//!   subgraph isomorphism, or monomorphism).
//! - strategy: recursive or explicit-stack enumeration. Both visit the same
//!   matches in the same order.
//! - attrs: whether node and edge attributes take part in compatibility.
//! - dedupe: how to collapse matches after search.
//!
//! Quick examples
//!
//! Induced subgraph search, stop after ten matches:
//! ```
//! use argm_common::Config;
//! let cfg = Config::builder().induced_subgraph().max_matches(10).build();
//! ```
//!
//! Monomorphism with attribute equality and automorphism collapse:
//! ```
//! use argm_common::Config;
//! let cfg = Config::builder().monomorphism().exact_attrs().dedupe_target_set().build();
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// The kind of structure-preserving correspondence to search for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchKind {
    /// Bijection preserving edges in both directions. Both graphs must have
    /// the same node count.
    #[default]
    Isomorphism,
    /// Injection of the pattern into the target preserving edges and
    /// non-edges among mapped nodes.
    InducedSubgraph,
    /// Injection of the pattern into the target preserving edges only.
    Monomorphism,
}

impl fmt::Display for MatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Isomorphism => "isomorphism",
            Self::InducedSubgraph => "induced-subgraph",
            Self::Monomorphism => "monomorphism",
        };
        f.write_str(name)
    }
}

/// Control flow used to enumerate matches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SearchStrategy {
    /// Depth-first search on the call stack.
    #[default]
    Recursive,
    /// Depth-first search on a heap-resident stack of frames.
    Iterative,
}

/// Whether node and edge attributes must agree for a pair to be compatible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttrPolicy {
    /// Attributes are ignored; only structure matters.
    #[default]
    Ignore,
    /// Node attributes and edge attributes must compare equal.
    Exact,
}

/// Control how matches are deduplicated.
///
/// - None:
///     Every mapping is reported, including those that differ only by an
///     automorphism of the pattern.
/// - TargetSet:
///     Two matches are considered the same if they cover the same SET of
///     target nodes, regardless of which pattern node maps to which.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dedupe {
    /// Keep every mapping.
    #[default]
    None,
    /// Collapse mappings that share the same covered target node set.
    TargetSet,
}

/// Global search configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Which correspondence to search for.
    pub kind: MatchKind,
    /// Which enumeration engine to use.
    pub strategy: SearchStrategy,
    /// How attributes take part in compatibility.
    pub attrs: AttrPolicy,
    /// How to deduplicate matches after search.
    pub dedupe: Dedupe,
    /// Stop the search after this many matches have been visited.
    pub max_matches: Option<usize>,
}

impl Config {
    /// Starts a builder with the default configuration.
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Convenience: default configuration for the given kind.
    #[must_use]
    pub fn for_kind(kind: MatchKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }
}

/// Chained builder for [`Config`].
#[derive(Clone, Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Sets the match kind.
    #[must_use]
    pub const fn kind(mut self, kind: MatchKind) -> Self {
        self.config.kind = kind;
        self
    }

    /// Search for graph isomorphisms.
    #[must_use]
    pub const fn isomorphism(self) -> Self {
        self.kind(MatchKind::Isomorphism)
    }

    /// Search for induced subgraph isomorphisms.
    #[must_use]
    pub const fn induced_subgraph(self) -> Self {
        self.kind(MatchKind::InducedSubgraph)
    }

    /// Search for monomorphisms.
    #[must_use]
    pub const fn monomorphism(self) -> Self {
        self.kind(MatchKind::Monomorphism)
    }

    /// Sets the search strategy.
    #[must_use]
    pub const fn strategy(mut self, strategy: SearchStrategy) -> Self {
        self.config.strategy = strategy;
        self
    }

    /// Use the recursive engine.
    #[must_use]
    pub const fn recursive(self) -> Self {
        self.strategy(SearchStrategy::Recursive)
    }

    /// Use the explicit-stack engine.
    #[must_use]
    pub const fn iterative(self) -> Self {
        self.strategy(SearchStrategy::Iterative)
    }

    /// Sets the attribute policy.
    #[must_use]
    pub const fn attrs(mut self, attrs: AttrPolicy) -> Self {
        self.config.attrs = attrs;
        self
    }

    /// Ignore node and edge attributes.
    #[must_use]
    pub const fn ignore_attrs(self) -> Self {
        self.attrs(AttrPolicy::Ignore)
    }

    /// Require node and edge attributes to compare equal.
    #[must_use]
    pub const fn exact_attrs(self) -> Self {
        self.attrs(AttrPolicy::Exact)
    }

    /// Sets the deduplication mode.
    #[must_use]
    pub const fn dedupe(mut self, dedupe: Dedupe) -> Self {
        self.config.dedupe = dedupe;
        self
    }

    /// Report every mapping.
    #[must_use]
    pub const fn dedupe_none(self) -> Self {
        self.dedupe(Dedupe::None)
    }

    /// Collapse mappings covering the same target node set.
    #[must_use]
    pub const fn dedupe_target_set(self) -> Self {
        self.dedupe(Dedupe::TargetSet)
    }

    /// Stop after `limit` visited matches.
    #[must_use]
    pub const fn max_matches(mut self, limit: usize) -> Self {
        self.config.max_matches = Some(limit);
        self
    }

    /// Removes any match limit.
    #[must_use]
    pub const fn unlimited(mut self) -> Self {
        self.config.max_matches = None;
        self
    }

    /// Finishes the builder.
    #[must_use]
    pub fn build(self) -> Config {
        tracing::debug!("built search config: {:?}", self.config);
        self.config
    }
}
