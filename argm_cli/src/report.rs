use std::fmt;
use std::path::{Path, PathBuf};

use itertools::Itertools;
use serde::Serialize;

use argm_common::Config;
use argm_graph::Graph;
use argm_subgraph::{MatchSet, SubgraphMatcher};

/// Graphs as loaded from disk: free-form text attributes.
pub type LabeledGraph = Graph<String, String>;

/// Matches of one pattern file in the target.
#[derive(Debug, Serialize)]
pub struct Report {
    /// Pattern file the matches belong to.
    pub pattern: PathBuf,
    /// Matches in discovery order.
    pub matches: MatchSet,
}

impl Report {
    /// Runs the configured search for one pattern.
    pub fn run(
        path: &Path,
        pattern: &LabeledGraph,
        target: &LabeledGraph,
        config: &Config,
        first_only: bool,
    ) -> Self {
        let matcher = SubgraphMatcher::new(pattern, target, config);
        let matches = if first_only {
            MatchSet::new(matcher.first().into_iter().collect())
        } else {
            matcher.enumerate()
        };
        tracing::info!("{:?}: {} matches", path, matches.len());
        Self {
            pattern: path.to_path_buf(),
            matches,
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}: {} matches", self.pattern.display(), self.matches.len())?;
        for (i, mapping) in self.matches.iter().enumerate() {
            writeln!(f, "  #{i}: {}", mapping.pairs().iter().join(", "))?;
        }
        Ok(())
    }
}

/// Everything printed by `--json`.
#[derive(Debug, Serialize)]
pub struct Output<'a> {
    /// Target graph file.
    pub target: &'a Path,
    /// Configuration every pattern ran with.
    pub config: &'a Config,
    /// One report per pattern, in command-line order.
    pub reports: &'a [Report],
}
