use std::path::PathBuf;

use clap::Parser;

use argm_common::*;

/// ARGM subgraph matcher - find a pattern graph inside a target graph
#[derive(Parser, Debug)]
#[command(name = "argm")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Graph to search in
    #[arg(short = 't', long)]
    pub target: PathBuf,

    /// Graph to search for; repeat to run several independent searches
    #[arg(short = 'p', long = "pattern", required = true)]
    pub patterns: Vec<PathBuf>,

    /// Kind of correspondence to look for
    #[arg(short = 'k', long, value_enum, default_value = "iso")]
    pub kind: KindArg,

    /// Enumeration engine
    #[arg(long, value_enum, default_value = "recursive")]
    pub strategy: StrategyArg,

    /// Stop at the first match
    #[arg(long, default_value_t = false)]
    pub first: bool,

    /// Stop after this many matches
    #[arg(long = "max")]
    pub max_matches: Option<usize>,

    /// Require node and edge attributes to be equal
    #[arg(long, default_value_t = false)]
    pub exact_attrs: bool,

    /// Report one match per set of covered target nodes
    #[arg(long, default_value_t = false)]
    pub dedupe: bool,

    /// Print results as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

impl Args {
    /// Convert command-line arguments into internal configuration
    pub fn to_config(&self) -> Config {
        let builder = Config::builder()
            .kind(self.kind.into())
            .strategy(self.strategy.into())
            .attrs(if self.exact_attrs {
                AttrPolicy::Exact
            } else {
                AttrPolicy::Ignore
            })
            .dedupe(if self.dedupe {
                Dedupe::TargetSet
            } else {
                Dedupe::None
            });

        match self.max_matches {
            Some(limit) => builder.max_matches(limit),
            None => builder.unlimited(),
        }
        .build()
    }
}

/// Command-line argument wrapper for MatchKind
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum KindArg {
    /// Graph isomorphism
    #[value(name = "iso")]
    Iso,
    /// Induced subgraph isomorphism
    #[value(name = "induced")]
    Induced,
    /// Subgraph monomorphism
    #[value(name = "mono")]
    Mono,
}

impl From<KindArg> for MatchKind {
    fn from(arg: KindArg) -> Self {
        match arg {
            KindArg::Iso => MatchKind::Isomorphism,
            KindArg::Induced => MatchKind::InducedSubgraph,
            KindArg::Mono => MatchKind::Monomorphism,
        }
    }
}

/// Command-line argument wrapper for SearchStrategy
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum StrategyArg {
    #[value(name = "recursive")]
    Recursive,
    #[value(name = "iterative")]
    Iterative,
}

impl From<StrategyArg> for SearchStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Recursive => SearchStrategy::Recursive,
            StrategyArg::Iterative => SearchStrategy::Iterative,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_map_to_default_config() {
        let args = Args::try_parse_from(["argm", "-t", "t.grf", "-p", "p.grf"]).unwrap();
        assert_eq!(args.to_config(), Config::default());
        assert_eq!(args.patterns, vec![PathBuf::from("p.grf")]);
    }

    #[test]
    fn flags_reach_the_config() {
        let args = Args::try_parse_from([
            "argm",
            "--target",
            "t.grf",
            "--pattern",
            "a.grf",
            "--pattern",
            "b.grf",
            "--kind",
            "mono",
            "--strategy",
            "iterative",
            "--max",
            "3",
            "--exact-attrs",
            "--dedupe",
        ])
        .unwrap();

        let config = args.to_config();
        assert_eq!(config.kind, MatchKind::Monomorphism);
        assert_eq!(config.strategy, SearchStrategy::Iterative);
        assert_eq!(config.attrs, AttrPolicy::Exact);
        assert_eq!(config.dedupe, Dedupe::TargetSet);
        assert_eq!(config.max_matches, Some(3));
        assert_eq!(args.patterns.len(), 2);
    }

    #[test]
    fn pattern_is_required() {
        assert!(Args::try_parse_from(["argm", "-t", "t.grf"]).is_err());
    }
}
