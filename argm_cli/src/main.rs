//! ARGM subgraph matcher CLI
//!
//! Loads a target graph and one or more pattern graphs in the line-oriented
//! text format and reports every match of each pattern in the target.

#[global_allocator]
/// Global allocator using jemalloc for better performance in parallel workloads.
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

mod args;
mod report;

use clap::Parser;
use rayon::prelude::*;
use tracing::info;

use args::Args;
use report::{LabeledGraph, Output, Report};

/// Executes the matcher.
///
/// Every pattern is an independent search; patterns run in parallel while
/// each search stays on one thread.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_thread_ids(true)
        .init();

    let args = Args::parse();
    let config = args.to_config();

    info!("Loading target: {:?}", args.target);
    let target = LabeledGraph::from_path(&args.target)?;
    let patterns = args
        .patterns
        .iter()
        .map(|path| LabeledGraph::from_path(path).map(|graph| (path, graph)))
        .collect::<Result<Vec<_>, _>>()?;

    info!("Searching {} pattern(s) with {:?}", patterns.len(), config);
    let reports = patterns
        .par_iter()
        .map(|(path, pattern)| Report::run(path, pattern, &target, &config, args.first))
        .collect::<Vec<_>>();

    if args.json {
        let output = Output {
            target: &args.target,
            config: &config,
            reports: &reports,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        for report in &reports {
            print!("{report}");
        }
    }

    Ok(())
}
