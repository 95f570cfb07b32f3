//! `relkit`: classifies a binary relation and reports its lattice structure.
//!
//! The relation comes from a JSON document or from a generator:
//! - `--input <file>`: `{"nodes": [...], "relations": [[x, y], ...]}`
//! - `--divisors <n>`: the divisors of `n` under "divides"
//! - `--less-equal <n>`: `1..=n` under `<=`
//!
//! **Usage:**
//! ```text
//! relkit (--input <file> | --divisors <n> | --less-equal <n>)
//!        [--inverse] [--scope <a,b,...>] [--lenient] [--comparability]
//!        [--output <report.json>]
//! ```
//!
//! Logging is controlled by `RUST_LOG` (default `info`) and goes to stderr.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgGroup, Parser};
use relkit::combinatorics::divisors;
use relkit::graph::{generate_pairs, relation_from, Relation};
use relkit::TotalOrderMode;
use relkit_report::{analyze, to_json, AnalysisConfig, RelationInput, RelationReport};
use tracing_subscriber::EnvFilter;

/// Analyse a binary relation.
#[derive(Parser)]
#[command(
    name = "relkit",
    about = "Classify a binary relation and report its lattice structure"
)]
#[command(group(ArgGroup::new("source").required(true).args(["input", "divisors", "less_equal"])))]
struct Args {
    /// Relation document to analyse.
    #[arg(long)]
    input: Option<PathBuf>,

    /// Generate the divisibility order on the divisors of N.
    #[arg(long, value_name = "N")]
    divisors: Option<i64>,

    /// Generate the order `<=` on 1..=N.
    #[arg(long, value_name = "N")]
    less_equal: Option<i64>,

    /// Reverse every pair before analysing.
    #[arg(long)]
    inverse: bool,

    /// Restrict the analysis to these nodes.
    #[arg(long, value_delimiter = ',', num_args = 1..)]
    scope: Option<Vec<i64>>,

    /// Extract witnesses even when the property does not hold.
    #[arg(long)]
    lenient: bool,

    /// Use comparability instead of mutual relatedness for total orders.
    #[arg(long)]
    comparability: bool,

    /// Write the JSON report to this file.
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let graph = load(&args)?;
    let config = AnalysisConfig {
        strict: !args.lenient,
        total_order: if args.comparability {
            TotalOrderMode::Comparable
        } else {
            TotalOrderMode::Mutual
        },
    };

    let report = analyze(&graph, args.scope.as_deref(), &config)
        .context("Failed to analyse relation")?;
    print_summary(&report);

    if let Some(path) = &args.output {
        let json = to_json(&report)?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write report to {}", path.display()))?;
        tracing::info!(path = %path.display(), "wrote report");
    }
    Ok(())
}

fn load(args: &Args) -> Result<Relation<i64>> {
    if let Some(path) = &args.input {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let input = RelationInput::from_json(&text)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        return Ok(input.into_relation(args.inverse)?);
    }
    let (nodes, pairs) = if let Some(n) = args.divisors {
        let nodes: Vec<i64> = divisors(n)?.into_iter().collect();
        let pairs = generate_pairs(&nodes, |x, y| y % x == 0, args.inverse);
        (nodes, pairs)
    } else if let Some(n) = args.less_equal {
        let nodes: Vec<i64> = (1..=n).collect();
        let pairs = generate_pairs(&nodes, |x, y| x <= y, args.inverse);
        (nodes, pairs)
    } else {
        anyhow::bail!("one of --input, --divisors or --less-equal is required");
    };
    Ok(relation_from(nodes, pairs))
}

fn print_summary(report: &RelationReport) {
    println!("Relation Report");
    println!("===============");
    println!("nodes: {}", report.nodes.join(", "));
    println!();

    for (name, holds) in &report.relations_type {
        println!("[{}] {}", mark(*holds), name);
    }
    println!();
    for (name, holds) in report.lattice_flags() {
        println!("[{}] {}", mark(holds), name);
    }
    println!(
        "global bounds: {} .. {}",
        report.lattice.minimum.as_deref().unwrap_or("-"),
        report.lattice.maximum.as_deref().unwrap_or("-")
    );

    if !report.diagnostics.is_empty() {
        println!();
        for line in &report.diagnostics {
            println!("  note: {line}");
        }
    }
    println!();
    println!(
        "Summary: {} of {} properties hold",
        report.holding().len(),
        report.relations_type.len()
    );
}

fn mark(holds: bool) -> &'static str {
    if holds {
        "YES"
    } else {
        " no"
    }
}
