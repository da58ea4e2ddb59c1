//! linkcount - count link symbols across a configured graph
//!
//! Usage:
//!   linkcount [CONFIG.json] [--shared-queue] [--json]
//!
//! Without a config path the built-in sample graph is used.
//! Logging goes to stderr and is controlled by RUST_LOG (default: info).

use std::path::PathBuf;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use linkcount::{GraphBuilder, GraphConfig, QueueMode, TraversalOptions};

struct Args {
    config: Option<PathBuf>,
    queue_mode: QueueMode,
    json: bool,
}

fn print_usage() {
    eprintln!("Usage: linkcount [CONFIG.json] [--shared-queue] [--json]");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  CONFIG.json      Graph configuration (default: built-in sample graph)");
    eprintln!("  --shared-queue   Let all workers share one work queue");
    eprintln!("  --json           Print the full report as JSON");
}

fn parse_args() -> Option<Args> {
    let mut args = Args {
        config: None,
        queue_mode: QueueMode::PerWorker,
        json: false,
    };

    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--shared-queue" => args.queue_mode = QueueMode::Shared,
            "--json" => args.json = true,
            "-h" | "--help" => return None,
            flag if flag.starts_with("--") => {
                eprintln!("[linkcount] Unknown option: {}", flag);
                return None;
            }
            path if args.config.is_none() => args.config = Some(PathBuf::from(path)),
            extra => {
                eprintln!("[linkcount] Unexpected argument: {}", extra);
                return None;
            }
        }
    }

    Some(args)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let Some(args) = parse_args() else {
        print_usage();
        std::process::exit(1);
    };

    let config = match &args.config {
        Some(path) => GraphConfig::load(path)
            .with_context(|| format!("Failed to load graph config {:?}", path))?,
        None => GraphConfig::sample(),
    };

    let graph = GraphBuilder::from_config(&config)
        .build()
        .context("Invalid graph config")?;

    let options = TraversalOptions {
        queue_mode: args.queue_mode,
    };
    let report = linkcount::run(&graph, &options)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for worker in &report.workers {
            tracing::info!(
                "worker {} (entry '{}'): claimed {}, skipped {}",
                worker.worker,
                worker.entry,
                worker.claimed,
                worker.skipped
            );
        }
        println!("counter: {}", report.counts);
    }

    Ok(())
}
