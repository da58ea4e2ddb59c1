//! Basic usage example for linkcount
//!
//! Run: cargo run --example basic_usage

use linkcount::{GraphBuilder, GraphConfig, LinkGraph, QueueMode, TraversalOptions};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== linkcount - Basic Usage ===\n");

    println!("1. Describing graph...");
    let config = GraphConfig::new()
        .node("home", "ABC", ["docs", "blog"])
        .node("docs", "BBA", ["api"])
        .node("blog", "DEF", ["home"]) // cycle back to home
        .node("api", "FHHG", Vec::<String>::new())
        .node("status", "XA", ["api"])
        .entry("home")
        .entry("status");

    println!("2. Building graph...");
    let graph = GraphBuilder::from_config(&config).build()?;
    println!("   {} nodes, {} entry points", graph.node_count(), graph.entry_points().len());

    println!("3. Counting links (one worker per entry point)...");
    let report = linkcount::run(&graph, &TraversalOptions::default())?;
    for worker in &report.workers {
        println!(
            "   worker {} from '{}': claimed {}, skipped {}",
            worker.worker, worker.entry, worker.claimed, worker.skipped
        );
    }
    println!("   counts: {}", report.counts);

    println!("4. Same graph, shared queue...");
    let shared = linkcount::run(&graph, &TraversalOptions { queue_mode: QueueMode::Shared })?;
    assert_eq!(shared.counts, report.counts);
    println!("   counts: {}", shared.counts);

    println!("5. Rejecting a dangling edge...");
    let broken = GraphConfig::new().node("a", "A", ["missing"]).entry("a");
    match GraphBuilder::from_config(&broken).build() {
        Ok(_) => println!("   unexpectedly accepted"),
        Err(e) => println!("   error: {}", e),
    }

    println!("\n=== Done ===");
    Ok(())
}
