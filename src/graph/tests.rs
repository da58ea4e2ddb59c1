//! Scenario tests for concurrent link counting

use super::*;
use crate::config::GraphConfig;
use crate::error::GraphError;
use crate::shared::LinkCounts;

fn build(config: &GraphConfig) -> Graph {
    GraphBuilder::from_config(config).build().unwrap()
}

/// Sequential reference tally over everything reachable from the entry points
fn expected_counts(graph: &Graph) -> LinkCounts {
    let mut tally = std::collections::BTreeMap::<String, u64>::new();
    for id in graph.reachable_from(graph.entry_points()) {
        for symbol in graph.links(id) {
            *tally.entry(symbol.clone()).or_default() += 1;
        }
    }
    tally.into_iter().collect()
}

fn run_mode(graph: &Graph, queue_mode: QueueMode) -> TraversalReport {
    run(graph, &TraversalOptions { queue_mode }).unwrap()
}

const MODES: [QueueMode; 2] = [QueueMode::PerWorker, QueueMode::Shared];

/// Layered DAG where every node of a layer points at every node of the next
/// one, with one entry point per node of the first layer.
fn dense_layers(layers: usize, width: usize) -> GraphConfig {
    let name = |layer: usize, i: usize| format!("n{}_{}", layer, i);
    let mut config = GraphConfig::new();
    for layer in 0..layers {
        for i in 0..width {
            let edges: Vec<String> = if layer + 1 < layers {
                (0..width).map(|j| name(layer + 1, j)).collect()
            } else {
                // close the loop back to the top
                vec![name(0, i)]
            };
            let links = format!("{}{}", (b'A' + (i % 26) as u8) as char, (b'a' + (layer % 26) as u8) as char);
            config = config.node(name(layer, i), links, edges);
        }
    }
    for i in 0..width {
        config = config.entry(name(0, i));
    }
    config
}

// ============================================================================
// Fixed scenarios
// ============================================================================

mod scenario_tests {
    use super::*;

    #[test]
    fn test_four_node_tree() {
        let config = GraphConfig::new()
            .node("one", "ABC", ["two", "three"])
            .node("two", "BBA", ["four"])
            .node("three", "DEF", Vec::<String>::new())
            .node("four", "FHHG", Vec::<String>::new())
            .entry("one");
        let graph = build(&config);

        let expected: LinkCounts = [
            ("A", 2),
            ("B", 3),
            ("C", 1),
            ("D", 1),
            ("E", 1),
            ("F", 2),
            ("G", 1),
            ("H", 2),
        ]
        .into_iter()
        .collect();

        for mode in MODES {
            let report = run_mode(&graph, mode);
            assert_eq!(report.counts, expected, "mode {:?}", mode);
            assert_eq!(report.visited, 4);
            assert_eq!(report.workers.len(), 1);
            assert_eq!(report.workers[0].claimed, 4);
        }
    }

    #[test]
    fn test_sample_graph() {
        let graph = build(&GraphConfig::sample());
        let report = run_mode(&graph, QueueMode::PerWorker);

        assert_eq!(
            report.counts.to_string(),
            "A:8 B:7 C:1 D:2 E:1 F:2 G:1 H:2 J:1 K:2 O:1 S:1 V:1"
        );
        assert_eq!(report.counts.total(), 30);
        assert_eq!(report.visited, 9);
        assert_eq!(report.counts, expected_counts(&graph));
    }

    #[test]
    fn test_two_entries_share_downstream_node() {
        let config = GraphConfig::new()
            .node("left", "L", ["shared"])
            .node("right", "R", ["shared"])
            .node("shared", "XXY", Vec::<String>::new())
            .entry("left")
            .entry("right");
        let graph = build(&config);

        for mode in MODES {
            let report = run_mode(&graph, mode);
            assert_eq!(report.counts.to_string(), "L:1 R:1 X:2 Y:1");
            let claimed: usize = report.workers.iter().map(|w| w.claimed).sum();
            assert_eq!(claimed, 3);
        }
    }

    #[test]
    fn test_two_node_cycle_terminates() {
        let config = GraphConfig::new()
            .node("a", "PQ", ["b"])
            .node("b", "Q", ["a"])
            .entry("a");
        let graph = build(&config);

        for mode in MODES {
            let report = run_mode(&graph, mode);
            assert_eq!(report.counts.to_string(), "P:1 Q:2");
            assert_eq!(report.visited, 2);
        }
    }

    #[test]
    fn test_self_loop_and_duplicate_entry() {
        let config = GraphConfig::new()
            .node("loop", "Z", ["loop", "loop"])
            .entry("loop")
            .entry("loop");
        let graph = build(&config);

        let report = run_mode(&graph, QueueMode::PerWorker);
        assert_eq!(report.counts.get("Z"), 1);
        assert_eq!(report.workers.len(), 2);
        assert_eq!(report.workers.iter().map(|w| w.claimed).sum::<usize>(), 1);
    }

    #[test]
    fn test_unreachable_nodes_not_counted() {
        let config = GraphConfig::new()
            .node("start", "A", Vec::<String>::new())
            .node("island", "B", ["start"])
            .entry("start");
        let graph = build(&config);

        let report = run_mode(&graph, QueueMode::PerWorker);
        assert_eq!(report.counts.to_string(), "A:1");
        assert_eq!(report.visited, 1);
    }

    #[test]
    fn test_node_without_links() {
        let config = GraphConfig::new()
            .node("empty", "", ["leaf"])
            .node("leaf", "K", Vec::<String>::new())
            .entry("empty");
        let graph = build(&config);

        let report = run_mode(&graph, QueueMode::Shared);
        assert_eq!(report.counts.to_string(), "K:1");
        assert_eq!(report.visited, 2);
    }
}

// ============================================================================
// Concurrency properties
// ============================================================================

mod concurrency_tests {
    use super::*;

    #[test]
    fn test_repeated_runs_are_deterministic() {
        let graph = build(&GraphConfig::sample());
        let expected = expected_counts(&graph);

        for _ in 0..200 {
            for mode in MODES {
                assert_eq!(run_mode(&graph, mode).counts, expected);
            }
        }
    }

    #[test]
    fn test_dense_converging_edges_count_once() {
        let graph = build(&dense_layers(6, 12));
        let expected = expected_counts(&graph);
        assert_eq!(expected.total(), 6 * 12 * 2);

        for _ in 0..20 {
            for mode in MODES {
                let report = run_mode(&graph, mode);
                assert_eq!(report.counts, expected);
                assert_eq!(report.visited, 6 * 12);
                assert_eq!(report.workers.len(), 12);

                let claimed: usize = report.workers.iter().map(|w| w.claimed).sum();
                let links: usize = report.workers.iter().map(|w| w.links).sum();
                assert_eq!(claimed, 6 * 12);
                assert_eq!(links as u64, expected.total());
            }
        }
    }

    #[test]
    fn test_many_entries_into_one_chain() {
        let mut config = GraphConfig::new();
        for i in 0..50 {
            let next = if i + 1 < 50 { vec![format!("c{}", i + 1)] } else { vec!["c0".to_string()] };
            config = config.node(format!("c{}", i), "M", next);
        }
        for i in (0..50).step_by(5) {
            config = config.entry(format!("c{}", i));
        }
        let graph = build(&config);

        for mode in MODES {
            let report = run_mode(&graph, mode);
            assert_eq!(report.counts.get("M"), 50);
            assert_eq!(report.workers.len(), 10);
        }
    }
}

// ============================================================================
// Custom graph sources and failures
// ============================================================================

mod link_graph_tests {
    use super::*;

    /// Complete graph on `n` nodes, ids are plain indices
    struct Complete {
        ids: Vec<NodeId>,
        links: Vec<Vec<String>>,
        entries: Vec<NodeId>,
        panic_on: Option<NodeId>,
    }

    impl Complete {
        fn new(n: usize) -> Self {
            let ids: Vec<NodeId> = (0..n).map(NodeId::from_index).collect();
            Self {
                links: (0..n).map(|i| vec![format!("s{}", i % 3)]).collect(),
                entries: ids.clone(),
                ids,
                panic_on: None,
            }
        }
    }

    impl LinkGraph for Complete {
        fn links(&self, id: NodeId) -> &[String] {
            if self.panic_on == Some(id) {
                panic!("broken node {}", id);
            }
            &self.links[id.index()]
        }

        fn edges(&self, _id: NodeId) -> &[NodeId] {
            &self.ids
        }

        fn entry_points(&self) -> &[NodeId] {
            &self.entries
        }

        fn name(&self, _id: NodeId) -> &str {
            "complete"
        }

        fn node_count(&self) -> usize {
            self.ids.len()
        }
    }

    #[test]
    fn test_run_over_custom_graph() {
        let graph = Complete::new(30);
        for mode in MODES {
            let report = run(&graph, &TraversalOptions { queue_mode: mode }).unwrap();
            assert_eq!(report.counts.to_string(), "s0:10 s1:10 s2:10");
            assert_eq!(report.visited, 30);
        }
    }

    #[test]
    fn test_worker_panic_is_reported() {
        let mut graph = Complete::new(1);
        graph.panic_on = Some(NodeId::from_index(0));

        let err = run(&graph, &TraversalOptions::default()).unwrap_err();
        assert!(matches!(err, GraphError::WorkerPanicked { worker: 0 }));
    }
}
