//! Configuration files driving the engine

use graphwalk::config::CONFIG_FORMAT_VERSION;
use graphwalk::graph::{MstMethod, TopoMethod};
use graphwalk::{Engine, EngineConfig, Graph, GraphError, TraversalOrder};
use std::fs;
use tempfile::tempdir;

#[test]
fn config_file_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("graphwalk.toml");

    let mut config = EngineConfig::default();
    config.traversal.order = TraversalOrder::DepthFirst;
    config.spanning.mst_method = MstMethod::Prim;
    config.save(&path).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("[traversal]"));
    assert!(text.contains("depth-first"));

    let loaded = EngineConfig::load(&path).unwrap();
    assert_eq!(loaded, config);
    assert_eq!(loaded.version, CONFIG_FORMAT_VERSION);
}

#[test]
fn hand_written_config_drives_engine() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("graphwalk.toml");
    fs::write(
        &path,
        "[traversal]\norder = \"dfs\"\n\n[ordering]\ntopo_method = \"depth-first\"\n",
    )
    .unwrap();

    // Short aliases parse from strings but files use the full names
    assert!(matches!(EngineConfig::load(&path), Err(GraphError::Toml(_))));

    fs::write(
        &path,
        "[traversal]\norder = \"depth-first\"\n\n[ordering]\ntopo_method = \"depth-first\"\n",
    )
    .unwrap();
    let config = EngineConfig::load(&path).unwrap();
    assert_eq!(config.ordering.topo_method, TopoMethod::DepthFirst);

    let mut graph = Graph::directed();
    graph.add_edge("a", "b");
    graph.add_edge("a", "c");
    graph.add_edge("c", "d");
    let engine = Engine::with_config(&graph, config);
    assert_eq!(engine.visit_order(&"a").unwrap(), vec!["a", "b", "c", "d"]);
    assert_eq!(engine.topological_sort().unwrap(), vec!["a", "c", "d", "b"]);
}
