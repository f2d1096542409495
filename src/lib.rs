pub mod config;
pub mod errors;
pub mod extraction;
pub mod graph;
pub mod mapdown;
pub mod output;
pub mod resolution;
pub mod scanner;
pub mod sync;
pub mod types;
pub mod watch;

use std::path::Path;

/// Scans `root` with the default configuration and builds its link graph.
///
/// Every call is a full rebuild; nothing is carried over between calls.
pub fn rebuild(root: &Path) -> errors::Result<types::LinkGraph> {
    let config = config::MapdownConfig::default();
    graph::build_graph(root, &config).map(|(graph, _)| graph)
}
