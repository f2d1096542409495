use mapdown::mapdown::Mapdown;
use mapdown::output::{format_graph, format_stats_as_text};
use mapdown::types::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_full_pipeline() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();

    fs::create_dir_all(root.join("projects")).unwrap();
    fs::write(
        root.join("index.md"),
        r#"
# Notes

- [Roadmap](projects/roadmap.md)
- [[Journal]]
- Reading: [Rust book](https://doc.rust-lang.org/book/)
"#,
    )
    .unwrap();
    fs::write(
        root.join("projects/roadmap.md"),
        "Back to [index](../index.md). Blocked on [[design-review]].\n",
    )
    .unwrap();
    fs::write(root.join("journal.md"), "Nothing links out yet.\n").unwrap();

    let md = Mapdown::init(root).unwrap();
    assert!(Mapdown::is_initialized(root));

    let (graph, stats) = md.rebuild_with_stats().unwrap();
    assert_eq!(stats.document_count, 3);
    assert_eq!(graph.count_by_color(NodeColor::Green), 3);
    assert_eq!(graph.count_by_color(NodeColor::Yellow), 1);
    assert_eq!(graph.count_by_color(NodeColor::Gray), 1);
    assert_eq!(graph.edges.len(), 5);

    let review = graph.node_by_label("design-review").unwrap();
    assert!(review.file_path.is_none());
    assert_eq!(
        graph.node_by_label("doc.rust-lang.org").unwrap().color,
        NodeColor::Yellow
    );

    let json = format_graph(&graph, OutputFormat::Json).unwrap();
    let parsed: LinkGraph = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, graph);

    let dot = format_graph(&graph, OutputFormat::Dot).unwrap();
    assert!(dot.contains("style=dashed"));

    let text = format_stats_as_text(&graph, &stats);
    assert!(text.contains("Documents:  3"));
}

#[test]
fn test_rebuild_picks_up_changes() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    fs::write(root.join("a.md"), "[[b]]").unwrap();

    let md = Mapdown::open(root).unwrap();
    let before = md.rebuild().unwrap();
    assert_eq!(before.node_by_label("b").unwrap().color, NodeColor::Gray);

    fs::write(root.join("b.md"), "").unwrap();
    let after = md.rebuild().unwrap();
    assert_eq!(after.node_by_label("b").unwrap().color, NodeColor::Green);
    assert!(!after.edges[0].dashes);
}

#[test]
fn test_open_uses_saved_config() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    fs::write(root.join("a.md"), "[[b]] [[b]]").unwrap();

    let md = Mapdown::init(root).unwrap();
    let mut config = md.config().clone();
    config.dedupe_edges = false;
    mapdown::config::save_config(root, &config).unwrap();

    let md = Mapdown::open(root).unwrap();
    assert!(!md.config().dedupe_edges);
    assert_eq!(md.rebuild().unwrap().edges.len(), 2);
}

#[test]
fn test_open_rejects_missing_root() {
    let dir = TempDir::new().unwrap();
    assert!(Mapdown::open(&dir.path().join("missing")).is_err());
}

#[test]
fn test_library_rebuild_entry_point() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.md"), "[b](b.md)").unwrap();
    fs::write(dir.path().join("b.md"), "[[a]]").unwrap();

    let graph = mapdown::rebuild(dir.path()).unwrap();
    assert_eq!(graph.nodes.len(), 2);
    assert_eq!(graph.edges.len(), 2);
    assert!(graph.edges.iter().all(|e| e.arrows == Arrows::To));
}
