use mapdown::resolution::NodeResolver;
use mapdown::types::*;

#[test]
fn test_ids_are_dense_from_zero() {
    let mut resolver = NodeResolver::new();
    assert!(resolver.is_empty());
    assert_eq!(resolver.resolve("a", Some("/docs/a.md"), NodeColor::Green), 0);
    assert_eq!(resolver.resolve("b", None, NodeColor::Gray), 1);
    assert_eq!(resolver.resolve("c", Some("c.com"), NodeColor::Yellow), 2);
    assert_eq!(resolver.len(), 3);

    let ids: Vec<u32> = resolver.into_nodes().iter().map(|n| n.id).collect();
    assert_eq!(ids, vec![0, 1, 2]);
}

#[test]
fn test_labels_are_case_insensitive() {
    let mut resolver = NodeResolver::new();
    let first = resolver.resolve("ReadMe", Some("/docs/ReadMe.md"), NodeColor::Green);
    let second = resolver.resolve("README", None, NodeColor::Gray);
    assert_eq!(first, second);
    assert_eq!(resolver.get("readme").unwrap().label, "readme");
    assert_eq!(resolver.color("rEaDmE"), Some(NodeColor::Green));
}

#[test]
fn test_placeholder_is_upgraded_in_place() {
    let mut resolver = NodeResolver::new();
    resolver.resolve("a", Some("/docs/a.md"), NodeColor::Green);
    let placeholder = resolver.resolve("example.com", None, NodeColor::Gray);
    assert_eq!(resolver.color("example.com"), Some(NodeColor::Gray));

    let upgraded = resolver.resolve("example.com", Some("example.com"), NodeColor::Yellow);
    assert_eq!(placeholder, upgraded);

    let node = resolver.node(upgraded).unwrap();
    assert_eq!(node.color, NodeColor::Yellow);
    assert_eq!(node.file_path.as_deref(), Some("example.com"));
    assert_eq!(resolver.len(), 2);
}

#[test]
fn test_resolved_node_is_never_overwritten() {
    let mut resolver = NodeResolver::new();
    let doc = resolver.resolve("notes", Some("/docs/notes.md"), NodeColor::Green);
    let again = resolver.resolve("notes", Some("/other/notes.md"), NodeColor::Green);
    let external = resolver.resolve("Notes", Some("notes"), NodeColor::Yellow);
    let dangling = resolver.resolve("notes", None, NodeColor::Gray);

    assert_eq!(doc, again);
    assert_eq!(doc, external);
    assert_eq!(doc, dangling);

    let node = resolver.node(doc).unwrap();
    assert_eq!(node.color, NodeColor::Green);
    assert_eq!(node.file_path.as_deref(), Some("/docs/notes.md"));
}

#[test]
fn test_placeholder_stays_placeholder_without_path() {
    let mut resolver = NodeResolver::new();
    let id = resolver.resolve("ghost", None, NodeColor::Gray);
    resolver.resolve("ghost", None, NodeColor::Green);
    let node = resolver.node(id).unwrap();
    assert!(node.is_placeholder());
    assert_eq!(node.color, NodeColor::Gray);
}

#[test]
fn test_unknown_label_has_no_color() {
    let resolver = NodeResolver::new();
    assert_eq!(resolver.color("missing"), None);
    assert!(resolver.get("missing").is_none());
    assert!(resolver.node(0).is_none());
}
