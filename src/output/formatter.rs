use crate::errors::Result;
use crate::types::{BuildStats, LinkGraph, NodeColor, OutputFormat};

/// Formats a graph in the requested output format.
pub fn format_graph(graph: &LinkGraph, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => format_graph_as_json(graph),
        OutputFormat::Dot => Ok(format_graph_as_dot(graph)),
    }
}

/// Serializes a graph as pretty-printed `{ "nodes": [...], "edges": [...] }` JSON.
pub fn format_graph_as_json(graph: &LinkGraph) -> Result<String> {
    Ok(serde_json::to_string_pretty(graph)?)
}

/// Renders a graph as Graphviz source.
///
/// Nodes are filled with their provenance color; edges to placeholders are
/// drawn dashed. Documents carry their path as a `tooltip`.
pub fn format_graph_as_dot(graph: &LinkGraph) -> String {
    let mut out = String::new();

    out.push_str("digraph mapdown {\n");
    out.push_str("  node [shape=ellipse, style=filled];\n");

    for node in &graph.nodes {
        out.push_str(&format!(
            "  n{} [label=\"{}\", fillcolor={}",
            node.id,
            escape_dot(&node.label),
            dot_color(node.color),
        ));
        if let Some(ref path) = node.file_path {
            out.push_str(&format!(", tooltip=\"{}\"", escape_dot(path)));
        }
        out.push_str("];\n");
    }

    for edge in &graph.edges {
        out.push_str(&format!(
            "  n{} -> n{} [color={}",
            edge.from,
            edge.to,
            dot_color(edge.color)
        ));
        if edge.dashes {
            out.push_str(", style=dashed");
        }
        out.push_str("];\n");
    }

    out.push_str("}\n");
    out
}

/// Human-readable build summary, one counter per line.
pub fn format_stats_as_text(graph: &LinkGraph, stats: &BuildStats) -> String {
    let mut out = String::new();
    out.push_str("mapdown status\n");
    out.push_str(&format!("  Documents:  {}\n", stats.document_count));
    out.push_str(&format!(
        "  Nodes:      {} ({} documents, {} external, {} unresolved)\n",
        stats.node_count,
        graph.count_by_color(NodeColor::Green),
        graph.count_by_color(NodeColor::Yellow),
        graph.count_by_color(NodeColor::Gray),
    ));
    out.push_str(&format!("  Edges:      {}\n", stats.edge_count));
    out.push_str(&format!("  Links:      {}\n", stats.links_extracted));
    if stats.links_skipped > 0 {
        out.push_str(&format!("  Skipped:    {}\n", stats.links_skipped));
    }
    if stats.duplicate_edges > 0 {
        out.push_str(&format!("  Duplicates: {}\n", stats.duplicate_edges));
    }
    out.push_str(&format!("  Time:       {}ms\n", stats.duration_ms));
    out
}

fn dot_color(color: NodeColor) -> &'static str {
    match color {
        NodeColor::Green => "palegreen",
        NodeColor::Yellow => "gold",
        NodeColor::Gray => "gray",
    }
}

fn escape_dot(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::*;

    fn make_test_graph() -> LinkGraph {
        LinkGraph {
            nodes: vec![
                Node {
                    id: 0,
                    label: "a".to_string(),
                    file_path: Some("/docs/a.md".to_string()),
                    color: NodeColor::Green,
                },
                Node {
                    id: 1,
                    label: "x".to_string(),
                    file_path: None,
                    color: NodeColor::Gray,
                },
            ],
            edges: vec![Edge::new(0, 1, NodeColor::Gray)],
        }
    }

    #[test]
    fn test_json_shape() {
        let json = format_graph_as_json(&make_test_graph()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["nodes"][0]["filePath"], "/docs/a.md");
        assert_eq!(parsed["nodes"][0]["color"], "green");
        assert!(parsed["nodes"][1].get("filePath").is_none());
        assert_eq!(parsed["edges"][0]["arrows"], "to");
        assert_eq!(parsed["edges"][0]["color"], "gray");
        assert_eq!(parsed["edges"][0]["dashes"], true);
    }

    #[test]
    fn test_solid_edge_omits_dashes() {
        let graph = LinkGraph {
            nodes: vec![],
            edges: vec![Edge::new(0, 0, NodeColor::Green)],
        };
        let json = format_graph_as_json(&graph).unwrap();
        assert!(!json.contains("dashes"));
    }

    #[test]
    fn test_dot_output() {
        let dot = format_graph_as_dot(&make_test_graph());
        assert!(dot.starts_with("digraph mapdown {"));
        assert!(dot.contains("n0 [label=\"a\", fillcolor=palegreen, tooltip=\"/docs/a.md\"];"));
        assert!(dot.contains("n1 [label=\"x\", fillcolor=gray];"));
        assert!(dot.contains("n0 -> n1 [color=gray, style=dashed];"));
    }

    #[test]
    fn test_dot_escapes_quotes() {
        assert_eq!(escape_dot(r#"say "hi""#), r#"say \"hi\""#);
    }

    #[test]
    fn test_stats_text() {
        let graph = make_test_graph();
        let stats = BuildStats {
            document_count: 1,
            node_count: 2,
            edge_count: 1,
            links_extracted: 1,
            ..Default::default()
        };
        let text = format_stats_as_text(&graph, &stats);
        assert!(text.contains("Documents:  1"));
        assert!(text.contains("(1 documents, 0 external, 1 unresolved)"));
        assert!(!text.contains("Skipped"));
    }
}
