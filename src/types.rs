use serde::{Deserialize, Serialize};

/// Provenance of a node, doubling as its display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeColor {
    /// A scanned local document.
    Green,
    /// An external URL, keyed by hostname.
    Yellow,
    /// A placeholder: referenced, but no matching document was found.
    Gray,
}

#[allow(clippy::should_implement_trait)]
impl NodeColor {
    /// Returns the string representation of this color.
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeColor::Green => "green",
            NodeColor::Yellow => "yellow",
            NodeColor::Gray => "gray",
        }
    }

    /// Parses a string into a `NodeColor`, returning `None` for unrecognized values.
    pub fn from_str(s: &str) -> Option<NodeColor> {
        match s {
            "green" => Some(NodeColor::Green),
            "yellow" => Some(NodeColor::Yellow),
            "gray" | "grey" => Some(NodeColor::Gray),
            _ => None,
        }
    }
}

/// Arrow decoration of an edge. Edges are always directed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Arrows {
    #[default]
    To,
}

/// A vertex of the link graph: a document, an external site or a placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub id: u32,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
    pub color: NodeColor,
}

impl Node {
    /// A placeholder has no backing file or URL yet.
    pub fn is_placeholder(&self) -> bool {
        self.file_path.is_none()
    }
}

/// A directed "links to" relationship between two nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub from: u32,
    pub to: u32,
    #[serde(default)]
    pub arrows: Arrows,
    pub color: NodeColor,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub dashes: bool,
}

impl Edge {
    /// Creates an edge colored after its target; gray edges are dashed.
    pub fn new(from: u32, to: u32, color: NodeColor) -> Self {
        Self {
            from,
            to,
            arrows: Arrows::To,
            color,
            dashes: color == NodeColor::Gray,
        }
    }
}

/// The complete output of one build.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkGraph {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl LinkGraph {
    /// Looks up a node by its label (case-insensitive).
    pub fn node_by_label(&self, label: &str) -> Option<&Node> {
        let label = label.to_lowercase();
        self.nodes.iter().find(|n| n.label == label)
    }

    /// Returns all edges leaving the given node.
    pub fn edges_from(&self, id: u32) -> Vec<&Edge> {
        self.edges.iter().filter(|e| e.from == id).collect()
    }

    /// Counts nodes of the given color.
    pub fn count_by_color(&self, color: NodeColor) -> usize {
        self.nodes.iter().filter(|n| n.color == color).count()
    }
}

/// Counters collected while assembling a graph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildStats {
    /// Number of documents found by the scanner.
    pub document_count: usize,
    /// Number of nodes in the final graph.
    pub node_count: usize,
    /// Number of edges in the final graph.
    pub edge_count: usize,
    /// Non-empty link targets extracted across all documents.
    pub links_extracted: usize,
    /// Links dropped because their target could not be classified.
    pub links_skipped: usize,
    /// Edges dropped because the same `(from, to)` pair already existed.
    pub duplicate_edges: usize,
    /// Time taken in milliseconds.
    pub duration_ms: u64,
}

/// Output format for emitted graphs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Node/edge interchange JSON for graph-rendering front ends.
    #[default]
    Json,
    /// Graphviz `digraph` source.
    Dot,
}

#[allow(clippy::should_implement_trait)]
impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Dot => "dot",
        }
    }

    /// Parses a format name, returning `None` for unrecognized values.
    pub fn from_str(s: &str) -> Option<OutputFormat> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Some(OutputFormat::Json),
            "dot" | "graphviz" => Some(OutputFormat::Dot),
            _ => None,
        }
    }
}
