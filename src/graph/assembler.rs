use std::collections::HashSet;
use std::path::Path;
use std::time::Instant;

use tracing::{debug, info, trace, warn};

use crate::config::MapdownConfig;
use crate::errors::{MapdownError, Result};
use crate::extraction::extract_links;
use crate::graph::target::{classify, stem_label, LinkTarget};
use crate::resolution::NodeResolver;
use crate::scanner::scan_documents;
use crate::types::*;

/// Scans a document tree and builds its link graph.
///
/// Convenience wrapper around [`GraphAssembler`].
pub fn build_graph(root: &Path, config: &MapdownConfig) -> Result<(LinkGraph, BuildStats)> {
    GraphAssembler::new(config).build(root)
}

/// Assembles a [`LinkGraph`] from scanned documents.
///
/// All state lives in the assembler and is consumed by [`GraphAssembler::build`],
/// so every build starts from an empty registry.
pub struct GraphAssembler<'a> {
    config: &'a MapdownConfig,
    extension: String,
    resolver: NodeResolver,
    edges: Vec<Edge>,
    seen_edges: HashSet<(u32, u32)>,
    stats: BuildStats,
}

impl<'a> GraphAssembler<'a> {
    pub fn new(config: &'a MapdownConfig) -> Self {
        Self {
            config,
            extension: config.dotted_extension(),
            resolver: NodeResolver::new(),
            edges: Vec::new(),
            seen_edges: HashSet::new(),
            stats: BuildStats::default(),
        }
    }

    /// Runs a full build: scan, register documents, then link them.
    pub fn build(mut self, root: &Path) -> Result<(LinkGraph, BuildStats)> {
        let start = Instant::now();

        // 1. Scan
        let documents = scan_documents(root, self.config)?;
        self.stats.document_count = documents.len();

        // 2. Every document names itself before any link is resolved, so links
        //    to scanned documents never produce placeholders.
        let mut document_ids = Vec::with_capacity(documents.len());
        for path in &documents {
            document_ids.push(self.register_document(path)?);
        }

        // 3. Link
        for (path, &from) in documents.iter().zip(&document_ids) {
            let bytes = std::fs::read(path).map_err(|e| MapdownError::File {
                message: format!("failed to read document: {}", e),
                path: path.display().to_string(),
            })?;
            let text = String::from_utf8_lossy(&bytes);
            let doc_dir = path.parent().unwrap_or(Path::new(""));
            self.link_document(from, doc_dir, &text);
        }

        let nodes = self.resolver.into_nodes();
        self.stats.node_count = nodes.len();
        self.stats.edge_count = self.edges.len();
        self.stats.duration_ms = start.elapsed().as_millis() as u64;

        info!(
            documents = self.stats.document_count,
            nodes = self.stats.node_count,
            edges = self.stats.edge_count,
            skipped = self.stats.links_skipped,
            duration_ms = self.stats.duration_ms,
            "built link graph"
        );

        Ok((
            LinkGraph {
                nodes,
                edges: self.edges,
            },
            self.stats,
        ))
    }

    fn register_document(&mut self, path: &Path) -> Result<u32> {
        let label = stem_label(path).ok_or_else(|| MapdownError::File {
            message: "document has no file name".to_string(),
            path: path.display().to_string(),
        })?;
        let file_path = path.to_string_lossy();
        Ok(self
            .resolver
            .resolve(&label, Some(file_path.as_ref()), NodeColor::Green))
    }

    /// Resolves every link in one document and records an edge for each.
    fn link_document(&mut self, from: u32, doc_dir: &Path, text: &str) {
        for link in extract_links(text) {
            self.stats.links_extracted += 1;
            trace!(from, target = link.target(), "extracted link");

            let target = match classify(link.target(), doc_dir, &self.extension) {
                Ok(target) => target,
                Err(reason) => {
                    warn!(from, %reason, "skipping link");
                    self.stats.links_skipped += 1;
                    continue;
                }
            };

            let to = self.resolve_target(&target);
            let color = self
                .resolver
                .node(to)
                .map(|n| n.color)
                .unwrap_or(NodeColor::Gray);
            self.push_edge(Edge::new(from, to, color));
        }
    }

    fn resolve_target(&mut self, target: &LinkTarget) -> u32 {
        match target {
            LinkTarget::External { host } => {
                self.resolver.resolve(host, Some(host.as_str()), NodeColor::Yellow)
            }
            LinkTarget::Document { label, .. } | LinkTarget::Label { label } => {
                let color = self.resolver.color(label).unwrap_or(NodeColor::Gray);
                if color == NodeColor::Gray {
                    debug!(label = %label, "unresolved link target");
                }
                self.resolver.resolve(label, None, color)
            }
        }
    }

    fn push_edge(&mut self, edge: Edge) {
        if self.config.dedupe_edges && !self.seen_edges.insert((edge.from, edge.to)) {
            self.stats.duplicate_edges += 1;
            return;
        }
        self.edges.push(edge);
    }
}
