use std::collections::HashMap;

use tracing::debug;

use crate::types::{Node, NodeColor};

/// Outcome of applying one resolution request to the current node for a label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeTransition {
    /// No node existed; this one should be registered under a fresh id.
    Created(Node),
    /// A placeholder was filled in. The id is the placeholder's.
    Upgraded(Node),
    /// The existing node stays as it is.
    Unchanged,
}

/// Computes how a resolution request changes the node registered for `label`.
///
/// - absent: create with `next_id`, `file_path` and `color`;
/// - placeholder and `file_path` supplied: take the new path and color, keep the id;
/// - anything else: unchanged. A node that already has a path is never
///   overwritten, so the first resolved identity wins.
pub fn transition(
    current: Option<&Node>,
    label: &str,
    file_path: Option<&str>,
    color: NodeColor,
    next_id: u32,
) -> NodeTransition {
    match (current, file_path) {
        (None, _) => NodeTransition::Created(Node {
            id: next_id,
            label: label.to_string(),
            file_path: file_path.map(str::to_string),
            color,
        }),
        (Some(node), Some(path)) if node.is_placeholder() => NodeTransition::Upgraded(Node {
            id: node.id,
            label: node.label.clone(),
            file_path: Some(path.to_string()),
            color,
        }),
        (Some(_), _) => NodeTransition::Unchanged,
    }
}

/// Label-keyed node registry for a single build.
///
/// Labels are lowercased before lookup, so references differing only in case
/// share one node. Ids are allocated densely from 0 in creation order.
#[derive(Debug, Default)]
pub struct NodeResolver {
    /// Nodes indexed by id.
    nodes: Vec<Node>,
    /// Lowercased label to node id.
    by_label: HashMap<String, u32>,
}

impl NodeResolver {
    /// Creates an empty resolver.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves `label` to a node id, creating or upgrading the node as needed.
    pub fn resolve(&mut self, label: &str, file_path: Option<&str>, color: NodeColor) -> u32 {
        let label = label.to_lowercase();
        let current = self.by_label.get(&label).map(|&id| &self.nodes[id as usize]);
        let next_id = self.nodes.len() as u32;

        match transition(current, &label, file_path, color, next_id) {
            NodeTransition::Created(node) => {
                let id = node.id;
                self.by_label.insert(label, id);
                self.nodes.push(node);
                id
            }
            NodeTransition::Upgraded(node) => {
                let id = node.id;
                debug!(label = %node.label, color = node.color.as_str(), "upgraded placeholder");
                self.nodes[id as usize] = node;
                id
            }
            NodeTransition::Unchanged => self.by_label[&label],
        }
    }

    /// Returns the current color of the node registered for `label`, if any.
    pub fn color(&self, label: &str) -> Option<NodeColor> {
        self.get(label).map(|n| n.color)
    }

    /// Returns the node registered for `label`, if any.
    pub fn get(&self, label: &str) -> Option<&Node> {
        self.by_label
            .get(&label.to_lowercase())
            .map(|&id| &self.nodes[id as usize])
    }

    /// Returns the node with the given id.
    pub fn node(&self, id: u32) -> Option<&Node> {
        self.nodes.get(id as usize)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Consumes the resolver, returning every node ordered by id.
    pub fn into_nodes(self) -> Vec<Node> {
        self.nodes
    }
}
