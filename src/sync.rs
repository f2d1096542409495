use sha2::{Digest, Sha256};

use crate::errors::Result;
use crate::types::LinkGraph;

/// Compute SHA-256 content hash of a string.
pub fn content_hash(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    let result = hasher.finalize();
    hex::encode(result)
}

/// Fingerprint of a graph's JSON form. Equal graphs hash equally.
pub fn graph_fingerprint(graph: &LinkGraph) -> Result<String> {
    let json = serde_json::to_string(graph)?;
    Ok(content_hash(&json))
}
