use std::path::{Path, PathBuf};

use crate::config::{get_config_path, load_config, save_config, MapdownConfig};
use crate::errors::{MapdownError, Result};
use crate::graph::build_graph;
use crate::types::*;
use crate::watch;

/// Handle to a document tree and its configuration.
///
/// Holds no graph state: every rebuild rescans the tree from scratch.
pub struct Mapdown {
    config: MapdownConfig,
    root: PathBuf,
}

// ---------------------------------------------------------------------------
// Lifecycle
// ---------------------------------------------------------------------------

impl Mapdown {
    /// Writes a default configuration under `root` and returns a handle to it.
    pub fn init(root: &Path) -> Result<Self> {
        let root = absolute_root(root)?;
        let config = MapdownConfig {
            root_dir: root.to_string_lossy().to_string(),
            ..MapdownConfig::default()
        };
        save_config(&root, &config)?;
        Ok(Self { config, root })
    }

    /// Opens a document tree, loading its configuration if one exists and
    /// falling back to defaults otherwise.
    pub fn open(root: &Path) -> Result<Self> {
        let root = absolute_root(root)?;
        if !root.is_dir() {
            return Err(MapdownError::File {
                message: "root is not a directory".to_string(),
                path: root.display().to_string(),
            });
        }
        let config = load_config(&root)?;
        Ok(Self { config, root })
    }

    /// Opens a document tree with an explicit configuration.
    pub fn with_config(root: &Path, config: MapdownConfig) -> Result<Self> {
        Ok(Self {
            config,
            root: absolute_root(root)?,
        })
    }

    /// Returns `true` if a configuration file exists under `root`.
    pub fn is_initialized(root: &Path) -> bool {
        get_config_path(root).exists()
    }
}

// ---------------------------------------------------------------------------
// Building
// ---------------------------------------------------------------------------

impl Mapdown {
    /// Rescans the tree and returns a freshly built graph.
    pub fn rebuild(&self) -> Result<LinkGraph> {
        self.rebuild_with_stats().map(|(graph, _)| graph)
    }

    /// Rescans the tree, returning the graph together with build counters.
    pub fn rebuild_with_stats(&self) -> Result<(LinkGraph, BuildStats)> {
        build_graph(&self.root, &self.config)
    }

    /// Rebuilds whenever the tree changes; see [`watch::watch`].
    pub fn watch<F>(&self, on_change: F) -> Result<()>
    where
        F: FnMut(&LinkGraph, &BuildStats) -> Result<()>,
    {
        watch::watch(self, on_change)
    }

    pub fn config(&self) -> &MapdownConfig {
        &self.config
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

fn absolute_root(root: &Path) -> Result<PathBuf> {
    std::path::absolute(root).map_err(|e| MapdownError::File {
        message: format!("failed to resolve root directory: {}", e),
        path: root.display().to_string(),
    })
}
