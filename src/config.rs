use std::fs;
use std::path::{Path, PathBuf};

use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::errors::{MapdownError, Result};

/// Name of the configuration file stored inside the `.mapdown` directory.
pub const CONFIG_FILENAME: &str = "config.json";

/// Name of the hidden directory used to store mapdown metadata.
pub const MAPDOWN_DIR: &str = ".mapdown";

/// Configuration for a mapdown project.
///
/// Controls which documents are scanned and how the graph is assembled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapdownConfig {
    /// Schema version of the configuration.
    pub version: u32,
    /// Root directory of the document tree.
    pub root_dir: String,
    /// Document extension without the leading dot.
    pub extension: String,
    /// Glob patterns (relative to the root) for paths to leave out of the scan.
    pub exclude: Vec<String>,
    /// Keep at most one edge per ordered `(from, to)` pair.
    pub dedupe_edges: bool,
    /// Quiet period used by `watch` to coalesce change events into one rebuild.
    pub debounce_ms: u64,
}

impl Default for MapdownConfig {
    fn default() -> Self {
        Self {
            version: 1,
            root_dir: String::new(),
            extension: "md".to_string(),
            exclude: Vec::new(),
            dedupe_edges: true,
            debounce_ms: 200,
        }
    }
}

impl MapdownConfig {
    /// Returns the extension with its leading dot, e.g. `".md"`.
    pub fn dotted_extension(&self) -> String {
        format!(".{}", self.extension.trim_start_matches('.'))
    }
}

/// Returns the path to the `.mapdown` directory within the given root.
pub fn get_mapdown_dir(root: &Path) -> PathBuf {
    root.join(MAPDOWN_DIR)
}

/// Returns the path to the configuration file within the `.mapdown` directory.
pub fn get_config_path(root: &Path) -> PathBuf {
    get_mapdown_dir(root).join(CONFIG_FILENAME)
}

/// Loads the configuration from disk.
///
/// If the configuration file does not exist, returns a default configuration
/// with `root_dir` set to the given root.
pub fn load_config(root: &Path) -> Result<MapdownConfig> {
    let config_path = get_config_path(root);

    if !config_path.exists() {
        return Ok(MapdownConfig {
            root_dir: root.to_string_lossy().to_string(),
            ..MapdownConfig::default()
        });
    }

    let contents = fs::read_to_string(&config_path).map_err(|e| MapdownError::Config {
        message: format!(
            "failed to read config file '{}': {}",
            config_path.display(),
            e
        ),
    })?;

    let config: MapdownConfig =
        serde_json::from_str(&contents).map_err(|e| MapdownError::Config {
            message: format!(
                "failed to parse config file '{}': {}",
                config_path.display(),
                e
            ),
        })?;

    if config.extension.trim_start_matches('.').is_empty() {
        return Err(MapdownError::Config {
            message: format!(
                "config file '{}' has an empty document extension",
                config_path.display()
            ),
        });
    }

    Ok(config)
}

/// Saves the configuration to disk using an atomic write.
///
/// Writes to a temporary file first and then renames it into place.
pub fn save_config(root: &Path, config: &MapdownConfig) -> Result<()> {
    let mapdown_dir = get_mapdown_dir(root);
    fs::create_dir_all(&mapdown_dir).map_err(|e| MapdownError::Config {
        message: format!(
            "failed to create mapdown directory '{}': {}",
            mapdown_dir.display(),
            e
        ),
    })?;

    let config_path = get_config_path(root);
    let tmp_path = config_path.with_extension("tmp");

    let json = serde_json::to_string_pretty(config).map_err(|e| MapdownError::Config {
        message: format!("failed to serialize config: {}", e),
    })?;

    fs::write(&tmp_path, &json).map_err(|e| MapdownError::Config {
        message: format!(
            "failed to write temporary config file '{}': {}",
            tmp_path.display(),
            e
        ),
    })?;

    fs::rename(&tmp_path, &config_path).map_err(|e| MapdownError::Config {
        message: format!(
            "failed to rename temporary config file '{}' to '{}': {}",
            tmp_path.display(),
            config_path.display(),
            e
        ),
    })?;

    Ok(())
}

/// Returns `false` if the root-relative path matches any exclude pattern.
///
/// Extension filtering is done by the scanner; this only applies the
/// user-supplied exclusions. Invalid patterns are ignored.
pub fn should_include_file(rel_path: &str, config: &MapdownConfig) -> bool {
    let match_opts = glob::MatchOptions {
        case_sensitive: true,
        require_literal_separator: false,
        require_literal_leading_dot: false,
    };

    !config.exclude.iter().any(|pattern_str| {
        Pattern::new(pattern_str)
            .map(|pattern| pattern.matches_with(rel_path, match_opts))
            .unwrap_or(false)
    })
}
