use std::path::{Component, Path, PathBuf};

use thiserror::Error;
use url::Url;

/// Where an extracted link points, decided from the raw target text alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTarget {
    /// A document path, resolved against the linking document's directory.
    Document { path: PathBuf, label: String },
    /// An absolute http(s) URL, identified by its hostname.
    External { host: String },
    /// A bare name such as a wiki link; matched by label only.
    Label { label: String },
}

impl LinkTarget {
    /// The identity key this target resolves under.
    pub fn label(&self) -> &str {
        match self {
            LinkTarget::Document { label, .. } | LinkTarget::Label { label } => label,
            LinkTarget::External { host } => host,
        }
    }

    pub fn is_external(&self) -> bool {
        matches!(self, LinkTarget::External { .. })
    }
}

/// Why a link target could not be classified. The link is skipped.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SkippedLink {
    #[error("invalid url '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("url '{0}' has no host")]
    MissingHost(String),

    #[error("target '{0}' has no file name")]
    NoFileName(String),
}

/// Classifies a raw link target found in a document living in `doc_dir`.
///
/// Checked in order: document extension, http(s) URL, bare label.
/// `extension` includes the leading dot.
pub fn classify(raw: &str, doc_dir: &Path, extension: &str) -> Result<LinkTarget, SkippedLink> {
    if raw.ends_with(extension) {
        let path = normalize_path(&doc_dir.join(raw));
        let label = stem_label(&path).ok_or_else(|| SkippedLink::NoFileName(raw.to_string()))?;
        return Ok(LinkTarget::Document { path, label });
    }

    if is_web_url(raw) {
        let url = Url::parse(raw).map_err(|e| SkippedLink::InvalidUrl {
            url: raw.to_string(),
            reason: e.to_string(),
        })?;
        let host = url
            .host_str()
            .filter(|h| !h.is_empty())
            .ok_or_else(|| SkippedLink::MissingHost(raw.to_string()))?;
        return Ok(LinkTarget::External {
            host: host.to_lowercase(),
        });
    }

    let label =
        stem_label(Path::new(raw)).ok_or_else(|| SkippedLink::NoFileName(raw.to_string()))?;
    Ok(LinkTarget::Label { label })
}

/// Lowercased file stem of a path: `notes/Foo.md` becomes `foo`.
pub fn stem_label(path: &Path) -> Option<String> {
    path.file_stem()
        .map(|s| s.to_string_lossy().to_lowercase())
        .filter(|s| !s.is_empty())
}

/// Resolves `.` and `..` components without touching the filesystem.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(out.components().next_back(), Some(Component::Normal(_))) {
                    out.pop();
                } else if !out.has_root() {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

fn is_web_url(raw: &str) -> bool {
    let lower = raw.get(..8).unwrap_or(raw).to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}
