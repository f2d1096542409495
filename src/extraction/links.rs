use once_cell::sync::Lazy;
use regex::{CaptureMatches, Regex};

/// Inline link or wiki link, scanned together so matches come out in text order.
///
/// Display text stops at the first `]`, otherwise a wiki link earlier on the
/// same line would be swallowed by a later inline link.
static LINK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[[^\]\n]*\]\((.*?)\)|\[\[(.*?)\]\]").expect("Invalid link regex")
});

/// A link target found in a document, tagged with the syntax it came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LinkRef {
    /// `[display text](target)`
    Inline(String),
    /// `[[target]]`
    Bracket(String),
}

impl LinkRef {
    /// The raw target string, exactly as written.
    pub fn target(&self) -> &str {
        match self {
            LinkRef::Inline(t) | LinkRef::Bracket(t) => t,
        }
    }

    pub fn into_target(self) -> String {
        match self {
            LinkRef::Inline(t) | LinkRef::Bracket(t) => t,
        }
    }
}

/// Lazy iterator over the links of one document.
///
/// Created by [`extract_links`]. Calling `extract_links` again on the same
/// text yields the same sequence.
pub struct Links<'t> {
    matches: CaptureMatches<'static, 't>,
}

impl Iterator for Links<'_> {
    type Item = LinkRef;

    fn next(&mut self) -> Option<LinkRef> {
        for caps in self.matches.by_ref() {
            let link = if let Some(m) = caps.get(1) {
                LinkRef::Inline(m.as_str().to_string())
            } else if let Some(m) = caps.get(2) {
                LinkRef::Bracket(m.as_str().to_string())
            } else {
                continue;
            };
            if !link.target().is_empty() {
                return Some(link);
            }
        }
        None
    }
}

/// Scans `text` left to right for inline and wiki links.
///
/// Empty targets (`[x]()`, `[[]]`) are skipped.
pub fn extract_links(text: &str) -> Links<'_> {
    Links {
        matches: LINK.captures_iter(text),
    }
}
