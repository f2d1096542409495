use std::path::Path;
use std::sync::mpsc::{channel, Receiver, RecvTimeoutError};
use std::time::Duration;

use notify::{recommended_watcher, Event, EventKind, RecursiveMode, Watcher};
use tracing::{debug, error, info, warn};

use crate::config::MAPDOWN_DIR;
use crate::errors::{MapdownError, Result};
use crate::mapdown::Mapdown;
use crate::sync::graph_fingerprint;
use crate::types::{BuildStats, LinkGraph};

/// Returns `true` if an event should trigger a rebuild.
///
/// Pure reads are ignored, as are events touching only the metadata directory.
pub fn is_relevant(event: &Event, root: &Path) -> bool {
    if matches!(event.kind, EventKind::Access(_)) {
        return false;
    }
    if event.paths.is_empty() {
        return true;
    }
    let metadata_dir = root.join(MAPDOWN_DIR);
    event.paths.iter().any(|p| !p.starts_with(&metadata_dir))
}

/// Blocks until a relevant change arrives, then keeps draining events until
/// none has arrived for `debounce`.
///
/// Returns the number of relevant events in the batch, or `None` once the
/// event source has gone away.
pub fn next_batch(
    rx: &Receiver<notify::Result<Event>>,
    root: &Path,
    debounce: Duration,
) -> Option<usize> {
    let mut count = 0;

    while count == 0 {
        let event = rx.recv().ok()?;
        count += count_event(event, root);
    }

    loop {
        match rx.recv_timeout(debounce) {
            Ok(event) => count += count_event(event, root),
            Err(RecvTimeoutError::Timeout) => return Some(count),
            Err(RecvTimeoutError::Disconnected) => return Some(count),
        }
    }
}

fn count_event(event: notify::Result<Event>, root: &Path) -> usize {
    match event {
        Ok(event) if is_relevant(&event, root) => {
            debug!(kind = ?event.kind, paths = ?event.paths, "change event");
            1
        }
        Ok(_) => 0,
        Err(e) => {
            // Events may have been lost, so rebuild anyway.
            warn!(error = %e, "watch error");
            1
        }
    }
}

/// Rebuilds on every coalesced batch of changes under the project root.
///
/// `on_change` runs after the initial build and after every rebuild whose graph
/// differs from the last one reported. A failed rebuild is logged and the
/// watcher waits for the next batch. Returns when the watcher shuts down or
/// `on_change` fails.
pub fn watch<F>(project: &Mapdown, mut on_change: F) -> Result<()>
where
    F: FnMut(&LinkGraph, &BuildStats) -> Result<()>,
{
    let root = project.root();
    let debounce = Duration::from_millis(project.config().debounce_ms);

    let (tx, rx) = channel();
    let mut watcher = recommended_watcher(tx).map_err(|e| MapdownError::Watch {
        message: format!("failed to create watcher: {}", e),
    })?;
    watcher
        .watch(root, RecursiveMode::Recursive)
        .map_err(|e| MapdownError::Watch {
            message: format!("failed to watch '{}': {}", root.display(), e),
        })?;

    let (graph, stats) = project.rebuild_with_stats()?;
    let mut last_fingerprint = graph_fingerprint(&graph)?;
    on_change(&graph, &stats)?;
    info!(root = %root.display(), "watching for changes");

    while let Some(events) = next_batch(&rx, root, debounce) {
        debug!(events, "rebuilding");
        let (graph, stats) = match project.rebuild_with_stats() {
            Ok(built) => built,
            Err(e) => {
                error!(error = %e, "rebuild failed");
                continue;
            }
        };

        let fingerprint = graph_fingerprint(&graph)?;
        if fingerprint == last_fingerprint {
            debug!("graph unchanged");
            continue;
        }
        last_fingerprint = fingerprint;
        on_change(&graph, &stats)?;
    }

    info!("watcher stopped");
    Ok(())
}
