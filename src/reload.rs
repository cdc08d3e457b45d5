//! Single-flight reload coordination and the optional source watcher
//!
//! A reload loads the source off to the side and swaps the result into the
//! store in one step. Failures leave the active snapshot untouched; the
//! service keeps serving the last good data.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, SystemTime};

use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::error::{PartdexError, Result};
use crate::loader;
use crate::store::Store;

/// Serializes reloads of one source file into one store.
pub struct Reloader {
    store: Arc<Store>,
    source: PathBuf,
    in_flight: Mutex<()>,
}

impl Reloader {
    pub fn new(store: Arc<Store>, source: PathBuf) -> Self {
        Self {
            store,
            source,
            in_flight: Mutex::new(()),
        }
    }

    /// Load the source and activate the result, returning the new record
    /// count.
    ///
    /// At most one load runs at a time: callers arriving mid-reload wait on
    /// the mutex instead of racing a second read of the same file. The load
    /// itself runs on a blocking task and holds no lock shared with
    /// readers.
    pub async fn reload(&self) -> Result<usize> {
        let _guard = self.in_flight.lock().await;

        let path = self.source.clone();
        let snapshot = tokio::task::spawn_blocking(move || loader::load(&path))
            .await
            .map_err(|e| PartdexError::Internal(format!("reload task failed: {e}")))??;

        let count = snapshot.len();
        self.store.activate(snapshot);
        info!(count, source = %self.source.display(), "reloaded source");
        Ok(count)
    }

    /// The source file this reloader reads
    pub fn source(&self) -> &Path {
        &self.source
    }
}

/// Poll the source file's mtime and reload on change. Runs until the task
/// is dropped at shutdown.
///
/// The poll interval doubles as the debounce window: however often the file
/// changes, at most one reload starts per tick, and reloads themselves are
/// serialized by the [`Reloader`]. A failed reload keeps the recorded mtime
/// unchanged so the next tick retries.
pub async fn watch(reloader: Arc<Reloader>, interval: Duration) {
    let mut last_mtime = source_mtime(reloader.source());
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    info!(
        source = %reloader.source().display(),
        interval_ms = interval.as_millis() as u64,
        "watching source for changes"
    );

    loop {
        ticker.tick().await;
        let mtime = source_mtime(reloader.source());
        // A vanished file yields no mtime; wait for it to come back.
        if mtime.is_none() || mtime == last_mtime {
            continue;
        }
        debug!(source = %reloader.source().display(), "source mtime changed");
        match reloader.reload().await {
            Ok(count) => {
                last_mtime = mtime;
                info!(count, "auto-reload complete");
            }
            Err(e) => warn!("auto-reload failed, keeping previous data: {e}"),
        }
    }
}

fn source_mtime(path: &Path) -> Option<SystemTime> {
    std::fs::metadata(path).ok().and_then(|m| m.modified().ok())
}
