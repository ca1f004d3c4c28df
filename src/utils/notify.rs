//! Notifications.
//!
//! Thin wrapper routing user facing messages to `tracing` with the name of the function
//! that raised them. [notify_once] suppresses repeats, which matters for warnings raised
//! while formatting every row of a long listing.

use once_cell::sync::Lazy;
use serde::Deserialize;

use std::collections::HashSet;
use std::sync::Mutex;

static NOTIFIED: Lazy<Mutex<HashSet<String>>> = Lazy::new(|| Mutex::new(HashSet::new()));

/// Severity of a notification
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

/// Emits `msg` at `level`, tagged with the `source` that raised it.
pub fn notify(source: &str, level: Level, msg: &str) {
    match level {
        Level::Trace => tracing::trace!(source = source, "[{}] {}", source, msg),
        Level::Debug => tracing::debug!(source = source, "[{}] {}", source, msg),
        Level::Info => tracing::info!(source = source, "[{}] {}", source, msg),
        Level::Warn => tracing::warn!(source = source, "[{}] {}", source, msg),
        Level::Error => tracing::error!(source = source, "[{}] {}", source, msg),
    }
}

/// Like [notify], but a given source and message pair is only emitted once per process.
/// Returns whether the notification was emitted.
pub fn notify_once(source: &str, level: Level, msg: &str) -> bool {
    let key = format!("{}\u{0}{}", source, msg);
    let first = match NOTIFIED.lock() {
        Ok(mut seen) => seen.insert(key),
        Err(poisoned) => poisoned.into_inner().insert(key),
    };
    if first {
        notify(source, level, msg);
    }
    first
}
