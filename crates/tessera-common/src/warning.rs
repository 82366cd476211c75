//! Conversion warnings with colored terminal output.
//!
//! Provides deduplication to avoid spamming the same warning multiple times.
//! Used by the style parser, the image resolver, and the block segmenter to
//! report input that was skipped or ignored.
//!
//! The dedup set is process-wide and only gates stderr output; no conversion
//! result reads it. Only [`clear_warnings`] resets it.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

use owo_colors::OwoColorize;

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Whether warnings are written to stderr at all.
static ENABLED: AtomicBool = AtomicBool::new(true);

/// Warn about ignored or unsupported input (prints once per unique message)
///
/// # Example
/// ```ignore
/// warn_once("style", "ignoring unsupported value 'oblique' for font-style");
/// ```
pub fn warn_once(component: &str, message: &str) {
    let key = format!("[{component}] {message}");
    let first_time = WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert(key);

    if first_time && ENABLED.load(Ordering::Relaxed) {
        eprintln!("{}", format!("[tessera {component}] ⚠ {message}").yellow());
    }
}

/// Returns whether `warn_once` has already seen this exact warning.
#[must_use]
pub fn has_warned(component: &str, message: &str) -> bool {
    let key = format!("[{component}] {message}");
    WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .as_ref()
        .is_some_and(|set| set.contains(&key))
}

/// Turn stderr output on or off. Deduplication keys are recorded either way.
pub fn set_warnings_enabled(enabled: bool) {
    ENABLED.store(enabled, Ordering::Relaxed);
}

/// Clear all recorded warnings (call when converting a new document)
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}
