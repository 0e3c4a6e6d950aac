//! Status message rotation
//!
//! The displayed message is derived from elapsed seconds on every render,
//! never stored alongside it. Keeping a single source of truth avoids the
//! two-variables-out-of-sync class of bugs entirely.

/// Fixed status messages, rotated every two seconds
pub const MESSAGES: [&str; 10] = [
    "Initializing system...",
    "Loading resources...",
    "Processing data...",
    "Optimizing performance...",
    "Synchronizing state...",
    "Validating inputs...",
    "Compiling assets...",
    "Establishing connections...",
    "Finalizing setup...",
    "Ready to proceed...",
];

/// Index into [`MESSAGES`] for a given elapsed-seconds value.
///
/// Advances at even seconds (0, 2, 4, ...) and wraps after 20 seconds.
pub fn message_index(elapsed_seconds: u64) -> usize {
    (elapsed_seconds / 2) as usize % MESSAGES.len()
}

/// The message to display at a given elapsed-seconds value
pub fn select(elapsed_seconds: u64) -> &'static str {
    MESSAGES[message_index(elapsed_seconds)]
}
