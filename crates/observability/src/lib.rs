//! Logging setup shared by applications and tests that use the value crates.
//!
//! The value crates only emit `tracing` events (rejected fallible factories are
//! logged at `debug`); this crate installs the subscriber that prints them.

/// Initialize process-wide logging.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Subscriber configuration (filters, format).
pub mod tracing;
