//! Tracing/logging setup shared by binaries.

/// Tracing configuration (filters, layers).
pub mod tracing;

/// Initialize process-wide observability.
///
/// `fallback` is the filter used when `RUST_LOG` is unset, usually
/// [`tracing::DEFAULT_FILTER`]. This is safe to call multiple times;
/// subsequent calls become no-ops.
pub fn init(fallback: &str) {
    tracing::init(fallback);
}
