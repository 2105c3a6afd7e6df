//! File-based input and output.

/// CSV batch estimation.
pub mod batch;
