//! Command line, exports, error handling and constants

/// Command-line interface and batch runner
pub mod cli;
/// Algorithm constants and runtime defaults
pub mod configuration;
/// Error types and result alias
pub mod error;
/// CSV export
pub mod export;
/// PNG rendering and export
pub mod image;
/// Batch progress display
pub mod progress;
