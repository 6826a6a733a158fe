//! Host-facing configuration and input/output
//!
//! This module contains:
//! - Error types shared by the whole crate
//! - Configuration constants and solver settings
//! - Bundled pattern tables
//! - Tile image loading, synthesis and grid rendering
//! - The command-line runner and its progress display

/// Command-line interface and batch runner
pub mod cli;
/// Constants and solver configuration
pub mod configuration;
/// Error types and helpers
pub mod error;
/// Tile image loading and PNG export
pub mod image;
/// Bundled pattern tables
pub mod presets;
/// Progress display for solver runs
pub mod progress;
