//! Shared utilities for duotone-cli
//!
//! Path resolution helpers that combine pubspec configuration with direct
//! command-line overrides.

pub mod paths;

// Re-export commonly used items at the crate root for convenience
pub use paths::{resolve_variant_paths, VariantPaths, DEFAULT_DARK_NAME, DEFAULT_LIGHT_NAME};
