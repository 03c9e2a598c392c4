//! Tool configuration management.
//!
//! Reads the `duotone: logo:` section of a Flutter project's pubspec.yaml
//! and provides the global verbose flag gating debug output.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

use serde::Deserialize;

// Global verbose flag for controlling debug output
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set the global verbose flag. When true, debug messages will be printed.
pub fn set_verbose(verbose: bool) {
    VERBOSE.store(verbose, Ordering::SeqCst);
}

/// Check if verbose mode is enabled.
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

/// Print a message to stderr only if verbose mode is enabled.
#[macro_export]
macro_rules! verbose_println {
    ($($arg:tt)*) => {
        if $crate::config::is_verbose() {
            eprintln!($($arg)*);
        }
    };
}

/// Built-in paths used when pubspec.yaml carries no `duotone` section.
const DEFAULT_SOURCE: &str = "assets/logo/logo.png";
const DEFAULT_LIGHT_VARIANT: &str = "assets/logo/logo_light.png";
const DEFAULT_DARK_VARIANT: &str = "assets/logo/logo_dark.png";

/// Top-level pubspec.yaml structure. Everything except the tool section is
/// ignored during deserialization.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct Manifest {
    duotone: ToolSection,
}

/// The `duotone:` mapping inside pubspec.yaml.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct ToolSection {
    logo: LogoConfig,
}

/// Logo paths configured in pubspec.yaml.
///
/// Every key is optional; absent keys fall back to the built-in defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LogoConfig {
    /// Source logo image
    pub source: PathBuf,

    /// Output path for the light-theme variant
    pub light_variant: PathBuf,

    /// Output path for the dark-theme variant
    pub dark_variant: PathBuf,
}

impl Default for LogoConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from(DEFAULT_SOURCE),
            light_variant: PathBuf::from(DEFAULT_LIGHT_VARIANT),
            dark_variant: PathBuf::from(DEFAULT_DARK_VARIANT),
        }
    }
}

/// Load the logo configuration from a pubspec.yaml file.
///
/// An unreadable file or malformed YAML aborts the run; a readable manifest
/// without a `duotone` section yields the defaults.
pub fn load_manifest<P: AsRef<Path>>(path: P) -> Result<LogoConfig, String> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;

    let manifest: Manifest = serde_yaml::from_str(&contents)
        .map_err(|e| format!("Failed to parse {}: {}", path.display(), e))?;

    Ok(manifest.duotone.logo)
}
