//! Output path resolution.

use std::path::PathBuf;

use duotone_core::config::LogoConfig;

/// Default output filename for the light variant when `--out-dir` is used
pub const DEFAULT_LIGHT_NAME: &str = "logo_light.png";

/// Default output filename for the dark variant when `--out-dir` is used
pub const DEFAULT_DARK_NAME: &str = "logo_dark.png";

/// Fully resolved input and output paths for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantPaths {
    /// Source logo image
    pub source: PathBuf,

    /// Light-theme output path
    pub light: PathBuf,

    /// Dark-theme output path
    pub dark: PathBuf,
}

/// Resolve run paths from the pubspec config plus CLI overrides.
///
/// Explicit overrides take precedence over configured values: `input`
/// replaces the source, and `out_dir` (with optional filenames) replaces
/// both output paths.
pub fn resolve_variant_paths(
    config: &LogoConfig,
    input: Option<PathBuf>,
    out_dir: Option<PathBuf>,
    light_name: Option<String>,
    dark_name: Option<String>,
) -> VariantPaths {
    let source = input.unwrap_or_else(|| config.source.clone());

    let (light, dark) = if let Some(dir) = out_dir {
        (
            dir.join(light_name.as_deref().unwrap_or(DEFAULT_LIGHT_NAME)),
            dir.join(dark_name.as_deref().unwrap_or(DEFAULT_DARK_NAME)),
        )
    } else {
        (config.light_variant.clone(), config.dark_variant.clone())
    };

    VariantPaths {
        source,
        light,
        dark,
    }
}
