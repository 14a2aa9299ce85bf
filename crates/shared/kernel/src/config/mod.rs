use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Custom error type for config loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File or environment source failed to build or deserialize.
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
}

/// A reusable configuration loader that combines file-based settings with environment overrides.
///
/// This function implements a layered configuration strategy:
/// 1. **Base File**: Loads settings from a file (e.g., `pmt.toml`). If no path is provided, it
///    defaults to `"pmt"` in the current working directory. The file is optional; a missing file
///    leaves every field at its serde default.
/// 2. **Environment Overrides**: Overlays values from environment variables prefixed with `PMT__`.
///    Nested structures are accessed using double underscores (e.g., `PMT__BASE_URL` maps to
///    `base_url`).
///
/// # Errors
/// Returns [`ConfigError`] if a present file is malformed, the environment
/// variables are malformed, or deserialization into `T` fails.
///
/// # Example
/// ```rust
/// use pmt_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     #[serde(default)]
///     verbose: bool,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path = path.map_or_else(|| PathBuf::from("pmt"), |p| p.as_ref().to_path_buf());

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(false))
        .add_source(
            Environment::with_prefix("PMT").separator("__").convert_case(config::Case::Snake),
        );

    info!("Loading config from {}", effective_path.display());

    let config = builder.build()?.try_deserialize::<T>()?;

    Ok(config)
}
