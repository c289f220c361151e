//! TOML settings for the `scheroku` binary.
//!
//! ```toml
//! default_size = "2X"
//! format = "json"
//! ```
//!
//! Both keys are optional; a missing file is an error, an empty one is not.

use std::path::Path;

use scheroku_types::DynoSize;
use serde::Deserialize;
use thiserror::Error;

use crate::report::Format;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Size reported by `scheroku default`.
    pub default_size: DynoSize,
    /// Output format for `scheroku list` when `--format` is not given.
    pub format: Format,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_size: DynoSize::X1,
            format: Format::Pretty,
        }
    }
}

impl Settings {
    pub fn from_toml_str(s: &str) -> Result<Self, SettingsError> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let src = std::fs::read_to_string(path)?;
        let settings = Self::from_toml_str(&src)?;
        tracing::debug!(path = %path.display(), ?settings, "loaded settings");
        Ok(settings)
    }
}
