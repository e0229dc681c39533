//! Exporter settings.
//!
//! Read from `exporter.json` in the app config directory when present,
//! then overridden by environment variables:
//! - `TEXTEXPORT_DIR`: target directory name under the storage root
//! - `TEXTEXPORT_ROOT`: storage root itself

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const ENV_DIRECTORY: &str = "TEXTEXPORT_DIR";
pub const ENV_ROOT: &str = "TEXTEXPORT_ROOT";

fn default_max_name_length() -> usize {
    64
}

fn default_directory_name() -> String {
    "TextExports".to_string()
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExporterSettings {
    #[serde(default = "default_max_name_length")]
    pub max_name_length: usize,
    #[serde(default = "default_directory_name")]
    pub directory_name: String,
    /// Overrides the platform storage root when set.
    #[serde(default)]
    pub storage_root: Option<PathBuf>,
}

impl Default for ExporterSettings {
    fn default() -> Self {
        Self {
            max_name_length: default_max_name_length(),
            directory_name: default_directory_name(),
            storage_root: None,
        }
    }
}

impl ExporterSettings {
    pub const FILE_NAME: &'static str = "exporter.json";

    /// Load settings from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("no settings at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from `lookup`. Blank values are ignored.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(dir) = lookup(ENV_DIRECTORY) {
            let dir = dir.trim();
            if !dir.is_empty() {
                self.directory_name = dir.to_string();
            }
        }
        if let Some(root) = lookup(ENV_ROOT) {
            let root = root.trim();
            if !root.is_empty() {
                self.storage_root = Some(PathBuf::from(root));
            }
        }
        self
    }
}
