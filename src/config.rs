//! Labels, default fallbacks and the placeholder hint, read from
//! `~/.config/tagfield/config.yaml`

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::widget::{FallbackMap, LabelMap};

/// User-level editor settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Display labels by variable name (e.g. `email: Email Address`)
    #[serde(default)]
    pub labels: LabelMap,

    /// Default fallback values by variable name
    #[serde(default)]
    pub fallbacks: FallbackMap,

    /// Hint shown while the value is blank
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
}

fn default_placeholder() -> String {
    "Type something like: hello {{firstName}}".to_string()
}

impl Default for EditorConfig {
    fn default() -> Self {
        EditorConfig {
            labels: LabelMap::new(),
            fallbacks: FallbackMap::new(),
            placeholder: default_placeholder(),
        }
    }
}

impl EditorConfig {
    /// Config from the user's config file; defaults when absent or unreadable
    pub fn load() -> Self {
        match crate::config_paths::config_file() {
            Some(path) => Self::load_from(&path),
            None => {
                tracing::debug!("no config directory, using default editor config");
                Self::default()
            }
        }
    }

    /// Config from `path`. A missing or malformed file yields the defaults,
    /// so a bad config never stops the editor from starting.
    pub fn load_from(path: &Path) -> Self {
        if !path.is_file() {
            tracing::debug!(path = %path.display(), "no editor config file");
            return Self::default();
        }
        match Self::read(path) {
            Ok(config) => {
                tracing::info!(
                    path = %path.display(),
                    labels = config.labels.len(),
                    fallbacks = config.fallbacks.len(),
                    "editor config loaded"
                );
                config
            }
            Err(e) => {
                tracing::warn!("{}", e);
                Self::default()
            }
        }
    }

    fn read(path: &Path) -> Result<Self, String> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| format!("Cannot read {}: {}", path.display(), e))?;
        serde_yaml::from_str(&raw).map_err(|e| format!("Invalid config {}: {}", path.display(), e))
    }

    /// Write to `path`, creating missing parent directories
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        let yaml = serde_yaml::to_string(self)
            .map_err(|e| format!("Cannot encode editor config: {}", e))?;
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)
                .map_err(|e| format!("Cannot create {}: {}", dir.display(), e))?;
        }
        std::fs::write(path, yaml).map_err(|e| format!("Cannot write {}: {}", path.display(), e))?;

        tracing::info!(path = %path.display(), "editor config saved");
        Ok(())
    }
}
