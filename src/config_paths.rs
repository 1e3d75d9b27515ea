//! Where tagfield keeps its files on disk
//!
//! `config.yaml` and `logs/` sit in one per-user directory: `%APPDATA%\tagfield`
//! on Windows, `$XDG_CONFIG_HOME/tagfield` or `~/.config/tagfield` elsewhere.

use std::{env, fs, path::PathBuf};

const APP_DIR: &str = "tagfield";
const CONFIG_FILE: &str = "config.yaml";
const LOGS_DIR: &str = "logs";

/// Per-user tagfield directory, if the platform has a home for it
pub fn config_dir() -> Option<PathBuf> {
    platform_config_root().map(|root| root.join(APP_DIR))
}

#[cfg(target_os = "windows")]
fn platform_config_root() -> Option<PathBuf> {
    env::var_os("APPDATA").map(PathBuf::from)
}

#[cfg(not(target_os = "windows"))]
fn platform_config_root() -> Option<PathBuf> {
    match env::var_os("XDG_CONFIG_HOME") {
        Some(xdg) if !xdg.is_empty() => Some(PathBuf::from(xdg)),
        _ => dirs::home_dir().map(|home| home.join(".config")),
    }
}

pub fn config_file() -> Option<PathBuf> {
    Some(config_dir()?.join(CONFIG_FILE))
}

pub fn logs_dir() -> Option<PathBuf> {
    Some(config_dir()?.join(LOGS_DIR))
}

/// Create the log directory if needed and return it
pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    let dir = logs_dir().ok_or("No config directory available")?;
    fs::create_dir_all(&dir).map_err(|e| format!("Cannot create {}: {}", dir.display(), e))?;
    Ok(dir)
}
