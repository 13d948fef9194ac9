//! Where dashboard-shell keeps its files
//!
//! Configuration and runtime state are kept apart:
//! - config (`config.yaml`): `$XDG_CONFIG_HOME/dashboard-shell`, else
//!   `~/.config/dashboard-shell`; `%APPDATA%\dashboard-shell` on Windows
//! - state (`layouts/`, `logs/`): `$XDG_STATE_HOME/dashboard-shell`, else the
//!   platform state dir, else the config dir
//!
//! Every other module asks here; nothing else builds these paths.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

const APP_DIR: &str = "dashboard-shell";

/// `<base>/dashboard-shell`, where base comes from `var` if set, else `fallback`
fn app_dir(var: &str, fallback: impl FnOnce() -> Option<PathBuf>) -> Option<PathBuf> {
    env::var_os(var)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .or_else(fallback)
        .map(|base| base.join(APP_DIR))
}

/// Directory holding `config.yaml`
pub fn config_dir() -> Option<PathBuf> {
    if cfg!(target_os = "windows") {
        app_dir("APPDATA", || None)
    } else {
        app_dir("XDG_CONFIG_HOME", || {
            dirs::home_dir().map(|home| home.join(".config"))
        })
    }
}

/// Directory for data the shell writes itself
pub fn state_dir() -> Option<PathBuf> {
    app_dir("XDG_STATE_HOME", dirs::state_dir).or_else(config_dir)
}

pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}

/// One `<key>.json` per persisted panel group
pub fn layouts_dir() -> Option<PathBuf> {
    state_dir().map(|dir| dir.join("layouts"))
}

pub fn logs_dir() -> Option<PathBuf> {
    state_dir().map(|dir| dir.join("logs"))
}

fn create(dir: Option<PathBuf>, what: &str) -> Result<PathBuf, String> {
    let dir = dir.ok_or_else(|| format!("No {} directory available", what))?;
    ensure_dir(&dir)?;
    Ok(dir)
}

fn ensure_dir(path: &Path) -> Result<(), String> {
    fs::create_dir_all(path)
        .map_err(|e| format!("Failed to create directory {}: {}", path.display(), e))
}

/// Create the logs dir if needed, returning it
pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    create(logs_dir(), "logs")
}
