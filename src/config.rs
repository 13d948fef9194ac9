//! Shell configuration persistence
//!
//! Stores the menu and panel declarations in `~/.config/dashboard-shell/config.yaml`

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::geometry::{Direction, Rect};
use crate::menu::MenuSpec;
use crate::panel::{GroupSpec, PanelSpec};
use crate::settings::AssistanceSettings;

/// Height of the header bar the menu triggers sit in
const HEADER_HEIGHT: f32 = 56.0;

/// Declarations the shell is mounted from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShellConfig {
    /// Header menus, one per trigger control
    #[serde(default = "default_menus")]
    pub menus: Vec<MenuSpec>,
    /// Resizable panel groups
    #[serde(default = "default_groups")]
    pub groups: Vec<GroupSpec>,
    /// Initial assistance settings
    #[serde(default)]
    pub assistance: AssistanceSettings,
}

fn default_menus() -> Vec<MenuSpec> {
    let trigger = |x: f32| Rect::new(x, 8.0, 40.0, 40.0);
    vec![
        MenuSpec::new(
            "tools",
            trigger(1180.0),
            Rect::new(980.0, HEADER_HEIGHT, 320.0, 420.0),
        ),
        MenuSpec::new(
            "ai-assistant",
            trigger(1230.0),
            Rect::new(1030.0, HEADER_HEIGHT, 300.0, 360.0),
        ),
        MenuSpec::new(
            "balance",
            trigger(1280.0),
            Rect::new(1100.0, HEADER_HEIGHT, 260.0, 200.0),
        ),
    ]
}

fn default_groups() -> Vec<GroupSpec> {
    vec![GroupSpec::new(
        "dashboard",
        Direction::Horizontal,
        vec![
            PanelSpec::new("sidebar", 15.0, 30.0, 20.0),
            PanelSpec::new("main", 40.0, 70.0, 60.0),
            PanelSpec::new("inspector", 10.0, 30.0, 20.0),
        ],
    )
    .with_persistence_key("dashboard-layout")
    .with_bounds(Rect::new(0.0, HEADER_HEIGHT, 1440.0, 900.0 - HEADER_HEIGHT))]
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            menus: default_menus(),
            groups: default_groups(),
            assistance: AssistanceSettings::default(),
        }
    }
}

impl ShellConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("{}", e);
                Self::default()
            }
        }
    }

    /// Load config from an explicit path
    pub fn load_from(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config at {}: {}", path.display(), e))?;
        serde_yaml::from_str(&content)
            .map_err(|e| format!("Failed to parse config at {}: {}", path.display(), e))
    }

    /// Save config to an explicit path, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}
