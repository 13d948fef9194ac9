//! Replay scripts: a YAML list of messages fed through a headless shell
//!
//! ```yaml
//! steps:
//!   - menu:
//!       toggle: tools
//!   - pointer:
//!       down:
//!         position: { x: 10, y: 500 }
//!   - layout:
//!       nudge: { layout_id: dashboard, handle_index: 0, delta: 5 }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::menu::MenuId;
use crate::messages::Msg;
use crate::model::AppModel;
use crate::pointer::PointerHost;
use crate::runtime::Shell;
use crate::settings::AssistanceSettings;

/// A recorded sequence of host events
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub steps: Vec<Msg>,
}

impl Script {
    pub fn from_yaml(source: &str) -> Result<Self, String> {
        serde_yaml::from_str(source).map_err(|e| format!("Failed to parse script: {}", e))
    }

    pub fn load(path: &Path) -> Result<Self, String> {
        let source = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read script at {}: {}", path.display(), e))?;
        Self::from_yaml(&source)
    }

    /// Dispatch every step, applying finished writes between steps.
    /// Waits for all writes before returning.
    pub fn run<H: PointerHost>(&self, shell: &mut Shell<H>) {
        for (index, msg) in self.steps.iter().enumerate() {
            tracing::debug!(step = index, "replaying step");
            shell.dispatch(msg.clone());
            shell.pump();
        }
        shell.flush();
    }
}

/// Final state printed after a replay
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub open_menus: Vec<MenuId>,
    pub listening: bool,
    pub layouts: BTreeMap<String, Vec<f64>>,
    pub settings: AssistanceSettings,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_persist_error: Option<String>,
}

impl Report {
    pub fn from_model(model: &AppModel) -> Self {
        Self {
            open_menus: model.menus.open_menus(),
            listening: model.watcher.is_listening(),
            layouts: model
                .layouts
                .groups()
                .map(|group| (group.layout_id().to_string(), group.sizes()))
                .collect(),
            settings: model.settings.clone(),
            last_error: model.ui.last_error.clone(),
            last_persist_error: model.ui.last_persist_error.clone(),
        }
    }
}
