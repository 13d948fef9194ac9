//! Assistance settings shown in the assistant menu
//!
//! Plain in-memory options, independent of menu and panel state.

use serde::{Deserialize, Serialize};

/// How eagerly the assistant offers help
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssistanceLevel {
    Minimal,
    #[default]
    Balanced,
    Proactive,
}

impl AssistanceLevel {
    pub const ALL: [AssistanceLevel; 3] = [
        AssistanceLevel::Minimal,
        AssistanceLevel::Balanced,
        AssistanceLevel::Proactive,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            AssistanceLevel::Minimal => "minimal",
            AssistanceLevel::Balanced => "balanced",
            AssistanceLevel::Proactive => "proactive",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AssistanceSettings {
    pub suggestions: bool,
    pub auto_completion: bool,
    pub proactive_alerts: bool,
    pub assistance_level: AssistanceLevel,
}

impl Default for AssistanceSettings {
    fn default() -> Self {
        Self {
            suggestions: true,
            auto_completion: true,
            proactive_alerts: false,
            assistance_level: AssistanceLevel::Balanced,
        }
    }
}

impl AssistanceSettings {
    pub fn set_suggestions(&mut self, enabled: bool) {
        self.suggestions = enabled;
    }

    pub fn set_auto_completion(&mut self, enabled: bool) {
        self.auto_completion = enabled;
    }

    pub fn set_proactive_alerts(&mut self, enabled: bool) {
        self.proactive_alerts = enabled;
    }

    pub fn set_assistance_level(&mut self, level: AssistanceLevel) {
        self.assistance_level = level;
    }
}
