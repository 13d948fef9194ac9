//! Application model - the complete state of the dashboard shell
//!
//! This module contains all the state types following the Elm Architecture pattern.

pub mod ui;

pub use ui::UiState;

use crate::config::ShellConfig;
use crate::error::Result;
use crate::menu::{MenuController, OutsideInteractionWatcher};
use crate::panel::{LayoutId, LayoutSource, PanelLayoutManager};
use crate::persistence::LayoutStore;
use crate::settings::AssistanceSettings;

/// The complete application model
#[derive(Debug, Clone)]
pub struct AppModel {
    /// Open/closed state of every header menu
    pub menus: MenuController,
    /// Shared outside-click listener state
    pub watcher: OutsideInteractionWatcher,
    /// Resizable panel groups
    pub layouts: PanelLayoutManager,
    /// Assistant menu options
    pub settings: AssistanceSettings,
    pub ui: UiState,
    /// Where each group's sizes came from at mount
    pub layout_sources: Vec<(LayoutId, LayoutSource)>,
}

impl AppModel {
    /// Build the model from declarations, restoring persisted layouts from `store`
    pub fn new(config: &ShellConfig, store: &dyn LayoutStore) -> Result<Self> {
        let menus = MenuController::with_menus(&config.menus)?;

        let mut layouts = PanelLayoutManager::new();
        let mut layout_sources = Vec::with_capacity(config.groups.len());
        for spec in &config.groups {
            let source = layouts.register(spec, store)?;
            layout_sources.push((spec.layout_id.clone(), source));
        }

        tracing::debug!(
            menus = menus.len(),
            groups = layout_sources.len(),
            "model initialized"
        );

        Ok(Self {
            menus,
            watcher: OutsideInteractionWatcher::new(),
            layouts,
            settings: config.assistance.clone(),
            ui: UiState::new(),
            layout_sources,
        })
    }

    pub fn layout_source(&self, id: &LayoutId) -> Option<&LayoutSource> {
        self.layout_sources
            .iter()
            .find(|(layout_id, _)| layout_id == id)
            .map(|(_, source)| source)
    }
}
