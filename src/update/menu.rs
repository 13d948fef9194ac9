//! Menu message handlers

use super::{into_option, sync_listener};
use crate::commands::Cmd;
use crate::error::Result;
use crate::messages::MenuMsg;
use crate::model::AppModel;

/// Handle menu messages
pub fn update_menu(model: &mut AppModel, msg: MenuMsg) -> Option<Cmd> {
    match apply(model, msg) {
        Ok(true) => into_option(Cmd::batch(vec![Cmd::Redraw, sync_listener(model)])),
        Ok(false) => None,
        Err(e) => {
            tracing::warn!("menu update rejected: {}", e);
            model.ui.record_error(e);
            None
        }
    }
}

/// Apply a menu message, returning whether visible state changed
fn apply(model: &mut AppModel, msg: MenuMsg) -> Result<bool> {
    match msg {
        MenuMsg::Toggle(id) => {
            let open = model.menus.toggle(&id)?;
            tracing::debug!(menu = %id, open, "menu toggled");
            Ok(true)
        }
        MenuMsg::Open(id) => {
            let changed = model.menus.open(&id)?;
            if changed {
                tracing::debug!(menu = %id, "menu opened");
            }
            Ok(changed)
        }
        MenuMsg::Close(id) => {
            let changed = model.menus.close(&id)?;
            if changed {
                tracing::debug!(menu = %id, "menu closed");
            }
            Ok(changed)
        }
        MenuMsg::SetRegions {
            id,
            trigger,
            content,
        } => {
            model.menus.set_regions(&id, trigger, content)?;
            Ok(true)
        }
        MenuMsg::Register(spec) => {
            let id = spec.id.clone();
            model.menus.register(spec)?;
            tracing::debug!(menu = %id, "menu registered");
            Ok(true)
        }
        MenuMsg::Unregister(id) => {
            let was_open = model.menus.unregister(&id)?;
            tracing::debug!(menu = %id, was_open, "menu unregistered");
            Ok(true)
        }
    }
}
