//! Application lifecycle handlers

use super::{into_option, listener_cmd};
use crate::commands::Cmd;
use crate::messages::AppMsg;
use crate::model::AppModel;

/// Handle app messages
pub fn update_app(model: &mut AppModel, msg: AppMsg) -> Option<Cmd> {
    match msg {
        AppMsg::Teardown => {
            let closed = model.menus.close_all();
            let detach = listener_cmd(model.watcher.teardown());
            model.ui.torn_down = true;
            tracing::debug!(closed = ?closed, "shell torn down");

            let redraw = if closed.is_empty() {
                Cmd::None
            } else {
                Cmd::Redraw
            };
            into_option(Cmd::batch(vec![redraw, detach]))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ShellConfig;
    use crate::menu::MenuId;
    use crate::messages::MenuMsg;
    use crate::persistence::MemoryLayoutStore;
    use crate::update::update_menu;

    #[test]
    fn test_teardown_is_idempotent() {
        let mut model =
            AppModel::new(&ShellConfig::default(), &MemoryLayoutStore::new()).unwrap();
        update_menu(&mut model, MenuMsg::Toggle(MenuId::from("ai-assistant")));

        assert_eq!(
            update_app(&mut model, AppMsg::Teardown),
            Some(Cmd::Batch(vec![Cmd::Redraw, Cmd::DetachPointerListener]))
        );
        assert_eq!(update_app(&mut model, AppMsg::Teardown), None);
        assert!(model.ui.torn_down);
    }
}
