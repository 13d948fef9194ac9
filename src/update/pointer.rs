//! Global pointer handling (outside-click dismissal)

use super::{into_option, sync_listener};
use crate::commands::Cmd;
use crate::messages::PointerMsg;
use crate::model::AppModel;

/// Handle pointer messages
pub fn update_pointer(model: &mut AppModel, msg: PointerMsg) -> Option<Cmd> {
    match msg {
        PointerMsg::Down(event) => {
            let closed = model
                .watcher
                .handle_pointer_down(&mut model.menus, &event);
            if closed.is_empty() {
                return None;
            }

            tracing::debug!(
                x = event.position.x,
                y = event.position.y,
                button = ?event.button,
                closed = ?closed,
                "outside interaction closed menus"
            );
            into_option(Cmd::batch(vec![Cmd::Redraw, sync_listener(model)]))
        }
    }
}
