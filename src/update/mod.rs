//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions. Errors never
//! escape: each sub-handler logs them and records them in `UiState`.

mod app;
mod layout;
mod menu;
mod pointer;
mod settings;

use crate::commands::Cmd;
use crate::menu::ListenerTransition;
use crate::messages::Msg;
use crate::model::AppModel;

#[cfg(debug_assertions)]
use crate::tracing::ShellSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use app::update_app;
pub use layout::update_layout;
pub use menu::update_menu;
pub use pointer::update_pointer;
pub use settings::update_settings;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Menu(m) => menu::update_menu(model, m),
        Msg::Pointer(m) => pointer::update_pointer(model, m),
        Msg::Layout(m) => layout::update_layout(model, m),
        Msg::Settings(m) => settings::update_settings(model, m),
        Msg::App(m) => app::update_app(model, m),
    }
}

/// Update with tracing instrumentation (debug builds only)
#[cfg(debug_assertions)]
fn update_traced(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    use crate::messages::LayoutMsg;

    // Pointer moves arrive at frame rate during a drag
    let is_noisy = matches!(&msg, Msg::Layout(LayoutMsg::ResizeMove { .. }));

    let msg_name = msg_type_name(&msg);
    let _span = if is_noisy {
        None
    } else {
        Some(span!(Level::DEBUG, "update", msg = %msg_name).entered())
    };

    let before = ShellSnapshot::from_model(model);

    if !is_noisy {
        debug!(target: "message", msg = %msg_name, "processing");
    }

    let result = update_inner(model, msg);

    let after = ShellSnapshot::from_model(model);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "shell", %diff, "state changed");
    }
    after.assert_invariants(&msg_name);

    result
}

/// Get a display name for a message type
///
/// Uses Debug formatting to include variant names and arguments.
/// Example outputs:
/// - `Menu(Toggle(MenuId("tools")))`
/// - `Layout(Reset(LayoutId("dashboard")))`
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    let full = format!("{:?}", msg);
    if full.len() > 120 {
        let mut end = 117;
        while !full.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &full[..end])
    } else {
        full
    }
}

/// Map a watcher transition to the command the runtime executes
fn listener_cmd(transition: Option<ListenerTransition>) -> Cmd {
    match transition {
        Some(ListenerTransition::Attach) => Cmd::AttachPointerListener,
        Some(ListenerTransition::Detach) => Cmd::DetachPointerListener,
        None => Cmd::None,
    }
}

/// Reconcile the shared listener after menu state changed
fn sync_listener(model: &mut AppModel) -> Cmd {
    listener_cmd(model.watcher.sync(&model.menus))
}

/// Wrap a command for return, turning `Cmd::None` into `None`
fn into_option(cmd: Cmd) -> Option<Cmd> {
    match cmd {
        Cmd::None => None,
        cmd => Some(cmd),
    }
}
