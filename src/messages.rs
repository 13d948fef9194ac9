//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use serde::{Deserialize, Serialize};

use crate::geometry::{Point, Rect};
use crate::menu::{MenuId, MenuSpec};
use crate::panel::LayoutId;
use crate::pointer::PointerEvent;
use crate::settings::AssistanceLevel;

/// Header menu messages (trigger activations and registration)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuMsg {
    /// Trigger activated: flip the menu's open state
    Toggle(MenuId),
    /// Open explicitly (no-op if already open)
    Open(MenuId),
    /// Close explicitly (no-op if already closed)
    Close(MenuId),
    /// Host measured new trigger/content rectangles
    SetRegions {
        id: MenuId,
        trigger: Rect,
        content: Rect,
    },
    /// Add a menu after mount
    Register(MenuSpec),
    /// Remove a menu, closing it first
    Unregister(MenuId),
}

/// Global pointer events, routed through the outside-interaction watcher
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerMsg {
    /// Pointer pressed anywhere in the document
    Down(PointerEvent),
}

/// Panel layout messages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutMsg {
    /// Press on a resize handle
    BeginResize {
        layout_id: LayoutId,
        handle_index: usize,
        position: Point,
    },
    /// Pointer moved during a drag session
    ResizeMove { layout_id: LayoutId, position: Point },
    /// Pointer released
    EndResize(LayoutId),
    /// Pointer left the tracked surface or the host cancelled the drag
    CancelResize(LayoutId),
    /// One-shot keyboard resize by `delta` percent
    Nudge {
        layout_id: LayoutId,
        handle_index: usize,
        delta: f64,
    },
    /// Restore default sizes
    Reset(LayoutId),
    /// Host measured the group's pixel rectangle
    SetBounds { layout_id: LayoutId, bounds: Rect },
    /// Background write finished
    #[serde(skip)]
    PersistCompleted {
        key: String,
        result: Result<(), String>,
    },
}

/// Assistance settings messages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettingsMsg {
    SetSuggestions(bool),
    SetAutoCompletion(bool),
    SetProactiveAlerts(bool),
    SetAssistanceLevel(AssistanceLevel),
}

/// Application lifecycle messages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppMsg {
    /// Shell is unmounting: close menus and release the listener
    Teardown,
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Msg {
    Menu(MenuMsg),
    Pointer(PointerMsg),
    Layout(LayoutMsg),
    Settings(SettingsMsg),
    App(AppMsg),
}

impl Msg {
    /// Convenience for the most common message
    pub fn toggle(id: impl Into<MenuId>) -> Self {
        Msg::Menu(MenuMsg::Toggle(id.into()))
    }

    pub fn pointer_down(x: f32, y: f32) -> Self {
        Msg::Pointer(PointerMsg::Down(PointerEvent::new(x, y)))
    }
}
