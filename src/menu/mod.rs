//! Menu system - independent dropdown overlays and outside-click dismissal
//!
//! Header menus (tool catalog, assistant settings, balance, ...) are addressed
//! by an opaque `MenuId`. The core never looks at what a menu displays; it
//! only tracks open/closed state and the two screen regions that count as
//! "inside" the menu.
//!
//! ## Architecture
//!
//! - `MenuController`: one map from menu id to menu state. Menus are fully
//!   independent; opening one never closes another.
//! - `OutsideInteractionWatcher`: the single shared pointer listener. It is
//!   attached while any menu is open and closes every open menu whose trigger
//!   and content regions both miss a pointer-down.

mod controller;
mod watcher;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::geometry::Rect;

pub use controller::MenuController;
pub use watcher::{ListenerTransition, OutsideInteractionWatcher};

/// Unique identifier for a menu, assigned by the trigger that owns it
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuId(pub String);

impl MenuId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for MenuId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for MenuId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for MenuId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Registration record for a menu: its id and the regions used for hit-testing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuSpec {
    pub id: MenuId,
    /// Screen area of the trigger control
    #[serde(default)]
    pub trigger: Rect,
    /// Screen area the content overlay occupies once open
    #[serde(default)]
    pub content: Rect,
}

impl MenuSpec {
    pub fn new(id: impl Into<MenuId>, trigger: Rect, content: Rect) -> Self {
        Self {
            id: id.into(),
            trigger,
            content,
        }
    }
}
