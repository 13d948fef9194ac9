//! Outside-interaction detection shared by all menus

use super::{MenuController, MenuId};
use crate::pointer::PointerEvent;

/// Change in the listener resource the host must apply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenerTransition {
    /// Register the pointer-down listener
    Attach,
    /// Remove the pointer-down listener
    Detach,
}

/// The single pointer-down listener behind every menu
///
/// The watcher tracks whether the listener should be registered. It never
/// talks to the host itself: `sync` and `teardown` return the transition to
/// perform, and only when the listening state actually changes, so attach
/// and detach always come in pairs.
#[derive(Debug, Clone, Default)]
pub struct OutsideInteractionWatcher {
    listening: bool,
}

impl OutsideInteractionWatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_listening(&self) -> bool {
        self.listening
    }

    /// Reconcile the listener with the menu state.
    ///
    /// Attaches on the first open menu, detaches once none remain open.
    pub fn sync(&mut self, menus: &MenuController) -> Option<ListenerTransition> {
        match (self.listening, menus.any_open()) {
            (false, true) => {
                self.listening = true;
                Some(ListenerTransition::Attach)
            }
            (true, false) => {
                self.listening = false;
                Some(ListenerTransition::Detach)
            }
            _ => None,
        }
    }

    /// Release the listener if held. Safe to call any number of times.
    pub fn teardown(&mut self) -> Option<ListenerTransition> {
        if self.listening {
            self.listening = false;
            Some(ListenerTransition::Detach)
        } else {
            None
        }
    }

    /// Close every open menu whose regions do not contain the event position.
    ///
    /// Returns the ids that were closed, in registration order. The trigger
    /// region counts as inside, so a press on the trigger that is about to
    /// toggle a menu never closes it here as well.
    pub fn handle_pointer_down(
        &self,
        menus: &mut MenuController,
        event: &PointerEvent,
    ) -> Vec<MenuId> {
        if !self.listening {
            return Vec::new();
        }

        let outside: Vec<MenuId> = menus
            .open_menus()
            .into_iter()
            .filter(|id| !menus.region_contains(id, event.position).unwrap_or(true))
            .collect();

        outside
            .into_iter()
            .filter(|id| matches!(menus.close(id), Ok(true)))
            .collect()
    }
}
