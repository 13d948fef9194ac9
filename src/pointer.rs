//! Pointer events and the host-side listener contract
//!
//! The host owns the real, process-wide event source. The core only asks it
//! to attach or detach one pointer-down listener through `PointerHost`.

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// Which pointer button produced an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerButton {
    #[default]
    Primary,
    Secondary,
    Middle,
}

/// A pointer event with the context needed for containment tests
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PointerEvent {
    /// Position in window coordinates
    pub position: Point,
    #[serde(default)]
    pub button: PointerButton,
}

impl PointerEvent {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            position: Point::new(x, y),
            button: PointerButton::Primary,
        }
    }
}

/// Handle for a listener registered with the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// The host's global pointer event source
pub trait PointerHost {
    /// Register the shared pointer-down listener
    fn add_pointer_listener(&mut self) -> ListenerId;

    /// Remove a listener previously returned by `add_pointer_listener`
    fn remove_pointer_listener(&mut self, id: ListenerId);
}

/// Host that only counts registrations, for headless runs and tests
#[derive(Debug, Default)]
pub struct CountingHost {
    next_id: u64,
    live: Vec<ListenerId>,
    /// Total `add_pointer_listener` calls
    pub added: usize,
    /// Total `remove_pointer_listener` calls for live listeners
    pub removed: usize,
}

impl CountingHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Listeners currently registered
    pub fn live_listeners(&self) -> usize {
        self.live.len()
    }
}

impl PointerHost for CountingHost {
    fn add_pointer_listener(&mut self) -> ListenerId {
        self.next_id += 1;
        let id = ListenerId(self.next_id);
        self.live.push(id);
        self.added += 1;
        tracing::debug!(listener = id.0, "pointer listener attached");
        id
    }

    fn remove_pointer_listener(&mut self, id: ListenerId) {
        let before = self.live.len();
        self.live.retain(|live| *live != id);
        if self.live.len() < before {
            self.removed += 1;
            tracing::debug!(listener = id.0, "pointer listener detached");
        } else {
            tracing::warn!(listener = id.0, "removal of unknown pointer listener");
        }
    }
}

impl<H: PointerHost + ?Sized> PointerHost for &mut H {
    fn add_pointer_listener(&mut self) -> ListenerId {
        (**self).add_pointer_listener()
    }

    fn remove_pointer_listener(&mut self, id: ListenerId) {
        (**self).remove_pointer_listener(id)
    }
}
