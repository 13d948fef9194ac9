//! Resize handles and their drag sessions

use super::resize::{pixels_to_percent, resize_pair, DragOutcome, SizeConstraint};
use crate::geometry::{Direction, Point};

/// State captured when a handle is pressed; lives until release or cancel
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    pub handle_index: usize,
    /// Sizes at press time. Every move is computed from these, not from the
    /// previous move, so a long drag never accumulates rounding error.
    pub start_sizes: Vec<f64>,
    pub start_position: Point,
    /// Group length along its axis at press time, in pixels
    pub extent: f32,
}

/// The draggable divider between panel `index` and panel `index + 1`
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeHandle {
    index: usize,
    session: Option<DragSession>,
}

impl ResizeHandle {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            session: None,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Start a session. Returns false if one is already running; sessions
    /// are not reentrant.
    pub fn press(&mut self, start_sizes: Vec<f64>, position: Point, extent: f32) -> bool {
        if self.session.is_some() {
            return false;
        }
        self.session = Some(DragSession {
            handle_index: self.index,
            start_sizes,
            start_position: position,
            extent,
        });
        true
    }

    /// Sizes for the pointer now being at `position`, or `None` without a session
    pub fn drag_to(
        &self,
        position: Point,
        direction: Direction,
        constraints: &[SizeConstraint],
    ) -> Option<DragOutcome> {
        let session = self.session.as_ref()?;
        let pixels = direction.project(session.start_position, position);
        let delta = pixels_to_percent(pixels, session.extent);
        Some(resize_pair(
            &session.start_sizes,
            constraints,
            self.index,
            delta,
        ))
    }

    /// End the session normally
    pub fn release(&mut self) -> Option<DragSession> {
        self.session.take()
    }

    /// End the session without a release (pointer left the surface, cancel
    /// signal). Whatever was last applied stays applied.
    pub fn cancel(&mut self) -> Option<DragSession> {
        self.session.take()
    }
}
