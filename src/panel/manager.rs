//! Owns every panel group and their persistence

use std::collections::HashMap;

use super::group::{DragEnd, GroupSpec, LayoutId, LayoutSource, PanelGroup};
use super::resize::DragOutcome;
use crate::error::{Result, ShellError};
use crate::geometry::{Point, Rect};
use crate::persistence::LayoutStore;

/// A layout record ready to be written by the host
#[derive(Debug, Clone, PartialEq)]
pub struct PersistRequest {
    pub key: String,
    pub contents: String,
}

/// All panel groups of the shell, keyed by layout id
#[derive(Debug, Clone, Default)]
pub struct PanelLayoutManager {
    groups: HashMap<LayoutId, PanelGroup>,
    order: Vec<LayoutId>,
}

impl PanelLayoutManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a group, restoring its sizes from `store` when a valid record exists.
    ///
    /// An unreadable or invalid record is logged and replaced by defaults.
    pub fn register(&mut self, spec: &GroupSpec, store: &dyn LayoutStore) -> Result<LayoutSource> {
        if self.groups.contains_key(&spec.layout_id) {
            return Err(ShellError::InvalidGroup {
                layout_id: spec.layout_id.clone(),
                reason: "layout id already registered".to_string(),
            });
        }

        let mut group = PanelGroup::from_spec(spec)?;
        let key = group.persistence_key().to_string();

        let record = match store.load(&key) {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!(key = %key, "failed to read persisted layout: {}", e);
                None
            }
        };

        let source = group.restore(record.as_deref());
        match &source {
            LayoutSource::Persisted => {
                tracing::debug!(key = %key, sizes = ?group.sizes(), "restored persisted layout");
            }
            LayoutSource::Defaults => {
                tracing::debug!(key = %key, "no persisted layout, using defaults");
            }
            LayoutSource::Rejected(reason) => {
                let error = ShellError::InvalidPersistedLayout {
                    key: key.clone(),
                    reason: reason.clone(),
                };
                tracing::warn!("{}", error);
            }
        }

        self.order.push(spec.layout_id.clone());
        self.groups.insert(spec.layout_id.clone(), group);
        Ok(source)
    }

    pub fn group(&self, id: &LayoutId) -> Result<&PanelGroup> {
        self.groups
            .get(id)
            .ok_or_else(|| ShellError::UnknownGroup(id.clone()))
    }

    fn group_mut(&mut self, id: &LayoutId) -> Result<&mut PanelGroup> {
        self.groups
            .get_mut(id)
            .ok_or_else(|| ShellError::UnknownGroup(id.clone()))
    }

    /// Groups in registration order
    pub fn groups(&self) -> impl Iterator<Item = &PanelGroup> {
        self.order.iter().filter_map(|id| self.groups.get(id))
    }

    pub fn sizes(&self, id: &LayoutId) -> Result<Vec<f64>> {
        Ok(self.group(id)?.sizes())
    }

    pub fn set_bounds(&mut self, id: &LayoutId, bounds: Rect) -> Result<()> {
        self.group_mut(id)?.set_bounds(bounds);
        Ok(())
    }

    /// First handle (in group order) under a point
    pub fn handle_at(&self, point: Point) -> Option<(LayoutId, usize)> {
        self.groups().find_map(|group| {
            group
                .handle_at(point)
                .map(|index| (group.layout_id().clone(), index))
        })
    }

    /// Whether any group has a drag session running
    pub fn is_dragging(&self) -> bool {
        self.groups.values().any(|group| group.active_handle().is_some())
    }

    pub fn begin_resize(&mut self, id: &LayoutId, handle_index: usize, position: Point) -> Result<()> {
        self.group_mut(id)?.begin_drag(handle_index, position)
    }

    pub fn resize_to(&mut self, id: &LayoutId, position: Point) -> Result<DragOutcome> {
        self.group_mut(id)?.drag_to(position)
    }

    pub fn end_resize(&mut self, id: &LayoutId) -> Result<DragEnd> {
        self.group_mut(id)?.end_drag()
    }

    pub fn cancel_resize(&mut self, id: &LayoutId) -> Result<DragEnd> {
        self.group_mut(id)?.cancel_drag()
    }

    pub fn nudge(&mut self, id: &LayoutId, handle_index: usize, delta: f64) -> Result<DragOutcome> {
        self.group_mut(id)?.nudge(handle_index, delta)
    }

    pub fn reset(&mut self, id: &LayoutId) -> Result<bool> {
        self.group_mut(id)?.reset()
    }

    /// The record to write for a group's current sizes
    pub fn persist_request(&self, id: &LayoutId) -> Result<PersistRequest> {
        let group = self.group(id)?;
        Ok(PersistRequest {
            key: group.persistence_key().to_string(),
            contents: group.persisted_record(),
        })
    }

    /// Write a group's sizes synchronously.
    ///
    /// Failure leaves the in-memory layout untouched.
    pub fn persist(&self, id: &LayoutId, store: &dyn LayoutStore) -> Result<()> {
        let request = self.persist_request(id)?;
        store
            .save(&request.key, &request.contents)
            .map_err(|e| ShellError::PersistenceWriteFailure {
                key: request.key,
                message: e.to_string(),
            })
    }
}
