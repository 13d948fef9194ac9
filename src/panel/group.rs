//! Panel groups: ordered panels sharing one axis and one persistence key

use serde::{Deserialize, Serialize};
use std::fmt;

use super::handle::{DragSession, ResizeHandle};
use super::resize::{
    resize_pair, sums_to_total, validate_sizes, DragOutcome, SizeConstraint, TOTAL_SIZE,
};
use crate::error::{LayoutRejection, Result, ShellError};
use crate::geometry::{Direction, Point, Rect};
use crate::persistence::{decode_sizes, encode_sizes};

/// Width of the grab area around a handle, in pixels
pub const HANDLE_GRAB_WIDTH: f32 = 6.0;

/// Unique identifier for a panel group
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayoutId(pub String);

impl LayoutId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for LayoutId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for LayoutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a panel within its group
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PanelId(pub String);

impl From<&str> for PanelId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Declared panel: id and size bounds in percent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelSpec {
    pub id: PanelId,
    pub min_size: f64,
    pub max_size: f64,
    pub default_size: f64,
}

impl PanelSpec {
    pub fn new(id: impl Into<PanelId>, min_size: f64, max_size: f64, default_size: f64) -> Self {
        Self {
            id: id.into(),
            min_size,
            max_size,
            default_size,
        }
    }
}

/// Declared group, as written in the config file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupSpec {
    pub layout_id: LayoutId,
    #[serde(default)]
    pub direction: Direction,
    /// Defaults to the layout id
    #[serde(default)]
    pub persistence_key: Option<String>,
    /// Initial pixel geometry; hosts normally send `SetBounds` after layout
    #[serde(default)]
    pub bounds: Rect,
    pub panels: Vec<PanelSpec>,
}

impl GroupSpec {
    pub fn new(layout_id: impl Into<LayoutId>, direction: Direction, panels: Vec<PanelSpec>) -> Self {
        Self {
            layout_id: layout_id.into(),
            direction,
            persistence_key: None,
            bounds: Rect::default(),
            panels,
        }
    }

    pub fn with_persistence_key(mut self, key: impl Into<String>) -> Self {
        self.persistence_key = Some(key.into());
        self
    }

    pub fn with_bounds(mut self, bounds: Rect) -> Self {
        self.bounds = bounds;
        self
    }
}

/// A panel and its current size
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub id: PanelId,
    pub order_index: usize,
    /// Percent of the group's main axis
    pub size: f64,
    pub min_size: f64,
    pub max_size: f64,
    pub default_size: f64,
}

impl Panel {
    pub fn constraint(&self) -> SizeConstraint {
        SizeConstraint::new(self.min_size, self.max_size)
    }
}

/// Where a group's sizes came from at initialization
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutSource {
    /// A valid persisted record was applied
    Persisted,
    /// Nothing was stored; defaults applied
    Defaults,
    /// A stored record was discarded; defaults applied
    Rejected(LayoutRejection),
}

/// How a drag session ended
#[derive(Debug, Clone, PartialEq)]
pub struct DragEnd {
    pub handle_index: usize,
    /// Whether the sizes differ from the ones at press time
    pub changed: bool,
}

/// An ordered set of resizable panels
///
/// Sizes only change through whole-vector replacement, so the sum and
/// bounds invariants hold at every observable point.
#[derive(Debug, Clone)]
pub struct PanelGroup {
    layout_id: LayoutId,
    direction: Direction,
    persistence_key: String,
    panels: Vec<Panel>,
    handles: Vec<ResizeHandle>,
    bounds: Rect,
}

impl PanelGroup {
    /// Build a group at its default sizes, validating the declaration
    pub fn from_spec(spec: &GroupSpec) -> Result<Self> {
        let invalid = |reason: String| ShellError::InvalidGroup {
            layout_id: spec.layout_id.clone(),
            reason,
        };

        if spec.panels.is_empty() {
            return Err(invalid("group has no panels".to_string()));
        }

        for (index, panel) in spec.panels.iter().enumerate() {
            if spec.panels[..index].iter().any(|other| other.id == panel.id) {
                return Err(invalid(format!("duplicate panel id {}", panel.id)));
            }
            let ordered = panel.min_size >= 0.0
                && panel.min_size <= panel.default_size
                && panel.default_size <= panel.max_size
                && panel.max_size <= TOTAL_SIZE;
            if !ordered {
                return Err(invalid(format!(
                    "panel {} needs 0 <= min <= default <= max <= {}",
                    panel.id, TOTAL_SIZE
                )));
            }
        }

        let defaults: Vec<f64> = spec.panels.iter().map(|p| p.default_size).collect();
        if !sums_to_total(&defaults) {
            return Err(invalid(format!(
                "default sizes sum to {}, expected {}",
                defaults.iter().sum::<f64>(),
                TOTAL_SIZE
            )));
        }

        let panels = spec
            .panels
            .iter()
            .enumerate()
            .map(|(order_index, p)| Panel {
                id: p.id.clone(),
                order_index,
                size: p.default_size,
                min_size: p.min_size,
                max_size: p.max_size,
                default_size: p.default_size,
            })
            .collect::<Vec<_>>();
        let handles = (0..panels.len().saturating_sub(1))
            .map(ResizeHandle::new)
            .collect();

        Ok(Self {
            layout_id: spec.layout_id.clone(),
            direction: spec.direction,
            persistence_key: spec
                .persistence_key
                .clone()
                .unwrap_or_else(|| spec.layout_id.0.clone()),
            panels,
            handles,
            bounds: spec.bounds,
        })
    }

    pub fn layout_id(&self) -> &LayoutId {
        &self.layout_id
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn persistence_key(&self) -> &str {
        &self.persistence_key
    }

    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn sizes(&self) -> Vec<f64> {
        self.panels.iter().map(|p| p.size).collect()
    }

    pub fn default_sizes(&self) -> Vec<f64> {
        self.panels.iter().map(|p| p.default_size).collect()
    }

    pub fn constraints(&self) -> Vec<SizeConstraint> {
        self.panels.iter().map(Panel::constraint).collect()
    }

    pub fn handle_count(&self) -> usize {
        self.handles.len()
    }

    /// Apply a persisted record if it fits this group, defaults otherwise
    pub fn restore(&mut self, record: Option<&str>) -> LayoutSource {
        let Some(contents) = record else {
            self.apply_sizes(&self.default_sizes());
            return LayoutSource::Defaults;
        };

        let parsed = decode_sizes(contents)
            .and_then(|sizes| validate_sizes(&sizes, &self.constraints()).map(|()| sizes));

        match parsed {
            Ok(sizes) => {
                self.apply_sizes(&sizes);
                LayoutSource::Persisted
            }
            Err(reason) => {
                self.apply_sizes(&self.default_sizes());
                LayoutSource::Rejected(reason)
            }
        }
    }

    /// The record to persist for the current sizes
    pub fn persisted_record(&self) -> String {
        encode_sizes(&self.sizes())
    }

    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    /// Index of the handle with a running session
    pub fn active_handle(&self) -> Option<usize> {
        self.handles.iter().position(ResizeHandle::is_dragging)
    }

    pub fn active_session(&self) -> Option<&DragSession> {
        self.handles.iter().find_map(ResizeHandle::session)
    }

    /// Press a handle. Only one session may run per group.
    pub fn begin_drag(&mut self, handle_index: usize, position: Point) -> Result<()> {
        self.check_handle(handle_index)?;
        if self.active_handle().is_some() {
            return Err(self.drag_in_progress());
        }

        let sizes = self.sizes();
        let extent = self.direction.extent(&self.bounds);
        if extent <= 0.0 {
            tracing::debug!(
                layout = %self.layout_id,
                "drag started before group bounds were set; moves will be ignored"
            );
        }
        if !self.handles[handle_index].press(sizes, position, extent) {
            return Err(self.drag_in_progress());
        }
        Ok(())
    }

    /// Move the active session to `position` and apply the clamped result
    pub fn drag_to(&mut self, position: Point) -> Result<DragOutcome> {
        let index = self.active_handle().ok_or_else(|| self.no_drag_session())?;
        let constraints = self.constraints();
        let outcome = self.handles[index]
            .drag_to(position, self.direction, &constraints)
            .ok_or_else(|| self.no_drag_session())?;
        self.apply_sizes(&outcome.sizes);
        Ok(outcome)
    }

    /// Finish the active session (pointer released)
    pub fn end_drag(&mut self) -> Result<DragEnd> {
        let index = self.active_handle().ok_or_else(|| self.no_drag_session())?;
        let session = self.handles[index]
            .release()
            .ok_or_else(|| self.no_drag_session())?;
        Ok(self.drag_end(session))
    }

    /// Abandon the active session. The last applied sizes stay in effect.
    pub fn cancel_drag(&mut self) -> Result<DragEnd> {
        let index = self.active_handle().ok_or_else(|| self.no_drag_session())?;
        let session = self.handles[index]
            .cancel()
            .ok_or_else(|| self.no_drag_session())?;
        Ok(self.drag_end(session))
    }

    /// One-shot resize of a handle by `delta` percent (keyboard resizing)
    pub fn nudge(&mut self, handle_index: usize, delta: f64) -> Result<DragOutcome> {
        self.check_handle(handle_index)?;
        if self.active_handle().is_some() {
            return Err(self.drag_in_progress());
        }
        let outcome = resize_pair(&self.sizes(), &self.constraints(), handle_index, delta);
        self.apply_sizes(&outcome.sizes);
        Ok(outcome)
    }

    /// Restore default sizes. Returns whether anything changed.
    pub fn reset(&mut self) -> Result<bool> {
        if self.active_handle().is_some() {
            return Err(self.drag_in_progress());
        }
        let defaults = self.default_sizes();
        let changed = defaults != self.sizes();
        self.apply_sizes(&defaults);
        Ok(changed)
    }

    /// Pixel rectangles of each panel inside the group bounds
    pub fn panel_rects(&self) -> Vec<Rect> {
        let b = self.bounds;
        let extent = self.direction.extent(&b);
        let mut offset = 0.0_f32;

        self.panels
            .iter()
            .map(|panel| {
                let length = (panel.size * f64::from(extent) / TOTAL_SIZE) as f32;
                let rect = match self.direction {
                    Direction::Horizontal => Rect::new(b.x + offset, b.y, length, b.height),
                    Direction::Vertical => Rect::new(b.x, b.y + offset, b.width, length),
                };
                offset += length;
                rect
            })
            .collect()
    }

    /// Grab areas of each handle, centered on the boundary between panels
    pub fn handle_rects(&self) -> Vec<Rect> {
        let b = self.bounds;
        let half = HANDLE_GRAB_WIDTH / 2.0;

        self.panel_rects()
            .iter()
            .take(self.handles.len())
            .map(|rect| match self.direction {
                Direction::Horizontal => {
                    Rect::new(rect.right() - half, b.y, HANDLE_GRAB_WIDTH, b.height)
                }
                Direction::Vertical => {
                    Rect::new(b.x, rect.bottom() - half, b.width, HANDLE_GRAB_WIDTH)
                }
            })
            .collect()
    }

    /// Handle under a point, if any
    pub fn handle_at(&self, point: Point) -> Option<usize> {
        self.handle_rects()
            .iter()
            .position(|rect| rect.contains_point(point))
    }

    /// Replace the whole size vector at once
    fn apply_sizes(&mut self, sizes: &[f64]) {
        debug_assert_eq!(sizes.len(), self.panels.len());
        for (panel, &size) in self.panels.iter_mut().zip(sizes) {
            panel.size = size;
        }
    }

    fn drag_end(&self, session: DragSession) -> DragEnd {
        DragEnd {
            handle_index: session.handle_index,
            changed: session.start_sizes != self.sizes(),
        }
    }

    fn check_handle(&self, handle_index: usize) -> Result<()> {
        if handle_index < self.handles.len() {
            Ok(())
        } else {
            Err(ShellError::InvalidHandle {
                layout_id: self.layout_id.clone(),
                handle_index,
            })
        }
    }

    fn drag_in_progress(&self) -> ShellError {
        ShellError::DragInProgress {
            layout_id: self.layout_id.clone(),
        }
    }

    fn no_drag_session(&self) -> ShellError {
        ShellError::NoDragSession {
            layout_id: self.layout_id.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec() -> GroupSpec {
        GroupSpec::new(
            "dashboard",
            Direction::Horizontal,
            vec![
                PanelSpec::new("sidebar", 15.0, 30.0, 20.0),
                PanelSpec::new("main", 40.0, 70.0, 60.0),
                PanelSpec::new("inspector", 10.0, 30.0, 20.0),
            ],
        )
        .with_bounds(Rect::new(0.0, 0.0, 1000.0, 600.0))
    }

    #[test]
    fn test_from_spec_uses_defaults() {
        let group = PanelGroup::from_spec(&spec()).unwrap();
        assert_eq!(group.sizes(), vec![20.0, 60.0, 20.0]);
        assert_eq!(group.handle_count(), 2);
        assert_eq!(group.persistence_key(), "dashboard");
        assert_eq!(group.panels()[2].order_index, 2);
    }

    #[test]
    fn test_from_spec_rejects_bad_defaults() {
        let mut bad = spec();
        bad.panels[1].default_size = 50.0;
        assert!(matches!(
            PanelGroup::from_spec(&bad),
            Err(ShellError::InvalidGroup { .. })
        ));

        let mut bad = spec();
        bad.panels[0].min_size = 25.0;
        assert!(PanelGroup::from_spec(&bad).is_err());

        let mut bad = spec();
        bad.panels[2].id = "main".into();
        assert!(PanelGroup::from_spec(&bad).is_err());

        let mut empty = spec();
        empty.panels.clear();
        assert!(PanelGroup::from_spec(&empty).is_err());
    }

    #[test]
    fn test_restore_valid_record() {
        let mut group = PanelGroup::from_spec(&spec()).unwrap();
        let source = group.restore(Some(r#"[{"size":25.0},{"size":55.0},{"size":20.0}]"#));
        assert_eq!(source, LayoutSource::Persisted);
        assert_eq!(group.sizes(), vec![25.0, 55.0, 20.0]);
    }

    #[test]
    fn test_restore_rejects_wrong_length() {
        let mut group = PanelGroup::from_spec(&spec()).unwrap();
        let source = group.restore(Some(r#"[{"size":50.0},{"size":70.0}]"#));
        assert_eq!(
            source,
            LayoutSource::Rejected(LayoutRejection::LengthMismatch {
                expected: 3,
                found: 2
            })
        );
        assert_eq!(group.sizes(), vec![20.0, 60.0, 20.0]);
    }

    #[test]
    fn test_restore_without_record() {
        let mut group = PanelGroup::from_spec(&spec()).unwrap();
        assert_eq!(group.restore(None), LayoutSource::Defaults);
    }

    #[test]
    fn test_only_one_session_per_group() {
        let mut group = PanelGroup::from_spec(&spec()).unwrap();
        group.begin_drag(0, Point::new(200.0, 10.0)).unwrap();

        assert!(matches!(
            group.begin_drag(1, Point::new(800.0, 10.0)),
            Err(ShellError::DragInProgress { .. })
        ));
        assert!(matches!(
            group.nudge(1, 5.0),
            Err(ShellError::DragInProgress { .. })
        ));
        assert!(group.reset().is_err());
    }

    #[test]
    fn test_drag_applies_and_cancel_keeps_sizes() {
        let mut group = PanelGroup::from_spec(&spec()).unwrap();
        group.begin_drag(0, Point::new(200.0, 10.0)).unwrap();
        group.drag_to(Point::new(250.0, 10.0)).unwrap();
        assert_eq!(group.sizes(), vec![25.0, 55.0, 20.0]);

        let end = group.cancel_drag().unwrap();
        assert!(end.changed);
        assert_eq!(group.sizes(), vec![25.0, 55.0, 20.0]);
        assert!(group.active_handle().is_none());
    }

    #[test]
    fn test_drag_without_session_errors() {
        let mut group = PanelGroup::from_spec(&spec()).unwrap();
        assert!(matches!(
            group.drag_to(Point::new(10.0, 10.0)),
            Err(ShellError::NoDragSession { .. })
        ));
        assert!(group.end_drag().is_err());
        assert!(matches!(
            group.begin_drag(2, Point::default()),
            Err(ShellError::InvalidHandle { handle_index: 2, .. })
        ));
    }

    #[test]
    fn test_nudge_and_reset() {
        let mut group = PanelGroup::from_spec(&spec()).unwrap();
        group.nudge(1, -5.0).unwrap();
        assert_eq!(group.sizes(), vec![20.0, 55.0, 25.0]);

        assert!(group.reset().unwrap());
        assert_eq!(group.sizes(), vec![20.0, 60.0, 20.0]);
        assert!(!group.reset().unwrap());
    }

    #[test]
    fn test_panel_and_handle_geometry() {
        let group = PanelGroup::from_spec(&spec()).unwrap();
        let rects = group.panel_rects();
        assert_eq!(rects[0], Rect::new(0.0, 0.0, 200.0, 600.0));
        assert_eq!(rects[1], Rect::new(200.0, 0.0, 600.0, 600.0));
        assert_eq!(rects[2], Rect::new(800.0, 0.0, 200.0, 600.0));

        assert_eq!(group.handle_at(Point::new(201.0, 300.0)), Some(0));
        assert_eq!(group.handle_at(Point::new(798.0, 300.0)), Some(1));
        assert_eq!(group.handle_at(Point::new(500.0, 300.0)), None);
    }
}
