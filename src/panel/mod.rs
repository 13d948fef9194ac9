//! Panel system - resizable panel groups with persisted sizes
//!
//! A page is split into groups of adjacent panels (the dashboard's sidebar,
//! main area and inspector). Each panel has a size in percent of the group's
//! main axis, bounded by its own min/max, and the sizes of a group always add
//! up to 100.
//!
//! ## Architecture
//!
//! - `resize_pair`: pure drag math, `(start sizes, constraints, delta) → sizes`
//! - `ResizeHandle` / `DragSession`: press → move* → release lifecycle of one
//!   divider
//! - `PanelGroup`: ordered panels, their handles and pixel geometry
//! - `PanelLayoutManager`: all groups, keyed by `LayoutId`, plus restore and
//!   persist through a `LayoutStore`

mod group;
mod handle;
mod manager;
pub mod resize;

pub use group::{
    DragEnd, GroupSpec, LayoutId, LayoutSource, Panel, PanelGroup, PanelId, PanelSpec,
    HANDLE_GRAB_WIDTH,
};
pub use handle::{DragSession, ResizeHandle};
pub use manager::{PanelLayoutManager, PersistRequest};
pub use resize::{
    resize_pair, Bound, ConstraintViolation, DragOutcome, SizeConstraint, SIZE_TOLERANCE,
    TOTAL_SIZE,
};
