//! Error taxonomy for the interaction core
//!
//! Every variant is recoverable. The update layer logs it, records it in
//! `UiState::last_error` and carries on with a safe fallback.

use thiserror::Error;

use crate::menu::MenuId;
use crate::panel::LayoutId;

/// Why a persisted size vector was discarded in favour of defaults
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutRejection {
    #[error("record is not valid JSON: {0}")]
    Corrupt(String),

    #[error("record has {found} entries, group has {expected} panels")]
    LengthMismatch { expected: usize, found: usize },

    #[error("panel {index} size {size} outside [{min}, {max}]")]
    OutOfRange {
        index: usize,
        size: f64,
        min: f64,
        max: f64,
    },

    #[error("sizes sum to {0}, expected 100")]
    BadSum(f64),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShellError {
    #[error("unknown menu: {0}")]
    UnknownMenu(MenuId),

    #[error("menu already registered: {0}")]
    DuplicateMenu(MenuId),

    #[error("unknown panel group: {0}")]
    UnknownGroup(LayoutId),

    #[error("invalid panel group {layout_id}: {reason}")]
    InvalidGroup { layout_id: LayoutId, reason: String },

    #[error("group {layout_id} has no handle {handle_index}")]
    InvalidHandle {
        layout_id: LayoutId,
        handle_index: usize,
    },

    #[error("a drag session is already active on group {layout_id}")]
    DragInProgress { layout_id: LayoutId },

    #[error("no drag session is active on group {layout_id}")]
    NoDragSession { layout_id: LayoutId },

    #[error("discarded persisted layout {key}: {reason}")]
    InvalidPersistedLayout {
        key: String,
        reason: LayoutRejection,
    },

    #[error("failed to persist layout {key}: {message}")]
    PersistenceWriteFailure { key: String, message: String },
}

pub type Result<T, E = ShellError> = std::result::Result<T, E>;
