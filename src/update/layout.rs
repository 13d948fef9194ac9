//! Panel layout message handlers
//!
//! Drags mutate sizes in place; persistence is emitted as `Cmd::PersistLayout`
//! when a session ends (or a one-shot resize is applied) and reported back
//! through `LayoutMsg::PersistCompleted`.

use crate::commands::Cmd;
use crate::error::{Result, ShellError};
use crate::messages::LayoutMsg;
use crate::model::AppModel;
use crate::panel::{DragOutcome, LayoutId};

/// Handle layout messages
pub fn update_layout(model: &mut AppModel, msg: LayoutMsg) -> Option<Cmd> {
    match apply(model, msg) {
        Ok(cmd) => cmd,
        Err(e) => {
            tracing::warn!("layout update rejected: {}", e);
            model.ui.record_error(e);
            None
        }
    }
}

fn apply(model: &mut AppModel, msg: LayoutMsg) -> Result<Option<Cmd>> {
    match msg {
        LayoutMsg::BeginResize {
            layout_id,
            handle_index,
            position,
        } => {
            model
                .layouts
                .begin_resize(&layout_id, handle_index, position)?;
            tracing::debug!(layout = %layout_id, handle_index, "resize started");
            Ok(None)
        }

        LayoutMsg::ResizeMove {
            layout_id,
            position,
        } => {
            let outcome = model.layouts.resize_to(&layout_id, position)?;
            trace_clamp(&layout_id, &outcome);
            Ok(Some(Cmd::Redraw))
        }

        LayoutMsg::EndResize(layout_id) => {
            let end = model.layouts.end_resize(&layout_id)?;
            tracing::debug!(
                layout = %layout_id,
                handle_index = end.handle_index,
                sizes = ?model.layouts.sizes(&layout_id)?,
                "resize finished"
            );
            Ok(Some(persist_cmd(model, &layout_id)?))
        }

        LayoutMsg::CancelResize(layout_id) => {
            let end = model.layouts.cancel_resize(&layout_id)?;
            tracing::debug!(
                layout = %layout_id,
                handle_index = end.handle_index,
                changed = end.changed,
                "resize cancelled"
            );
            // Keep the stored record in step with what is on screen
            if end.changed {
                Ok(Some(persist_cmd(model, &layout_id)?))
            } else {
                Ok(None)
            }
        }

        LayoutMsg::Nudge {
            layout_id,
            handle_index,
            delta,
        } => {
            let outcome = model.layouts.nudge(&layout_id, handle_index, delta)?;
            trace_clamp(&layout_id, &outcome);
            if outcome.applied_delta == 0.0 {
                return Ok(None);
            }
            Ok(Some(Cmd::batch(vec![
                Cmd::Redraw,
                persist_cmd(model, &layout_id)?,
            ])))
        }

        LayoutMsg::Reset(layout_id) => {
            let changed = model.layouts.reset(&layout_id)?;
            tracing::debug!(layout = %layout_id, changed, "layout reset to defaults");
            Ok(Some(Cmd::batch(vec![
                Cmd::Redraw,
                persist_cmd(model, &layout_id)?,
            ])))
        }

        LayoutMsg::SetBounds { layout_id, bounds } => {
            model.layouts.set_bounds(&layout_id, bounds)?;
            Ok(Some(Cmd::Redraw))
        }

        LayoutMsg::PersistCompleted { key, result } => {
            match result {
                Ok(()) => {
                    tracing::debug!(key = %key, "layout persisted");
                    model.ui.last_persist_error = None;
                }
                Err(message) => {
                    let error = ShellError::PersistenceWriteFailure { key, message };
                    tracing::warn!("{}", error);
                    model.ui.last_persist_error = Some(error.to_string());
                    model.ui.record_error(error);
                }
            }
            Ok(None)
        }
    }
}

fn persist_cmd(model: &AppModel, layout_id: &LayoutId) -> Result<Cmd> {
    let request = model.layouts.persist_request(layout_id)?;
    Ok(Cmd::PersistLayout {
        key: request.key,
        contents: request.contents,
    })
}

fn trace_clamp(layout_id: &LayoutId, outcome: &DragOutcome) {
    if let Some(violation) = &outcome.violation {
        tracing::trace!(
            layout = %layout_id,
            panel = violation.panel_index,
            bound = ?violation.bound,
            requested = violation.requested_delta,
            applied = violation.applied_delta,
            "resize clamped"
        );
    }
}
