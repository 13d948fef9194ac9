//! Pure resize math for adjacent panel pairs
//!
//! Nothing here knows about pointers, sessions or storage: the drag path,
//! keyboard nudges and the benches all go through `resize_pair`.

use serde::{Deserialize, Serialize};

use crate::error::LayoutRejection;

/// Panel sizes are percentages of the group's main axis and always add up to this
pub const TOTAL_SIZE: f64 = 100.0;

/// Allowed deviation of the size sum from `TOTAL_SIZE`
pub const SIZE_TOLERANCE: f64 = 0.01;

/// Per-panel size bounds, in percent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizeConstraint {
    pub min: f64,
    pub max: f64,
}

impl SizeConstraint {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, size: f64) -> bool {
        size >= self.min && size <= self.max
    }

    pub fn clamp(&self, size: f64) -> f64 {
        size.max(self.min).min(self.max)
    }
}

/// Which bound stopped a drag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Min,
    Max,
}

/// A requested delta that had to be reduced to keep a panel in bounds.
///
/// Internal: resolved by clamping, only ever traced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstraintViolation {
    /// Index of the panel that reached its bound
    pub panel_index: usize,
    pub bound: Bound,
    pub requested_delta: f64,
    pub applied_delta: f64,
}

/// Result of applying a delta to one handle
#[derive(Debug, Clone, PartialEq)]
pub struct DragOutcome {
    /// The complete new size vector
    pub sizes: Vec<f64>,
    /// Delta actually moved from the trailing panel to the leading panel
    pub applied_delta: f64,
    pub violation: Option<ConstraintViolation>,
}

/// Move `delta` percent across the handle between `handle_index` and
/// `handle_index + 1`.
///
/// A positive delta grows the leading panel (`handle_index`) and shrinks the
/// trailing one; a negative delta does the reverse. The delta is clamped to
/// what both panels can absorb, a panel that reaches a bound lands exactly on
/// it, and the pair's combined size is preserved. All other panels keep
/// their `start` size.
pub fn resize_pair(
    start: &[f64],
    constraints: &[SizeConstraint],
    handle_index: usize,
    delta: f64,
) -> DragOutcome {
    let lead_index = handle_index;
    let trail_index = handle_index + 1;
    let unchanged = || DragOutcome {
        sizes: start.to_vec(),
        applied_delta: 0.0,
        violation: None,
    };

    if trail_index >= start.len() || constraints.len() != start.len() || !delta.is_finite() {
        return unchanged();
    }

    let lead = start[lead_index];
    let trail = start[trail_index];
    let lead_bounds = constraints[lead_index];
    let trail_bounds = constraints[trail_index];
    let pair = lead + trail;

    // Room to grow the leading panel, limited by each side
    let grow_by_lead = lead_bounds.max - lead;
    let grow_by_trail = trail - trail_bounds.min;
    // Room to shrink the leading panel (negative), limited by each side
    let shrink_by_lead = lead_bounds.min - lead;
    let shrink_by_trail = trail - trail_bounds.max;

    let hi = grow_by_lead.min(grow_by_trail).max(0.0);
    let lo = shrink_by_lead.max(shrink_by_trail).min(0.0);

    let (new_lead, new_trail, violation) = if delta > hi {
        let (panel_index, new_lead, new_trail, bound) = if grow_by_lead <= grow_by_trail {
            (lead_index, lead_bounds.max, pair - lead_bounds.max, Bound::Max)
        } else {
            (trail_index, pair - trail_bounds.min, trail_bounds.min, Bound::Min)
        };
        let violation = ConstraintViolation {
            panel_index,
            bound,
            requested_delta: delta,
            applied_delta: hi,
        };
        (new_lead, new_trail, Some(violation))
    } else if delta < lo {
        let (panel_index, new_lead, new_trail, bound) = if shrink_by_lead >= shrink_by_trail {
            (lead_index, lead_bounds.min, pair - lead_bounds.min, Bound::Min)
        } else {
            (trail_index, pair - trail_bounds.max, trail_bounds.max, Bound::Max)
        };
        let violation = ConstraintViolation {
            panel_index,
            bound,
            requested_delta: delta,
            applied_delta: lo,
        };
        (new_lead, new_trail, Some(violation))
    } else {
        let new_lead = lead + delta;
        (new_lead, pair - new_lead, None)
    };

    let mut sizes = start.to_vec();
    sizes[lead_index] = lead_bounds.clamp(new_lead);
    sizes[trail_index] = trail_bounds.clamp(new_trail);

    DragOutcome {
        applied_delta: sizes[lead_index] - lead,
        sizes,
        violation,
    }
}

/// Convert a pointer displacement along the group axis into percent
#[inline]
pub fn pixels_to_percent(pixels: f32, extent: f32) -> f64 {
    if extent <= 0.0 {
        return 0.0;
    }
    f64::from(pixels) * TOTAL_SIZE / f64::from(extent)
}

/// Whether sizes add up to `TOTAL_SIZE` within `SIZE_TOLERANCE`
pub fn sums_to_total(sizes: &[f64]) -> bool {
    (sizes.iter().sum::<f64>() - TOTAL_SIZE).abs() <= SIZE_TOLERANCE
}

/// Check a size vector against a group's constraints.
///
/// Used to vet persisted records: length, per-panel bounds, then the sum.
pub fn validate_sizes(
    sizes: &[f64],
    constraints: &[SizeConstraint],
) -> Result<(), LayoutRejection> {
    if sizes.len() != constraints.len() {
        return Err(LayoutRejection::LengthMismatch {
            expected: constraints.len(),
            found: sizes.len(),
        });
    }

    for (index, (size, bounds)) in sizes.iter().zip(constraints).enumerate() {
        if !size.is_finite() || !bounds.contains(*size) {
            return Err(LayoutRejection::OutOfRange {
                index,
                size: *size,
                min: bounds.min,
                max: bounds.max,
            });
        }
    }

    if !sums_to_total(sizes) {
        return Err(LayoutRejection::BadSum(sizes.iter().sum()));
    }

    Ok(())
}
