//! # Mid-Landing Policy
//!
//! Whether a stair needs an intermediate landing is a property of the
//! overall height alone: above the maximum vertical rise between landings
//! the code mandates a rest point. The *position* of that landing is never
//! chosen here. The caller supplies a 0-based tread index after the
//! requirement is signaled, and the layout planner refuses to run without
//! one.

use crate::errors::{StairError, StairResult};
use crate::stair::{MAX_VERTICAL_RISE_NO_LANDING_IN, TOLERANCE};
use crate::units::{Degrees, Radians};

/// Fixed plan sweep of a mid-landing, in degrees.
///
/// The landing replaces one tread outright; the regular tread angle does
/// not apply to it.
pub const MIDLANDING_SWEEP_DEG: f64 = 90.0;

/// The fixed mid-landing sweep in radians.
pub fn midlanding_sweep_rad() -> f64 {
    Radians::from(Degrees(MIDLANDING_SWEEP_DEG)).value()
}

/// True when the overall height mandates an intermediate landing.
pub fn is_required(overall_height_in: f64) -> bool {
    overall_height_in > MAX_VERTICAL_RISE_NO_LANDING_IN + TOLERANCE
}

/// Validate an externally supplied mid-landing position.
///
/// The index must address an existing tread: `0 <= index < number_of_treads`.
pub fn check_position(index: usize, number_of_treads: usize) -> StairResult<()> {
    if index >= number_of_treads {
        return Err(StairError::MidlandingIndexOutOfRange {
            index,
            number_of_treads,
        });
    }
    Ok(())
}
