//! # Stair Calculation Engine
//!
//! Derives every geometric parameter of a spiral stair from the four user
//! inputs: riser count and height, tread angle, clear width, walkline tread
//! depth, headroom, and top landing width.
//!
//! This is a pure function: same input, same output, no side effects. It
//! never fails: unusable input (non-positive height) produces a derived
//! record with zero counts so downstream stages still run safely.
//!
//! ## Example
//!
//! ```rust
//! use stair_core::stair::StairInput;
//!
//! let input = StairInput::new(6.0, 120.0, 60.0, 450.0);
//! let derived = stair_core::calculate(&input);
//!
//! assert_eq!(derived.number_of_risers, 14);
//! assert_eq!(derived.number_of_treads, 13);
//! assert!((derived.riser_height_in - 120.0 / 14.0).abs() < 1e-9);
//! ```

use tracing::warn;

use crate::midlanding;
use crate::stair::{
    StairDerived, StairInput, DEFAULT_TOP_LANDING_LENGTH_IN, DEFAULT_TOP_LANDING_THICKNESS_IN,
    DEFAULT_TREAD_THICKNESS_IN, HANDRAIL_CLEARANCE_IN, MAX_RISER_HEIGHT_IN, TOLERANCE,
    WALKLINE_OFFSET_FROM_POLE_IN,
};
use crate::units::{Degrees, Radians};

/// Hard cap on riser-solver iterations.
///
/// The ceil-based estimate already lands at or below the maximum riser
/// height for any positive height, so the adjustment loop is a defensive
/// bound, not an expected code path. On exhaustion the last computed value
/// is accepted and a diagnostic is logged.
pub const RISER_SOLVER_MAX_ITERATIONS: u32 = 100;

/// Derive all stair parameters from the raw inputs.
///
/// The derived record also carries the mid-landing requirement flag (a
/// property of the overall height alone) so one call yields everything the
/// validator and planner need. The mid-landing *position* stays `None`
/// until the caller supplies one.
pub fn calculate(input: &StairInput) -> StairDerived {
    let mut derived = StairDerived {
        overall_height_in: input.overall_height_in,
        total_rotation_deg: input.total_rotation_deg,
        pole_radius_in: input.pole_radius_in(),
        outer_radius_in: input.outer_radius_in(),
        riser_height_in: 0.0,
        number_of_risers: 0,
        number_of_treads: 0,
        tread_angle_deg: 0.0,
        tread_angle_rad: 0.0,
        clear_width_in: 0.0,
        walkline_radius_in: 0.0,
        tread_depth_at_walkline_in: 0.0,
        headroom_in: None,
        requires_midlanding: midlanding::is_required(input.overall_height_in),
        midlanding_position_index: None,
        tread_thickness_in: DEFAULT_TREAD_THICKNESS_IN,
        top_landing_width_in: 0.0,
        top_landing_length_in: DEFAULT_TOP_LANDING_LENGTH_IN,
        top_landing_thickness_in: DEFAULT_TOP_LANDING_THICKNESS_IN,
    };

    solve_risers(&mut derived);
    derive_tread_angle(&mut derived);
    derive_clear_width(&mut derived);
    derive_walkline_depth(&mut derived);
    derive_top_landing_width(&mut derived);
    derive_headroom(&mut derived);

    derived
}

/// Iterative riser solver.
///
/// Seeds the count from an ideal riser height half an inch under the code
/// maximum, then grows the count while the resulting height exceeds the
/// maximum (tolerance-guarded), bounded by [`RISER_SOLVER_MAX_ITERATIONS`].
fn solve_risers(derived: &mut StairDerived) {
    if derived.overall_height_in <= 0.0 {
        return;
    }

    let ideal_riser_height = MAX_RISER_HEIGHT_IN - 0.5;
    let mut risers = (derived.overall_height_in / ideal_riser_height).ceil() as usize;
    if risers == 0 {
        risers = 1;
    }
    let mut riser_height = derived.overall_height_in / risers as f64;

    let mut iterations = 0u32;
    while riser_height > MAX_RISER_HEIGHT_IN + TOLERANCE {
        if iterations >= RISER_SOLVER_MAX_ITERATIONS {
            warn!(
                riser_height_in = riser_height,
                risers, "riser solver hit its iteration cap; accepting the last computed height"
            );
            break;
        }
        risers += 1;
        riser_height = derived.overall_height_in / risers as f64;
        iterations += 1;
    }

    derived.number_of_risers = risers;
    derived.riser_height_in = riser_height;
    derived.number_of_treads = risers.saturating_sub(1);
}

fn derive_tread_angle(derived: &mut StairDerived) {
    if derived.number_of_treads > 0 && derived.total_rotation_deg.abs() > TOLERANCE {
        derived.tread_angle_deg = derived.total_rotation_deg / derived.number_of_treads as f64;
        derived.tread_angle_rad = Radians::from(Degrees(derived.tread_angle_deg)).value();
    }
}

fn derive_clear_width(derived: &mut StairDerived) {
    // Clear width is the space between the pole and the handrail allowance
    // at the outer edge; never negative.
    if derived.outer_radius_in > derived.pole_radius_in + HANDRAIL_CLEARANCE_IN {
        derived.clear_width_in =
            derived.outer_radius_in - derived.pole_radius_in - HANDRAIL_CLEARANCE_IN;
    }
}

fn derive_walkline_depth(derived: &mut StairDerived) {
    derived.walkline_radius_in = derived.pole_radius_in + WALKLINE_OFFSET_FROM_POLE_IN;

    if derived.walkline_radius_in >= derived.outer_radius_in {
        // Walkline falls at or beyond the outer edge: the stair is too small
        // for the walkline concept. Best-effort depth at the outer radius;
        // the clear-width check catches the real problem.
        derived.tread_depth_at_walkline_in =
            derived.outer_radius_in * derived.tread_angle_rad.abs();
    } else if derived.walkline_radius_in > 0.0 && derived.tread_angle_rad.abs() > TOLERANCE {
        // Arc length at the walkline radius.
        derived.tread_depth_at_walkline_in =
            derived.walkline_radius_in * derived.tread_angle_rad.abs();
    }
}

fn derive_top_landing_width(derived: &mut StairDerived) {
    if derived.outer_radius_in > derived.pole_radius_in {
        derived.top_landing_width_in = derived.outer_radius_in - derived.pole_radius_in;
    }
}

/// Headroom is the vertical rise over one full revolution minus the tread
/// structure above. Undefined (left `None`) when the tread angle is ~0, the
/// riser height is unusable, or there are no treads.
fn derive_headroom(derived: &mut StairDerived) {
    if derived.tread_angle_deg.abs() < TOLERANCE
        || derived.riser_height_in <= 0.0
        || derived.number_of_treads == 0
    {
        return;
    }

    let treads_per_revolution = 360.0 / derived.tread_angle_deg.abs();
    let vertical_rise_per_revolution = treads_per_revolution * derived.riser_height_in;
    derived.headroom_in = Some(vertical_rise_per_revolution - derived.tread_thickness_in);
}
