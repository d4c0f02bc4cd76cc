//! # Sector Layout Planner
//!
//! Walks the tread index sequence once and produces the ordered list of
//! polar-sector descriptors (treads plus an optional mid-landing) and the
//! placement of the top landing, ready for a modeling kernel to realize as
//! solids.
//!
//! The planner is the one stage with a hard precondition: a stair that
//! requires a mid-landing cannot be laid out until the caller has supplied
//! a position for it.
//!
//! ## Example
//!
//! ```rust
//! use stair_core::stair::StairInput;
//!
//! let input = StairInput::new(6.0, 120.0, 60.0, 450.0);
//! let derived = stair_core::calculate(&input);
//! let layout = stair_core::plan(&derived).unwrap();
//!
//! assert_eq!(layout.sectors.len(), 13);
//! assert!((layout.top_landing.connect_angle_rad - 450f64.to_radians()).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::{StairError, StairResult};
use crate::geometry::Point3;
use crate::midlanding;
use crate::stair::{StairDerived, TOLERANCE};
use crate::units::{Degrees, Radians};

/// Sweeps below this are not worth a sector; the step is skipped with a
/// diagnostic and generation continues.
pub const DEGENERATE_SWEEP_EPSILON: f64 = 1e-9;

/// What a sector represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SectorKind {
    /// One walkable step
    Tread,
    /// The intermediate rest landing, fixed 90° sweep
    Midlanding,
}

impl SectorKind {
    /// Display name for reports and object tagging
    pub fn display_name(&self) -> &'static str {
        match self {
            SectorKind::Tread => "Tread",
            SectorKind::Midlanding => "Midlanding",
        }
    }
}

/// One annular sector: a tread or the mid-landing.
///
/// The solid realization is two radial lines, an outer arc, and an inner
/// arc, extruded through the elevation band `[z_bottom_in, z_top_in]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorDescriptor {
    /// 0-based step index in the walking order
    pub index: usize,
    /// Tread or mid-landing
    pub kind: SectorKind,
    /// Plan angle where the sector starts, radians
    pub start_angle_rad: f64,
    /// Angular extent, radians
    pub sweep_angle_rad: f64,
    /// Pole surface radius, inches
    pub inner_radius_in: f64,
    /// Outer stair radius, inches
    pub outer_radius_in: f64,
    /// Elevation of the walking surface, inches
    pub z_top_in: f64,
    /// Elevation of the underside, `z_top_in - thickness`
    pub z_bottom_in: f64,
}

impl SectorDescriptor {
    /// Plan angle where the sector ends, radians
    pub fn end_angle_rad(&self) -> f64 {
        self.start_angle_rad + self.sweep_angle_rad
    }

    /// Plate thickness, inches
    pub fn thickness_in(&self) -> f64 {
        self.z_top_in - self.z_bottom_in
    }

    /// The four plan-profile corners at the underside elevation, in boundary
    /// order: inner start, outer start, outer end, inner end. A kernel closes
    /// the profile with arcs between the outer pair and the inner pair.
    pub fn corner_points(&self) -> [Point3; 4] {
        let start = self.start_angle_rad;
        let end = self.end_angle_rad();
        [
            Point3::polar(self.inner_radius_in, start, self.z_bottom_in),
            Point3::polar(self.outer_radius_in, start, self.z_bottom_in),
            Point3::polar(self.outer_radius_in, end, self.z_bottom_in),
            Point3::polar(self.inner_radius_in, end, self.z_bottom_in),
        ]
    }
}

/// Placement of the rectangular top landing.
///
/// The landing profile is built with its inner origin corner at the model
/// origin, then rotated about the vertical axis by `connect_angle_rad` and
/// translated to `origin` (on the pole surface, at the top elevation).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopLandingPlacement {
    /// Length outward from the pole face, inches
    pub length_in: f64,
    /// Width along the final radial direction, inches
    pub width_in: f64,
    /// Plate thickness, inches
    pub thickness_in: f64,
    /// Final accumulated stair rotation, radians
    pub connect_angle_rad: f64,
    /// Inner origin corner on the pole surface at the top elevation
    pub origin: Point3,
}

/// The planner's output: ordered sectors plus the top landing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StairLayout {
    /// Sector descriptors in walking order
    pub sectors: Vec<SectorDescriptor>,
    /// Top landing placement
    pub top_landing: TopLandingPlacement,
}

impl StairLayout {
    /// Sum of all emitted sector sweeps.
    ///
    /// Equals `top_landing.connect_angle_rad` exactly by construction.
    pub fn total_sweep_rad(&self) -> f64 {
        self.sectors.iter().map(|s| s.sweep_angle_rad).sum()
    }
}

/// Lay out all sectors and place the top landing.
///
/// # Errors
///
/// A stair flagged `requires_midlanding` must carry a valid
/// `midlanding_position_index`; a missing or out-of-range index is a
/// precondition violation and no geometry is planned.
pub fn plan(derived: &StairDerived) -> StairResult<StairLayout> {
    if derived.requires_midlanding {
        match derived.midlanding_position_index {
            None => {
                return Err(StairError::MissingMidlandingIndex {
                    number_of_treads: derived.number_of_treads,
                })
            }
            Some(index) => midlanding::check_position(index, derived.number_of_treads)?,
        }
    }

    let mut sectors = Vec::with_capacity(derived.number_of_treads);
    let mut angle = 0.0_f64;
    // Top surface of the first tread sits one riser above the floor.
    let mut z_top = derived.riser_height_in;

    for index in 0..derived.number_of_treads {
        let is_midlanding =
            derived.requires_midlanding && derived.midlanding_position_index == Some(index);

        // The mid-landing replaces the tread's rotation contribution
        // outright; it does not scale with the regular tread angle.
        let (kind, sweep_angle_rad) = if is_midlanding {
            (SectorKind::Midlanding, midlanding::midlanding_sweep_rad())
        } else {
            (SectorKind::Tread, derived.tread_angle_rad)
        };

        if sweep_angle_rad.abs() < DEGENERATE_SWEEP_EPSILON {
            warn!(index, "skipping sector with near-zero sweep angle");
        } else if derived.pole_radius_in <= 0.0 || derived.outer_radius_in <= derived.pole_radius_in
        {
            warn!(
                index,
                inner_radius_in = derived.pole_radius_in,
                outer_radius_in = derived.outer_radius_in,
                "skipping sector with unusable radii"
            );
        } else {
            sectors.push(SectorDescriptor {
                index,
                kind,
                start_angle_rad: angle,
                sweep_angle_rad,
                inner_radius_in: derived.pole_radius_in,
                outer_radius_in: derived.outer_radius_in,
                z_top_in: z_top,
                z_bottom_in: z_top - derived.tread_thickness_in,
            });
            // Only emitted sweeps advance the rotation, so the sweep sum and
            // the connect angle agree exactly.
            angle += sweep_angle_rad;
        }

        // Elevation advances every index, emitted or not.
        z_top += derived.riser_height_in;
    }

    let connect_angle_rad = angle;
    let requested_rad = Radians::from(Degrees(derived.total_rotation_deg)).value();
    if derived.number_of_treads > 0 && (connect_angle_rad - requested_rad).abs() > TOLERANCE {
        // The accumulated angle is authoritative for placement; the
        // requested rotation stays as entered. Typical cause: a mid-landing
        // whose fixed 90° differs from the tread angle it replaced.
        warn!(
            connect_angle_deg = Degrees::from(Radians(connect_angle_rad)).value(),
            requested_deg = derived.total_rotation_deg,
            "accumulated rotation diverges from the requested total rotation"
        );
    }

    let top_landing = TopLandingPlacement {
        length_in: derived.top_landing_length_in,
        width_in: derived.top_landing_width_in,
        thickness_in: derived.top_landing_thickness_in,
        connect_angle_rad,
        origin: Point3::polar(
            derived.pole_radius_in,
            connect_angle_rad,
            derived.overall_height_in,
        ),
    };

    Ok(StairLayout {
        sectors,
        top_landing,
    })
}
