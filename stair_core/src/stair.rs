//! # Stair Data Model
//!
//! Input and derived records for a spiral stair generation request, plus the
//! IRC limit constants every check in the crate refers back to.
//!
//! All lengths are inches and all plan angles are degrees (with radian
//! mirrors where geometry needs them), matching US residential codes.
//!
//! ## Example
//!
//! ```rust
//! use stair_core::stair::StairInput;
//!
//! let input = StairInput::new(6.0, 120.0, 60.0, 450.0);
//! assert!(input.validate().is_ok());
//!
//! let derived = stair_core::calculate(&input);
//! assert_eq!(derived.number_of_risers, 14);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{StairError, StairResult};
use crate::midlanding;

// ============================================================================
// IRC Code Section References
// ============================================================================

/// IRC code section references for spiral stair checks.
///
/// These constants provide traceable references to the International
/// Residential Code provisions each limit is drawn from.
pub mod irc {
    /// Spiral stair clear width and riser height
    pub const CLEAR_WIDTH: &str = "IRC R311.7.10.1";
    /// Spiral stair riser height maximum
    pub const RISER_MAX: &str = "IRC R311.7.10.1";
    /// General stair riser height minimum
    pub const RISER_MIN: &str = "IRC R311.7.5.1";
    /// Tread depth at the walkline
    pub const TREAD_DEPTH: &str = "IRC R311.7.10.2";
    /// Stairway headroom
    pub const HEADROOM: &str = "IRC R311.7.2";
    /// Maximum vertical rise between floor levels or landings
    pub const VERTICAL_RISE: &str = "IRC R311.7.3";
}

// ============================================================================
// Code Limits and Fixed Dimensions (inches unless noted)
// ============================================================================

/// Minimum clear width below handrail height
pub const MIN_CLEAR_WIDTH_IN: f64 = 26.0;

/// Minimum tread depth measured at the walkline
pub const MIN_TREAD_DEPTH_WALKLINE_IN: f64 = 6.75;

/// Maximum riser height for spiral stairs
pub const MAX_RISER_HEIGHT_IN: f64 = 9.5;

/// General-stair minimum riser height, applied as a warning
pub const MIN_RISER_HEIGHT_IN: f64 = 4.0;

/// Minimum headroom over the walkline
pub const MIN_HEADROOM_IN: f64 = 78.0;

/// Maximum vertical rise between landings or floor levels
pub const MAX_VERTICAL_RISE_NO_LANDING_IN: f64 = 147.0;

/// Walkline offset from the pole surface
pub const WALKLINE_OFFSET_FROM_POLE_IN: f64 = 12.0;

/// Handrail projection allowance deducted from the clear width
pub const HANDRAIL_CLEARANCE_IN: f64 = 1.5;

/// Absolute tolerance for every boundary comparison in the crate.
///
/// Guards against floating-point false positives at exact threshold values.
pub const TOLERANCE: f64 = 1e-4;

/// Default tread plate thickness
pub const DEFAULT_TREAD_THICKNESS_IN: f64 = 1.5;

/// Default top landing length (outward from the pole face)
pub const DEFAULT_TOP_LANDING_LENGTH_IN: f64 = 50.0;

/// Default top landing plate thickness
pub const DEFAULT_TOP_LANDING_THICKNESS_IN: f64 = 1.5;

/// Standard center pole diameters for front-end pickers (pipe sizes, inches)
pub const STANDARD_POLE_SIZES_IN: [f64; 12] = [
    3.0, 3.5, 4.0, 4.5, 5.0, 5.563, 6.0, 6.625, 8.0, 8.625, 10.75, 12.75,
];

// ============================================================================
// Input Record
// ============================================================================

/// Stair handedness as seen walking up.
///
/// Captured for labeling and future geometry mirroring; no calculation or
/// layout step consults it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Handedness {
    /// Ascends clockwise in plan view
    #[default]
    Clockwise,
    /// Ascends counter-clockwise in plan view
    CounterClockwise,
}

impl Handedness {
    /// Display name for reports
    pub fn display_name(&self) -> &'static str {
        match self {
            Handedness::Clockwise => "Clockwise",
            Handedness::CounterClockwise => "Counter-Clockwise",
        }
    }
}

/// User inputs for one spiral stair, immutable once captured.
///
/// ## JSON Example
///
/// ```json
/// {
///   "center_pole_diameter_in": 6.0,
///   "overall_height_in": 120.0,
///   "outside_diameter_in": 60.0,
///   "total_rotation_deg": 450.0,
///   "handedness": "Clockwise"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StairInput {
    /// Center pole diameter in inches
    pub center_pole_diameter_in: f64,

    /// Finished floor to finished floor height in inches
    pub overall_height_in: f64,

    /// Outside diameter of the stair in inches
    pub outside_diameter_in: f64,

    /// Total plan rotation from first tread to top landing, in degrees
    pub total_rotation_deg: f64,

    /// Ascent direction (display attribute only)
    #[serde(default)]
    pub handedness: Handedness,
}

impl StairInput {
    /// Create an input record with the default handedness.
    pub fn new(
        center_pole_diameter_in: f64,
        overall_height_in: f64,
        outside_diameter_in: f64,
        total_rotation_deg: f64,
    ) -> Self {
        StairInput {
            center_pole_diameter_in,
            overall_height_in,
            outside_diameter_in,
            total_rotation_deg,
            handedness: Handedness::default(),
        }
    }

    /// Validate input parameters for interactive callers.
    ///
    /// The calculation engine itself tolerates bad numbers (degrading to a
    /// zeroed derived record) so that downstream stages still run; this is
    /// the early rejection path for front ends.
    pub fn validate(&self) -> StairResult<()> {
        if self.center_pole_diameter_in <= 0.0 {
            return Err(StairError::invalid_input(
                "center_pole_diameter_in",
                self.center_pole_diameter_in.to_string(),
                "Center pole diameter must be positive",
            ));
        }
        if self.overall_height_in <= 0.0 {
            return Err(StairError::invalid_input(
                "overall_height_in",
                self.overall_height_in.to_string(),
                "Overall height must be positive",
            ));
        }
        if self.outside_diameter_in <= 0.0 {
            return Err(StairError::invalid_input(
                "outside_diameter_in",
                self.outside_diameter_in.to_string(),
                "Outside diameter must be positive",
            ));
        }
        if self.total_rotation_deg <= 0.0 {
            return Err(StairError::invalid_input(
                "total_rotation_deg",
                self.total_rotation_deg.to_string(),
                "Total rotation must be positive",
            ));
        }
        if self.outside_diameter_in <= self.center_pole_diameter_in {
            return Err(StairError::invalid_input(
                "outside_diameter_in",
                self.outside_diameter_in.to_string(),
                "Outside diameter must exceed the center pole diameter",
            ));
        }
        Ok(())
    }

    /// Center pole radius in inches
    pub fn pole_radius_in(&self) -> f64 {
        self.center_pole_diameter_in / 2.0
    }

    /// Outer stair radius in inches
    pub fn outer_radius_in(&self) -> f64 {
        self.outside_diameter_in / 2.0
    }
}

// ============================================================================
// Derived Record
// ============================================================================

/// Everything the calculation stage derives from a [`StairInput`].
///
/// Produced fresh by [`crate::calculate`] on every input change and consumed
/// read-only by the compliance validator and the layout planner. The one
/// externally writable field is the mid-landing position, supplied through
/// [`StairDerived::set_midlanding_position`] after the policy flags the
/// requirement.
///
/// ## JSON Example (input pole=6", height=120", outside=60", rotation=450°)
///
/// ```json
/// {
///   "overall_height_in": 120.0,
///   "total_rotation_deg": 450.0,
///   "pole_radius_in": 3.0,
///   "outer_radius_in": 30.0,
///   "riser_height_in": 8.571428571428571,
///   "number_of_risers": 14,
///   "number_of_treads": 13,
///   "tread_angle_deg": 34.61538461538461,
///   "tread_angle_rad": 0.6041524333826525,
///   "clear_width_in": 25.5,
///   "walkline_radius_in": 15.0,
///   "tread_depth_at_walkline_in": 9.062286500739787,
///   "headroom_in": 87.64285714285714,
///   "requires_midlanding": false,
///   "midlanding_position_index": null,
///   "tread_thickness_in": 1.5,
///   "top_landing_width_in": 27.0,
///   "top_landing_length_in": 50.0,
///   "top_landing_thickness_in": 1.5
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StairDerived {
    // --- Geometry echoed from the input ---
    /// Finished floor to finished floor height in inches
    pub overall_height_in: f64,
    /// Requested total plan rotation in degrees
    pub total_rotation_deg: f64,
    /// Center pole radius in inches
    pub pole_radius_in: f64,
    /// Outer stair radius in inches
    pub outer_radius_in: f64,

    // --- Derived values ---
    /// Vertical rise per step in inches
    pub riser_height_in: f64,
    /// Number of risers (0 only for unusable input)
    pub number_of_risers: usize,
    /// Number of treads, `max(0, number_of_risers - 1)`
    pub number_of_treads: usize,
    /// Plan angle per tread in degrees
    pub tread_angle_deg: f64,
    /// Plan angle per tread in radians (always `tread_angle_deg * PI / 180`)
    pub tread_angle_rad: f64,
    /// Usable width between pole and handrail allowance, floored at 0
    pub clear_width_in: f64,
    /// Walkline radius, pole surface + 12"
    pub walkline_radius_in: f64,
    /// Arc-length tread depth at the walkline
    pub tread_depth_at_walkline_in: f64,
    /// Vertical clearance one revolution up; `None` when not computable
    pub headroom_in: Option<f64>,
    /// Whether the overall height mandates an intermediate landing
    pub requires_midlanding: bool,
    /// 0-based tread index replaced by the mid-landing, supplied externally
    pub midlanding_position_index: Option<usize>,

    // --- Fixed dimensions ---
    /// Tread plate thickness in inches
    pub tread_thickness_in: f64,
    /// Top landing width (pole face to outer radius), floored at 0
    pub top_landing_width_in: f64,
    /// Top landing length in inches
    pub top_landing_length_in: f64,
    /// Top landing plate thickness in inches
    pub top_landing_thickness_in: f64,
}

impl StairDerived {
    /// Record the externally selected mid-landing position.
    ///
    /// The index must address an existing tread. Selecting a position on a
    /// stair that does not require a mid-landing is accepted and ignored by
    /// the planner, matching the requirement gate there.
    pub fn set_midlanding_position(&mut self, index: usize) -> StairResult<()> {
        midlanding::check_position(index, self.number_of_treads)?;
        self.midlanding_position_index = Some(index);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_input_passes() {
        let input = StairInput::new(6.0, 120.0, 60.0, 450.0);
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_rejects_nonpositive_height() {
        let input = StairInput::new(6.0, 0.0, 60.0, 450.0);
        let err = input.validate().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_rejects_pole_wider_than_outside() {
        let input = StairInput::new(60.0, 120.0, 60.0, 450.0);
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_radius_helpers() {
        let input = StairInput::new(6.0, 120.0, 60.0, 450.0);
        assert_eq!(input.pole_radius_in(), 3.0);
        assert_eq!(input.outer_radius_in(), 30.0);
    }

    #[test]
    fn test_handedness_default_and_display() {
        let input = StairInput::new(6.0, 120.0, 60.0, 450.0);
        assert_eq!(input.handedness, Handedness::Clockwise);
        assert_eq!(input.handedness.display_name(), "Clockwise");
    }

    #[test]
    fn test_input_serialization_roundtrip() {
        let input = StairInput::new(6.625, 160.0, 66.0, 540.0);
        let json = serde_json::to_string_pretty(&input).unwrap();
        let roundtrip: StairInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input.total_rotation_deg, roundtrip.total_rotation_deg);
        assert_eq!(input.handedness, roundtrip.handedness);
    }

    #[test]
    fn test_standard_pole_catalog_sorted() {
        for pair in STANDARD_POLE_SIZES_IN.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_set_midlanding_position_bounds() {
        let input = StairInput::new(6.0, 160.0, 60.0, 450.0);
        let mut derived = crate::calculate(&input);
        assert!(derived.requires_midlanding);
        assert!(derived.set_midlanding_position(derived.number_of_treads).is_err());
        assert!(derived.set_midlanding_position(6).is_ok());
        assert_eq!(derived.midlanding_position_index, Some(6));
    }
}
