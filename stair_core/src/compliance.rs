//! # IRC Compliance Validator
//!
//! Runs the residential stair-code checks against a calculated
//! [`StairDerived`] record and returns an immutable [`ValidationReport`]
//! per call: an ordered issue list plus the overall compliance flag.
//!
//! The mid-landing requirement is recorded as an informational issue: the
//! user must act on it, but it is not a violation of the other parameters
//! and never flips the compliance flag by itself.
//!
//! ## Example
//!
//! ```rust
//! use stair_core::stair::StairInput;
//!
//! let input = StairInput::new(6.0, 120.0, 60.0, 450.0);
//! let derived = stair_core::calculate(&input);
//! let report = stair_core::validate(&derived);
//!
//! // 25.5" clear width misses the 26" minimum.
//! assert!(!report.is_compliant);
//! ```

use serde::{Deserialize, Serialize};

use crate::stair::{
    irc, StairDerived, MAX_RISER_HEIGHT_IN, MAX_VERTICAL_RISE_NO_LANDING_IN, MIN_CLEAR_WIDTH_IN,
    MIN_HEADROOM_IN, MIN_RISER_HEIGHT_IN, MIN_TREAD_DEPTH_WALKLINE_IN, TOLERANCE,
};

/// The code rule a [`ValidationIssue`] was raised under.
///
/// Carried on every issue from the point of creation so reporting and
/// suggestion generation dispatch on tags, never on message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuleKind {
    /// Overall height exceeds the maximum rise between landings (informational)
    MidlandingRequired,
    /// Riser height above the spiral-stair maximum
    RiserHeightTooLarge,
    /// Riser height below the general-stair minimum
    RiserHeightTooSmall,
    /// Clear width below the spiral-stair minimum
    ClearWidthTooSmall,
    /// Tread depth at the walkline below the minimum
    WalklineDepthTooSmall,
    /// Headroom below the minimum
    HeadroomTooSmall,
}

impl RuleKind {
    /// The IRC section this rule is drawn from
    pub fn code(&self) -> &'static str {
        match self {
            RuleKind::MidlandingRequired => irc::VERTICAL_RISE,
            RuleKind::RiserHeightTooLarge => irc::RISER_MAX,
            RuleKind::RiserHeightTooSmall => irc::RISER_MIN,
            RuleKind::ClearWidthTooSmall => irc::CLEAR_WIDTH,
            RuleKind::WalklineDepthTooSmall => irc::TREAD_DEPTH,
            RuleKind::HeadroomTooSmall => irc::HEADROOM,
        }
    }

    /// Informational issues require user action but do not flip the
    /// overall compliance flag.
    pub fn is_informational(&self) -> bool {
        matches!(self, RuleKind::MidlandingRequired)
    }
}

/// One validation finding: the rule it was raised under plus a formatted,
/// human-readable message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// Which rule raised this issue
    pub rule: RuleKind,
    /// Formatted message with measured and required values
    pub message: String,
}

/// The result of one validation pass: an ordered issue list and the
/// overall compliance verdict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Issues in fixed check order
    pub issues: Vec<ValidationIssue>,
    /// AND of all non-informational checks
    pub is_compliant: bool,
}

impl ValidationReport {
    /// Issues that count against compliance (informational ones filtered out)
    pub fn violations(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter().filter(|i| !i.rule.is_informational())
    }

    /// Whether any issue was raised under the given rule
    pub fn has_rule(&self, rule: RuleKind) -> bool {
        self.issues.iter().any(|i| i.rule == rule)
    }

    /// Remediation suggestions, one per violating category present.
    ///
    /// Presentation help only; it plays no part in the compliance decision.
    /// Empty when there is nothing to suggest.
    pub fn suggestions(&self) -> Vec<String> {
        let mut suggestions = Vec::new();
        if self.has_rule(RuleKind::ClearWidthTooSmall) {
            suggestions.push(
                "To increase clear width: increase the outside diameter or select a smaller \
                 standard center pole."
                    .to_string(),
            );
        }
        if self.has_rule(RuleKind::WalklineDepthTooSmall) {
            suggestions.push(
                "To increase walkline depth: increase the total rotation or select a larger \
                 standard center pole."
                    .to_string(),
            );
        }
        if self.has_rule(RuleKind::HeadroomTooSmall) {
            suggestions.push(
                "To increase headroom: increase the total rotation or the outside diameter."
                    .to_string(),
            );
        }
        if self.has_rule(RuleKind::RiserHeightTooLarge) {
            suggestions.push(
                "To fix the riser height: adjust the overall height slightly (a small change \
                 is often enough)."
                    .to_string(),
            );
        }
        if self.has_rule(RuleKind::RiserHeightTooSmall) {
            suggestions.push(
                "To increase the riser height: decrease the overall height or check the inputs."
                    .to_string(),
            );
        }
        suggestions
    }
}

/// Run all code checks against a calculated stair.
///
/// Pure function of the derived record; the check order is fixed so issue
/// lists are deterministic. Every boundary comparison is guarded by
/// [`TOLERANCE`] to avoid floating-point false positives at exact
/// threshold values.
pub fn validate(derived: &StairDerived) -> ValidationReport {
    let mut issues = Vec::new();

    // 1. Mid-landing requirement (informational).
    if derived.requires_midlanding {
        issues.push(ValidationIssue {
            rule: RuleKind::MidlandingRequired,
            message: format!(
                "Midlanding required: overall height ({:.2}\") exceeds the maximum vertical \
                 rise ({:.2}\") allowed between landings or floor levels ({}).",
                derived.overall_height_in,
                MAX_VERTICAL_RISE_NO_LANDING_IN,
                RuleKind::MidlandingRequired.code()
            ),
        });
    }

    // 2. Riser height, both bounds.
    if derived.riser_height_in > MAX_RISER_HEIGHT_IN + TOLERANCE {
        issues.push(ValidationIssue {
            rule: RuleKind::RiserHeightTooLarge,
            message: format!(
                "Riser height violation: calculated {:.3}\" (max allowed: {:.2}\" per {}).",
                derived.riser_height_in,
                MAX_RISER_HEIGHT_IN,
                RuleKind::RiserHeightTooLarge.code()
            ),
        });
    }
    if derived.riser_height_in < MIN_RISER_HEIGHT_IN - TOLERANCE
        && derived.riser_height_in > TOLERANCE
    {
        issues.push(ValidationIssue {
            rule: RuleKind::RiserHeightTooSmall,
            message: format!(
                "Riser height warning: calculated {:.3}\" is less than the general minimum of \
                 {:.2}\" ({}).",
                derived.riser_height_in,
                MIN_RISER_HEIGHT_IN,
                RuleKind::RiserHeightTooSmall.code()
            ),
        });
    }

    // 3. Clear width.
    if derived.clear_width_in < MIN_CLEAR_WIDTH_IN - TOLERANCE {
        issues.push(ValidationIssue {
            rule: RuleKind::ClearWidthTooSmall,
            message: format!(
                "Clear width violation: calculated {:.3}\" (min required: {:.2}\" per {}).",
                derived.clear_width_in,
                MIN_CLEAR_WIDTH_IN,
                RuleKind::ClearWidthTooSmall.code()
            ),
        });
    }

    // 4. Tread depth at the walkline.
    if derived.tread_depth_at_walkline_in < MIN_TREAD_DEPTH_WALKLINE_IN - TOLERANCE {
        issues.push(ValidationIssue {
            rule: RuleKind::WalklineDepthTooSmall,
            message: format!(
                "Walkline depth violation: calculated {:.3}\" (min required: {:.2}\" per {}).",
                derived.tread_depth_at_walkline_in,
                MIN_TREAD_DEPTH_WALKLINE_IN,
                RuleKind::WalklineDepthTooSmall.code()
            ),
        });
    }

    // 5. Headroom; skipped silently when it could not be computed.
    if let Some(headroom) = derived.headroom_in {
        if headroom < MIN_HEADROOM_IN - TOLERANCE {
            issues.push(ValidationIssue {
                rule: RuleKind::HeadroomTooSmall,
                message: format!(
                    "Headroom violation: calculated {:.2}\" (min required: {:.2}\" per {}).",
                    headroom,
                    MIN_HEADROOM_IN,
                    RuleKind::HeadroomTooSmall.code()
                ),
            });
        }
    }

    let is_compliant = !issues.iter().any(|i| !i.rule.is_informational());
    ValidationReport {
        issues,
        is_compliant,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculate;
    use crate::stair::StairInput;
    use pretty_assertions::assert_eq;

    /// Hand-built derived record with everything comfortably passing.
    fn passing_derived() -> StairDerived {
        StairDerived {
            overall_height_in: 120.0,
            total_rotation_deg: 500.0,
            pole_radius_in: 3.0,
            outer_radius_in: 33.0,
            riser_height_in: 8.0,
            number_of_risers: 15,
            number_of_treads: 14,
            tread_angle_deg: 35.7,
            tread_angle_rad: 35.7f64.to_radians(),
            clear_width_in: 28.5,
            walkline_radius_in: 15.0,
            tread_depth_at_walkline_in: 9.35,
            headroom_in: Some(79.2),
            requires_midlanding: false,
            midlanding_position_index: None,
            tread_thickness_in: 1.5,
            top_landing_width_in: 30.0,
            top_landing_length_in: 50.0,
            top_landing_thickness_in: 1.5,
        }
    }

    #[test]
    fn test_passing_stair_is_compliant() {
        let report = validate(&passing_derived());
        assert!(report.is_compliant);
        assert!(report.issues.is_empty());
        assert!(report.suggestions().is_empty());
    }

    #[test]
    fn test_reference_stair_fails_clear_width_only() {
        let derived = calculate(&StairInput::new(6.0, 120.0, 60.0, 450.0));
        let report = validate(&derived);

        assert!(!report.is_compliant);
        assert!(report.has_rule(RuleKind::ClearWidthTooSmall));
        assert!(!report.has_rule(RuleKind::WalklineDepthTooSmall));
        assert!(!report.has_rule(RuleKind::HeadroomTooSmall));
        assert!(!report.has_rule(RuleKind::RiserHeightTooLarge));
        assert_eq!(report.violations().count(), 1);
    }

    #[test]
    fn test_midlanding_issue_is_informational() {
        let derived = calculate(&StairInput::new(6.0, 160.0, 66.0, 600.0));
        let report = validate(&derived);

        assert!(report.has_rule(RuleKind::MidlandingRequired));
        // The requirement alone never flips compliance.
        assert_eq!(
            report.is_compliant,
            report.violations().count() == 0
        );
    }

    #[test]
    fn test_tall_narrow_stair_keeps_violations_and_note_separate() {
        // Same stair as the reference but 160" tall: the clear-width
        // violation is unchanged and the midlanding note rides along
        // without affecting the verdict.
        let derived = calculate(&StairInput::new(6.0, 160.0, 60.0, 450.0));
        let report = validate(&derived);

        assert!(report.has_rule(RuleKind::MidlandingRequired));
        assert!(report.has_rule(RuleKind::ClearWidthTooSmall));
        assert!(!report.is_compliant);
        assert_eq!(report.violations().count(), 1);
    }

    #[test]
    fn test_riser_height_boundary() {
        let mut derived = passing_derived();

        derived.riser_height_in = 9.5;
        assert!(validate(&derived).is_compliant);

        // Within tolerance of the limit still passes.
        derived.riser_height_in = 9.50005;
        assert!(validate(&derived).is_compliant);

        derived.riser_height_in = 9.5002;
        let report = validate(&derived);
        assert!(!report.is_compliant);
        assert!(report.has_rule(RuleKind::RiserHeightTooLarge));
    }

    #[test]
    fn test_small_riser_flagged_but_zero_riser_skipped() {
        let mut derived = passing_derived();

        derived.riser_height_in = 3.0;
        let report = validate(&derived);
        assert!(!report.is_compliant);
        assert!(report.has_rule(RuleKind::RiserHeightTooSmall));

        // Zero risers come from unusable input; no height to warn about.
        derived.riser_height_in = 0.0;
        derived.number_of_risers = 0;
        derived.number_of_treads = 0;
        let report = validate(&derived);
        assert!(!report.has_rule(RuleKind::RiserHeightTooSmall));
    }

    #[test]
    fn test_headroom_skipped_when_undefined() {
        let mut derived = passing_derived();
        derived.headroom_in = None;

        let report = validate(&derived);
        assert!(!report.has_rule(RuleKind::HeadroomTooSmall));
        assert!(report.is_compliant);
    }

    #[test]
    fn test_headroom_violation() {
        let mut derived = passing_derived();
        derived.headroom_in = Some(70.0);

        let report = validate(&derived);
        assert!(!report.is_compliant);
        assert!(report.has_rule(RuleKind::HeadroomTooSmall));
    }

    #[test]
    fn test_issue_order_is_fixed() {
        let mut derived = passing_derived();
        derived.requires_midlanding = true;
        derived.riser_height_in = 9.6;
        derived.clear_width_in = 20.0;
        derived.tread_depth_at_walkline_in = 5.0;
        derived.headroom_in = Some(70.0);

        let report = validate(&derived);
        let rules: Vec<RuleKind> = report.issues.iter().map(|i| i.rule).collect();
        assert_eq!(
            rules,
            vec![
                RuleKind::MidlandingRequired,
                RuleKind::RiserHeightTooLarge,
                RuleKind::ClearWidthTooSmall,
                RuleKind::WalklineDepthTooSmall,
                RuleKind::HeadroomTooSmall,
            ]
        );
    }

    #[test]
    fn test_suggestions_cover_each_violating_category_once() {
        let mut derived = passing_derived();
        derived.clear_width_in = 20.0;
        derived.tread_depth_at_walkline_in = 5.0;

        let suggestions = validate(&derived).suggestions();
        assert_eq!(suggestions.len(), 2);
        assert!(suggestions[0].contains("clear width"));
        assert!(suggestions[1].contains("walkline depth"));
    }

    #[test]
    fn test_validate_is_deterministic() {
        let derived = calculate(&StairInput::new(6.0, 120.0, 60.0, 450.0));
        assert_eq!(validate(&derived), validate(&derived));
    }

    #[test]
    fn test_report_serialization_roundtrip() {
        let derived = calculate(&StairInput::new(6.0, 160.0, 60.0, 450.0));
        let report = validate(&derived);
        let json = serde_json::to_string_pretty(&report).unwrap();
        let roundtrip: ValidationReport = serde_json::from_str(&json).unwrap();
        assert_eq!(report, roundtrip);
    }
}
