//! # Report Formatting
//!
//! Pure string producers for the generation report: a sectioned text report
//! and a CSV export. Formatting only; front ends decide where the strings
//! go (terminal, file, drawing table). The compliance decision itself lives
//! in [`crate::compliance`]; this module just renders it.

use chrono::Utc;

use crate::compliance::ValidationReport;
use crate::stair::StairDerived;

/// Render the multi-section generation report.
///
/// Mid-landing requirement notes are kept out of the compliance section;
/// they are acted on, not violated.
pub fn format_report(derived: &StairDerived, report: &ValidationReport) -> String {
    let mut out = String::new();

    out.push_str("Spiral Stair Generation Report\n");
    out.push_str("==============================\n");
    out.push_str(&format!(
        "Timestamp: {}\n\n",
        Utc::now().format("%Y-%m-%d %H:%M:%S")
    ));

    out.push_str("--- Inputs ---\n");
    out.push_str(&format!(
        "Center Pole Diameter: {:.3}\"\n",
        derived.pole_radius_in * 2.0
    ));
    out.push_str(&format!(
        "Overall Height (FF-FF): {:.3}\"\n",
        derived.overall_height_in
    ));
    out.push_str(&format!(
        "Outside Diameter: {:.3}\"\n",
        derived.outer_radius_in * 2.0
    ));
    out.push_str(&format!(
        "Total Rotation: {:.1}°\n\n",
        derived.total_rotation_deg
    ));

    out.push_str("--- Calculated Values ---\n");
    out.push_str(&format!("Riser Height: {:.3}\"\n", derived.riser_height_in));
    out.push_str(&format!("Number of Risers: {}\n", derived.number_of_risers));
    out.push_str(&format!("Number of Treads: {}\n", derived.number_of_treads));
    out.push_str(&format!("Tread Angle: {:.2}°\n", derived.tread_angle_deg));
    out.push_str(&format!("Clear Width: {:.3}\"\n", derived.clear_width_in));
    out.push_str(&format!(
        "Walkline Radius: {:.3}\"\n",
        derived.walkline_radius_in
    ));
    out.push_str(&format!(
        "Tread Depth @ Walkline: {:.3}\"\n",
        derived.tread_depth_at_walkline_in
    ));
    out.push_str(&format!(
        "Calculated Headroom: {}\n",
        match derived.headroom_in {
            Some(headroom) => format!("{headroom:.2}\""),
            None => "N/A".to_string(),
        }
    ));
    out.push_str(&format!(
        "Midlanding Required: {}\n",
        if derived.requires_midlanding { "Yes" } else { "No" }
    ));
    if derived.requires_midlanding {
        out.push_str(&format!(
            "Midlanding Position: Replaces Tread #{}\n",
            match derived.midlanding_position_index {
                Some(index) => (index + 1).to_string(),
                None => "N/A".to_string(),
            }
        ));
    }
    out.push_str(&format!(
        "Top Landing Width: {:.3}\"\n",
        derived.top_landing_width_in
    ));
    out.push_str(&format!(
        "Top Landing Length: {:.3}\"\n\n",
        derived.top_landing_length_in
    ));

    out.push_str("--- Compliance Status ---\n");
    let violations: Vec<_> = report.violations().collect();
    if violations.is_empty() {
        out.push_str("Status: Code Compliant (based on checks performed)\n");
    } else {
        out.push_str("Status: Generated with Code Violations/Warnings\n");
        for issue in violations {
            out.push_str(&format!("- {}\n", issue.message));
        }
    }
    if derived.requires_midlanding {
        out.push_str("Note: A midlanding is required and replaces the selected tread.\n");
    }

    out
}

/// Render the stair data as `Parameter,Value,Units` CSV rows.
pub fn to_csv(derived: &StairDerived, report: &ValidationReport) -> String {
    let mut out = String::new();
    out.push_str("Parameter,Value,Units\n");

    let mut row = |parameter: &str, value: String, units: &str| {
        out.push_str(&format!(
            "{},{},{}\n",
            csv_cell(parameter),
            csv_cell(&value),
            units
        ));
    };

    row(
        "Center Pole Diameter",
        format!("{}", derived.pole_radius_in * 2.0),
        "inches",
    );
    row(
        "Overall Height",
        format!("{}", derived.overall_height_in),
        "inches",
    );
    row(
        "Outside Diameter",
        format!("{}", derived.outer_radius_in * 2.0),
        "inches",
    );
    row(
        "Total Rotation",
        format!("{}", derived.total_rotation_deg),
        "degrees",
    );
    row(
        "Riser Height",
        format!("{}", derived.riser_height_in),
        "inches",
    );
    row("Number of Risers", derived.number_of_risers.to_string(), "");
    row("Number of Treads", derived.number_of_treads.to_string(), "");
    row(
        "Tread Angle",
        format!("{}", derived.tread_angle_deg),
        "degrees",
    );
    row(
        "Clear Width",
        format!("{}", derived.clear_width_in),
        "inches",
    );
    row(
        "Walkline Radius",
        format!("{}", derived.walkline_radius_in),
        "inches",
    );
    row(
        "Tread Depth @ Walkline",
        format!("{}", derived.tread_depth_at_walkline_in),
        "inches",
    );
    row(
        "Headroom",
        match derived.headroom_in {
            Some(headroom) => format!("{headroom:.2}"),
            None => "N/A".to_string(),
        },
        "inches",
    );
    row(
        "Midlanding Required",
        (if derived.requires_midlanding { "Yes" } else { "No" }).to_string(),
        "",
    );
    if derived.requires_midlanding {
        row(
            "Midlanding Position (0-based)",
            match derived.midlanding_position_index {
                Some(index) => index.to_string(),
                None => "N/A".to_string(),
            },
            "",
        );
    }
    row(
        "Top Landing Width",
        format!("{}", derived.top_landing_width_in),
        "inches",
    );
    row(
        "Top Landing Length",
        format!("{}", derived.top_landing_length_in),
        "inches",
    );
    row(
        "Tread Thickness",
        format!("{}", derived.tread_thickness_in),
        "inches",
    );
    row(
        "Top Landing Thickness",
        format!("{}", derived.top_landing_thickness_in),
        "inches",
    );

    let violations: Vec<_> = report.violations().collect();
    row(
        "Compliance Status",
        (if violations.is_empty() { "Pass" } else { "Warnings" }).to_string(),
        "",
    );
    if !violations.is_empty() {
        let joined = violations
            .iter()
            .map(|issue| issue.message.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        row("Violations/Warnings", joined, "");
    }

    out
}

/// Quote a CSV cell when it contains a comma, quote, or newline.
fn csv_cell(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stair::StairInput;
    use crate::{calculate, validate};

    fn reference() -> (StairDerived, ValidationReport) {
        let derived = calculate(&StairInput::new(6.0, 120.0, 60.0, 450.0));
        let report = validate(&derived);
        (derived, report)
    }

    #[test]
    fn test_report_sections_present() {
        let (derived, report) = reference();
        let text = format_report(&derived, &report);

        assert!(text.contains("--- Inputs ---"));
        assert!(text.contains("--- Calculated Values ---"));
        assert!(text.contains("--- Compliance Status ---"));
        assert!(text.contains("Number of Risers: 14"));
        assert!(text.contains("Clear width violation"));
    }

    #[test]
    fn test_report_headroom_na_when_undefined() {
        let derived = calculate(&StairInput::new(6.0, 9.0, 60.0, 90.0));
        let report = validate(&derived);
        let text = format_report(&derived, &report);

        assert!(text.contains("Calculated Headroom: N/A"));
    }

    #[test]
    fn test_report_excludes_midlanding_from_compliance_section() {
        let mut derived = calculate(&StairInput::new(6.0, 160.0, 66.0, 600.0));
        derived.set_midlanding_position(8).unwrap();
        let report = validate(&derived);
        let text = format_report(&derived, &report);

        assert!(text.contains("Midlanding Required: Yes"));
        assert!(text.contains("Midlanding Position: Replaces Tread #9"));
        assert!(text.contains("Status: Code Compliant"));
    }

    #[test]
    fn test_csv_rows_and_status() {
        let (derived, report) = reference();
        let csv = to_csv(&derived, &report);

        assert!(csv.starts_with("Parameter,Value,Units\n"));
        assert!(csv.contains("Number of Treads,13,\n"));
        assert!(csv.contains("Compliance Status,Warnings,\n"));
        assert!(csv.contains("Violations/Warnings,"));
    }

    #[test]
    fn test_csv_cell_quoting() {
        assert_eq!(csv_cell("plain"), "plain");
        assert_eq!(csv_cell("a,b"), "\"a,b\"");
        assert_eq!(csv_cell("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_csv_carries_violation_messages() {
        let (derived, report) = reference();
        let csv = to_csv(&derived, &report);

        let line = csv
            .lines()
            .find(|l| l.starts_with("Violations/Warnings"))
            .unwrap();
        assert!(line.contains("Clear width violation"));
    }
}
