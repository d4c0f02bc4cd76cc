//! # Spira CLI Application
//!
//! Terminal front end for the spiral stair generator: prompts for the four
//! stair inputs, runs the calculation/compliance/layout pipeline, collects
//! a mid-landing position when one is required, and prints the report.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use stair_core::layout::StairLayout;
use stair_core::report;
use stair_core::stair::StairInput;
use stair_core::{calculate, plan, validate};

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn prompt_usize(prompt: &str) -> Option<usize> {
    print!("{}", prompt);
    io::stdout().flush().ok()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input).ok()?;
    input.trim().parse().ok()
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    println!("Spira - Spiral Stair Generator");
    println!("==============================");
    println!();

    let pole = prompt_f64("Center pole diameter (in) [6.0]: ", 6.0);
    let height = prompt_f64("Overall height, floor to floor (in) [120.0]: ", 120.0);
    let outside = prompt_f64("Outside diameter (in) [60.0]: ", 60.0);
    let rotation = prompt_f64("Total rotation (deg) [450.0]: ", 450.0);

    let input = StairInput::new(pole, height, outside, rotation);
    if let Err(e) = input.validate() {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    println!();
    println!("Calculating stair parameters...");
    let mut derived = calculate(&input);
    let validation = validate(&derived);

    if !validation.issues.is_empty() {
        println!();
        println!("Validation issues:");
        for issue in &validation.issues {
            println!("  - {}", issue.message);
        }
        for suggestion in validation.suggestions() {
            println!("  > {}", suggestion);
        }
    }

    if derived.requires_midlanding {
        println!();
        println!(
            "A midlanding is required. It replaces one tread (fixed 90 degree sweep)."
        );
        let index = match prompt_usize(&format!(
            "Tread to replace, 0-based [0..{}): ",
            derived.number_of_treads
        )) {
            Some(index) => index,
            None => {
                eprintln!("Error: midlanding position was not selected.");
                return ExitCode::FAILURE;
            }
        };
        if let Err(e) = derived.set_midlanding_position(index) {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    }

    let layout = match plan(&derived) {
        Ok(layout) => layout,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    println!();
    print_layout_summary(&layout);

    println!();
    println!("{}", report::format_report(&derived, &validation));

    println!("JSON Output (for kernel/API use):");
    if let Ok(json) = serde_json::to_string_pretty(&layout) {
        println!("{}", json);
    }

    ExitCode::SUCCESS
}

fn print_layout_summary(layout: &StairLayout) {
    println!("═══════════════════════════════════════════════════");
    println!("  SECTOR LAYOUT");
    println!("═══════════════════════════════════════════════════");
    println!("  {:>3}  {:<10} {:>9} {:>9} {:>8}", "#", "Kind", "Start°", "Sweep°", "Z top\"");
    for sector in &layout.sectors {
        println!(
            "  {:>3}  {:<10} {:>9.2} {:>9.2} {:>8.2}",
            sector.index,
            sector.kind.display_name(),
            sector.start_angle_rad.to_degrees(),
            sector.sweep_angle_rad.to_degrees(),
            sector.z_top_in,
        );
    }
    println!("───────────────────────────────────────────────────");
    println!(
        "  Top landing: {:.1}\" x {:.1}\" at {:.2}° (origin {:.3}, {:.3}, {:.3})",
        layout.top_landing.length_in,
        layout.top_landing.width_in,
        layout.top_landing.connect_angle_rad.to_degrees(),
        layout.top_landing.origin.x,
        layout.top_landing.origin.y,
        layout.top_landing.origin.z,
    );
    println!("═══════════════════════════════════════════════════");
}
