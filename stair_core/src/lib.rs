//! # stair_core - Spiral Stair Calculation Engine
//!
//! `stair_core` derives the complete parametric layout of a residential
//! spiral staircase from four inputs (center pole diameter, overall height,
//! outside diameter, total rotation), checks it against IRC stair-code
//! rules, and lays out every tread, an optional mid-landing, and the top
//! landing as polar-sector geometry for an external modeling kernel.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Non-fatal compliance**: Violations are data (issue list + flag),
//!   never a stop condition; only a structurally invalid layout request
//!   (a required mid-landing with no position) refuses to plan
//!
//! ## Quick Start
//!
//! ```rust
//! use stair_core::stair::StairInput;
//!
//! let input = StairInput::new(6.0, 120.0, 60.0, 450.0);
//! let derived = stair_core::calculate(&input);
//! let report = stair_core::validate(&derived);
//! let layout = stair_core::plan(&derived).unwrap();
//!
//! assert_eq!(layout.sectors.len(), derived.number_of_treads);
//! assert!(!report.is_compliant); // 25.5" clear width misses the 26" minimum
//! ```
//!
//! ## Modules
//!
//! - [`stair`] - Input/derived data records and IRC limit constants
//! - [`calculate`] - Derivation of risers, angles, widths, and headroom
//! - [`compliance`] - Ordered code checks and remediation suggestions
//! - [`midlanding`] - Mandatory intermediate-landing policy
//! - [`layout`] - Sector sweep and top-landing placement
//! - [`geometry`] - Point types shared with the modeling kernel
//! - [`report`] - Text and CSV report rendering
//! - [`errors`] - Structured error types
//! - [`units`] - Type-safe unit wrappers

pub mod calculate;
pub mod compliance;
pub mod errors;
pub mod geometry;
pub mod layout;
pub mod midlanding;
pub mod report;
pub mod stair;
pub mod units;

// Re-export the pipeline and its types at crate root for convenience
pub use calculate::calculate;
pub use compliance::{validate, RuleKind, ValidationIssue, ValidationReport};
pub use errors::{StairError, StairResult};
pub use layout::{plan, SectorDescriptor, SectorKind, StairLayout, TopLandingPlacement};
pub use stair::{Handedness, StairDerived, StairInput};
