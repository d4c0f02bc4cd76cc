//! # Geometry Boundary Types
//!
//! Minimal point type shared with the external modeling kernel. The core
//! only ever hands over pure parameters (points, angles, radii), and the
//! polar constructor is the single place plan coordinates come from.

use serde::{Deserialize, Serialize};

/// A point in model space, inches on all axes.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    /// The model-space origin (base of the center pole)
    pub const ORIGIN: Point3 = Point3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Point3 { x, y, z }
    }

    /// Point at `radius` from the vertical axis, at plan angle `angle_rad`,
    /// at elevation `z`.
    pub fn polar(radius: f64, angle_rad: f64, z: f64) -> Self {
        Point3 {
            x: radius * angle_rad.cos(),
            y: radius * angle_rad.sin(),
            z,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polar_cardinal_directions() {
        let east = Point3::polar(10.0, 0.0, 5.0);
        assert!((east.x - 10.0).abs() < 1e-12);
        assert!(east.y.abs() < 1e-12);
        assert_eq!(east.z, 5.0);

        let north = Point3::polar(10.0, std::f64::consts::FRAC_PI_2, 0.0);
        assert!(north.x.abs() < 1e-12);
        assert!((north.y - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_serialization() {
        let p = Point3::new(1.0, 2.0, 3.0);
        let json = serde_json::to_string(&p).unwrap();
        let roundtrip: Point3 = serde_json::from_str(&json).unwrap();
        assert_eq!(p, roundtrip);
    }
}
