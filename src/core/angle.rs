//! Radian/degree view of a computed angle

use super::constants::series_constants::PI;
use std::fmt;

/// Converts radians to degrees as `radians * 180 / π`.
pub fn to_degrees(radians: f64) -> f64 {
    radians * 180.0 / PI
}

/// An angle produced by the engine.
/// Stored in radians; degrees are a projection computed on demand.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)] // Avoid Eq for floating-point values
pub struct Angle {
    radians: f64,
}

impl Angle {
    /// Wraps a value in radians.
    pub fn from_radians(radians: f64) -> Self {
        Self { radians }
    }

    /// The angle in radians.
    pub fn radians(&self) -> f64 {
        self.radians
    }

    /// The angle in degrees.
    pub fn degrees(&self) -> f64 {
        to_degrees(self.radians)
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.10} rad ({:.6}°)", self.radians, self.degrees())
    }
}
