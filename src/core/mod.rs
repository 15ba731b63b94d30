// src/core/mod.rs

//! Core data structures and types

// Declare modules within core
pub mod error;
pub mod angle;

// Re-export public types for convenient access via `arcseries::core::TypeName`
pub use error::ArccosError;
pub use angle::{Angle, to_degrees};

pub mod constants;
pub use constants::series_constants::{FRAC_PI_2, MAX_TAYLOR_SERIES_TERMS, PI, TAYLOR_SERIES_TOLERANCE}; // Re-export
