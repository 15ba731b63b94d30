// src/validation/mod.rs

//! Input checks that run before the engine sees a value.

use crate::core::ArccosError;

/// Lower bound of the arccos domain.
const DOMAIN_MIN: f64 = -1.0;
/// Upper bound of the arccos domain.
const DOMAIN_MAX: f64 = 1.0;

/// Parses user-entered text into a real number.
///
/// Surrounding whitespace is ignored. Anything `f64::from_str` rejects,
/// including the empty string, is an `ArccosError::InvalidFormat`.
pub fn parse_input(text: &str) -> Result<f64, ArccosError> {
    text.trim()
        .parse::<f64>()
        .map_err(|_| ArccosError::InvalidFormat { input: text.to_string() })
}

/// Checks that `x` lies in the closed interval [-1, 1].
///
/// # Returns
/// * `Ok(x)` unchanged if it is in the domain.
/// * `Err(ArccosError::OutOfRange)` otherwise, including for NaN and ±∞.
pub fn check_domain(x: f64) -> Result<f64, ArccosError> {
    if (DOMAIN_MIN..=DOMAIN_MAX).contains(&x) {
        Ok(x)
    } else {
        Err(ArccosError::OutOfRange { value: x })
    }
}
