// src/series/mod.rs

//! Factorial, power and the truncated arcsine Maclaurin expansion.
//!
//! Everything here works in plain `f64` and repeats the arithmetic of the
//! expansion term by term, in a fixed order, so that results are
//! reproducible to the last bit.

use crate::core::{ArccosError, MAX_TAYLOR_SERIES_TERMS, TAYLOR_SERIES_TOLERANCE};
use num_traits::Float;
use serde::{Deserialize, Serialize};

/// Cutoffs for the arcsine expansion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeriesConfig {
    /// Maximum number of terms summed, counting the leading `x` term.
    pub max_terms: u32,
    /// Absolute magnitude below which a freshly added term ends the summation.
    pub tolerance: f64,
}

impl Default for SeriesConfig {
    fn default() -> Self {
        Self {
            max_terms: MAX_TAYLOR_SERIES_TERMS,
            tolerance: TAYLOR_SERIES_TOLERANCE,
        }
    }
}

impl SeriesConfig {
    /// Checks that the cutoffs describe a terminating, meaningful summation.
    ///
    /// # Returns
    /// * `Ok(())` if `max_terms >= 1` and `tolerance` is finite and non-negative.
    /// * `Err(ArccosError::InvalidConfig)` otherwise.
    pub fn validate(&self) -> Result<(), ArccosError> {
        if self.max_terms == 0 {
            return Err(ArccosError::InvalidConfig {
                message: "series.max_terms must be at least 1".to_string(),
            });
        }
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(ArccosError::InvalidConfig {
                message: format!("series.tolerance must be finite and non-negative, got {}", self.tolerance),
            });
        }
        Ok(())
    }
}

/// A partial sum of the arcsine expansion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesSum {
    /// The accumulated sum.
    pub value: f64,
    /// Number of terms added, including the leading `x` term.
    pub terms: u32,
}

/// Computes `n!` by iterative multiplication.
///
/// # Errors
/// Returns `ArccosError::Overflow` as soon as the running product becomes
/// infinite. In `f64` this first happens at `171!`.
pub fn factorial(n: u32) -> Result<f64, ArccosError> {
    let mut result = 1.0_f64;
    for i in 2..=n {
        result *= f64::from(i);
        if result.is_infinite() {
            return Err(ArccosError::Overflow { n });
        }
    }
    Ok(result)
}

/// Raises `base` to a non-negative integer power by repeated multiplication.
/// No squaring shortcut is taken.
pub fn power<T: Float>(base: T, exponent: u32) -> T {
    let mut result = T::one();
    for _ in 0..exponent {
        result = result * base;
    }
    result
}

/// Sums the Maclaurin expansion of arcsine,
///
/// `arcsin(x) = Σ (2n)! / (4^n · (n!)^2 · (2n+1)) · x^(2n+1)`,
///
/// starting from `x` and adding terms until one falls below
/// `config.tolerance` in magnitude or `config.max_terms` terms have been
/// summed.
///
/// Each coefficient is rebuilt from factorials on every step rather than by
/// recurrence. With the default cutoffs the denominator overflows to
/// infinity at `n = 85`; that term evaluates to exactly zero and stops the
/// loop, so `factorial` never overflows unless the tolerance is zero.
///
/// No range reduction is applied, so accuracy degrades as `|x|` nears 1.
///
/// # Errors
/// Propagates `ArccosError::Overflow` from `factorial`.
pub fn arcsin_series(x: f64, config: &SeriesConfig) -> Result<SeriesSum, ArccosError> {
    let mut sum = x;
    let mut power_of_x = x;
    let mut terms = 1;

    for n in 1..config.max_terms {
        power_of_x *= x * x; // x^(2n+1)

        let numerator = factorial(2 * n)?;
        let denominator = power(4.0_f64, n) * power(factorial(n)?, 2) * f64::from(2 * n + 1);
        let term = (numerator / denominator) * power_of_x;
        sum += term;
        terms += 1;

        if term.abs() < config.tolerance {
            break;
        }
    }

    Ok(SeriesSum { value: sum, terms })
}
