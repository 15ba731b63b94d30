// src/engine/mod.rs

//! The arccos engine: exact special cases, then `π/2 − arcsin(x)` from the series.

use crate::core::{ArccosError, FRAC_PI_2, PI};
use crate::series::{self, SeriesConfig, SeriesSum};
use crate::validation::check_domain;

/// Evaluates arccosine through the arcsine Maclaurin expansion.
///
/// The engine holds only its series cutoffs. Every call depends on the
/// argument alone, so one engine can be shared freely across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ArccosEngine {
    config: SeriesConfig,
}

impl ArccosEngine {
    /// Creates an engine with the default cutoffs (100 terms, tolerance 1e-15).
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine with custom cutoffs.
    ///
    /// # Errors
    /// Returns `ArccosError::InvalidConfig` if `config` fails `SeriesConfig::validate`.
    pub fn with_config(config: SeriesConfig) -> Result<Self, ArccosError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The cutoffs this engine sums with.
    pub fn config(&self) -> &SeriesConfig {
        &self.config
    }

    /// Computes `arccos(x)` in radians.
    ///
    /// `1`, `-1` and `0` return `0`, `π` and `π/2` exactly without touching
    /// the series. Every other input is `π/2 − arcsin(x)`.
    ///
    /// # Arguments
    /// * `x` - A value in [-1, 1].
    ///
    /// # Returns
    /// * `Ok(angle)` with `angle` in [0, π].
    /// * `Err(ArccosError::OutOfRange)` if `x` lies outside [-1, 1] or is NaN.
    /// * `Err(ArccosError::Overflow)` if a factorial overflowed under the configured cutoffs.
    pub fn compute_arccos(&self, x: f64) -> Result<f64, ArccosError> {
        let x = check_domain(x)?;

        if x == 1.0 {
            return Ok(0.0);
        }
        if x == -1.0 {
            return Ok(PI);
        }
        if x == 0.0 {
            return Ok(FRAC_PI_2);
        }

        Ok(FRAC_PI_2 - self.compute_arcsin(x)?)
    }

    /// Computes `arcsin(x)` from the truncated series.
    ///
    /// The input is not range checked; outside [-1, 1] the partial sums diverge.
    pub fn compute_arcsin(&self, x: f64) -> Result<f64, ArccosError> {
        Ok(self.arcsin_expansion(x)?.value)
    }

    /// Like `compute_arcsin`, but also reports how many terms were summed.
    pub fn arcsin_expansion(&self, x: f64) -> Result<SeriesSum, ArccosError> {
        series::arcsin_series(x, &self.config)
    }
}

/// Computes `arccos(x)` with the default engine.
pub fn compute_arccos(x: f64) -> Result<f64, ArccosError> {
    ArccosEngine::new().compute_arccos(x)
}

/// Computes `arcsin(x)` with the default engine.
pub fn compute_arcsin(x: f64) -> Result<f64, ArccosError> {
    ArccosEngine::new().compute_arcsin(x)
}
