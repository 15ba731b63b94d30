//! Numeric constants shared by the series and the engine.

/// Constants fixing the series behaviour and the angle conversions
pub mod series_constants {
    /// π to double precision. Used for the exact special cases and degree conversion.
    pub const PI: f64 = std::f64::consts::PI;
    /// π/2, the arccos of zero and the offset in arccos(x) = π/2 − arcsin(x).
    pub const FRAC_PI_2: f64 = PI / 2.0;
    /// Upper bound on the number of series terms, including the n = 0 term.
    pub const MAX_TAYLOR_SERIES_TERMS: u32 = 100;
    /// Terms with a magnitude below this are negligible and end the summation.
    pub const TAYLOR_SERIES_TOLERANCE: f64 = 1e-15;
}
