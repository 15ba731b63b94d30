// src/calculator/evaluation.rs
use crate::config::DisplaySettings;
use crate::core::Angle;
use std::fmt;
use std::time::Duration;

/// One completed arccos evaluation, ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    input: f64,
    angle: Angle,
    /// Wall-clock time spent inside the engine.
    elapsed: Duration,
}

impl Evaluation {
    /// Creates a new evaluation record. (Internal visibility)
    pub(crate) fn new(input: f64, angle: Angle, elapsed: Duration) -> Self {
        Self { input, angle, elapsed }
    }

    /// The value arccos was taken of.
    pub fn input(&self) -> f64 {
        self.input
    }

    /// The resulting angle.
    pub fn angle(&self) -> Angle {
        self.angle
    }

    /// Time spent computing the angle.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Elapsed time in fractional milliseconds.
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_nanos() as f64 / 1_000_000.0
    }

    /// Renders the evaluation with the given precisions.
    ///
    /// ```text
    /// arccos(0.500000) = 1.0471975512 radians
    /// ≈ 60.000000 degrees
    /// Computed in 0.004 ms
    /// ```
    pub fn render(&self, settings: &DisplaySettings) -> String {
        let mut out = format!(
            "arccos({:.ip$}) = {:.rp$} radians\n≈ {:.dp$} degrees",
            self.input,
            self.angle.radians(),
            self.angle.degrees(),
            ip = settings.input_precision,
            rp = settings.radian_precision,
            dp = settings.degree_precision,
        );
        if settings.show_timing {
            out.push_str(&format!("\nComputed in {:.3} ms", self.elapsed_ms()));
        }
        out
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&DisplaySettings::default()))
    }
}
