// src/calculator/mod.rs

//! The validate → compute → format pipeline used by presentation layers.
//! This module contains the `Calculator` entry point and the `Evaluation`
//! record it produces.

mod evaluation;

pub use evaluation::Evaluation;

use crate::core::{Angle, ArccosError};
use crate::engine::ArccosEngine;
use crate::validation::{check_domain, parse_input};
use std::time::Instant;
use tracing::debug;

/// Front end over an `ArccosEngine` for callers that start from user input.
///
/// Holds no display state; each call returns a fresh `Evaluation`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Calculator {
    engine: ArccosEngine,
}

impl Calculator {
    /// Creates a calculator around the given engine.
    pub fn new(engine: ArccosEngine) -> Self {
        Self { engine }
    }

    /// The engine doing the arithmetic.
    pub fn engine(&self) -> &ArccosEngine {
        &self.engine
    }

    /// Parses `text` and evaluates it.
    ///
    /// # Returns
    /// * `Ok(Evaluation)` on success.
    /// * `Err(ArccosError::InvalidFormat)` if `text` is not a number.
    /// * Any error from `evaluate`.
    pub fn evaluate_text(&self, text: &str) -> Result<Evaluation, ArccosError> {
        let x = parse_input(text).inspect_err(|e| debug!(input = text, "rejected input: {}", e))?;
        self.evaluate(x)
    }

    /// Range checks `x`, then times a single `compute_arccos` call.
    ///
    /// # Returns
    /// * `Ok(Evaluation)` carrying the input, the angle and the engine time.
    /// * `Err(ArccosError::OutOfRange)` if `x` is outside [-1, 1].
    /// * `Err(ArccosError::Overflow)` if the series overflowed.
    pub fn evaluate(&self, x: f64) -> Result<Evaluation, ArccosError> {
        let x = check_domain(x).inspect_err(|e| debug!(value = x, "rejected input: {}", e))?;

        let start = Instant::now();
        let radians = self.engine.compute_arccos(x)?;
        let elapsed = start.elapsed();

        debug!(input = x, radians, elapsed_us = elapsed.as_micros() as u64, "computed arccos");
        Ok(Evaluation::new(x, Angle::from_radians(radians), elapsed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DisplaySettings;
    use crate::core::PI;
    use crate::series::SeriesConfig;
    use std::io;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::FmtSubscriber;

    // Collects formatted log output in memory.
    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn evaluates_text_input() {
        let calc = Calculator::default();
        let eval = calc.evaluate_text(" 0.5 ").unwrap();
        assert_eq!(eval.input(), 0.5);
        assert!((eval.angle().radians() - PI / 3.0).abs() < 1e-9);
        assert!((eval.angle().degrees() - 60.0).abs() < 1e-7);
    }

    #[test]
    fn rejected_input_stays_below_warn_level() {
        let logs = LogBuffer::default();
        let writer = logs.clone();
        let subscriber = FmtSubscriber::builder()
            .with_max_level(tracing::Level::WARN)
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let calc = Calculator::default();
            assert!(calc.evaluate_text("abc").is_err());
            assert!(calc.evaluate_text("2").is_err());
            assert!(calc.evaluate(-7.5).is_err());
        });

        let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        assert!(output.is_empty(), "unexpected log output: {}", output);
    }

    #[test]
    fn wraps_the_given_engine() {
        let engine = ArccosEngine::with_config(SeriesConfig { max_terms: 5, tolerance: 1e-3 }).unwrap();
        let calc = Calculator::new(engine);
        assert_eq!(calc.engine(), &engine);
        assert_eq!(calc.engine().config().max_terms, 5);
    }

    #[test]
    fn elapsed_matches_reported_milliseconds() {
        let eval = Calculator::default().evaluate(0.25).unwrap();
        let ms = eval.elapsed().as_nanos() as f64 / 1_000_000.0;
        assert_eq!(eval.elapsed_ms(), ms);
        assert!(eval.elapsed() < std::time::Duration::from_secs(1));
    }

    #[test]
    fn text_errors_are_distinct() {
        let calc = Calculator::default();
        assert!(matches!(calc.evaluate_text("x"), Err(ArccosError::InvalidFormat { .. })));
        assert!(matches!(calc.evaluate_text("3"), Err(ArccosError::OutOfRange { .. })));
        assert!(matches!(calc.evaluate_text("NaN"), Err(ArccosError::OutOfRange { .. })));
    }

    #[test]
    fn overflow_passes_through() {
        let engine = ArccosEngine::with_config(SeriesConfig { max_terms: 100, tolerance: 0.0 }).unwrap();
        let calc = Calculator::new(engine);
        assert_eq!(calc.evaluate(0.5).unwrap_err(), ArccosError::Overflow { n: 172 });
    }

    #[test]
    fn render_without_timing() {
        let eval = Calculator::default().evaluate(-1.0).unwrap();
        let settings = DisplaySettings { show_timing: false, ..DisplaySettings::default() };
        assert_eq!(
            eval.render(&settings),
            "arccos(-1.000000) = 3.1415926536 radians\n≈ 180.000000 degrees"
        );
    }

    #[test]
    fn display_includes_timing_line() {
        let eval = Calculator::default().evaluate(0.0).unwrap();
        let text = eval.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "arccos(0.000000) = 1.5707963268 radians");
        assert_eq!(lines[1], "≈ 90.000000 degrees");
        assert!(lines[2].starts_with("Computed in ") && lines[2].ends_with(" ms"));
    }

    #[test]
    fn custom_precisions() {
        let eval = Calculator::default().evaluate(1.0).unwrap();
        let settings = DisplaySettings {
            input_precision: 1,
            radian_precision: 2,
            degree_precision: 0,
            show_timing: false,
        };
        assert_eq!(eval.render(&settings), "arccos(1.0) = 0.00 radians\n≈ 0 degrees");
    }
}
