// src/lib.rs

//! `arcseries` - Arccosine from a hand-written arcsine Maclaurin series
//!
//! The engine evaluates `arccos(x) = π/2 − arcsin(x)`, summing the arcsine
//! expansion term by term with factorial-based coefficients. Inputs of
//! exactly `1`, `-1` and `0` are answered without the series. Accuracy is
//! well below `1e-9` for moderate inputs and degrades near `±1`, where the
//! truncated series converges slowly.

pub mod core;
pub mod series;
pub mod validation;
pub mod engine;
pub mod calculator;
pub mod config;

// Re-export the most common types for easier top-level use
pub use crate::core::{Angle, ArccosError, to_degrees};
pub use series::{SeriesConfig, SeriesSum, factorial, power};
pub use engine::{ArccosEngine, compute_arccos, compute_arcsin};
pub use calculator::{Calculator, Evaluation};
pub use config::{CalculatorConfig, DisplaySettings};
pub use validation::{check_domain, parse_input};

// Example 1: Reference angles
// The three exact special cases and two values computed through the series.
/// ```
/// use arcseries::{compute_arccos, ArccosError};
/// use std::f64::consts::PI;
///
/// assert_eq!(compute_arccos(1.0)?, 0.0);
/// assert_eq!(compute_arccos(-1.0)?, PI);
/// assert_eq!(compute_arccos(0.0)?, PI / 2.0);
///
/// // arccos(0.5) = π/3 and arccos(-0.5) = 2π/3
/// assert!((compute_arccos(0.5)? - PI / 3.0).abs() < 1e-9);
/// assert!((compute_arccos(-0.5)? - 2.0 * PI / 3.0).abs() < 1e-9);
/// # Ok::<(), ArccosError>(())
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item

// Example 2: From user text to a rendered result
// Shows the error kinds a presentation layer has to handle.
/// ```
/// use arcseries::{ArccosError, Calculator, DisplaySettings};
///
/// let calculator = Calculator::default();
///
/// let evaluation = calculator.evaluate_text("0.5").expect("0.5 is in the domain");
/// let settings = DisplaySettings { show_timing: false, ..DisplaySettings::default() };
/// assert_eq!(
///     evaluation.render(&settings),
///     "arccos(0.500000) = 1.0471975512 radians\n≈ 60.000000 degrees"
/// );
///
/// match calculator.evaluate_text("two") {
///     Err(e @ ArccosError::InvalidFormat { .. }) => {
///         assert_eq!(e.user_message(), "Invalid input: please enter a numeric value.");
///     }
///     other => panic!("unexpected: {:?}", other),
/// }
///
/// match calculator.evaluate_text("2") {
///     Err(e @ ArccosError::OutOfRange { .. }) => {
///         assert_eq!(e.user_message(), "Input must be in the range [-1, 1].");
///     }
///     other => panic!("unexpected: {:?}", other),
/// }
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item
