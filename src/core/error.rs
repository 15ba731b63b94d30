//! Error handling logic

use thiserror::Error;

/// Error types raised while turning user input into an angle.
/// Every variant is a deterministic validation failure: retrying the same
/// input yields the same error, and none of them is fatal to the caller.
#[derive(Debug, Clone, PartialEq, Error)] // PartialEq useful for testing error variants
pub enum ArccosError {
    /// The input text could not be parsed as a real number.
    /// Raised by the caller-side parser before the engine is reached.
    #[error("Invalid input: please enter a numeric value.")]
    InvalidFormat {
        /// The offending text, as received
        input: String,
    },

    /// The input is a number but lies outside the closed interval [-1, 1],
    /// where the series and the arccos identity do not apply.
    /// NaN and the infinities are reported here as well.
    #[error("Input must be in the range [-1, 1].")]
    OutOfRange {
        /// The rejected value
        value: f64,
    },

    /// A factorial became non-finite before the product was complete.
    #[error("Factorial overflow during calculation.")]
    Overflow {
        /// The argument whose factorial overflowed
        n: u32,
    },

    /// Settings could not be loaded, or hold values the series cannot run with.
    #[error("Configuration error: {message}")]
    InvalidConfig {
        /// InvalidConfig failure message
        message: String,
    },
}

impl ArccosError {
    /// The text a presentation layer should show for this error.
    ///
    /// Overflow is reported as an unexpected failure; every other variant
    /// is shown as-is.
    pub fn user_message(&self) -> String {
        match self {
            ArccosError::Overflow { .. } => format!("An unexpected error occurred: {}", self),
            _ => self.to_string(),
        }
    }
}
