//! Errors for polynomial construction and coefficient access.

use thiserror::Error;

/// Errors that can occur constructing or indexing a polynomial.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum PolyError {
    /// A 1-based coefficient index fell outside `1..=degree + 1`.
    #[error("coefficient index {index} out of range 1..={count}")]
    OutOfRange {
        /// The offending index.
        index: usize,
        /// The number of stored coefficients, `degree + 1`.
        count: usize,
    },

    /// A supplied coefficient slice was shorter than `degree + 1`.
    #[error("expected at least {expected} coefficients, got {got}")]
    TooFewCoefficients {
        /// The number of coefficients the declared degree requires.
        expected: usize,
        /// The number of coefficients actually supplied.
        got: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let e = PolyError::OutOfRange { index: 4, count: 3 };
        assert_eq!(e.to_string(), "coefficient index 4 out of range 1..=3");

        let e = PolyError::TooFewCoefficients { expected: 3, got: 2 };
        assert_eq!(e.to_string(), "expected at least 3 coefficients, got 2");
    }
}
