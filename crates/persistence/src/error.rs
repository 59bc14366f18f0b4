//! Error types for the topf-persistence crate.

/// Error type for all fallible operations in the topf-persistence crate.
///
/// Every variant is raised during input validation, before any computation
/// starts, so no partial result is ever produced.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PersistenceError {
    /// Returned when the input sequence has no samples.
    #[error("input sequence is empty")]
    EmptyInput,

    /// Returned when a sample is NaN or infinite.
    #[error("non-finite value {value} at index {index}")]
    NonFiniteValue {
        /// Position of the offending sample.
        index: usize,
        /// The offending value.
        value: f64,
    },

    /// Returned when `max - min` of finite samples overflows `f64`.
    #[error("value range overflows: max {max:e}, min {min:e}")]
    RangeOverflow {
        /// Largest sample.
        max: f64,
        /// Smallest sample.
        min: f64,
    },

    /// Returned when top-n peak selection is asked to keep zero peaks.
    #[error("number of peaks must be >= 1, got {n}")]
    InvalidPeakCount {
        /// The invalid peak count.
        n: usize,
    },

    /// Returned when the total persistence exponent is not finite and positive.
    #[error("exponent must be finite and positive, got {p}")]
    InvalidExponent {
        /// The invalid exponent.
        p: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_empty_input() {
        let e = PersistenceError::EmptyInput;
        assert_eq!(e.to_string(), "input sequence is empty");
    }

    #[test]
    fn error_non_finite_value() {
        let e = PersistenceError::NonFiniteValue {
            index: 3,
            value: f64::NAN,
        };
        assert_eq!(e.to_string(), "non-finite value NaN at index 3");

        let e = PersistenceError::NonFiniteValue {
            index: 0,
            value: f64::NEG_INFINITY,
        };
        assert_eq!(e.to_string(), "non-finite value -inf at index 0");
    }

    #[test]
    fn error_range_overflow() {
        let e = PersistenceError::RangeOverflow {
            max: 1e308,
            min: -1e308,
        };
        assert_eq!(
            e.to_string(),
            "value range overflows: max 1e308, min -1e308"
        );
    }

    #[test]
    fn error_invalid_peak_count() {
        let e = PersistenceError::InvalidPeakCount { n: 0 };
        assert_eq!(e.to_string(), "number of peaks must be >= 1, got 0");
    }

    #[test]
    fn error_invalid_exponent() {
        let e = PersistenceError::InvalidExponent { p: -0.5 };
        assert_eq!(e.to_string(), "exponent must be finite and positive, got -0.5");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<PersistenceError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<PersistenceError>();
    }
}
