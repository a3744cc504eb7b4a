//! Error types for pine-ta.
//!
//! Two failure policies coexist in this library, on purpose:
//!
//! - Inputs shorter than the requested window are NOT an error: the affected
//!   function returns an empty vector so that indicator chains can be composed
//!   over variable-length history without length checks at every call site.
//! - Invalid arguments (zero periods, mismatched series lengths, unknown
//!   method tags, a kernel window longer than the input) fail synchronously
//!   with one of the variants below and are never silently coerced.
//!
//! Numerically degenerate results (division by zero producing ±inf or NaN)
//! are not errors either; they propagate through exactly as IEEE-754 defines
//! them.

use thiserror::Error;

/// The main error type for pine-ta operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The period parameter is invalid for the requested operation.
    #[error("invalid period {period}: {reason}")]
    InvalidPeriod {
        /// The invalid period value that was provided.
        period: usize,
        /// Description of why the period is invalid.
        reason: &'static str,
    },

    /// The kernel order parameter is invalid.
    #[error("invalid order {order}: {reason}")]
    InvalidOrder {
        /// The invalid order value that was provided.
        order: usize,
        /// Description of why the order is invalid.
        reason: &'static str,
    },

    /// The input data series is too short for an operation that has a hard
    /// length precondition.
    ///
    /// Most smoothers soft-fail to an empty output instead; only functions
    /// whose definition requires a full window (the polynomial kernel
    /// smoother) report this.
    #[error("{indicator}: insufficient data, required {required} elements, got {actual}")]
    InsufficientData {
        /// The number of data points required.
        required: usize,
        /// The number of data points provided.
        actual: usize,
        /// The operation that rejected the input.
        indicator: &'static str,
    },

    /// Two series that must be index-aligned have different lengths.
    #[error("length mismatch: {left} vs {right} elements")]
    LengthMismatch {
        /// Length of the first series.
        left: usize,
        /// Length of the second series.
        right: usize,
    },

    /// A method tag parsed from a string did not name a known method.
    #[error("unknown method {name:?}")]
    UnknownMethod {
        /// The unrecognized tag.
        name: String,
    },

    /// Failed to convert a numeric value to the target element type.
    #[error("numeric conversion failed: {context}")]
    NumericConversion {
        /// Description of the conversion that failed.
        context: &'static str,
    },
}

/// Convenience type alias for Results using the pine-ta [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;
