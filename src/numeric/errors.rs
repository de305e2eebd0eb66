// ============================================================================
// Bounded Value Errors
// Error types for the fallible surface: parsing, checked ops, configuration
// ============================================================================

use std::fmt;

/// Errors reported by the checked and parsing operations.
///
/// The plain operators never produce these: they follow float semantics
/// and widen to `(-inf, +inf)` or propagate NaN instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoundedError {
    /// Input string is not a single scalar token
    InvalidInput,
    /// Finite operands produced an infinite bound
    Overflow,
    /// Divisor interval touches zero
    DivisionByZero,
    /// A sampled interior value escaped the endpoint hull of a unary function
    NonMonotonic {
        /// Sample point
        at: f64,
        /// Function value at the sample point
        value: f64,
    },
    /// A sampled interior value escaped the corner hull of a binary function
    InteriorExtremum {
        /// Left operand sample
        x: f64,
        /// Right operand sample
        y: f64,
        /// Function value at `(x, y)`
        value: f64,
    },
    /// A configuration value is out of range
    InvalidConfig(&'static str),
}

impl fmt::Display for BoundedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundedError::InvalidInput => write!(f, "invalid input: could not parse value"),
            BoundedError::Overflow => {
                write!(f, "arithmetic overflow: finite operands produced an infinite bound")
            },
            BoundedError::DivisionByZero => write!(f, "division by an interval containing zero"),
            BoundedError::NonMonotonic { at, value } => write!(
                f,
                "function is not monotonic over the interval: f({}) = {} lies outside the endpoint values",
                at, value
            ),
            BoundedError::InteriorExtremum { x, y, value } => write!(
                f,
                "function extremum is not at a corner: f({}, {}) = {} lies outside the corner values",
                x, y, value
            ),
            BoundedError::InvalidConfig(reason) => write!(f, "invalid configuration: {}", reason),
        }
    }
}

impl std::error::Error for BoundedError {}

/// Result type alias for fallible bounded-value operations
pub type BoundedResult<T> = Result<T, BoundedError>;
