// ============================================================================
// Configuration
// Formatting and checked-apply settings
// ============================================================================

use crate::numeric::{BoundedError, BoundedResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Format Configuration
// ============================================================================

/// Controls how a [`BoundedValue`](crate::numeric::BoundedValue) is rendered.
///
/// The typical value is printed with at most `precision` significant digits
/// (fewer when the error makes trailing digits meaningless). The error is
/// printed with `error_precision` significant digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FormatConfig {
    /// Upper limit on significant digits of the typical value
    pub precision: usize,

    /// Significant digits of the error term
    pub error_precision: usize,
}

impl FormatConfig {
    /// Precision used when neither the caller nor the formatter asks for one.
    pub const DEFAULT_PRECISION: usize = 6;

    /// Create a configuration with the given typical-value precision
    pub fn new(precision: usize) -> Self {
        Self {
            precision,
            ..Self::default()
        }
    }

    /// Builder method: Set the typical-value precision
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Builder method: Set the error precision
    pub fn with_error_precision(mut self, error_precision: usize) -> Self {
        self.error_precision = error_precision;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> BoundedResult<()> {
        if self.precision == 0 {
            return Err(BoundedError::InvalidConfig("precision must be at least 1"));
        }
        if self.error_precision == 0 {
            return Err(BoundedError::InvalidConfig(
                "error precision must be at least 1",
            ));
        }
        // f64 carries at most 17 meaningful significant digits
        if self.precision > 17 || self.error_precision > 17 {
            return Err(BoundedError::InvalidConfig(
                "precision cannot exceed 17 significant digits",
            ));
        }
        Ok(())
    }
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            precision: Self::DEFAULT_PRECISION,
            error_precision: 1,
        }
    }
}

// ============================================================================
// Check Configuration
// ============================================================================

/// Controls how the checked `apply` variants probe a function.
///
/// Unary checks evaluate `samples` interior points; binary checks evaluate
/// a `samples × samples` interior grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CheckConfig {
    /// Interior sample points per axis
    pub samples: usize,
}

impl CheckConfig {
    /// Create a configuration with the given number of samples per axis
    pub fn new(samples: usize) -> Self {
        Self { samples }
    }

    /// Builder method: Set the number of samples per axis
    pub fn with_samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> BoundedResult<()> {
        if self.samples == 0 {
            return Err(BoundedError::InvalidConfig("at least one sample is required"));
        }
        Ok(())
    }
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self { samples: 16 }
    }
}
