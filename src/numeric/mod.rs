// ============================================================================
// Numeric Module
// Floating-point values carrying a certified enclosure of the exact result
// ============================================================================
//
// This module provides:
// - step_down/step_up: the outward-rounding primitives
// - BoundedValue: typical value plus guaranteed lower/upper bounds
// - apply/apply_binary: bound propagation through caller-supplied functions
// - BoundedError: error types for the checked and parsing surface
//
// Design principles:
// - Every stored bound is rounded one step outward
// - Plain operators never fail; checked_* variants return Result
// - Ordering compares the typical value only

mod bounded_value;
mod checked;
mod errors;
mod format;
mod functions;
mod rounding;

pub use bounded_value::{apply, apply_binary, BoundedValue};
pub use errors::{BoundedError, BoundedResult};
pub use format::Formatted;
pub use rounding::{step_down, step_up};
