// ============================================================================
// Bounded Value Library
// Floating-point results with a certified enclosure of the exact value
// ============================================================================

//! # Bounded Value
//!
//! A floating-point number that carries, next to its ordinary result, a
//! lower and an upper bound guaranteed to enclose the exact mathematical
//! result of the computation that produced it.
//!
//! ## Features
//!
//! - **Outward rounding**: every bound is pushed one representable step away
//!   from the true value, so rounding never tightens an enclosure
//! - **Closure-based propagation**: `apply` and `apply_binary` carry bounds
//!   through any monotonic / corner-extremal function
//! - **Operator surface**: `+ - * /`, compound assignment and negation, with
//!   scalars promoted on the fly
//! - **Checked variants**: overflow and zero-divisor reporting, and sampled
//!   detection of functions that break the propagation contract
//!
//! ## Example
//!
//! ```rust
//! use bounded_value::prelude::*;
//!
//! let a = BoundedValue::from(0.1);
//! let b = BoundedValue::from(0.2);
//! let sum = a + b;
//!
//! // Ordinary float arithmetic misses 0.3, the bracket does not
//! assert_ne!(sum.typical(), 0.3);
//! assert!(sum.contains(0.3));
//!
//! // Monotonic functions propagate bounds
//! let root = sum.apply(f64::sqrt);
//! assert!(root.lower() < root.typical() && root.typical() < root.upper());
//!
//! println!("{}", root); // e.g. 0.547723(±3e-16)
//! ```

pub mod config;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::config::{CheckConfig, FormatConfig};
    pub use crate::numeric::{
        apply, apply_binary, step_down, step_up, BoundedError, BoundedResult, BoundedValue,
    };
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;

    #[test]
    fn test_end_to_end_chain() {
        // Quadratic formula root of x² - 3x + 2: (3 - sqrt(9 - 8)) / 2 = 1
        let a = BoundedValue::from(1.0);
        let b = BoundedValue::from(-3.0);
        let c = BoundedValue::from(2.0);

        let discriminant = b * b - 4.0 * a * c;
        assert!(discriminant.contains(1.0));

        let root = (-b - discriminant.sqrt()) / (2.0 * a);
        assert_eq!(root.typical(), 1.0);
        assert!(root.contains(1.0));
        assert!(root.lower() < 1.0 && root.upper() > 1.0);
    }

    #[test]
    fn test_cancellation_is_visible_in_error() {
        // (1 + 1e-15) - 1 loses most digits; the error term says so
        let x = (BoundedValue::from(1.0) + 1e-15) - 1.0;
        assert!(x.contains(1e-15));
        assert!(x.error_size() / x.typical().abs() > 0.1);

        let text = x.to_string();
        let (typical, _) = text.split_once("(±").unwrap();
        assert!(typical.len() <= "1.1e-15".len(), "{}", text);
    }

    #[test]
    fn test_parse_compute_format() {
        let (x, rest) = BoundedValue::parse_token("2 8").unwrap();
        let y: BoundedValue = rest.parse().unwrap();
        let product = x * y;
        assert_eq!(product.typical(), 16.0);
        let root = product.sqrt();
        assert!(root.contains(4.0));
        assert!(root.to_string().starts_with("4(±"));
    }

    #[test]
    fn test_unbounded_division_poisons_chain() {
        let denominator = BoundedValue::from(1.0) - BoundedValue::from(1.0);
        assert!(denominator.straddles_zero());
        let q = BoundedValue::from(5.0) / denominator;
        assert!(q.is_unbounded());

        let later = q * 2.0 + 1.0;
        assert!(later.lower() == f64::NEG_INFINITY || later.lower().is_nan());
        assert_eq!(
            BoundedValue::from(5.0).checked_div(denominator),
            Err(BoundedError::DivisionByZero)
        );
    }

    #[test]
    fn test_checked_apply_guards_chain() {
        let config = CheckConfig::default();
        let angle = BoundedValue::new(0.1, 0.5, 1.0);
        assert!(angle.apply_checked(f64::sin, &config).is_ok());

        let wide = BoundedValue::new(0.0, 1.5, 3.0);
        assert!(wide.apply_checked(f64::sin, &config).is_err());
    }
}
