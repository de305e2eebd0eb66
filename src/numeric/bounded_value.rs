// ============================================================================
// Bounded Value
// A float carried together with a guaranteed enclosure of the exact result
// ============================================================================

use super::errors::{BoundedError, BoundedResult};
use super::rounding::{step_down, step_up};
use std::cmp::Ordering;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A floating-point result with rigorous lower and upper bounds.
///
/// `typical` is what ordinary `f64` arithmetic would have produced. `lower`
/// and `upper` enclose the exact mathematical result of the chain of
/// operations that produced the value, provided every function fed through
/// [`apply`](Self::apply) or [`apply_binary`](Self::apply_binary) met its
/// contract.
///
/// Comparison operators look at `typical` only. They answer "which best
/// guess is larger", not "which interval is certainly larger".
///
/// # Example
/// ```
/// use bounded_value::numeric::BoundedValue;
///
/// let third = BoundedValue::from(1.0) / 3.0;
/// let sum = third + third + third;
/// assert!(sum.contains(1.0));
/// assert!(sum.lower() < sum.upper());
/// ```
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoundedValue {
    lower: f64,
    typical: f64,
    upper: f64,
}

impl BoundedValue {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from an explicit bracket.
    ///
    /// Nothing is checked: the caller vouches that `lower ≤ exact ≤ upper`.
    #[inline]
    pub const fn new(lower: f64, typical: f64, upper: f64) -> Self {
        Self {
            lower,
            typical,
            upper,
        }
    }

    /// Promote a scalar, widening one step in each direction.
    ///
    /// A literal is not necessarily the value the caller meant (0.1 is not
    /// representable), so even a fresh scalar gets a non-degenerate bracket.
    #[inline]
    pub fn from_scalar(value: f64) -> Self {
        Self {
            lower: step_down(value),
            typical: value,
            upper: step_up(value),
        }
    }

    /// The all-NaN value, also returned by `Default`.
    #[inline]
    pub const fn nan() -> Self {
        Self::new(f64::NAN, f64::NAN, f64::NAN)
    }

    /// A value with the given best guess and no usable bounds.
    #[inline]
    pub const fn unbounded(typical: f64) -> Self {
        Self::new(f64::NEG_INFINITY, typical, f64::INFINITY)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Guaranteed lower bound.
    #[inline]
    pub const fn lower(&self) -> f64 {
        self.lower
    }

    /// Best-effort point estimate.
    #[inline]
    pub const fn typical(&self) -> f64 {
        self.typical
    }

    /// Guaranteed upper bound.
    #[inline]
    pub const fn upper(&self) -> f64 {
        self.upper
    }

    /// The larger of the two one-sided distances from `typical` to a bound.
    #[inline]
    pub fn error_size(&self) -> f64 {
        f64::max(self.typical - self.lower, self.upper - self.typical)
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Check if `x` lies inside the bracket (inclusive).
    #[inline]
    pub fn contains(&self, x: f64) -> bool {
        self.lower <= x && x <= self.upper
    }

    /// Check if the bracket contains or touches zero.
    #[inline]
    pub fn straddles_zero(&self) -> bool {
        self.lower <= 0.0 && self.upper >= 0.0
    }

    /// Check if both bounds are infinite.
    #[inline]
    pub fn is_unbounded(&self) -> bool {
        self.lower == f64::NEG_INFINITY && self.upper == f64::INFINITY
    }

    /// Bit-for-bit equality of all three fields.
    ///
    /// `==` compares `typical` only; use this when the bounds matter.
    pub fn identical(&self, other: &Self) -> bool {
        self.lower.to_bits() == other.lower.to_bits()
            && self.typical.to_bits() == other.typical.to_bits()
            && self.upper.to_bits() == other.upper.to_bits()
    }

    // ========================================================================
    // Propagation
    // ========================================================================

    /// Push the value through a function that is monotonic over
    /// `[lower, upper]`.
    ///
    /// Only the two endpoints are evaluated, so the result is sound exactly
    /// when the extremes of `f` over the bracket sit at the endpoints. A
    /// non-monotonic `f` silently yields bounds that may not enclose the
    /// true value; see [`apply_checked`](Self::apply_checked) for a
    /// sampling variant.
    pub fn apply<F>(&self, f: F) -> Self
    where
        F: Fn(f64) -> f64,
    {
        let (lower, upper) = outward(hull(&[f(self.lower), f(self.upper)]));
        Self {
            lower,
            typical: f(self.typical),
            upper,
        }
    }

    /// Combine with `rhs` through a function whose extremes over the box
    /// `[lower, upper] × [rhs.lower, rhs.upper]` sit at its corners.
    ///
    /// This holds for `+`, `-`, `*`, and for `/` when the divisor excludes
    /// zero. Scalars passed as `rhs` are promoted first.
    pub fn apply_binary<F, R>(&self, f: F, rhs: R) -> Self
    where
        F: Fn(f64, f64) -> f64,
        R: Into<BoundedValue>,
    {
        let rhs = rhs.into();
        let (lower, upper) = outward(hull(&self.corner_values(&f, &rhs)));
        Self {
            lower,
            typical: f(self.typical, rhs.typical),
            upper,
        }
    }

    /// `f` at the four corners of the operand box.
    fn corner_values<F>(&self, f: &F, rhs: &Self) -> [f64; 4]
    where
        F: Fn(f64, f64) -> f64,
    {
        [
            f(self.lower, rhs.lower),
            f(self.lower, rhs.upper),
            f(self.upper, rhs.lower),
            f(self.upper, rhs.upper),
        ]
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    fn sum(self, rhs: Self) -> Self {
        self.apply_binary(|a, b| a + b, rhs)
    }

    fn difference(self, rhs: Self) -> Self {
        self.apply_binary(|a, b| a - b, rhs)
    }

    fn product(self, rhs: Self) -> Self {
        self.apply_binary(|a, b| a * b, rhs)
    }

    fn quotient(self, rhs: Self) -> Self {
        // Near zero the quotient has no corner-attained extremum.
        if rhs.straddles_zero() {
            tracing::trace!(
                divisor_lower = rhs.lower,
                divisor_upper = rhs.upper,
                "divisor touches zero, quotient is unbounded"
            );
            Self::unbounded(self.typical / rhs.typical)
        } else {
            self.apply_binary(|a, b| a / b, rhs)
        }
    }

    // ========================================================================
    // Conversion from rust_decimal (for API boundaries)
    // ========================================================================

    /// Promote a decimal.
    ///
    /// The decimal is rounded to the nearest `f64` and then promoted, so the
    /// exact decimal value lies inside the resulting bracket.
    pub fn from_decimal(d: rust_decimal::Decimal) -> BoundedResult<Self> {
        let nearest: f64 = d
            .to_string()
            .parse()
            .map_err(|_| BoundedError::InvalidInput)?;
        Ok(Self::from_scalar(nearest))
    }
}

/// Smallest and largest of `values`, or `None` if any of them is NaN.
fn hull(values: &[f64]) -> Option<(f64, f64)> {
    if values.iter().any(|v| v.is_nan()) {
        return None;
    }
    let low = values.iter().copied().fold(f64::INFINITY, f64::min);
    let high = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    Some((low, high))
}

fn outward(range: Option<(f64, f64)>) -> (f64, f64) {
    match range {
        Some((low, high)) => (step_down(low), step_up(high)),
        None => (f64::NAN, f64::NAN),
    }
}

/// Free-function form of [`BoundedValue::apply`].
pub fn apply<F>(f: F, value: BoundedValue) -> BoundedValue
where
    F: Fn(f64) -> f64,
{
    value.apply(f)
}

/// Free-function form of [`BoundedValue::apply_binary`].
pub fn apply_binary<F>(f: F, lhs: BoundedValue, rhs: BoundedValue) -> BoundedValue
where
    F: Fn(f64, f64) -> f64,
{
    lhs.apply_binary(f, rhs)
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for BoundedValue {
    #[inline]
    fn default() -> Self {
        Self::nan()
    }
}

impl From<f64> for BoundedValue {
    #[inline]
    fn from(value: f64) -> Self {
        Self::from_scalar(value)
    }
}

// Every operator goes through the same private method whether the other
// operand is a BoundedValue or a scalar to be promoted.
macro_rules! impl_arithmetic {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident, $method:ident) => {
        impl $Op for BoundedValue {
            type Output = BoundedValue;

            #[inline]
            fn $op(self, rhs: BoundedValue) -> BoundedValue {
                self.$method(rhs)
            }
        }

        impl $Op<f64> for BoundedValue {
            type Output = BoundedValue;

            #[inline]
            fn $op(self, rhs: f64) -> BoundedValue {
                self.$method(BoundedValue::from_scalar(rhs))
            }
        }

        impl $Op<BoundedValue> for f64 {
            type Output = BoundedValue;

            #[inline]
            fn $op(self, rhs: BoundedValue) -> BoundedValue {
                BoundedValue::from_scalar(self).$method(rhs)
            }
        }

        impl $OpAssign for BoundedValue {
            #[inline]
            fn $op_assign(&mut self, rhs: BoundedValue) {
                *self = self.$method(rhs);
            }
        }

        impl $OpAssign<f64> for BoundedValue {
            #[inline]
            fn $op_assign(&mut self, rhs: f64) {
                *self = self.$method(BoundedValue::from_scalar(rhs));
            }
        }
    };
}

impl_arithmetic!(Add, add, AddAssign, add_assign, sum);
impl_arithmetic!(Sub, sub, SubAssign, sub_assign, difference);
impl_arithmetic!(Mul, mul, MulAssign, mul_assign, product);
impl_arithmetic!(Div, div, DivAssign, div_assign, quotient);

impl Neg for BoundedValue {
    type Output = BoundedValue;

    /// Multiplication by an exact `-1`. Every corner product is an exact
    /// sign flip, so each side widens by one step.
    #[inline]
    fn neg(self) -> BoundedValue {
        self.apply_binary(|a, b| a * b, BoundedValue::new(-1.0, -1.0, -1.0))
    }
}

// Ordering looks at the best guess only.
impl PartialEq for BoundedValue {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.typical == other.typical
    }
}

impl PartialEq<f64> for BoundedValue {
    #[inline]
    fn eq(&self, other: &f64) -> bool {
        self.typical == *other
    }
}

impl PartialOrd for BoundedValue {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.typical.partial_cmp(&other.typical)
    }
}

impl PartialOrd<f64> for BoundedValue {
    #[inline]
    fn partial_cmp(&self, other: &f64) -> Option<Ordering> {
        self.typical.partial_cmp(other)
    }
}

// ============================================================================
// Tests
// ============================================================================
