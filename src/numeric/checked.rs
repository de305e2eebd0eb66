// ============================================================================
// Checked Operations
// Fallible counterparts of the operators and of apply
// ============================================================================
//
// The plain operators never fail: overflow widens to infinity and a divisor
// touching zero gives an unbounded quotient. The checked forms report those
// cases instead. The sampled apply variants probe the function between the
// points the plain apply evaluates and report when a sample escapes the
// computed bounds, which is exactly the case where the plain result would be
// unsound. Sampling can miss a violation; a clean result is evidence, not
// proof.

use super::bounded_value::BoundedValue;
use super::errors::{BoundedError, BoundedResult};
use crate::config::CheckConfig;

impl BoundedValue {
    // ========================================================================
    // Arithmetic
    // ========================================================================

    /// Checked addition.
    ///
    /// # Errors
    /// Returns `Overflow` if finite operands produce an infinite bound.
    #[inline]
    pub fn checked_add(self, rhs: Self) -> BoundedResult<Self> {
        overflow_check(self, rhs, self + rhs)
    }

    /// Checked subtraction.
    ///
    /// # Errors
    /// Returns `Overflow` if finite operands produce an infinite bound.
    #[inline]
    pub fn checked_sub(self, rhs: Self) -> BoundedResult<Self> {
        overflow_check(self, rhs, self - rhs)
    }

    /// Checked multiplication.
    ///
    /// # Errors
    /// Returns `Overflow` if finite operands produce an infinite bound.
    #[inline]
    pub fn checked_mul(self, rhs: Self) -> BoundedResult<Self> {
        overflow_check(self, rhs, self * rhs)
    }

    /// Checked division.
    ///
    /// # Errors
    /// - `DivisionByZero` if the divisor bracket contains or touches zero
    /// - `Overflow` if finite operands produce an infinite bound
    #[inline]
    pub fn checked_div(self, rhs: Self) -> BoundedResult<Self> {
        if rhs.straddles_zero() {
            return Err(BoundedError::DivisionByZero);
        }
        overflow_check(self, rhs, self / rhs)
    }

    // ========================================================================
    // Sampled apply
    // ========================================================================

    /// [`apply`](Self::apply), additionally sampling `config.samples`
    /// interior points of the bracket.
    ///
    /// # Errors
    /// - `NonMonotonic` if a sample falls outside the computed bounds
    /// - `InvalidConfig` if `config` does not validate
    pub fn apply_checked<F>(&self, f: F, config: &CheckConfig) -> BoundedResult<Self>
    where
        F: Fn(f64) -> f64,
    {
        config.validate()?;
        let result = self.apply(&f);
        if !has_finite_bounds(self) {
            tracing::debug!(
                lower = self.lower(),
                upper = self.upper(),
                "bracket is not finite, skipping monotonicity sampling"
            );
            return Ok(result);
        }

        for at in interior(self.lower(), self.upper(), config.samples) {
            let value = f(at);
            if escapes(&result, value) {
                tracing::warn!(
                    at,
                    value,
                    lower = result.lower(),
                    upper = result.upper(),
                    "sampled value escapes the bounds of a unary apply"
                );
                return Err(BoundedError::NonMonotonic { at, value });
            }
        }
        Ok(result)
    }

    /// [`apply_binary`](Self::apply_binary), additionally sampling a
    /// `config.samples × config.samples` interior grid of the operand box.
    ///
    /// # Errors
    /// - `InteriorExtremum` if a grid value falls outside the computed bounds
    /// - `InvalidConfig` if `config` does not validate
    pub fn apply_binary_checked<F, R>(
        &self,
        f: F,
        rhs: R,
        config: &CheckConfig,
    ) -> BoundedResult<Self>
    where
        F: Fn(f64, f64) -> f64,
        R: Into<BoundedValue>,
    {
        config.validate()?;
        let rhs = rhs.into();
        let result = self.apply_binary(&f, rhs);
        if !has_finite_bounds(self) || !has_finite_bounds(&rhs) {
            tracing::debug!("operand box is not finite, skipping corner sampling");
            return Ok(result);
        }

        for x in interior(self.lower(), self.upper(), config.samples) {
            for y in interior(rhs.lower(), rhs.upper(), config.samples) {
                let value = f(x, y);
                if escapes(&result, value) {
                    tracing::warn!(
                        x,
                        y,
                        value,
                        lower = result.lower(),
                        upper = result.upper(),
                        "sampled value escapes the bounds of a binary apply"
                    );
                    return Err(BoundedError::InteriorExtremum { x, y, value });
                }
            }
        }
        Ok(result)
    }
}

fn has_finite_bounds(v: &BoundedValue) -> bool {
    v.lower().is_finite() && v.upper().is_finite()
}

fn overflow_check(
    lhs: BoundedValue,
    rhs: BoundedValue,
    result: BoundedValue,
) -> BoundedResult<BoundedValue> {
    if has_finite_bounds(&lhs) && has_finite_bounds(&rhs) && !has_finite_bounds(&result) {
        Err(BoundedError::Overflow)
    } else {
        Ok(result)
    }
}

/// NaN samples are not counted as escapes.
fn escapes(result: &BoundedValue, value: f64) -> bool {
    value < result.lower() || value > result.upper()
}

/// `samples` evenly spaced points strictly between `low` and `high`.
fn interior(low: f64, high: f64, samples: usize) -> impl Iterator<Item = f64> {
    let parts = samples as f64 + 1.0;
    (1..=samples).map(move |i| {
        let t = i as f64 / parts;
        // Blend rather than step so that huge brackets do not overflow
        (low * (1.0 - t) + high * t).max(low).min(high)
    })
}
