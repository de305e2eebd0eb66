// ============================================================================
// Outward Rounding
// One-step moves to the neighbouring representable f64
// ============================================================================
//
// These two functions are the only place the crate reasons about the
// representation of an f64. Every stored bound goes through exactly one of
// them.

/// Next representable value strictly below `x`.
///
/// `step_down(-inf)` stays `-inf`, NaN stays NaN, and `step_down(0.0)` is the
/// smallest negative subnormal.
#[inline]
pub fn step_down(x: f64) -> f64 {
    x.next_down()
}

/// Next representable value strictly above `x`.
///
/// `step_up(+inf)` stays `+inf`, NaN stays NaN, and `step_up(-0.0)` is the
/// smallest positive subnormal.
#[inline]
pub fn step_up(x: f64) -> f64 {
    x.next_up()
}
