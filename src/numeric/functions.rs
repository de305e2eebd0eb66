// ============================================================================
// Elementary Functions
// Monotonic functions routed through BoundedValue::apply
// ============================================================================
//
// Every function here is monotonic on its whole domain, so the endpoint
// evaluation in `apply` is sound for any bracket. Inputs outside the domain
// (sqrt of a negative, ln of a non-positive) give NaN like plain f64 does.

use super::bounded_value::BoundedValue;

impl BoundedValue {
    #[inline]
    pub fn sqrt(self) -> Self {
        self.apply(f64::sqrt)
    }

    #[inline]
    pub fn cbrt(self) -> Self {
        self.apply(f64::cbrt)
    }

    #[inline]
    pub fn exp(self) -> Self {
        self.apply(f64::exp)
    }

    #[inline]
    pub fn exp2(self) -> Self {
        self.apply(f64::exp2)
    }

    /// Natural logarithm.
    #[inline]
    pub fn ln(self) -> Self {
        self.apply(f64::ln)
    }

    #[inline]
    pub fn log10(self) -> Self {
        self.apply(f64::log10)
    }

    #[inline]
    pub fn log2(self) -> Self {
        self.apply(f64::log2)
    }

    #[inline]
    pub fn atan(self) -> Self {
        self.apply(f64::atan)
    }

    #[inline]
    pub fn tanh(self) -> Self {
        self.apply(f64::tanh)
    }

    #[inline]
    pub fn sinh(self) -> Self {
        self.apply(f64::sinh)
    }

    /// `1 / self`, unbounded when the bracket touches zero.
    #[inline]
    pub fn recip(self) -> Self {
        1.0 / self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqrt_encloses() {
        let two = BoundedValue::from(2.0);
        let root = two.sqrt();
        assert_eq!(root.typical(), std::f64::consts::SQRT_2);
        assert!(root.contains(std::f64::consts::SQRT_2));

        // sqrt(2)² brackets 2
        let squared = root * root;
        assert!(squared.contains(2.0));
    }

    #[test]
    fn test_exp_ln() {
        let one = BoundedValue::from(1.0);
        let e = one.exp();
        assert!(e.contains(std::f64::consts::E));

        let back = e.ln();
        assert!(back.contains(1.0));
        assert!(back.width() > one.width());
    }

    #[test]
    fn test_log_bases() {
        let x = BoundedValue::from(1000.0);
        assert!(x.log10().contains(3.0));
        let y = BoundedValue::from(8.0);
        assert!(y.log2().contains(3.0));
        assert!(BoundedValue::from(3.0).exp2().contains(8.0));
        assert!(BoundedValue::from(27.0).cbrt().contains(3.0));
    }

    #[test]
    fn test_odd_functions_across_zero() {
        let x = BoundedValue::new(-1.0, 0.0, 1.0);
        for r in [x.atan(), x.tanh(), x.sinh(), x.cbrt()] {
            assert_eq!(r.typical(), 0.0);
            assert!(r.lower() < 0.0 && r.upper() > 0.0);
        }
        let atan = x.atan();
        assert!(atan.contains(-std::f64::consts::FRAC_PI_4));
        assert!(atan.contains(std::f64::consts::FRAC_PI_4));
    }

    #[test]
    fn test_out_of_domain_is_nan() {
        let x = BoundedValue::new(-4.0, -1.0, -0.5);
        let root = x.sqrt();
        assert!(root.typical().is_nan());
        assert!(root.lower().is_nan() && root.upper().is_nan());
    }

    #[test]
    fn test_recip() {
        let four = BoundedValue::from(4.0);
        assert!(four.recip().contains(0.25));
        assert!(BoundedValue::new(-1.0, 1.0, 2.0).recip().is_unbounded());
    }
}
