// ============================================================================
// Formatting and Parsing
// "value(±error)" rendering and single-token scalar parsing
// ============================================================================

use super::bounded_value::BoundedValue;
use super::errors::{BoundedError, BoundedResult};
use crate::config::FormatConfig;
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Display
// ============================================================================

/// Renders as `typical(±error)`.
///
/// `typical` gets only as many significant digits as the error leaves
/// meaningful, capped at the formatter precision (`{:.3}`) or
/// [`FormatConfig::DEFAULT_PRECISION`]. The error gets one digit.
impl fmt::Display for BoundedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let config = match f.precision() {
            Some(precision) => FormatConfig::default().with_precision(precision),
            None => FormatConfig::default(),
        };
        write_bounded(f, self, &config)
    }
}

/// A [`BoundedValue`] paired with an explicit [`FormatConfig`].
#[derive(Debug, Clone, Copy)]
pub struct Formatted<'a> {
    value: &'a BoundedValue,
    config: FormatConfig,
}

impl fmt::Display for Formatted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_bounded(f, self.value, &self.config)
    }
}

impl BoundedValue {
    /// Render with an explicit configuration instead of the formatter's.
    ///
    /// ```
    /// use bounded_value::config::FormatConfig;
    /// use bounded_value::numeric::BoundedValue;
    ///
    /// let x = BoundedValue::new(2.0, 2.4, 3.0);
    /// assert_eq!(x.display_with(&FormatConfig::default()).to_string(), "2(±0.6)");
    /// ```
    pub fn display_with(&self, config: &FormatConfig) -> Formatted<'_> {
        Formatted {
            value: self,
            config: *config,
        }
    }
}

fn write_bounded(
    f: &mut fmt::Formatter<'_>,
    value: &BoundedValue,
    config: &FormatConfig,
) -> fmt::Result {
    let error = value.error_size();
    let digits = significant_digits(value.typical(), error, config.precision);
    write!(
        f,
        "{}(±{})",
        format_general(value.typical(), digits),
        format_general(error, config.error_precision)
    )
}

/// Digits of `typical` not swamped by `error`, within `[1, cap]`.
fn significant_digits(typical: f64, error: f64, cap: usize) -> usize {
    let cap = cap.max(1);
    if error.is_nan() || error == 0.0 {
        return cap;
    }
    let implied = (typical.abs().log10() - error.log10()).ceil();
    if implied.is_nan() {
        return cap;
    }
    implied.clamp(1.0, cap as f64) as usize
}

/// `%g`-style rendering with `digits` significant digits: fixed notation for
/// moderate exponents, scientific otherwise, trailing zeros dropped.
fn format_general(value: f64, digits: usize) -> String {
    if !value.is_finite() || value == 0.0 {
        return value.to_string();
    }
    let digits = digits.max(1);

    // Let the scientific rendering decide the exponent so that rounding
    // (9.96 -> 1.0e1) is accounted for.
    let scientific = format!("{:.*e}", digits - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return scientific;
    };

    if exponent < -4 || exponent >= digits as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (digits as i32 - 1 - exponent).max(0) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

// ============================================================================
// Parsing
// ============================================================================

impl BoundedValue {
    /// Read the first whitespace-delimited token as a scalar and promote it.
    ///
    /// Returns the value and the unconsumed remainder. Bounds are never read
    /// back: the token is treated as an exact input.
    ///
    /// # Errors
    /// Returns `InvalidInput` if there is no token or it is not a number.
    pub fn parse_token(input: &str) -> BoundedResult<(Self, &str)> {
        let trimmed = input.trim_start();
        let end = trimmed.find(char::is_whitespace).unwrap_or(trimmed.len());
        let (token, rest) = trimmed.split_at(end);
        if token.is_empty() {
            return Err(BoundedError::InvalidInput);
        }
        let value: f64 = token.parse().map_err(|_| BoundedError::InvalidInput)?;
        Ok((Self::from_scalar(value), rest))
    }
}

impl FromStr for BoundedValue {
    type Err = BoundedError;

    /// Parse a single scalar, surrounding whitespace allowed.
    ///
    /// # Examples
    /// - "2.5" -> typical 2.5, bounds one step either side
    /// - " -1e-3 " -> typical -0.001
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (value, rest) = Self::parse_token(s)?;
        if !rest.trim().is_empty() {
            return Err(BoundedError::InvalidInput);
        }
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::{step_down, step_up};

    #[test]
    fn test_format_general() {
        assert_eq!(format_general(0.5, 6), "0.5");
        assert_eq!(format_general(100.0, 6), "100");
        assert_eq!(format_general(-2.5, 6), "-2.5");
        assert_eq!(format_general(0.0001, 6), "0.0001");
        assert_eq!(format_general(0.00001234, 3), "1.23e-05");
        assert_eq!(format_general(1234567.0, 6), "1.23457e+06");
        assert_eq!(format_general(3.0, 1), "3");
        assert_eq!(format_general(9.96, 2), "10");
        assert_eq!(format_general(8.881784197001252e-16, 1), "9e-16");
    }

    #[test]
    fn test_format_general_special() {
        assert_eq!(format_general(0.0, 6), "0");
        assert_eq!(format_general(f64::INFINITY, 6), "inf");
        assert_eq!(format_general(f64::NEG_INFINITY, 6), "-inf");
        assert_eq!(format_general(f64::NAN, 6), "NaN");
    }

    #[test]
    fn test_significant_digits() {
        // Decimal digits: a natural log would give 3 and 6 here
        assert_eq!(significant_digits(3.21, 0.21, 6), 2);
        assert_eq!(significant_digits(100.0, 0.5, 6), 3);
        assert_eq!(significant_digits(3.0, 1e-15, 6), 6);
        assert_eq!(significant_digits(3.0, 0.0, 4), 4);
        assert_eq!(significant_digits(1.0, 100.0, 6), 1);
        assert_eq!(significant_digits(0.0, 1e-3, 6), 1);
        assert_eq!(significant_digits(1.0, f64::INFINITY, 6), 1);
        assert_eq!(significant_digits(f64::NAN, f64::NAN, 6), 6);
        assert_eq!(significant_digits(3.0, 1e-15, 0), 1);
    }

    #[test]
    fn test_display_sum() {
        let sum = BoundedValue::from(1.0) + BoundedValue::from(2.0);
        let text = sum.to_string();
        assert!(text.starts_with("3(±"), "{}", text);
        assert!(text.ends_with(')'));

        let error: f64 = text["3(±".len()..text.len() - 1].parse().unwrap();
        assert!(error > 0.0 && error < 1e-14);
    }

    #[test]
    fn test_display_precision() {
        let pi = BoundedValue::from(std::f64::consts::PI);
        assert_eq!(pi.to_string(), "3.14159(±4e-16)");
        assert_eq!(format!("{:.3}", pi), "3.14(±4e-16)");

        let config = FormatConfig::new(10).with_error_precision(2);
        assert_eq!(
            pi.display_with(&config).to_string(),
            "3.141592654(±4.4e-16)"
        );
    }

    #[test]
    fn test_display_limited_by_error() {
        let x = BoundedValue::new(3.0, 3.21, 3.4);
        assert_eq!(x.to_string(), "3.2(±0.2)");
        assert_eq!(format!("{:.1}", x), "3(±0.2)");
    }

    #[test]
    fn test_display_degenerate() {
        assert_eq!(BoundedValue::default().to_string(), "NaN(±NaN)");
        assert_eq!(BoundedValue::new(2.0, 2.0, 2.0).to_string(), "2(±0)");
        assert_eq!(BoundedValue::unbounded(1.7).to_string(), "2(±inf)");
    }

    #[test]
    fn test_parse() {
        let x: BoundedValue = "2.5".parse().unwrap();
        assert_eq!(x.typical(), 2.5);
        assert_eq!(x.lower(), step_down(2.5));
        assert_eq!(x.upper(), step_up(2.5));

        let y: BoundedValue = "  -1e-3\n".parse().unwrap();
        assert_eq!(y.typical(), -0.001);
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!("".parse::<BoundedValue>(), Err(BoundedError::InvalidInput));
        assert_eq!("   ".parse::<BoundedValue>(), Err(BoundedError::InvalidInput));
        assert_eq!(
            "not_a_number".parse::<BoundedValue>(),
            Err(BoundedError::InvalidInput)
        );
        assert_eq!("1 2".parse::<BoundedValue>(), Err(BoundedError::InvalidInput));
        // Output notation is not accepted back
        assert_eq!(
            "3(±4e-16)".parse::<BoundedValue>(),
            Err(BoundedError::InvalidInput)
        );
    }

    #[test]
    fn test_parse_token_sequence() {
        let input = " 1.5 2.5\t-4 ";
        let (a, rest) = BoundedValue::parse_token(input).unwrap();
        let (b, rest) = BoundedValue::parse_token(rest).unwrap();
        let (c, rest) = BoundedValue::parse_token(rest).unwrap();
        assert_eq!(a.typical(), 1.5);
        assert_eq!(b.typical(), 2.5);
        assert_eq!(c.typical(), -4.0);
        assert_eq!(rest, " ");
        assert_eq!(
            BoundedValue::parse_token(rest),
            Err(BoundedError::InvalidInput)
        );
    }
}
