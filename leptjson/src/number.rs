//! JSON number grammar and conversion.
//!
//! ```text
//! number   = [ "-" ] integer [ fraction ] [ exponent ]
//! integer  = "0" / ( "1"-"9" *digit )
//! fraction = "." 1*digit
//! exponent = ( "e" / "E" ) [ "+" / "-" ] 1*digit
//! ```
//!
//! [`validate`] only recognizes the longest matching prefix; [`convert`] turns the recognized
//! text into an `f64`. The two are kept separate so the trailing-content check and the range
//! check can run (and be tested) independently.

use std::num::ParseFloatError;

use crate::cursor::{Cursor, Mismatch};

/// Advance past the longest prefix of `cur` that is a JSON number.
///
/// Note that `01` matches only `0`: leading zeros are left for the caller to report as trailing
/// content.
pub(crate) fn validate(cur: Cursor<'_>) -> Result<Cursor<'_>, Mismatch> {
    let cur = sign(cur);
    let cur = integer(cur)?;
    let cur = fraction(cur)?;
    exponent(cur)
}

fn sign(cur: Cursor<'_>) -> Cursor<'_> {
    cur.eat(b'-').unwrap_or(cur)
}

fn integer(cur: Cursor<'_>) -> Result<Cursor<'_>, Mismatch> {
    match cur.peek() {
        Some(b'0') => Ok(cur.bump()),
        Some(b'1'..=b'9') => Ok(digits(cur.bump())),
        _ => Err(cur.mismatch()),
    }
}

fn fraction(cur: Cursor<'_>) -> Result<Cursor<'_>, Mismatch> {
    match cur.eat(b'.') {
        Some(after_dot) => digits1(after_dot),
        None => Ok(cur),
    }
}

fn exponent(cur: Cursor<'_>) -> Result<Cursor<'_>, Mismatch> {
    let Some(after_marker) = cur.eat(b'e').or_else(|| cur.eat(b'E')) else {
        return Ok(cur);
    };
    let after_sign = after_marker
        .eat(b'+')
        .or_else(|| after_marker.eat(b'-'))
        .unwrap_or(after_marker);
    digits1(after_sign)
}

/// One or more digits.
fn digits1(cur: Cursor<'_>) -> Result<Cursor<'_>, Mismatch> {
    match cur.peek() {
        Some(b'0'..=b'9') => Ok(digits(cur.bump())),
        _ => Err(cur.mismatch()),
    }
}

/// Zero or more digits.
fn digits(mut cur: Cursor<'_>) -> Cursor<'_> {
    while let Some(b'0'..=b'9') = cur.peek() {
        cur = cur.bump();
    }
    cur
}

/// Result of converting validated number text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Converted {
    pub value: f64,
    /// The magnitude does not fit in an `f64` and `value` is an infinity.
    pub overflow: bool,
}

/// Convert number text to `f64`. Underflow rounds toward zero and is not reported.
pub(crate) fn convert(text: &str) -> Result<Converted, ParseFloatError> {
    let value: f64 = text.parse()?;
    Ok(Converted {
        value,
        overflow: value.is_infinite(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Returns the matched prefix, or the offset where matching failed.
    fn matched(input: &str) -> Result<&str, usize> {
        let start = Cursor::new(input);
        validate(start)
            .map(|end| start.text_until(end))
            .map_err(|m| m.at)
    }

    #[test]
    fn integers() {
        assert_eq!(matched("0"), Ok("0"));
        assert_eq!(matched("-0"), Ok("-0"));
        assert_eq!(matched("7"), Ok("7"));
        assert_eq!(matched("1234567890"), Ok("1234567890"));
        assert_eq!(matched("-42"), Ok("-42"));
    }

    #[test]
    fn leading_zero_stops_after_zero() {
        assert_eq!(matched("01"), Ok("0"));
        assert_eq!(matched("0123"), Ok("0"));
        assert_eq!(matched("-00"), Ok("-0"));
    }

    #[test]
    fn fractions() {
        assert_eq!(matched("0.5"), Ok("0.5"));
        assert_eq!(matched("3.1416"), Ok("3.1416"));
        assert_eq!(matched("-0.0001"), Ok("-0.0001"));
        assert_eq!(matched("1."), Err(2));
        assert_eq!(matched("1.e5"), Err(2));
        assert_eq!(matched(".5"), Err(0));
    }

    #[test]
    fn exponents() {
        assert_eq!(matched("1e10"), Ok("1e10"));
        assert_eq!(matched("1E10"), Ok("1E10"));
        assert_eq!(matched("1e+10"), Ok("1e+10"));
        assert_eq!(matched("1E-10"), Ok("1E-10"));
        assert_eq!(matched("-1.5e2"), Ok("-1.5e2"));
        assert_eq!(matched("1.234E+10"), Ok("1.234E+10"));
        assert_eq!(matched("1e012"), Ok("1e012"));
    }

    #[test]
    fn exponent_needs_digits() {
        assert_eq!(matched("1e"), Err(2));
        assert_eq!(matched("1E"), Err(2));
        assert_eq!(matched("1e+"), Err(3));
        assert_eq!(matched("1e-"), Err(3));
        assert_eq!(matched("1ex"), Err(2));
        assert_eq!(matched("1e+-1"), Err(3));
    }

    #[test]
    fn missing_integer_part() {
        assert_eq!(matched(""), Err(0));
        assert_eq!(matched("-"), Err(1));
        assert_eq!(matched("+1"), Err(0));
        assert_eq!(matched("--1"), Err(1));
        assert_eq!(matched("-x"), Err(1));
        assert_eq!(matched("nan"), Err(0));
        assert_eq!(matched("inf"), Err(0));
    }

    #[test]
    fn stops_at_longest_prefix() {
        assert_eq!(matched("12 34"), Ok("12"));
        assert_eq!(matched("1.5x"), Ok("1.5"));
        assert_eq!(matched("2e3.0"), Ok("2e3"));
        assert_eq!(matched("0x10"), Ok("0"));
    }

    #[test]
    fn convert_finite() {
        assert_eq!(
            convert("-1.5e2"),
            Ok(Converted {
                value: -150.0,
                overflow: false
            })
        );
        assert_eq!(convert("1.7976931348623157e308").map(|c| c.overflow), Ok(false));
    }

    #[test]
    fn convert_reports_overflow_both_signs() {
        let pos = convert("1e400").unwrap();
        assert!(pos.overflow);
        assert_eq!(pos.value, f64::INFINITY);

        let neg = convert("-1e309").unwrap();
        assert!(neg.overflow);
        assert_eq!(neg.value, f64::NEG_INFINITY);
    }

    #[test]
    fn convert_underflow_is_not_overflow() {
        let tiny = convert("1e-400").unwrap();
        assert!(!tiny.overflow);
        assert_eq!(tiny.value, 0.0);
    }
}
