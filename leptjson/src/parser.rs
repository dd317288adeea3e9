//! Recursive-descent driver: whitespace, value dispatch, and the root-value checks.

use tracing::*;

use crate::cursor::Cursor;
use crate::error::{ErrorKind, ParseError, ParseResult};
use crate::literal::Literal;
use crate::number;
use crate::value::Value;

/// Parse exactly one JSON value from `text`, allowing surrounding whitespace.
///
/// ```
/// use leptjson::{parse, ErrorKind, Value};
///
/// assert_eq!(parse("  null  "), Ok(Value::Null));
/// assert_eq!(parse("-1.5e2"), Ok(Value::Number(-150.0)));
/// assert_eq!(parse("1e400").unwrap_err().kind(), ErrorKind::NumberTooBig);
/// assert_eq!(parse("truee").unwrap_err().kind(), ErrorKind::RootNotSingular);
/// ```
pub fn parse(text: &str) -> Result<Value, ParseError> {
    let cur = Cursor::new(text).skip_whitespace();
    let (cur, value) = parse_value(cur)?;

    let cur = cur.skip_whitespace();
    if !cur.is_at_end() {
        trace!(pos = cur.pos(), "trailing content after root value");
        return Err(ParseError::new(
            ErrorKind::RootNotSingular,
            cur.span_to_end(),
        ));
    }

    trace!(?value, "parsed root value");
    Ok(value)
}

/// Parse `text` into `value` and return the outcome code.
///
/// `value` is reset to [`Value::Null`] first and only overwritten on success, so it is `Null`
/// after every failed parse.
pub fn parse_into(value: &mut Value, text: &str) -> ParseResult {
    *value = Value::Null;
    let res = parse(text);
    if let Ok(parsed) = res {
        *value = parsed;
    }
    ParseResult::from(&res)
}

/// Dispatch on the lookahead byte.
fn parse_value(cur: Cursor<'_>) -> Result<(Cursor<'_>, Value), ParseError> {
    let Some(lead) = cur.peek() else {
        return Err(ParseError::new(
            ErrorKind::ExpectValue,
            cur.span_to_end(),
        ));
    };

    match Literal::from_lead(lead) {
        Some(literal) => {
            trace!(pos = cur.pos(), keyword = literal.keyword(), "matching literal");
            parse_literal(cur, literal)
        }
        None => {
            trace!(pos = cur.pos(), "matching number");
            parse_number(cur)
        }
    }
}

fn parse_literal(cur: Cursor<'_>, literal: Literal) -> Result<(Cursor<'_>, Value), ParseError> {
    match literal.match_at(cur) {
        Ok(end) => Ok((end, literal.value())),
        Err(m) => Err(ParseError::new(
            ErrorKind::InvalidValue,
            cur.span_through(m.at),
        )),
    }
}

fn parse_number(cur: Cursor<'_>) -> Result<(Cursor<'_>, Value), ParseError> {
    let end = number::validate(cur)
        .map_err(|m| ParseError::new(ErrorKind::InvalidValue, cur.span_through(m.at)))?;

    // `0123` validates as `0`; what follows a number must end the value.
    if !end.at_value_boundary() {
        return Err(ParseError::new(
            ErrorKind::RootNotSingular,
            end.span_to_end(),
        ));
    }

    let text = cur.text_until(end);
    let converted = number::convert(text)
        .map_err(|_| ParseError::new(ErrorKind::InvalidValue, cur.span_until(end)))?;
    if converted.overflow {
        trace!(text, "number out of f64 range");
        return Err(ParseError::new(
            ErrorKind::NumberTooBig,
            cur.span_until(end),
        ));
    }

    Ok((end, Value::Number(converted.value)))
}
