use std::error::Error as StdError;
use std::fmt;

use crate::span::Span;

/// Why a parse failed.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ErrorKind {
    /// Nothing but whitespace where a value was required.
    ExpectValue,
    /// The text does not start a literal or number, or breaks off part way through one.
    InvalidValue,
    /// A complete value is followed by more non-whitespace text.
    RootNotSingular,
    /// The number is well formed but its magnitude does not fit in an `f64`.
    NumberTooBig,
}

impl ErrorKind {
    /// Stable snake_case name, for machine-readable output.
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::ExpectValue => "expect_value",
            ErrorKind::InvalidValue => "invalid_value",
            ErrorKind::RootNotSingular => "root_not_singular",
            ErrorKind::NumberTooBig => "number_too_big",
        }
    }

    pub fn desc(&self) -> &'static str {
        match self {
            ErrorKind::ExpectValue => "expected a value",
            ErrorKind::InvalidValue => "invalid value",
            ErrorKind::RootNotSingular => "root value is not singular",
            ErrorKind::NumberTooBig => "number too big",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.desc())
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ParseError {
    kind: ErrorKind,
    span: Span,
}

impl ParseError {
    pub fn new(kind: ErrorKind, span: Span) -> Self {
        Self { kind, span }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The input bytes the error points at. See [`ErrorKind`] for what each kind covers.
    pub fn span(&self) -> Span {
        self.span
    }

    pub fn result(&self) -> ParseResult {
        ParseResult::from(self.kind)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}..{}", self.kind, self.span.lo, self.span.hi)
    }
}

impl StdError for ParseError {}

/// Outcome code of [`parse_into`](crate::parse_into). Exactly one per call.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ParseResult {
    Ok,
    ExpectValue,
    InvalidValue,
    RootNotSingular,
    NumberTooBig,
}

impl ParseResult {
    pub fn is_ok(&self) -> bool {
        matches!(self, ParseResult::Ok)
    }
}

impl From<ErrorKind> for ParseResult {
    fn from(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::ExpectValue => ParseResult::ExpectValue,
            ErrorKind::InvalidValue => ParseResult::InvalidValue,
            ErrorKind::RootNotSingular => ParseResult::RootNotSingular,
            ErrorKind::NumberTooBig => ParseResult::NumberTooBig,
        }
    }
}

impl<T> From<&Result<T, ParseError>> for ParseResult {
    fn from(res: &Result<T, ParseError>) -> Self {
        match res {
            Ok(_) => ParseResult::Ok,
            Err(e) => e.result(),
        }
    }
}
