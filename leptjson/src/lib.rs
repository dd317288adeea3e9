//! A small hand-rolled recursive-descent JSON value parser. It currently understands the
//! literals `true`, `false` and `null` and the full JSON number grammar; strings, arrays and
//! objects are not supported yet.
//!
//! Parsing never panics on bad input. Every failure is reported as a [`ParseError`] carrying
//! an [`ErrorKind`] and the [`Span`] of input it points at, so that front ends can render
//! diagnostics against the source text.
//!
//! ```
//! use leptjson::{parse, Tag};
//!
//! let value = parse(" 0.25 ").unwrap();
//! assert_eq!(value.tag(), Tag::Number);
//! assert_eq!(value.number(), 0.25);
//! ```

mod cursor;
mod error;
mod literal;
mod number;
mod parser;
mod span;
mod value;

pub use error::{ErrorKind, ParseError, ParseResult};
pub use parser::{parse, parse_into};
pub use span::Span;
pub use value::{Tag, Value};
