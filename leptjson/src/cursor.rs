//! Read position over the input text.
//!
//! A [`Cursor`] is `Copy` and never mutated in place: every step returns a new cursor. Sub-parsers
//! take a cursor by value and hand back the advanced one (or a [`Mismatch`]), which keeps the
//! grammar functions composable and testable on their own.

use crate::span::Span;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Cursor<'a> {
    src: &'a str,
    pos: usize,
}

/// Signals that a grammar rule did not match. `at` is the byte offset where matching stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Mismatch {
    pub at: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(src: &'a str) -> Self {
        Cursor { src, pos: 0 }
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    #[cfg(test)]
    pub fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    pub fn is_at_end(&self) -> bool {
        self.pos == self.src.len()
    }

    /// The current byte. Every character the grammar inspects is ASCII, so looking at bytes is
    /// enough; anything non-ASCII simply never matches.
    pub fn peek(&self) -> Option<u8> {
        self.src.as_bytes().get(self.pos).copied()
    }

    /// Step past the current byte. Only called after `peek` returned an ASCII byte, so the
    /// position stays on a char boundary.
    pub fn bump(self) -> Self {
        debug_assert!(self.peek().is_some_and(|b| b.is_ascii()));
        Cursor {
            pos: self.pos + 1,
            ..self
        }
    }

    /// Consume `expected` if it is the current byte.
    pub fn eat(self, expected: u8) -> Option<Self> {
        (self.peek() == Some(expected)).then(|| self.bump())
    }

    pub fn mismatch(&self) -> Mismatch {
        Mismatch { at: self.pos }
    }

    /// Skip space, tab, newline and carriage return. No other whitespace is recognized.
    pub fn skip_whitespace(self) -> Self {
        let mut cur = self;
        while let Some(b' ' | b'\t' | b'\n' | b'\r') = cur.peek() {
            cur = cur.bump();
        }
        cur
    }

    /// True when the cursor sits at end of input or on one of the four whitespace characters.
    pub fn at_value_boundary(&self) -> bool {
        matches!(self.peek(), None | Some(b' ' | b'\t' | b'\n' | b'\r'))
    }

    /// Text between `self` and a later cursor `end` over the same input.
    pub fn text_until(&self, end: Cursor<'a>) -> &'a str {
        debug_assert!(self.pos <= end.pos);
        &self.src[self.pos..end.pos]
    }

    pub fn span_until(&self, end: Cursor<'a>) -> Span {
        Span::new(self.pos, end.pos)
    }

    /// Span from `self` through the character at byte offset `at`, clamped to the input.
    pub fn span_through(&self, at: usize) -> Span {
        let width = self.src[at..].chars().next().map_or(0, char::len_utf8);
        Span::new(self.pos, at + width)
    }

    /// Span from `self` to the end of input.
    pub fn span_to_end(&self) -> Span {
        Span::new(self.pos, self.src.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bump_returns_new_cursor() {
        let start = Cursor::new("ab");
        let next = start.bump();
        assert_eq!(start.pos(), 0);
        assert_eq!(next.pos(), 1);
        assert_eq!(next.rest(), "b");
    }

    #[test]
    fn eat_only_matching_byte() {
        let cur = Cursor::new("-1");
        assert!(cur.eat(b'+').is_none());
        assert_eq!(cur.eat(b'-').map(|c| c.pos()), Some(1));
        assert!(Cursor::new("").eat(b'-').is_none());
    }

    #[test]
    fn skip_whitespace_stops_at_other_chars() {
        let cur = Cursor::new(" \t\r\n x").skip_whitespace();
        assert_eq!(cur.rest(), "x");

        // Vertical tab and form feed are not JSON whitespace.
        let cur = Cursor::new("\x0b\x0c1").skip_whitespace();
        assert_eq!(cur.pos(), 0);
    }

    #[test]
    fn value_boundary() {
        assert!(Cursor::new("").at_value_boundary());
        assert!(Cursor::new(" 1").at_value_boundary());
        assert!(!Cursor::new("1").at_value_boundary());
        assert!(!Cursor::new("\0").at_value_boundary());
    }

    #[test]
    fn span_through_covers_multibyte_char() {
        let cur = Cursor::new("1é");
        assert_eq!(cur.span_through(1), Span::new(0, 3));
        assert_eq!(cur.span_through(3), Span::new(0, 3));
    }
}
