use crate::cursor::{Cursor, Mismatch};
use crate::value::Value;

/// The fixed JSON keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Literal {
    True,
    False,
    Null,
}

impl Literal {
    /// The literal starting with `lead`, if any.
    pub fn from_lead(lead: u8) -> Option<Self> {
        match lead {
            b't' => Some(Literal::True),
            b'f' => Some(Literal::False),
            b'n' => Some(Literal::Null),
            _ => None,
        }
    }

    pub fn keyword(self) -> &'static str {
        match self {
            Literal::True => "true",
            Literal::False => "false",
            Literal::Null => "null",
        }
    }

    pub fn value(self) -> Value {
        match self {
            Literal::True => Value::True,
            Literal::False => Value::False,
            Literal::Null => Value::Null,
        }
    }

    /// Match the whole keyword at `cur`. The dispatcher has already seen the lead character.
    pub fn match_at(self, cur: Cursor<'_>) -> Result<Cursor<'_>, Mismatch> {
        let (&lead, tail) = self
            .keyword()
            .as_bytes()
            .split_first()
            .ok_or(cur.mismatch())?;
        debug_assert_eq!(cur.peek(), Some(lead), "dispatched to the wrong literal");

        tail.iter()
            .try_fold(cur.bump(), |cur, &b| cur.eat(b).ok_or(cur.mismatch()))
    }
}
