use std::fmt;

/// A parsed JSON value. Only the literals and numbers are supported.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    True,
    False,
    Number(f64),
}

/// The kind of a [`Value`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Null,
    True,
    False,
    Number,
}

impl Value {
    pub fn tag(&self) -> Tag {
        match self {
            Value::Null => Tag::Null,
            Value::True => Tag::True,
            Value::False => Tag::False,
            Value::Number(_) => Tag::Number,
        }
    }

    /// The numeric payload.
    ///
    /// # Panics
    ///
    /// Panics if the value is not a [`Value::Number`]. Asking a literal for its number is a bug
    /// in the caller; use [`Value::as_number`] when the kind is not known.
    pub fn number(&self) -> f64 {
        match self {
            Value::Number(n) => *n,
            other => panic!("called `Value::number` on a {} value", other.tag()),
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::True => Some(true),
            Value::False => Some(false),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl Tag {
    pub fn desc(&self) -> &'static str {
        match self {
            Tag::Null => "null",
            Tag::True => "true",
            Tag::False => "false",
            Tag::Number => "number",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.desc())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_null() {
        assert_eq!(Value::default(), Value::Null);
        assert!(Value::default().is_null());
    }

    #[test]
    fn tags() {
        assert_eq!(Value::Null.tag(), Tag::Null);
        assert_eq!(Value::True.tag(), Tag::True);
        assert_eq!(Value::False.tag(), Tag::False);
        assert_eq!(Value::Number(1.0).tag(), Tag::Number);
    }

    #[test]
    fn accessors() {
        assert_eq!(Value::Number(-2.5).number(), -2.5);
        assert_eq!(Value::Number(0.0).as_number(), Some(0.0));
        assert_eq!(Value::Null.as_number(), None);
        assert_eq!(Value::True.as_bool(), Some(true));
        assert_eq!(Value::False.as_bool(), Some(false));
        assert_eq!(Value::Number(1.0).as_bool(), None);
    }

    #[test]
    #[should_panic(expected = "called `Value::number` on a null value")]
    fn number_on_null_panics() {
        Value::Null.number();
    }

    #[test]
    #[should_panic(expected = "on a true value")]
    fn number_on_true_panics() {
        Value::True.number();
    }
}
