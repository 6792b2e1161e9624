use std::fmt;

/// A value bound to one INSERT placeholder.
///
/// The schema only stores integers (ids) and text (everything else, including
/// timestamps, which travel as their canonical string form). Rendering to SQL
/// is an infra concern; domain code never serializes these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlValue {
    Int(i64),
    Text(String),
}

impl SqlValue {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            Self::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Int(_) => None,
            Self::Text(s) => Some(s.as_str()),
        }
    }
}

impl fmt::Display for SqlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{}", n),
            Self::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for SqlValue {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<&str> for SqlValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for SqlValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_accessor_returns_value() {
        assert_eq!(SqlValue::Int(42).as_int(), Some(42));
        assert_eq!(SqlValue::Int(42).as_text(), None);
    }

    #[test]
    fn text_accessor_returns_value() {
        let v = SqlValue::from("hello");
        assert_eq!(v.as_text(), Some("hello"));
        assert_eq!(v.as_int(), None);
    }

    #[test]
    fn display_formats_without_quoting() {
        assert_eq!(SqlValue::Int(7).to_string(), "7");
        assert_eq!(SqlValue::from("it's").to_string(), "it's");
    }
}
