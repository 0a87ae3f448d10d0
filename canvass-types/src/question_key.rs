use std::fmt;

/// The unique identifier of a question, e.g. `"AgeGroup"`.
///
/// Used as the key in `Answers` and as the field name in the outgoing
/// submission record, so keys must be unique across the whole catalog
/// (enforced by `Catalog::new`).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct QuestionKey {
    key: String,
}

impl QuestionKey {
    /// Create a new key.
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    /// Get the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.key
    }

    /// Check if the key is empty.
    pub fn is_empty(&self) -> bool {
        self.key.is_empty()
    }
}

impl fmt::Display for QuestionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key)
    }
}

impl From<&str> for QuestionKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for QuestionKey {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&String> for QuestionKey {
    fn from(s: &String) -> Self {
        Self::new(s.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new() {
        let key = QuestionKey::new("AgeGroup");
        assert_eq!(key.as_str(), "AgeGroup");
    }

    #[test]
    fn display() {
        let key = QuestionKey::new("StateOrUT");
        assert_eq!(format!("{}", key), "StateOrUT");
    }

    #[test]
    fn from_str() {
        let key: QuestionKey = "Gender".into();
        assert_eq!(key.as_str(), "Gender");
    }
}
