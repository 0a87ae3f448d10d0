use std::collections::HashMap;

use crate::{AnswerValue, QuestionKey};

/// Error type for answer access operations.
#[derive(Debug, thiserror::Error)]
pub enum AnswerError {
    #[error("Missing answer for question: {0}")]
    Missing(QuestionKey),

    #[error("Shape mismatch at '{key}': expected {expected}, got {actual}")]
    ShapeMismatch {
        key: QuestionKey,
        expected: &'static str,
        actual: &'static str,
    },
}

/// Answers accumulated by a respondent, keyed by question.
///
/// The map itself is unordered; wire ordering is imposed by the catalog
/// when the submission record is assembled. Multi-choice selection order
/// lives inside `AnswerValue::Multiple`.
#[derive(Debug, Clone, Default)]
pub struct Answers {
    values: HashMap<QuestionKey, AnswerValue>,
}

impl Answers {
    /// Create a new empty answer collection.
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Insert an answer, replacing any prior value for the same question.
    pub fn insert(&mut self, key: impl Into<QuestionKey>, value: impl Into<AnswerValue>) {
        self.values.insert(key.into(), value.into());
    }

    /// Get the answer for a question, if any.
    pub fn get(&self, key: &QuestionKey) -> Option<&AnswerValue> {
        self.values.get(key)
    }

    /// Check if a question has been answered.
    pub fn contains(&self, key: &QuestionKey) -> bool {
        self.values.contains_key(key)
    }

    /// Remove the answer for a question.
    pub fn remove(&mut self, key: &QuestionKey) -> Option<AnswerValue> {
        self.values.remove(key)
    }

    /// Remove all answers.
    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Get an iterator over all key-value pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&QuestionKey, &AnswerValue)> {
        self.values.iter()
    }

    /// Get the number of answered questions.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if nothing has been answered yet.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get a single-choice answer.
    pub fn get_single(&self, key: &QuestionKey) -> Result<&str, AnswerError> {
        match self.get(key) {
            Some(AnswerValue::Single(s)) => Ok(s),
            Some(other) => Err(AnswerError::ShapeMismatch {
                key: key.clone(),
                expected: "Single",
                actual: other.type_name(),
            }),
            None => Err(AnswerError::Missing(key.clone())),
        }
    }

    /// Get a multi-choice answer in selection order.
    pub fn get_multiple(&self, key: &QuestionKey) -> Result<&[String], AnswerError> {
        match self.get(key) {
            Some(AnswerValue::Multiple(list)) => Ok(list),
            Some(other) => Err(AnswerError::ShapeMismatch {
                key: key.clone(),
                expected: "Multiple",
                actual: other.type_name(),
            }),
            None => Err(AnswerError::Missing(key.clone())),
        }
    }
}

impl IntoIterator for Answers {
    type Item = (QuestionKey, AnswerValue);
    type IntoIter = std::collections::hash_map::IntoIter<QuestionKey, AnswerValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a Answers {
    type Item = (&'a QuestionKey, &'a AnswerValue);
    type IntoIter = std::collections::hash_map::Iter<'a, QuestionKey, AnswerValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_get() {
        let mut answers = Answers::new();
        answers.insert("AgeGroup", "25–34");
        answers.insert("Hobbies", vec!["Reading", "Hiking"]);

        assert_eq!(
            answers.get_single(&QuestionKey::new("AgeGroup")).unwrap(),
            "25–34"
        );
        assert_eq!(
            answers.get_multiple(&QuestionKey::new("Hobbies")).unwrap(),
            &["Reading".to_string(), "Hiking".to_string()]
        );
    }

    #[test]
    fn last_write_wins() {
        let mut answers = Answers::new();
        answers.insert("AgeGroup", "25–34");
        answers.insert("AgeGroup", "Under 18");

        assert_eq!(
            answers.get_single(&QuestionKey::new("AgeGroup")).unwrap(),
            "Under 18"
        );
    }

    #[test]
    fn shape_mismatch_error() {
        let mut answers = Answers::new();
        answers.insert("Gender", vec!["Male", "Other"]);

        let result = answers.get_single(&QuestionKey::new("Gender"));
        assert!(matches!(result, Err(AnswerError::ShapeMismatch { .. })));
    }

    #[test]
    fn missing_error() {
        let answers = Answers::new();
        let result = answers.get_single(&QuestionKey::new("Location"));
        assert!(matches!(result, Err(AnswerError::Missing(_))));
    }
}
