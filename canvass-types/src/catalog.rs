use std::collections::HashSet;

use crate::{CatalogError, Question, QuestionKey};

/// One catalog-defined group of questions shown together as a wizard step.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    /// The section title shown above the step.
    title: String,

    /// The questions of this step, in display order.
    questions: Vec<Question>,
}

impl Section {
    /// Create a new section.
    pub fn new(title: impl Into<String>, questions: Vec<Question>) -> Self {
        Self {
            title: title.into(),
            questions,
        }
    }

    /// Get the section title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Get the questions of this section, in display order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }
}

/// The top-level structure containing all sections of a questionnaire.
///
/// A catalog is presentation-agnostic, static data: it defines the step
/// order (one step per section), the display order within each step, and
/// the exact key set of the outgoing submission record. It is validated
/// once at construction and read-only thereafter.
#[derive(Debug, Clone)]
pub struct Catalog {
    /// The questionnaire title.
    title: String,

    /// Optional message shown before the first step.
    welcome: Option<String>,

    /// Optional message shown after submission.
    thank_you: Option<String>,

    /// All sections, in step order.
    sections: Vec<Section>,
}

impl Catalog {
    /// Create a new catalog, validating its structure.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the catalog has no sections, any section
    /// is empty, or any question key appears more than once anywhere in
    /// the catalog.
    pub fn new(title: impl Into<String>, sections: Vec<Section>) -> Result<Self, CatalogError> {
        if sections.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut seen = HashSet::new();
        for section in &sections {
            if section.questions.is_empty() {
                return Err(CatalogError::EmptySection(section.title.clone()));
            }
            for question in &section.questions {
                if !seen.insert(question.key().clone()) {
                    return Err(CatalogError::DuplicateKey(question.key().clone()));
                }
            }
        }
        Ok(Self {
            title: title.into(),
            welcome: None,
            thank_you: None,
            sections,
        })
    }

    /// Set the welcome message.
    pub fn with_welcome(mut self, welcome: impl Into<String>) -> Self {
        self.welcome = Some(welcome.into());
        self
    }

    /// Set the thank-you message.
    pub fn with_thank_you(mut self, thank_you: impl Into<String>) -> Self {
        self.thank_you = Some(thank_you.into());
        self
    }

    /// Get the questionnaire title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Get the welcome message, if any.
    pub fn welcome(&self) -> Option<&str> {
        self.welcome.as_deref()
    }

    /// Get the thank-you message, if any.
    pub fn thank_you(&self) -> Option<&str> {
        self.thank_you.as_deref()
    }

    /// Get the sections, in step order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Get the section at the given step index.
    pub fn section(&self, step: usize) -> Option<&Section> {
        self.sections.get(step)
    }

    /// Get the number of wizard steps (one per section).
    pub fn step_count(&self) -> usize {
        self.sections.len()
    }

    /// Iterate over all questions in catalog order (the wire-format order).
    pub fn questions(&self) -> impl Iterator<Item = &Question> {
        self.sections.iter().flat_map(|s| s.questions.iter())
    }

    /// Look up a question by key.
    pub fn question(&self, key: &QuestionKey) -> Option<&Question> {
        self.questions().find(|q| q.key() == key)
    }

    /// Get the total number of questions across all sections.
    pub fn question_count(&self) -> usize {
        self.sections.iter().map(|s| s.questions.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CatalogError;

    fn demographics() -> Section {
        Section::new(
            "Demographics",
            vec![
                Question::single("AgeGroup", "Age Group:", ["Under 18", "18–24", "25–34"]),
                Question::text("StateOrUT", "State/Union Territory:"),
            ],
        )
    }

    #[test]
    fn valid_catalog() {
        let catalog = Catalog::new("Status Survey", vec![demographics()]).unwrap();
        assert_eq!(catalog.step_count(), 1);
        assert_eq!(catalog.question_count(), 2);
        assert!(catalog.question(&"AgeGroup".into()).is_some());
        assert!(catalog.question(&"Missing".into()).is_none());
    }

    #[test]
    fn duplicate_key_rejected() {
        let sections = vec![
            demographics(),
            Section::new(
                "Safety",
                vec![Question::single("AgeGroup", "Again?", ["Yes", "No"])],
            ),
        ];
        let result = Catalog::new("Status Survey", sections);
        assert!(matches!(result, Err(CatalogError::DuplicateKey(key)) if key.as_str() == "AgeGroup"));
    }

    #[test]
    fn empty_section_rejected() {
        let sections = vec![demographics(), Section::new("Empty", vec![])];
        let result = Catalog::new("Status Survey", sections);
        assert!(matches!(result, Err(CatalogError::EmptySection(title)) if title == "Empty"));
    }

    #[test]
    fn empty_catalog_rejected() {
        assert!(matches!(
            Catalog::new("Nothing", vec![]),
            Err(CatalogError::Empty)
        ));
    }

    #[test]
    fn questions_iterate_in_catalog_order() {
        let sections = vec![
            demographics(),
            Section::new(
                "Safety",
                vec![Question::single("FeelsSafe", "Safe at night?", ["Yes", "No"])],
            ),
        ];
        let catalog = Catalog::new("Status Survey", sections).unwrap();
        let keys: Vec<_> = catalog.questions().map(|q| q.key().as_str()).collect();
        assert_eq!(keys, vec!["AgeGroup", "StateOrUT", "FeelsSafe"]);
    }
}
