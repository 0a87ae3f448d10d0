use crate::QuestionKey;

/// The option label whose selection invites free-text elaboration.
///
/// At submission time, a recorded answer equal to this label (or an empty
/// slot) is overwritten by the respondent's free text for the same key.
pub const OTHER_OPTION: &str = "Other (Please specify)";

/// A single question in a catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    /// The key under which this question's answer is stored and submitted.
    key: QuestionKey,

    /// The prompt text shown to the respondent.
    prompt: String,

    /// The kind of question (determines input type).
    kind: QuestionKind,

    /// Optional visibility dependency on a prior answer.
    condition: Option<Condition>,
}

impl Question {
    /// Create a new question.
    pub fn new(key: impl Into<QuestionKey>, prompt: impl Into<String>, kind: QuestionKind) -> Self {
        Self {
            key: key.into(),
            prompt: prompt.into(),
            kind,
            condition: None,
        }
    }

    /// Create a free-text question.
    pub fn text(key: impl Into<QuestionKey>, prompt: impl Into<String>) -> Self {
        Self::new(key, prompt, QuestionKind::Text)
    }

    /// Create a single-choice question.
    pub fn single<I, S>(key: impl Into<QuestionKey>, prompt: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            key,
            prompt,
            QuestionKind::SingleChoice {
                options: options.into_iter().map(Into::into).collect(),
            },
        )
    }

    /// Create a multi-choice question without a selection cap.
    pub fn multi<I, S>(key: impl Into<QuestionKey>, prompt: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            key,
            prompt,
            QuestionKind::MultiChoice {
                options: options.into_iter().map(Into::into).collect(),
                max_selection: None,
            },
        )
    }

    /// Cap the number of simultaneous selections of a multi-choice question.
    ///
    /// Has no effect on other question kinds.
    pub fn with_max_selection(mut self, max: usize) -> Self {
        if let QuestionKind::MultiChoice { max_selection, .. } = &mut self.kind {
            *max_selection = Some(max);
        }
        self
    }

    /// Make this question visible only when the answer to `key` equals `value`.
    pub fn when(mut self, key: impl Into<QuestionKey>, value: impl Into<String>) -> Self {
        self.condition = Some(Condition {
            key: key.into(),
            value: value.into(),
        });
        self
    }

    /// Get the answer/submission key for this question.
    pub fn key(&self) -> &QuestionKey {
        &self.key
    }

    /// Get the prompt text.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Get the question kind.
    pub fn kind(&self) -> &QuestionKind {
        &self.kind
    }

    /// Get the visibility condition, if any.
    pub fn condition(&self) -> Option<&Condition> {
        self.condition.as_ref()
    }

    /// Check if this question collects free text instead of option choices.
    pub fn is_text_input(&self) -> bool {
        matches!(self.kind, QuestionKind::Text)
    }

    /// Check if this question allows multiple selections.
    pub fn allows_multiple(&self) -> bool {
        matches!(self.kind, QuestionKind::MultiChoice { .. })
    }

    /// Get the selection cap of a multi-choice question, if any.
    pub fn max_selection(&self) -> Option<usize> {
        match &self.kind {
            QuestionKind::MultiChoice { max_selection, .. } => *max_selection,
            _ => None,
        }
    }

    /// Get the fixed option set, if this question has one.
    pub fn options(&self) -> Option<&[String]> {
        match &self.kind {
            QuestionKind::SingleChoice { options } | QuestionKind::MultiChoice { options, .. } => {
                Some(options)
            }
            QuestionKind::Text => None,
        }
    }
}

/// The kind of question, determining input type.
#[derive(Debug, Clone, PartialEq)]
pub enum QuestionKind {
    /// Free-text input; no fixed option set.
    Text,

    /// Pick exactly one option.
    SingleChoice {
        /// Selectable values, in display order.
        options: Vec<String>,
    },

    /// Pick any number of options, optionally capped.
    MultiChoice {
        /// Selectable values, in display order.
        options: Vec<String>,

        /// Upper bound on simultaneous selections, if any.
        max_selection: Option<usize>,
    },
}

/// A visibility dependency: the question is shown only while the answer
/// to `key` equals `value` exactly.
///
/// Equality is scalar-only: a multi-choice answer never satisfies a
/// condition, even if `value` is among the selections. See the wizard
/// visibility tests.
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    /// The question whose answer is inspected.
    pub key: QuestionKey,

    /// The answer value required for visibility.
    pub value: String,
}
