/// A single answer recorded for a question.
///
/// The shape follows the question: single-choice questions store a
/// `Single` value, multi-choice questions store a `Multiple` list in
/// selection order (no duplicates).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerValue {
    /// The chosen option of a single-choice question.
    Single(String),

    /// The chosen options of a multi-choice question, in selection order.
    Multiple(Vec<String>),
}

impl AnswerValue {
    /// Try to get this value as a single chosen option.
    pub fn as_single(&self) -> Option<&str> {
        match self {
            Self::Single(s) => Some(s),
            Self::Multiple(_) => None,
        }
    }

    /// Try to get this value as a list of chosen options.
    pub fn as_multiple(&self) -> Option<&[String]> {
        match self {
            Self::Multiple(list) => Some(list),
            Self::Single(_) => None,
        }
    }

    /// Get the type name of this value for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Single(_) => "Single",
            Self::Multiple(_) => "Multiple",
        }
    }

    /// Flatten this value into a single wire string.
    ///
    /// Multiple selections are joined with `", "` in selection order; a
    /// single selection passes through unchanged.
    pub fn to_wire_string(&self) -> String {
        match self {
            Self::Single(s) => s.clone(),
            Self::Multiple(list) => list.join(", "),
        }
    }
}

impl From<String> for AnswerValue {
    fn from(s: String) -> Self {
        Self::Single(s)
    }
}

impl From<&str> for AnswerValue {
    fn from(s: &str) -> Self {
        Self::Single(s.to_string())
    }
}

impl From<Vec<String>> for AnswerValue {
    fn from(list: Vec<String>) -> Self {
        Self::Multiple(list)
    }
}

impl From<Vec<&str>> for AnswerValue {
    fn from(list: Vec<&str>) -> Self {
        Self::Multiple(list.into_iter().map(str::to_string).collect())
    }
}
