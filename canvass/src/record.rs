use indexmap::IndexMap;

use canvass_types::QuestionKey;

/// The flattened submission payload: one string value per catalog question,
/// in catalog order.
///
/// A record always covers the full catalog key set, regardless of how far
/// the respondent progressed — unanswered and invisible questions are
/// present with empty values. This is the wire contract with the external
/// collection endpoint.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: IndexMap<QuestionKey, String>,
}

impl Record {
    pub(crate) fn new() -> Self {
        Self {
            fields: IndexMap::new(),
        }
    }

    pub(crate) fn insert(&mut self, key: QuestionKey, value: String) {
        self.fields.insert(key, value);
    }

    pub(crate) fn get_mut(&mut self, key: &QuestionKey) -> Option<&mut String> {
        self.fields.get_mut(key)
    }

    /// Get the value for a question key.
    pub fn get(&self, key: &QuestionKey) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Iterate over all fields in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (&QuestionKey, &str)> {
        self.fields.iter().map(|(k, v)| (k, v.as_str()))
    }

    /// Get the keys in catalog order.
    pub fn keys(&self) -> impl Iterator<Item = &QuestionKey> {
        self.fields.keys()
    }

    /// Get the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Consume the record into `(field name, value)` pairs in catalog order,
    /// ready for form encoding.
    pub fn into_fields(self) -> Vec<(String, String)> {
        self.fields
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect()
    }
}

impl IntoIterator for Record {
    type Item = (QuestionKey, String);
    type IntoIter = indexmap::map::IntoIter<QuestionKey, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}
