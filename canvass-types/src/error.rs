use crate::QuestionKey;

/// Error type for catalog construction.
///
/// Catalogs are static configuration; any of these is fatal at startup.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Two questions share the same key anywhere in the catalog.
    #[error("Duplicate question key: {0}")]
    DuplicateKey(QuestionKey),

    /// A section contains no questions.
    #[error("Section '{0}' has no questions")]
    EmptySection(String),

    /// The catalog contains no sections at all.
    #[error("Catalog has no sections")]
    Empty,
}
