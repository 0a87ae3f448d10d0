//! Core types for the canvass crate.
//!
//! This crate provides the foundational types for defining questionnaires:
//! - `Catalog` and `Section` - The static survey structure, one step per section
//! - `Question`, `QuestionKind`, `Condition` - Individual questions
//! - `Answers`, `AnswerValue`, `QuestionKey` - Accumulated respondent input
//!
//! Everything here is pure data: a catalog is validated once at construction
//! and read-only afterwards.

mod question_key;
pub use question_key::QuestionKey;

mod answer_value;
pub use answer_value::AnswerValue;

mod answers;
pub use answers::{AnswerError, Answers};

mod question;
pub use question::{Condition, OTHER_OPTION, Question, QuestionKind};

mod catalog;
pub use catalog::{Catalog, Section};

mod error;
pub use error::CatalogError;
