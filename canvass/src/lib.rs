//! Multi-step questionnaire wizard.
//!
//! `canvass` presents grouped questions to a single respondent, one catalog
//! section per step, and accumulates single-choice, multi-choice, and
//! free-text answers. At the final step, the accumulated state is flattened
//! into a wire-ordered record and handed to a [`Transport`].
//!
//! The crate is presentation-agnostic: rendering of steps, option buttons,
//! and progress indicators belongs to the embedding application. The one
//! I/O backend this workspace ships is `canvass-submit-http`.
//!
//! Every answer is optional by design: invalid transitions (advancing past
//! the last step, exceeding a selection cap) are silent no-ops, never
//! errors. The only recoverable failure is a rejected submission, after
//! which all accumulated state is preserved for retry.

pub use canvass_types::{
    AnswerError, AnswerValue, Answers, Catalog, CatalogError, Condition, OTHER_OPTION, Question,
    QuestionKey, QuestionKind, Section,
};

mod record;
pub use record::Record;

mod assembler;
pub use assembler::assemble;

mod transport;
pub use transport::Transport;

mod wizard;
pub use wizard::{Phase, ResetPolicy, SubmitError, Wizard};

mod test_transport;
pub use test_transport::{TestTransport, TestTransportError};
