//! The production questionnaire catalogs, as pure data.
//!
//! Two variants of the same field survey; both are consumed by the
//! integration tests and double as realistic fixtures for backends.

pub mod violence_awareness;
pub mod womens_status;

pub use violence_awareness::{AUTO_RESET_DELAY, violence_awareness};
pub use womens_status::womens_status;
