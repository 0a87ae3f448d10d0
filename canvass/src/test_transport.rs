//! Test transport for exercising wizards without network I/O.
//!
//! `TestTransport` records every submitted payload and can be configured to
//! reject deliveries, which makes the failed-submission and retry paths
//! testable without an HTTP endpoint.

use std::cell::RefCell;

use crate::{Record, Transport};

/// A transport that stores submissions in memory.
#[derive(Debug, Default)]
pub struct TestTransport {
    submissions: RefCell<Vec<Record>>,
    failures_remaining: RefCell<usize>,
}

/// Error type for `TestTransport`.
#[derive(Debug, thiserror::Error)]
pub enum TestTransportError {
    #[error("Delivery rejected by test transport")]
    Rejected,
}

impl TestTransport {
    /// Create a transport that accepts every submission.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a transport that rejects the next `count` submissions before
    /// accepting, mimicking a temporarily failing endpoint.
    pub fn failing(count: usize) -> Self {
        Self {
            submissions: RefCell::new(Vec::new()),
            failures_remaining: RefCell::new(count),
        }
    }

    /// Get the payloads delivered so far, in submission order.
    pub fn submissions(&self) -> Vec<Record> {
        self.submissions.borrow().clone()
    }

    /// Get the number of accepted submissions.
    pub fn submission_count(&self) -> usize {
        self.submissions.borrow().len()
    }
}

impl Transport for TestTransport {
    type Error = TestTransportError;

    fn submit(&self, record: &Record) -> Result<(), Self::Error> {
        let mut failures = self.failures_remaining.borrow_mut();
        if *failures > 0 {
            *failures -= 1;
            return Err(TestTransportError::Rejected);
        }
        self.submissions.borrow_mut().push(record.clone());
        Ok(())
    }
}
