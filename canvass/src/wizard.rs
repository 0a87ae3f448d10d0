//! The wizard state machine: one respondent walking a catalog step by step.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use canvass_types::{AnswerValue, Answers, Catalog, Question, QuestionKey, Section};

use crate::{Record, Transport, assembler};

/// Where the session currently is.
///
/// `Welcome` gates all interaction: until the welcome message is dismissed
/// via [`Wizard::start`], every mutating operation is a no-op. `ThankYou`
/// is entered on successful submission and is terminal unless a reset
/// policy is configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Welcome,
    InProgress,
    ThankYou,
}

/// What happens after the thank-you phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetPolicy {
    /// `ThankYou` is terminal; the session keeps its submitted state.
    Keep,

    /// After the given delay, the session clears all state and returns to
    /// `Welcome`, ready for the next respondent (kiosk-style reuse).
    After(Duration),
}

/// Error type for submission attempts.
///
/// Submission failure is the wizard's only recoverable error: the session
/// stays `InProgress` with all accumulated answers intact, and the caller
/// may retry.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// The transport failed to deliver the record (network failure or a
    /// non-success response from the collection endpoint).
    #[error("Submission failed: {0}")]
    Transport(#[from] anyhow::Error),
}

/// A single respondent's session over a catalog.
///
/// All transitions are synchronous and applied atomically; invalid
/// transitions (out-of-range steps, capped selections, wrong question
/// kind, wrong phase) are silent no-ops. The respondent is never blocked:
/// no operation validates that questions have been answered.
#[derive(Debug)]
pub struct Wizard {
    catalog: Catalog,
    reset_policy: ResetPolicy,
    current_step: usize,
    answers: Answers,
    free_text: HashMap<QuestionKey, String>,
    phase: Phase,
    reset_at: Option<Instant>,
}

impl Wizard {
    /// Create a session at the welcome phase of the first step.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            reset_policy: ResetPolicy::Keep,
            current_step: 0,
            answers: Answers::new(),
            free_text: HashMap::new(),
            phase: Phase::Welcome,
            reset_at: None,
        }
    }

    /// Set the post-submission reset policy.
    pub fn with_reset_policy(mut self, policy: ResetPolicy) -> Self {
        self.reset_policy = policy;
        self
    }

    /// Get the catalog this session runs over.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Get the current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Get the current step index.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Get the number of steps (one per catalog section).
    pub fn step_count(&self) -> usize {
        self.catalog.step_count()
    }

    /// Check if the session is at the last step.
    pub fn is_last_step(&self) -> bool {
        self.current_step + 1 == self.step_count()
    }

    /// Completed fraction of the wizard, for progress display.
    pub fn progress(&self) -> f64 {
        (self.current_step + 1) as f64 / self.step_count() as f64
    }

    /// Get the answers accumulated so far.
    pub fn answers(&self) -> &Answers {
        &self.answers
    }

    /// Get the free-text entries accumulated so far.
    pub fn free_text(&self) -> &HashMap<QuestionKey, String> {
        &self.free_text
    }

    /// Dismiss the welcome message and begin the questionnaire.
    pub fn start(&mut self) {
        if self.phase == Phase::Welcome {
            self.phase = Phase::InProgress;
        }
    }

    /// Record the answer of a single-choice question; last write wins.
    ///
    /// The value is not checked against the option set — the machine is
    /// deliberately lenient about answer content. No-op for text or
    /// multi-choice questions, unknown keys, or outside `InProgress`.
    pub fn select_single(&mut self, key: impl Into<QuestionKey>, value: impl Into<String>) {
        if self.phase != Phase::InProgress {
            return;
        }
        let key = key.into();
        match self.catalog.question(&key) {
            Some(q) if !q.allows_multiple() && !q.is_text_input() => {
                self.answers.insert(key, AnswerValue::Single(value.into()));
            }
            _ => {}
        }
    }

    /// Toggle an option of a multi-choice question.
    ///
    /// Deselection is always permitted. Selection appends in call order
    /// unless the question's cap is already reached, in which case the
    /// call is silently rejected. Each toggle produces a fresh selection
    /// list; previously observed snapshots are never mutated.
    pub fn toggle_multiple(&mut self, key: impl Into<QuestionKey>, value: impl Into<String>) {
        if self.phase != Phase::InProgress {
            return;
        }
        let key = key.into();
        let Some(question) = self.catalog.question(&key) else {
            return;
        };
        if !question.allows_multiple() {
            return;
        }
        let value = value.into();
        let mut selected: Vec<String> = match self.answers.get(&key) {
            Some(AnswerValue::Multiple(list)) => list.clone(),
            _ => Vec::new(),
        };
        if let Some(index) = selected.iter().position(|v| *v == value) {
            selected.remove(index);
        } else {
            if let Some(max) = question.max_selection()
                && selected.len() >= max
            {
                return;
            }
            selected.push(value);
        }
        self.answers.insert(key, AnswerValue::Multiple(selected));
    }

    /// Record free text for a question; unconditional overwrite.
    ///
    /// Used both for dedicated text questions and for elaboration attached
    /// to an "Other (Please specify)" selection of a choice question.
    pub fn set_free_text(&mut self, key: impl Into<QuestionKey>, text: impl Into<String>) {
        if self.phase != Phase::InProgress {
            return;
        }
        self.free_text.insert(key.into(), text.into());
    }

    /// Move to the next step; no-op at the last step.
    pub fn advance(&mut self) {
        if self.phase == Phase::InProgress && self.current_step + 1 < self.step_count() {
            self.current_step += 1;
        }
    }

    /// Move to the previous step; no-op at the first step.
    pub fn retreat(&mut self) {
        if self.phase == Phase::InProgress && self.current_step > 0 {
            self.current_step -= 1;
        }
    }

    /// Check whether a question is visible given the answers so far.
    pub fn is_visible(&self, question: &Question) -> bool {
        assembler::is_visible(question, &self.answers)
    }

    /// Get the section at the current step.
    pub fn current_section(&self) -> &Section {
        // current_step is clamped to the section range by construction.
        &self.catalog.sections()[self.current_step]
    }

    /// The ordered, visibility-filtered questions of the current step.
    ///
    /// This is a derived view, recomputed on every call, never stored.
    pub fn visible_questions(&self) -> Vec<&Question> {
        self.current_section()
            .questions()
            .iter()
            .filter(|q| self.is_visible(q))
            .collect()
    }

    /// Check whether a submission attempt would act.
    pub fn can_submit(&self) -> bool {
        self.phase == Phase::InProgress && self.is_last_step()
    }

    /// Assemble the current state into a submission record and deliver it.
    ///
    /// Acts only when [`can_submit`](Self::can_submit) holds, i.e. at the
    /// last step while `InProgress`; anywhere else it is the same silent
    /// no-op as the other invalid transitions. On success the session
    /// moves to `ThankYou` (arming the reset deadline under
    /// [`ResetPolicy::After`]). On failure the session is untouched: still
    /// `InProgress`, answers preserved, retry allowed. Double submission
    /// is excluded structurally: the call borrows the wizard mutably and
    /// blocks until the transport resolves.
    pub fn submit<T: Transport>(&mut self, transport: &T) -> Result<(), SubmitError> {
        if !self.can_submit() {
            return Ok(());
        }
        let record = self.assemble();
        debug!(fields = record.len(), "submitting questionnaire record");
        match transport.submit(&record) {
            Ok(()) => {
                self.phase = Phase::ThankYou;
                if let ResetPolicy::After(delay) = self.reset_policy {
                    self.reset_at = Some(Instant::now() + delay);
                }
                Ok(())
            }
            Err(err) => {
                let err = err.into();
                warn!(error = %err, "submission failed, state preserved for retry");
                Err(SubmitError::Transport(err))
            }
        }
    }

    /// Assemble the submission record for the current state without
    /// delivering it. Always covers the full catalog key set.
    pub fn assemble(&self) -> Record {
        assembler::assemble(&self.catalog, &self.answers, &self.free_text)
    }

    /// Drive the post-submission reset.
    ///
    /// Returns `true` if the reset fired: all answers and free text are
    /// cleared, the step returns to the start, and the phase returns to
    /// `Welcome`. Callers poll this with the current time; a session that
    /// is dropped or cancelled never resets, so no timer can act on
    /// disposed state.
    pub fn poll_reset(&mut self, now: Instant) -> bool {
        if self.phase != Phase::ThankYou {
            return false;
        }
        match self.reset_at {
            Some(deadline) if now >= deadline => {
                self.answers.clear();
                self.free_text.clear();
                self.current_step = 0;
                self.phase = Phase::Welcome;
                self.reset_at = None;
                true
            }
            _ => false,
        }
    }

    /// Cancel a pending post-submission reset, keeping the thank-you phase.
    pub fn cancel_reset(&mut self) {
        self.reset_at = None;
    }
}
