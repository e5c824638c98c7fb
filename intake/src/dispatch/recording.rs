//! In-memory mailer for tests.
//!
//! `RecordingMailer` keeps every message it is asked to send and can be told
//! to fail, so dispatch paths can be exercised without a network.
//!
//! # Example
//!
//! ```rust,ignore
//! use intake::{Dispatcher, RecordingMailer};
//!
//! let dispatcher = Dispatcher::new(RecordingMailer::new(), from, to);
//! session.send_summary(&dispatcher, &questionnaire)?;
//!
//! assert_eq!(dispatcher.mailer().sent().len(), 1);
//! ```

use std::sync::{Mutex, PoisonError};

use super::{MailError, Mailer, OutgoingMessage};

/// A mailer that records messages instead of delivering them.
#[derive(Debug, Default)]
pub struct RecordingMailer {
    sent: Mutex<Vec<OutgoingMessage>>,
    failure: Mutex<Option<String>>,
    attempts: Mutex<usize>,
}

impl RecordingMailer {
    pub fn new() -> Self {
        Self::default()
    }

    /// A mailer whose every send fails with `reason`.
    pub fn failing(reason: impl Into<String>) -> Self {
        let mailer = Self::new();
        mailer.fail_with(Some(reason.into()));
        mailer
    }

    /// Make later sends fail with `reason`, or succeed again with `None`.
    pub fn fail_with(&self, reason: Option<String>) {
        *self.failure.lock().unwrap_or_else(PoisonError::into_inner) = reason;
    }

    /// Messages delivered so far, oldest first.
    pub fn sent(&self) -> Vec<OutgoingMessage> {
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of times `send` was called, failed calls included.
    pub fn attempts(&self) -> usize {
        *self.attempts.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Mailer for RecordingMailer {
    fn send(&self, message: &OutgoingMessage) -> Result<(), MailError> {
        *self.attempts.lock().unwrap_or_else(PoisonError::into_inner) += 1;

        if let Some(reason) = self
            .failure
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
        {
            return Err(MailError::Rejected(reason));
        }

        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.clone());
        Ok(())
    }
}
