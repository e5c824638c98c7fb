//! Mailing the finished transcript.
//!
//! The [`Dispatcher`] owns the precondition checks and the dispatch flag.
//! Delivery itself goes through a [`Mailer`], so everything above the
//! transport can be tested without a network (see [`RecordingMailer`]).

mod recording;
mod smtp;

use std::fmt;

use chrono::NaiveDateTime;
use lettre::message::Mailbox;
use tracing::{info, warn};

use crate::summary::{DEFAULT_SUBJECT_LABEL, format_summary, subject_line};
use crate::{IntakeRecord, Questionnaire, RequiredField};

pub use recording::RecordingMailer;
pub use smtp::SmtpMailer;

/// A fully rendered plain-text email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMessage {
    pub from: Mailbox,
    pub to: Mailbox,
    pub subject: String,
    pub body: String,
}

/// Transport failures.
#[derive(Debug, thiserror::Error)]
pub enum MailError {
    #[error("failed to build message: {0}")]
    Build(#[from] lettre::error::Error),

    #[error("smtp: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),

    #[error("rejected: {0}")]
    Rejected(String),
}

/// Outbound mail transport.
pub trait Mailer {
    fn send(&self, message: &OutgoingMessage) -> Result<(), MailError>;
}

impl<M: Mailer + ?Sized> Mailer for &M {
    fn send(&self, message: &OutgoingMessage) -> Result<(), MailError> {
        (**self).send(message)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("No se puede {} el email. Faltan: {}", .mode.verb(), MissingList(.fields))]
    MissingFields {
        mode: DispatchMode,
        fields: Vec<RequiredField>,
    },

    #[error("Error al enviar email: {0}")]
    Transport(#[from] MailError),
}

struct MissingList<'a>(&'a [RequiredField]);

impl fmt::Display for MissingList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, field) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(field.label())?;
        }
        Ok(())
    }
}

/// Whether a send honours the dispatch flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchMode {
    /// Send unless the record was already mailed.
    Initial,
    /// Send again regardless of the flag.
    Resend,
}

impl DispatchMode {
    fn verb(self) -> &'static str {
        match self {
            Self::Initial => "enviar",
            Self::Resend => "reenviar",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    Sent,
    /// Nothing was sent because the record had already been mailed.
    AlreadySent,
}

/// Formats transcripts and hands them to a [`Mailer`].
#[derive(Debug)]
pub struct Dispatcher<M> {
    mailer: M,
    from: Mailbox,
    to: Mailbox,
    subject_label: String,
}

impl<M: Mailer> Dispatcher<M> {
    pub fn new(mailer: M, from: Mailbox, to: Mailbox) -> Self {
        Self {
            mailer,
            from,
            to,
            subject_label: DEFAULT_SUBJECT_LABEL.to_string(),
        }
    }

    pub fn with_subject_label(mut self, label: impl Into<String>) -> Self {
        self.subject_label = label.into();
        self
    }

    pub fn mailer(&self) -> &M {
        &self.mailer
    }

    /// Mail the transcript of `record`.
    ///
    /// The record's dispatch flag is set only when the transport reports
    /// success. Missing identity fields fail before the transport is touched.
    pub fn dispatch(
        &self,
        record: &mut IntakeRecord,
        questionnaire: &Questionnaire,
        mode: DispatchMode,
        generated_at: NaiveDateTime,
    ) -> Result<DispatchOutcome, DispatchError> {
        if mode == DispatchMode::Initial && record.is_dispatched() {
            info!("summary already sent, skipping");
            return Ok(DispatchOutcome::AlreadySent);
        }

        let missing = record.missing_required();
        if !missing.is_empty() {
            warn!(?missing, "refusing to send summary with missing fields");
            return Err(DispatchError::MissingFields {
                mode,
                fields: missing,
            });
        }

        let message = OutgoingMessage {
            from: self.from.clone(),
            to: self.to.clone(),
            subject: subject_line(&self.subject_label, record),
            body: format_summary(record, questionnaire, generated_at),
        };

        if let Err(e) = self.mailer.send(&message) {
            warn!(?mode, "summary dispatch failed: {e}");
            return Err(e.into());
        }

        record.mark_dispatched();
        info!(?mode, bytes = message.body.len(), "summary sent");
        Ok(DispatchOutcome::Sent)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::{Age, PersonalInfo, Sex};

    fn mailbox(addr: &str) -> Mailbox {
        addr.parse().unwrap()
    }

    fn dispatcher() -> Dispatcher<RecordingMailer> {
        Dispatcher::new(
            RecordingMailer::new(),
            mailbox("admin@example.com"),
            mailbox("inbox@example.com"),
        )
    }

    fn at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 14)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap()
    }

    fn complete_record() -> IntakeRecord {
        let mut record = IntakeRecord::new(NaiveDate::from_ymd_opt(2025, 3, 14).unwrap());
        record.set_identity(&PersonalInfo::new(
            "Juan Pérez",
            "866 123 4567",
            "juan@example.com",
            Age::new(30).unwrap(),
            Sex::Male,
            true,
        ));
        record
    }

    fn questionnaire() -> Questionnaire {
        Questionnaire::new("TITULO", Vec::new())
    }

    #[test]
    fn missing_fields_message_lists_labels() {
        let err = DispatchError::MissingFields {
            mode: DispatchMode::Initial,
            fields: vec![RequiredField::Email, RequiredField::Age],
        };
        assert_eq!(
            err.to_string(),
            "No se puede enviar el email. Faltan: Email, Edad"
        );

        let err = DispatchError::MissingFields {
            mode: DispatchMode::Resend,
            fields: vec![RequiredField::Name],
        };
        assert_eq!(
            err.to_string(),
            "No se puede reenviar el email. Faltan: Nombre"
        );
    }

    #[test]
    fn sends_once_then_reports_already_sent() {
        let dispatcher = dispatcher();
        let mut record = complete_record();

        let outcome = dispatcher
            .dispatch(&mut record, &questionnaire(), DispatchMode::Initial, at())
            .unwrap();
        assert_eq!(outcome, DispatchOutcome::Sent);
        assert!(record.is_dispatched());

        let outcome = dispatcher
            .dispatch(&mut record, &questionnaire(), DispatchMode::Initial, at())
            .unwrap();
        assert_eq!(outcome, DispatchOutcome::AlreadySent);
        assert_eq!(dispatcher.mailer().sent().len(), 1);

        let sent = &dispatcher.mailer().sent()[0];
        assert_eq!(
            sent.subject,
            "Cuestionario de Selección Alimentaria Personalizada MUPAI - Juan Pérez (2025-03-14)"
        );
        assert_eq!(sent.to, mailbox("inbox@example.com"));
    }

    #[test]
    fn resend_ignores_the_flag() {
        let dispatcher = dispatcher().with_subject_label("Etiqueta");
        let mut record = complete_record();

        for _ in 0..2 {
            dispatcher
                .dispatch(&mut record, &questionnaire(), DispatchMode::Resend, at())
                .unwrap();
        }
        assert_eq!(dispatcher.mailer().sent().len(), 2);
        assert!(dispatcher.mailer().sent()[1].subject.starts_with("Etiqueta - "));
    }

    #[test]
    fn transport_failure_leaves_flag_clear() {
        let dispatcher = Dispatcher::new(
            RecordingMailer::failing("connection refused"),
            mailbox("admin@example.com"),
            mailbox("inbox@example.com"),
        );
        let mut record = complete_record();

        let err = dispatcher
            .dispatch(&mut record, &questionnaire(), DispatchMode::Initial, at())
            .unwrap_err();
        assert!(matches!(err, DispatchError::Transport(MailError::Rejected(_))));
        assert!(!record.is_dispatched());
    }
}
