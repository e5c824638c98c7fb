//! # intake
//!
//! Core of the food-preference intake questionnaire. Frontend-agnostic.
//!
//! A user's run through the wizard is held in an [`IntakeSession`]. The session
//! gates every step behind the earlier ones:
//!
//! 1. [`IntakeSession::authenticate`] checks the shared access password.
//! 2. [`IntakeSession::begin`] validates name, phone and email (see [`validate`])
//!    and requires consent before any food section can be answered.
//! 3. [`IntakeSession::submit_section`] merges a section's answers into the record.
//! 4. [`IntakeSession::finish`] moves to the final summary.
//! 5. [`IntakeSession::send_summary`] formats the transcript and mails it once;
//!    [`IntakeSession::resend_summary`] mails it again on request.
//! 6. [`IntakeSession::reset`] throws everything away.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use intake::{AccessGate, Age, Dispatcher, IntakeSession, PersonalInfo, RecordingMailer, Sex};
//!
//! let mut session = IntakeSession::new(AccessGate::new(config.access_password.clone()));
//! session.authenticate("secreto")?;
//! session.begin(PersonalInfo::new(
//!     "Juan Pérez",
//!     "866 123 4567",
//!     "juan@example.com",
//!     Age::new(30)?,
//!     Sex::Male,
//!     true,
//! ))?;
//! session.submit_section(answers)?;
//! session.finish()?;
//!
//! let dispatcher = Dispatcher::new(mailer, from, to);
//! session.send_summary(&dispatcher, &questionnaire)?;
//! ```
//!
//! ## Frontends
//!
//! Frontends are separate crates that render sections and call the session:
//! - `intake-requestty` - terminal wizard via requestty

// Re-export all types from intake-types
pub use intake_types::*;

pub mod catalog;
pub mod config;
pub mod dispatch;
pub mod profile;
pub mod record;
pub mod session;
pub mod summary;
pub mod validate;

pub use catalog::CatalogError;
pub use config::{Config, ConfigError, Secret, SmtpSettings};
pub use dispatch::{
    DispatchError, DispatchMode, DispatchOutcome, Dispatcher, MailError, Mailer, OutgoingMessage,
    RecordingMailer, SmtpMailer,
};
pub use profile::{BalanceLevel, SelectionCounts, VarietyLevel};
pub use record::{Age, AgeOutOfRange, IntakeRecord, PersonalInfo, RequiredField, Sex};
pub use session::{AccessGate, IntakeSession, SessionError, Stage};
pub use summary::{DEFAULT_SUBJECT_LABEL, format_summary, subject_line};
pub use validate::{
    Field, Reason, ValidationError, validate_consent, validate_email, validate_identity,
    validate_name, validate_phone,
};
