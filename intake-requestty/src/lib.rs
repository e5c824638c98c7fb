//! # intake-requestty
//!
//! Terminal front end for the intake questionnaire.
//!
//! Walks one client through the password gate, the personal data form and
//! every section of a [`Questionnaire`](intake::Questionnaire), then shows
//! the profile and offers to mail the transcript.
//!
//! # Example
//!
//! ```ignore
//! use intake::{AccessGate, Dispatcher, IntakeSession, RecordingMailer};
//! use intake_requestty::RequesttyWizard;
//!
//! fn main() -> anyhow::Result<()> {
//!     let questionnaire = mupai_catalog::questionnaire();
//!     let dispatcher = Dispatcher::new(
//!         RecordingMailer::new(),
//!         "MUPAI <noreply@example.com>".parse()?,
//!         "coach@example.com".parse()?,
//!     );
//!     let mut session = IntakeSession::new(AccessGate::new("MUPAI2025"));
//!     RequesttyWizard::new(&questionnaire, &dispatcher).run(&mut session)?;
//!     Ok(())
//! }
//! ```

mod report;
mod wizard;

pub use report::render_profile;
pub use wizard::{RequesttyWizard, WizardError};
