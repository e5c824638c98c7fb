//! One user's run through the wizard.
//!
//! ```text
//! Unauthenticated ──authenticate──▶ AwaitingPersonalInfo ──begin──▶ InProgress ──finish──▶ Complete
//!        ▲                                                                                   │
//!        └──────────────────────────────────── reset (from any stage) ◀──────────────────────┘
//! ```
//!
//! Answers merge into the record while `InProgress` or `Complete`. Mailing is
//! only offered once `Complete`.

use std::fmt;

use chrono::{Local, NaiveDateTime};
use tracing::{debug, info, warn};

use crate::dispatch::{DispatchError, DispatchMode, DispatchOutcome, Dispatcher, Mailer};
use crate::validate::{ValidationError, validate_consent, validate_identity};
use crate::{AnswerBag, IntakeRecord, PersonalInfo, Questionnaire, Secret, SelectionCounts};

/// Where a session currently is in the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Unauthenticated,
    AwaitingPersonalInfo,
    InProgress,
    Complete,
}

impl Stage {
    pub fn is_authenticated(self) -> bool {
        self != Self::Unauthenticated
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Unauthenticated => "unauthenticated",
            Self::AwaitingPersonalInfo => "awaiting personal info",
            Self::InProgress => "in progress",
            Self::Complete => "complete",
        };
        f.write_str(name)
    }
}

/// The shared-password check in front of the wizard.
///
/// Everyone who knows the password gets in. It identifies nobody.
#[derive(Debug, Clone)]
pub struct AccessGate {
    password: Secret,
}

impl AccessGate {
    pub fn new(password: impl Into<Secret>) -> Self {
        Self {
            password: password.into(),
        }
    }

    /// Exact comparison; no trimming or case folding.
    pub fn check(&self, attempt: &str) -> bool {
        self.password.expose() == attempt
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Contraseña incorrecta. Acceso denegado.")]
    AccessDenied,

    #[error("Se requiere autenticación")]
    NotAuthenticated,

    #[error("{}", ValidationList(.0))]
    Invalid(Vec<ValidationError>),

    #[error("cannot {action} while {stage}")]
    WrongStage { action: &'static str, stage: Stage },

    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}

struct ValidationList<'a>(&'a [ValidationError]);

impl fmt::Display for ValidationList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
enum Clock {
    Local,
    Fixed(NaiveDateTime),
}

impl Clock {
    fn now(self) -> NaiveDateTime {
        match self {
            Self::Local => Local::now().naive_local(),
            Self::Fixed(at) => at,
        }
    }
}

/// Per-user wizard state: the stage plus the record being filled in.
#[derive(Debug)]
pub struct IntakeSession {
    gate: AccessGate,
    stage: Stage,
    record: IntakeRecord,
    clock: Clock,
}

impl IntakeSession {
    pub fn new(gate: AccessGate) -> Self {
        Self::with_clock(gate, Clock::Local)
    }

    /// A session whose evaluation date and transcript timestamps are all `at`.
    pub fn with_fixed_clock(gate: AccessGate, at: NaiveDateTime) -> Self {
        Self::with_clock(gate, Clock::Fixed(at))
    }

    fn with_clock(gate: AccessGate, clock: Clock) -> Self {
        Self {
            gate,
            stage: Stage::Unauthenticated,
            record: IntakeRecord::new(clock.now().date()),
            clock,
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn record(&self) -> &IntakeRecord {
        &self.record
    }

    pub fn is_authenticated(&self) -> bool {
        self.stage.is_authenticated()
    }

    /// Submit the access password.
    ///
    /// Once in, further calls succeed without checking anything.
    pub fn authenticate(&mut self, attempt: &str) -> Result<(), SessionError> {
        if self.is_authenticated() {
            return Ok(());
        }
        if !self.gate.check(attempt) {
            warn!("access denied");
            return Err(SessionError::AccessDenied);
        }
        info!("access granted");
        self.stage = Stage::AwaitingPersonalInfo;
        Ok(())
    }

    /// Accept the personal data form and unlock the food sections.
    ///
    /// Every failing field is reported together, a missing consent included,
    /// and the record is left untouched on failure. Calling this again later only overwrites the
    /// identity fields; answers are kept and the stage does not move back.
    pub fn begin(&mut self, info: PersonalInfo) -> Result<(), SessionError> {
        if !self.is_authenticated() {
            return Err(SessionError::NotAuthenticated);
        }

        let mut errors = validate_identity(&info.name, &info.phone, &info.email);
        errors.extend(validate_consent(info.consent).err());
        if !errors.is_empty() {
            let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
            warn!(?fields, "begin rejected");
            return Err(SessionError::Invalid(errors));
        }

        self.record.set_identity(&info);
        if self.stage == Stage::AwaitingPersonalInfo {
            self.stage = Stage::InProgress;
        }
        info!(stage = %self.stage, "personal data accepted");
        Ok(())
    }

    /// Merge one section's answers into the record.
    pub fn submit_section(&mut self, answers: AnswerBag) -> Result<(), SessionError> {
        self.require_answering("submit answers")?;
        debug!(answers = answers.len(), "merging section answers");
        self.record.answers.merge(answers);
        Ok(())
    }

    /// Move to the final summary screen.
    pub fn finish(&mut self) -> Result<(), SessionError> {
        self.require_answering("finish")?;
        if self.stage == Stage::InProgress {
            info!(answers = self.record.answers.len(), "questionnaire complete");
            self.stage = Stage::Complete;
        }
        Ok(())
    }

    /// Mail the transcript, unless it has already been mailed.
    pub fn send_summary<M: Mailer>(
        &mut self,
        dispatcher: &Dispatcher<M>,
        questionnaire: &Questionnaire,
    ) -> Result<DispatchOutcome, SessionError> {
        self.dispatch(dispatcher, questionnaire, DispatchMode::Initial)
    }

    /// Mail the transcript again, whether or not it was mailed before.
    pub fn resend_summary<M: Mailer>(
        &mut self,
        dispatcher: &Dispatcher<M>,
        questionnaire: &Questionnaire,
    ) -> Result<DispatchOutcome, SessionError> {
        self.dispatch(dispatcher, questionnaire, DispatchMode::Resend)
    }

    fn dispatch<M: Mailer>(
        &mut self,
        dispatcher: &Dispatcher<M>,
        questionnaire: &Questionnaire,
        mode: DispatchMode,
    ) -> Result<DispatchOutcome, SessionError> {
        if self.stage != Stage::Complete {
            return Err(self.wrong_stage("send the summary"));
        }
        let outcome = dispatcher.dispatch(&mut self.record, questionnaire, mode, self.clock.now())?;
        Ok(outcome)
    }

    /// Selection counts for the record so far.
    pub fn counts(&self, questionnaire: &Questionnaire) -> SelectionCounts {
        SelectionCounts::from_record(&self.record, questionnaire)
    }

    /// Throw the record away and go back to the password prompt.
    pub fn reset(&mut self) {
        info!(from = %self.stage, "session reset");
        self.stage = Stage::Unauthenticated;
        self.record = IntakeRecord::new(self.clock.now().date());
    }

    fn require_answering(&self, action: &'static str) -> Result<(), SessionError> {
        match self.stage {
            Stage::InProgress | Stage::Complete => Ok(()),
            _ => Err(self.wrong_stage(action)),
        }
    }

    fn wrong_stage(&self, action: &'static str) -> SessionError {
        if self.is_authenticated() {
            SessionError::WrongStage {
                action,
                stage: self.stage,
            }
        } else {
            SessionError::NotAuthenticated
        }
    }
}
