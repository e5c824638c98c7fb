//! The per-session intake record.

use std::fmt;

use chrono::NaiveDate;

use crate::AnswerBag;

/// Biological sex, as asked on the personal data form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    /// Options in the order the form offers them.
    pub const ALL: [Sex; 2] = [Sex::Male, Sex::Female];

    pub fn label(self) -> &'static str {
        match self {
            Self::Male => "Hombre",
            Self::Female => "Mujer",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Raised when an age outside the accepted range reaches the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error(
    "La edad debe estar entre {min} y {max} años (recibido: {0})",
    min = Age::MIN,
    max = Age::MAX
)]
pub struct AgeOutOfRange(pub i64);

/// An age in years, always within `Age::MIN..=Age::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Age(u8);

impl Age {
    pub const MIN: u8 = 15;
    pub const MAX: u8 = 80;
    /// Value the age prompt starts at.
    pub const DEFAULT: u8 = 25;

    pub fn new(years: i64) -> Result<Self, AgeOutOfRange> {
        match u8::try_from(years) {
            Ok(years) if (Self::MIN..=Self::MAX).contains(&years) => Ok(Self(years)),
            _ => Err(AgeOutOfRange(years)),
        }
    }

    pub fn years(self) -> u8 {
        self.0
    }
}

impl Default for Age {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl TryFrom<i64> for Age {
    type Error = AgeOutOfRange;

    fn try_from(years: i64) -> Result<Self, Self::Error> {
        Self::new(years)
    }
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What the personal data form submits on "begin".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonalInfo {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub age: Age,
    pub sex: Sex,
    pub consent: bool,
}

impl PersonalInfo {
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
        age: Age,
        sex: Sex,
        consent: bool,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
            age,
            sex,
            consent,
        }
    }
}

/// Identity fields that must be present before the summary may be mailed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequiredField {
    Name,
    Email,
    Phone,
    Age,
}

impl RequiredField {
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Nombre",
            Self::Email => "Email",
            Self::Phone => "Teléfono",
            Self::Age => "Edad",
        }
    }
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Everything collected during one wizard run.
///
/// Identity fields stay `None` until the personal data form is accepted.
/// The record is dropped as a whole on reset.
#[derive(Debug, Clone, PartialEq)]
pub struct IntakeRecord {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub age: Option<Age>,
    pub sex: Option<Sex>,
    /// Set once, when the record is created.
    pub evaluation_date: NaiveDate,
    pub consent: bool,
    pub answers: AnswerBag,
    dispatched: bool,
}

impl IntakeRecord {
    /// Create an empty record dated `evaluation_date`.
    pub fn new(evaluation_date: NaiveDate) -> Self {
        Self {
            name: None,
            phone: None,
            email: None,
            age: None,
            sex: None,
            evaluation_date,
            consent: false,
            answers: AnswerBag::new(),
            dispatched: false,
        }
    }

    /// Copy the accepted personal data into the identity fields.
    pub fn set_identity(&mut self, info: &PersonalInfo) {
        self.name = Some(info.name.trim().to_string());
        self.phone = Some(info.phone.trim().to_string());
        self.email = Some(info.email.trim().to_string());
        self.age = Some(info.age);
        self.sex = Some(info.sex);
        self.consent = info.consent;
    }

    /// Required identity fields that are absent or blank, in reporting order.
    pub fn missing_required(&self) -> Vec<RequiredField> {
        let blank = |value: &Option<String>| value.as_deref().is_none_or(|s| s.trim().is_empty());

        let mut missing = Vec::new();
        if blank(&self.name) {
            missing.push(RequiredField::Name);
        }
        if blank(&self.email) {
            missing.push(RequiredField::Email);
        }
        if blank(&self.phone) {
            missing.push(RequiredField::Phone);
        }
        if self.age.is_none() {
            missing.push(RequiredField::Age);
        }
        missing
    }

    /// Whether the summary has already been mailed for this record.
    pub fn is_dispatched(&self) -> bool {
        self.dispatched
    }

    pub(crate) fn mark_dispatched(&mut self) {
        self.dispatched = true;
    }
}
