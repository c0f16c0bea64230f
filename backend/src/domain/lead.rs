//! Lead records captured from the public contact form.
//!
//! A lead is created once by the intake path and afterwards only touched by
//! the admin workflow. The types here keep the record's invariants out of
//! reach of adapters: contact details are validated on construction, notes
//! are capped, and the contacted flag travels together with its timestamp.

use std::fmt;

use chrono::{DateTime, Utc};

/// Intake channel tag stamped on every lead from the landing page form.
pub const LANDING_SOURCE: &str = "landing";
/// Maximum number of characters persisted in a lead's notes.
pub const NOTES_MAX_CHARS: usize = 2000;

const NAME_MIN_CHARS: usize = 2;
const MESSAGE_MIN_CHARS: usize = 10;

/// Validation failures for lead fields, in the order they are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadValidationError {
    /// Lead identifier was missing or blank.
    EmptyId,
    /// Name shorter than the minimum once trimmed.
    NameTooShort { min: usize },
    /// Email without an `@`.
    EmailMissingAt,
    /// Message shorter than the minimum once trimmed.
    MessageTooShort { min: usize },
}

impl LeadValidationError {
    /// Form field the failure refers to.
    pub fn field(self) -> &'static str {
        match self {
            Self::EmptyId => "id",
            Self::NameTooShort { .. } => "name",
            Self::EmailMissingAt => "email",
            Self::MessageTooShort { .. } => "message",
        }
    }
}

impl fmt::Display for LeadValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "lead id must not be empty"),
            Self::NameTooShort { min } => write!(f, "name must be at least {min} characters"),
            Self::EmailMissingAt => write!(f, "email must contain '@'"),
            Self::MessageTooShort { min } => {
                write!(f, "message must be at least {min} characters")
            }
        }
    }
}

impl std::error::Error for LeadValidationError {}

/// Opaque lead identifier assigned by the record store.
///
/// # Examples
/// ```
/// use leads_backend::domain::LeadId;
///
/// let id = LeadId::new("  9b2f  ").expect("non-empty id");
/// assert_eq!(id.as_ref(), "9b2f");
/// assert!(LeadId::new("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LeadId(String);

impl LeadId {
    /// Construct an identifier from raw input, trimming whitespace.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, LeadValidationError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(LeadValidationError::EmptyId);
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for LeadId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for LeadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validated contact details from a submission.
///
/// ## Invariants
/// - All fields are trimmed.
/// - `name` has at least two characters.
/// - `email` contains `@`.
/// - `message` has at least ten characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactDetails {
    name: String,
    email: String,
    message: String,
}

impl ContactDetails {
    /// Validate raw form values. The first failing rule wins.
    ///
    /// # Examples
    /// ```
    /// use leads_backend::domain::{ContactDetails, LeadValidationError};
    ///
    /// let ok = ContactDetails::try_from_parts(" Jo ", "a@b.com", "hello there!");
    /// assert_eq!(ok.expect("valid").name(), "Jo");
    ///
    /// let err = ContactDetails::try_from_parts("J", "nope", "short");
    /// assert_eq!(err, Err(LeadValidationError::NameTooShort { min: 2 }));
    /// ```
    pub fn try_from_parts(
        name: &str,
        email: &str,
        message: &str,
    ) -> Result<Self, LeadValidationError> {
        let name = name.trim();
        let email = email.trim();
        let message = message.trim();

        if name.chars().count() < NAME_MIN_CHARS {
            return Err(LeadValidationError::NameTooShort {
                min: NAME_MIN_CHARS,
            });
        }
        if !email.contains('@') {
            return Err(LeadValidationError::EmailMissingAt);
        }
        if message.chars().count() < MESSAGE_MIN_CHARS {
            return Err(LeadValidationError::MessageTooShort {
                min: MESSAGE_MIN_CHARS,
            });
        }

        Ok(Self {
            name: name.to_owned(),
            email: email.to_owned(),
            message: message.to_owned(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Free-text staff notes, capped at [`NOTES_MAX_CHARS`].
///
/// Input is trimmed and then truncated on a character boundary; there is no
/// way to build an over-long value.
///
/// # Examples
/// ```
/// use leads_backend::domain::{LeadNotes, NOTES_MAX_CHARS};
///
/// let notes = LeadNotes::new(&"x".repeat(NOTES_MAX_CHARS + 5));
/// assert_eq!(notes.as_str().chars().count(), NOTES_MAX_CHARS);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadNotes(String);

impl LeadNotes {
    pub fn new(raw: &str) -> Self {
        let trimmed = raw.trim();
        let capped = match trimmed.char_indices().nth(NOTES_MAX_CHARS) {
            Some((cut, _)) => trimmed.get(..cut).unwrap_or(trimmed),
            None => trimmed,
        };
        Self(capped.to_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Contacted flag and timestamp as one value.
///
/// The record store keeps `contacted` and `contacted_at` in separate columns;
/// this enum is the only way the core expresses them, so the timestamp is
/// present exactly when the flag is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactStatus {
    NotContacted,
    Contacted { at: DateTime<Utc> },
}

impl ContactStatus {
    /// Build the status for a toggle request evaluated at `now`.
    ///
    /// # Examples
    /// ```
    /// use chrono::Utc;
    /// use leads_backend::domain::ContactStatus;
    ///
    /// let now = Utc::now();
    /// assert_eq!(ContactStatus::from_flag(true, now).contacted_at(), Some(now));
    /// assert_eq!(ContactStatus::from_flag(false, now).contacted_at(), None);
    /// ```
    pub fn from_flag(contacted: bool, now: DateTime<Utc>) -> Self {
        if contacted {
            Self::Contacted { at: now }
        } else {
            Self::NotContacted
        }
    }

    pub fn is_contacted(self) -> bool {
        matches!(self, Self::Contacted { .. })
    }

    pub fn contacted_at(self) -> Option<DateTime<Utc>> {
        match self {
            Self::Contacted { at } => Some(at),
            Self::NotContacted => None,
        }
    }
}

/// Insert payload for a freshly admitted lead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLead {
    pub contact: ContactDetails,
    pub source: &'static str,
    pub ip: Option<String>,
    pub user_agent: Option<String>,
    pub status: ContactStatus,
    pub notes: LeadNotes,
}

impl NewLead {
    /// Assemble a landing-page lead with default review state.
    pub fn from_landing(
        contact: ContactDetails,
        ip: Option<String>,
        user_agent: Option<String>,
    ) -> Self {
        Self {
            contact,
            source: LANDING_SOURCE,
            ip,
            user_agent,
            status: ContactStatus::NotContacted,
            notes: LeadNotes::default(),
        }
    }
}
