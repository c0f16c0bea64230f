//! Driving port for anonymous lead submissions.
//!
//! Inbound adapters hand over the raw form values and request metadata; the
//! implementation decides whether the submission is spam, invalid, or stored.

use async_trait::async_trait;

use crate::domain::Error;

/// Raw values from a public contact-form post.
///
/// Every field is optional because browsers and bots may omit any of them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadSubmission {
    /// Decoy field hidden from people; only automated senders fill it in.
    pub company: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
    /// Raw `X-Forwarded-For` header value.
    pub forwarded_for: Option<String>,
    /// Raw `User-Agent` header value.
    pub user_agent: Option<String>,
}

/// Result of a submission that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntakeOutcome {
    /// The lead was inserted.
    Stored,
    /// The decoy field was filled; nothing was stored and the sender must not
    /// be able to tell.
    Discarded,
}

/// Domain use-case port for the public intake path.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LeadIntake: Send + Sync {
    /// Screen and store one submission.
    ///
    /// # Errors
    /// - `invalid_input` when a required field fails validation.
    /// - `storage_error` when the single insert attempt fails.
    async fn submit(&self, submission: LeadSubmission) -> Result<IntakeOutcome, Error>;
}
