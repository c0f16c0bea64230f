//! Spam-resistant intake for public contact-form submissions.
//!
//! The gate runs three steps in order: the decoy check, field validation, and
//! a single insert through the anonymous store credential. A filled decoy is
//! answered as a success without touching the store so automated senders get
//! no signal that they were filtered.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, error, info};

use crate::domain::ports::{
    IntakeOutcome, LeadIntake, LeadSubmission, PublicLeadStore, RecordStoreError,
};
use crate::domain::{ContactDetails, Error, LeadValidationError, NewLead};

/// Lead intake service implementing [`LeadIntake`].
#[derive(Clone)]
pub struct SpamGate<S> {
    store: Arc<S>,
}

impl<S> SpamGate<S> {
    /// Create a gate that inserts admitted leads through `store`.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

/// True when the decoy field carries anything but whitespace.
fn decoy_filled(submission: &LeadSubmission) -> bool {
    submission
        .company
        .as_deref()
        .is_some_and(|value| !value.trim().is_empty())
}

/// First address of an `X-Forwarded-For` chain, trimmed.
///
/// # Examples
/// ```
/// use leads_backend::domain::client_ip;
///
/// assert_eq!(client_ip(Some(" 203.0.113.7 , 10.0.0.1")), Some("203.0.113.7".to_owned()));
/// assert_eq!(client_ip(Some("  ")), None);
/// assert_eq!(client_ip(None), None);
/// ```
pub fn client_ip(forwarded_for: Option<&str>) -> Option<String> {
    let first = forwarded_for?.split(',').next()?.trim();
    (!first.is_empty()).then(|| first.to_owned())
}

fn map_validation_error(err: LeadValidationError) -> Error {
    Error::invalid_input(err.to_string()).with_details(json!({
        "field": err.field(),
        "code": "invalid_input",
    }))
}

fn map_store_error(err: &RecordStoreError) -> Error {
    error!(operation = "leads.insert", error = %err, "lead insert failed");
    Error::storage("failed to store lead")
}

#[async_trait]
impl<S> LeadIntake for SpamGate<S>
where
    S: PublicLeadStore,
{
    async fn submit(&self, submission: LeadSubmission) -> Result<IntakeOutcome, Error> {
        if decoy_filled(&submission) {
            info!("lead submission discarded by decoy field");
            return Ok(IntakeOutcome::Discarded);
        }

        let contact = ContactDetails::try_from_parts(
            submission.name.as_deref().unwrap_or_default(),
            submission.email.as_deref().unwrap_or_default(),
            submission.message.as_deref().unwrap_or_default(),
        )
        .map_err(|err| {
            debug!(field = err.field(), "lead submission rejected");
            map_validation_error(err)
        })?;

        let user_agent = submission
            .user_agent
            .filter(|value| !value.trim().is_empty());
        let lead = NewLead::from_landing(
            contact,
            client_ip(submission.forwarded_for.as_deref()),
            user_agent,
        );

        self.store
            .insert_lead(&lead)
            .await
            .map_err(|err| map_store_error(&err))?;
        info!(source = lead.source, "lead stored");
        Ok(IntakeOutcome::Stored)
    }
}
