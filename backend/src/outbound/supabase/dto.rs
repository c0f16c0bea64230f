//! Wire shapes for the hosted auth and REST endpoints.
//!
//! Request DTOs borrow from domain values so nothing secret is copied;
//! response DTOs decode only the fields the adapters use.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{ContactStatus, LoginCredentials, NewLead};

#[derive(Debug, Serialize)]
pub(super) struct PasswordGrantDto<'a> {
    pub(super) email: &'a str,
    pub(super) password: &'a str,
}

impl<'a> From<&'a LoginCredentials> for PasswordGrantDto<'a> {
    fn from(credentials: &'a LoginCredentials) -> Self {
        Self {
            email: credentials.email(),
            password: credentials.password(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct TokenResponseDto {
    pub(super) access_token: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct UserDto {
    pub(super) id: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct ProfileRowDto {
    #[serde(default)]
    pub(super) is_admin: Option<bool>,
}

#[derive(Debug, Serialize)]
pub(super) struct LeadInsertDto<'a> {
    name: &'a str,
    email: &'a str,
    message: &'a str,
    source: &'a str,
    ip: Option<&'a str>,
    user_agent: Option<&'a str>,
    contacted: bool,
    contacted_at: Option<DateTime<Utc>>,
    notes: &'a str,
}

impl<'a> From<&'a NewLead> for LeadInsertDto<'a> {
    fn from(lead: &'a NewLead) -> Self {
        Self {
            name: lead.contact.name(),
            email: lead.contact.email(),
            message: lead.contact.message(),
            source: lead.source,
            ip: lead.ip.as_deref(),
            user_agent: lead.user_agent.as_deref(),
            contacted: lead.status.is_contacted(),
            contacted_at: lead.status.contacted_at(),
            notes: lead.notes.as_str(),
        }
    }
}

/// Both columns always travel together so the pair cannot drift.
#[derive(Debug, Serialize)]
pub(super) struct ContactStatusPatchDto {
    contacted: bool,
    contacted_at: Option<DateTime<Utc>>,
}

impl From<ContactStatus> for ContactStatusPatchDto {
    fn from(status: ContactStatus) -> Self {
        Self {
            contacted: status.is_contacted(),
            contacted_at: status.contacted_at(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(super) struct NotesPatchDto<'a> {
    pub(super) notes: &'a str,
}
