//! Record store adapters over the hosted REST interface.
//!
//! Three adapter types, one per security context. None of them can be
//! switched to another credential after construction.

use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Client, RequestBuilder, StatusCode, Url};
use serde::Serialize;

use super::dto::{ContactStatusPatchDto, LeadInsertDto, NotesPatchDto, ProfileRowDto};
use super::status_message;
use crate::config::ApiKey;
use crate::domain::ports::{ElevatedStore, PublicLeadStore, RecordStoreError, UserScopedStore};
use crate::domain::{ContactStatus, LeadId, LeadNotes, NewLead, PrincipalId, SessionToken};

const PREFER_MINIMAL: (&str, &str) = ("Prefer", "return=minimal");

fn eq_filter(mut endpoint: Url, column: &str, value: &str) -> Url {
    endpoint
        .query_pairs_mut()
        .append_pair(column, &format!("eq.{value}"));
    endpoint
}

async fn send(request: RequestBuilder) -> Result<Vec<u8>, RecordStoreError> {
    let response = request.send().await.map_err(map_transport_error)?;
    let status = response.status();
    let body = response.bytes().await.map_err(map_transport_error)?;
    if !status.is_success() {
        return Err(map_status_error(status, body.as_ref()));
    }
    Ok(body.to_vec())
}

fn map_transport_error(error: reqwest::Error) -> RecordStoreError {
    RecordStoreError::connection(error.to_string())
}

fn map_status_error(status: StatusCode, body: &[u8]) -> RecordStoreError {
    let message = status_message(status, body);
    if status.is_server_error() || status == StatusCode::REQUEST_TIMEOUT {
        RecordStoreError::connection(message)
    } else {
        RecordStoreError::query(message)
    }
}

/// [`UserScopedStore`] that authenticates as the calling user.
///
/// Holds only the anonymous API key; row-level policy is evaluated against
/// the bearer token passed to each call.
#[derive(Clone)]
pub struct SupabaseUserScopedStore {
    client: Client,
    profiles_endpoint: Url,
    anon_key: ApiKey,
}

impl SupabaseUserScopedStore {
    pub fn new(client: Client, base_url: &Url, anon_key: ApiKey) -> Result<Self, url::ParseError> {
        Ok(Self {
            client,
            profiles_endpoint: base_url.join("rest/v1/profiles")?,
            anon_key,
        })
    }
}

#[async_trait]
impl UserScopedStore for SupabaseUserScopedStore {
    async fn admin_flag(
        &self,
        token: &SessionToken,
        principal: &PrincipalId,
    ) -> Result<Option<bool>, RecordStoreError> {
        let mut endpoint = self.profiles_endpoint.clone();
        endpoint.query_pairs_mut().append_pair("select", "is_admin");
        let endpoint = eq_filter(endpoint, "id", principal.as_ref());

        let body = send(
            self.client
                .get(endpoint)
                .header("apikey", self.anon_key.expose())
                .header(AUTHORIZATION, format!("Bearer {}", token.expose()))
                .header(ACCEPT, "application/json"),
        )
        .await?;

        let rows: Vec<ProfileRowDto> = serde_json::from_slice(&body).map_err(|error| {
            RecordStoreError::decode(format!("invalid profiles payload: {error}"))
        })?;
        Ok(rows.first().map(|row| row.is_admin.unwrap_or(false)))
    }
}

/// [`ElevatedStore`] holding the service-role key.
#[derive(Clone)]
pub struct SupabaseElevatedStore {
    client: Client,
    leads_endpoint: Url,
    service_key: ApiKey,
}

impl SupabaseElevatedStore {
    pub fn new(client: Client, base_url: &Url, service_key: ApiKey) -> Result<Self, url::ParseError> {
        Ok(Self {
            client,
            leads_endpoint: base_url.join("rest/v1/leads")?,
            service_key,
        })
    }

    async fn patch_lead<T: Serialize + Sync>(
        &self,
        lead_id: &LeadId,
        payload: &T,
    ) -> Result<(), RecordStoreError> {
        let endpoint = eq_filter(self.leads_endpoint.clone(), "id", lead_id.as_ref());
        send(
            self.client
                .patch(endpoint)
                .header("apikey", self.service_key.expose())
                .header(AUTHORIZATION, format!("Bearer {}", self.service_key.expose()))
                .header(PREFER_MINIMAL.0, PREFER_MINIMAL.1)
                .json(payload),
        )
        .await
        .map(drop)
    }
}

#[async_trait]
impl ElevatedStore for SupabaseElevatedStore {
    async fn update_contact_status(
        &self,
        lead_id: &LeadId,
        status: ContactStatus,
    ) -> Result<(), RecordStoreError> {
        self.patch_lead(lead_id, &ContactStatusPatchDto::from(status))
            .await
    }

    async fn update_notes(
        &self,
        lead_id: &LeadId,
        notes: &LeadNotes,
    ) -> Result<(), RecordStoreError> {
        self.patch_lead(
            lead_id,
            &NotesPatchDto {
                notes: notes.as_str(),
            },
        )
        .await
    }
}

/// [`PublicLeadStore`] holding only the anonymous key.
#[derive(Clone)]
pub struct SupabasePublicLeadStore {
    client: Client,
    leads_endpoint: Url,
    anon_key: ApiKey,
}

impl SupabasePublicLeadStore {
    pub fn new(client: Client, base_url: &Url, anon_key: ApiKey) -> Result<Self, url::ParseError> {
        Ok(Self {
            client,
            leads_endpoint: base_url.join("rest/v1/leads")?,
            anon_key,
        })
    }
}

#[async_trait]
impl PublicLeadStore for SupabasePublicLeadStore {
    async fn insert_lead(&self, lead: &NewLead) -> Result<(), RecordStoreError> {
        send(
            self.client
                .post(self.leads_endpoint.clone())
                .header("apikey", self.anon_key.expose())
                .header(AUTHORIZATION, format!("Bearer {}", self.anon_key.expose()))
                .header(PREFER_MINIMAL.0, PREFER_MINIMAL.1)
                .json(&LeadInsertDto::from(lead)),
        )
        .await
        .map(drop)
    }
}
