//! Recording doubles for the driven ports.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use leads_backend::domain::ports::{
    ElevatedStore, IdentityProvider, IdentityProviderError, PublicLeadStore, RecordStoreError,
    UserScopedStore,
};
use leads_backend::domain::{
    ContactStatus, LeadId, LeadNotes, LoginCredentials, NewLead, Principal, PrincipalId,
    SessionToken,
};

pub const ADMIN_EMAIL: &str = "admin@example.com";
pub const ADMIN_PASSWORD: &str = "correct horse";
pub const ADMIN_ID: &str = "0b5e3c1a-8d7f-4e2b-9a61-2f4c7d8e9a01";
pub const STAFF_EMAIL: &str = "staff@example.com";
pub const STAFF_PASSWORD: &str = "battery staple";
pub const STAFF_ID: &str = "6c2d9e4f-1a3b-4c5d-8e7f-90a1b2c3d4e5";

#[derive(Debug, Clone)]
struct Account {
    email: &'static str,
    password: &'static str,
    id: &'static str,
}

impl Account {
    fn token(&self) -> String {
        format!("token-for-{}", self.id)
    }
}

/// Identity provider knowing one admin and one non-admin account.
///
/// Tokens are derived from the account id, so a signed-in session resolves
/// back to the same principal.
#[derive(Debug)]
pub struct FakeIdentityProvider {
    accounts: Vec<Account>,
    sign_in_calls: Mutex<Vec<String>>,
    resolve_calls: Mutex<Vec<String>>,
}

impl Default for FakeIdentityProvider {
    fn default() -> Self {
        Self {
            accounts: vec![
                Account {
                    email: ADMIN_EMAIL,
                    password: ADMIN_PASSWORD,
                    id: ADMIN_ID,
                },
                Account {
                    email: STAFF_EMAIL,
                    password: STAFF_PASSWORD,
                    id: STAFF_ID,
                },
            ],
            sign_in_calls: Mutex::new(Vec::new()),
            resolve_calls: Mutex::new(Vec::new()),
        }
    }
}

impl FakeIdentityProvider {
    pub fn sign_in_calls(&self) -> Vec<String> {
        self.sign_in_calls
            .lock()
            .expect("sign-in calls lock")
            .clone()
    }

    pub fn resolve_calls(&self) -> Vec<String> {
        self.resolve_calls
            .lock()
            .expect("resolve calls lock")
            .clone()
    }
}

#[async_trait]
impl IdentityProvider for FakeIdentityProvider {
    async fn resolve_principal(
        &self,
        token: &SessionToken,
    ) -> Result<Option<Principal>, IdentityProviderError> {
        self.resolve_calls
            .lock()
            .expect("resolve calls lock")
            .push(token.expose().to_owned());
        Ok(self
            .accounts
            .iter()
            .find(|account| account.token() == token.expose())
            .and_then(|account| PrincipalId::new(account.id))
            .map(|id| Principal { id }))
    }

    async fn sign_in(
        &self,
        credentials: &LoginCredentials,
    ) -> Result<Option<SessionToken>, IdentityProviderError> {
        self.sign_in_calls
            .lock()
            .expect("sign-in calls lock")
            .push(credentials.email().to_owned());
        Ok(self
            .accounts
            .iter()
            .find(|account| {
                account.email == credentials.email() && account.password == credentials.password()
            })
            .and_then(|account| SessionToken::new(account.token())))
    }
}

/// Profile rows keyed by principal id; only the admin account is flagged.
#[derive(Debug)]
pub struct FakeProfileStore {
    flags: HashMap<&'static str, bool>,
    lookups: Mutex<Vec<String>>,
}

impl Default for FakeProfileStore {
    fn default() -> Self {
        Self {
            flags: HashMap::from([(ADMIN_ID, true), (STAFF_ID, false)]),
            lookups: Mutex::new(Vec::new()),
        }
    }
}

impl FakeProfileStore {
    pub fn lookups(&self) -> Vec<String> {
        self.lookups.lock().expect("lookups lock").clone()
    }
}

#[async_trait]
impl UserScopedStore for FakeProfileStore {
    async fn admin_flag(
        &self,
        _token: &SessionToken,
        principal: &PrincipalId,
    ) -> Result<Option<bool>, RecordStoreError> {
        self.lookups
            .lock()
            .expect("lookups lock")
            .push(principal.as_ref().to_owned());
        Ok(self.flags.get(principal.as_ref()).copied())
    }
}

/// Lead table double recording inserts and updates.
#[derive(Debug, Default)]
pub struct RecordingLeadStore {
    inserted: Mutex<Vec<NewLead>>,
    status_updates: Mutex<Vec<(String, ContactStatus)>>,
    notes_updates: Mutex<Vec<(String, String)>>,
}

impl RecordingLeadStore {
    pub fn inserted(&self) -> Vec<NewLead> {
        self.inserted.lock().expect("inserted lock").clone()
    }

    pub fn status_updates(&self) -> Vec<(String, ContactStatus)> {
        self.status_updates.lock().expect("status lock").clone()
    }

    pub fn notes_updates(&self) -> Vec<(String, String)> {
        self.notes_updates.lock().expect("notes lock").clone()
    }

    pub fn mutation_count(&self) -> usize {
        self.status_updates().len() + self.notes_updates().len()
    }
}

#[async_trait]
impl PublicLeadStore for RecordingLeadStore {
    async fn insert_lead(&self, lead: &NewLead) -> Result<(), RecordStoreError> {
        self.inserted
            .lock()
            .expect("inserted lock")
            .push(lead.clone());
        Ok(())
    }
}

#[async_trait]
impl ElevatedStore for RecordingLeadStore {
    async fn update_contact_status(
        &self,
        lead_id: &LeadId,
        status: ContactStatus,
    ) -> Result<(), RecordStoreError> {
        self.status_updates
            .lock()
            .expect("status lock")
            .push((lead_id.as_ref().to_owned(), status));
        Ok(())
    }

    async fn update_notes(
        &self,
        lead_id: &LeadId,
        notes: &LeadNotes,
    ) -> Result<(), RecordStoreError> {
        self.notes_updates
            .lock()
            .expect("notes lock")
            .push((lead_id.as_ref().to_owned(), notes.as_str().to_owned()));
        Ok(())
    }
}
