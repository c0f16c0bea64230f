//! Authentication primitives: login credentials, bearer tokens and principals.
//!
//! Secrets are held in [`Zeroizing`] buffers and never printed by `Debug`.

use std::fmt;

use zeroize::Zeroizing;

/// Login credentials as submitted, handed to the identity provider.
///
/// The email is trimmed; the password is kept verbatim. Blank values are
/// representable so the login service can answer them like any other
/// rejected login.
///
/// # Examples
/// ```
/// use leads_backend::domain::LoginCredentials;
///
/// let creds = LoginCredentials::new(" staff@example.com ", "s3cret");
/// assert_eq!(creds.email(), "staff@example.com");
/// assert_eq!(creds.password(), "s3cret");
/// assert!(!creds.is_blank());
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    email: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Construct credentials from raw form inputs.
    pub fn new(email: &str, password: &str) -> Self {
        Self {
            email: email.trim().to_owned(),
            password: Zeroizing::new(password.to_owned()),
        }
    }

    /// True when either field is empty, so no provider call can succeed.
    pub fn is_blank(&self) -> bool {
        self.email.is_empty() || self.password.is_empty()
    }

    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

impl fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Opaque bearer token issued by the identity provider.
///
/// The core never inspects the token; it only forwards it to the identity
/// provider and to user-scoped record store calls.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken(Zeroizing<String>);

impl SessionToken {
    /// Wrap a raw token, rejecting blank input.
    ///
    /// # Examples
    /// ```
    /// use leads_backend::domain::SessionToken;
    ///
    /// assert!(SessionToken::new("eyJhbGciOi...").is_some());
    /// assert!(SessionToken::new("  ").is_none());
    /// ```
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return None;
        }
        Some(Self(Zeroizing::new(raw)))
    }

    /// Expose the raw token for transmission.
    pub fn expose(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionToken(<redacted>)")
    }
}

/// Identifier of an authenticated principal, shared with its profile row.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PrincipalId(String);

impl PrincipalId {
    /// Wrap a provider-issued identifier, rejecting blank input.
    pub fn new(raw: impl AsRef<str>) -> Option<Self> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for PrincipalId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for PrincipalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Authenticated identity resolved from a session token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub id: PrincipalId,
}
