//! Identity service adapter: password sign-in and token introspection.

use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Client, StatusCode, Url};

use super::dto::{PasswordGrantDto, TokenResponseDto, UserDto};
use super::status_message;
use crate::config::ApiKey;
use crate::domain::ports::{IdentityProvider, IdentityProviderError};
use crate::domain::{LoginCredentials, Principal, PrincipalId, SessionToken};

/// [`IdentityProvider`] backed by the hosted auth endpoints.
///
/// Every call carries the anonymous API key; token checks add the caller's
/// bearer token.
#[derive(Clone)]
pub struct SupabaseIdentityProvider {
    client: Client,
    token_endpoint: Url,
    user_endpoint: Url,
    anon_key: ApiKey,
}

impl SupabaseIdentityProvider {
    /// Derive the auth endpoints from `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error when the endpoint paths cannot be joined onto the
    /// base URL.
    pub fn new(client: Client, base_url: &Url, anon_key: ApiKey) -> Result<Self, url::ParseError> {
        let mut token_endpoint = base_url.join("auth/v1/token")?;
        token_endpoint
            .query_pairs_mut()
            .append_pair("grant_type", "password");
        Ok(Self {
            client,
            token_endpoint,
            user_endpoint: base_url.join("auth/v1/user")?,
            anon_key,
        })
    }
}

#[async_trait]
impl IdentityProvider for SupabaseIdentityProvider {
    async fn resolve_principal(
        &self,
        token: &SessionToken,
    ) -> Result<Option<Principal>, IdentityProviderError> {
        let response = self
            .client
            .get(self.user_endpoint.clone())
            .header("apikey", self.anon_key.expose())
            .header(AUTHORIZATION, format!("Bearer {}", token.expose()))
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if is_rejected_token(status) {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }

        let user: UserDto = decode(body.as_ref())?;
        Ok(PrincipalId::new(&user.id).map(|id| Principal { id }))
    }

    async fn sign_in(
        &self,
        credentials: &LoginCredentials,
    ) -> Result<Option<SessionToken>, IdentityProviderError> {
        let response = self
            .client
            .post(self.token_endpoint.clone())
            .header("apikey", self.anon_key.expose())
            .header(ACCEPT, "application/json")
            .json(&PasswordGrantDto::from(credentials))
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if is_rejected_credentials(status) {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }

        let grant: TokenResponseDto = decode(body.as_ref())?;
        SessionToken::new(grant.access_token)
            .map(Some)
            .ok_or_else(|| IdentityProviderError::decode("token response has blank access_token"))
    }
}

fn is_rejected_token(status: StatusCode) -> bool {
    matches!(
        status,
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN | StatusCode::NOT_FOUND
    )
}

fn is_rejected_credentials(status: StatusCode) -> bool {
    matches!(
        status,
        StatusCode::BAD_REQUEST
            | StatusCode::UNAUTHORIZED
            | StatusCode::FORBIDDEN
            | StatusCode::UNPROCESSABLE_ENTITY
    )
}

fn decode<T: serde::de::DeserializeOwned>(body: &[u8]) -> Result<T, IdentityProviderError> {
    serde_json::from_slice(body).map_err(|error| {
        IdentityProviderError::decode(format!("invalid auth JSON payload: {error}"))
    })
}

fn map_transport_error(error: reqwest::Error) -> IdentityProviderError {
    IdentityProviderError::transport(error.to_string())
}

fn map_status_error(status: StatusCode, body: &[u8]) -> IdentityProviderError {
    IdentityProviderError::status(status.as_u16(), status_message(status, body))
}

#[cfg(test)]
mod tests {
    //! Adapter behaviour against a stub auth service.
    use super::super::test_support::{StubUpstream, unreachable_base_url};
    use super::*;
    use rstest::rstest;

    fn adapter(base_url: &Url) -> SupabaseIdentityProvider {
        SupabaseIdentityProvider::new(Client::new(), base_url, ApiKey::new("anon-key"))
            .expect("adapter")
    }

    fn credentials() -> LoginCredentials {
        LoginCredentials::new("admin@example.com", "pa ss ")
    }

    #[actix_web::test]
    async fn sign_in_posts_password_grant() {
        let stub = StubUpstream::start(200, r#"{"access_token":"jwt-123","token_type":"bearer"}"#);

        let token = adapter(stub.base_url())
            .sign_in(&credentials())
            .await
            .expect("sign in succeeds")
            .expect("token issued");

        assert_eq!(token.expose(), "jwt-123");
        let request = stub.only_request();
        assert_eq!(request.method, "POST");
        assert_eq!(request.path_and_query, "/auth/v1/token?grant_type=password");
        assert_eq!(request.header("apikey"), Some("anon-key"));
        assert_eq!(
            request.json_body(),
            serde_json::json!({"email": "admin@example.com", "password": "pa ss "})
        );
    }

    #[rstest]
    #[case(400)]
    #[case(401)]
    #[case(422)]
    #[actix_web::test]
    async fn rejected_credentials_are_not_errors(#[case] status: u16) {
        let stub = StubUpstream::start(status, r#"{"error":"invalid_grant"}"#);

        let outcome = adapter(stub.base_url())
            .sign_in(&credentials())
            .await
            .expect("no transport error");

        assert!(outcome.is_none());
    }

    #[actix_web::test]
    async fn sign_in_server_error_is_reported() {
        let stub = StubUpstream::start(503, r#"{"message":"maintenance"}"#);

        let err = adapter(stub.base_url())
            .sign_in(&credentials())
            .await
            .expect_err("status error");

        assert!(matches!(
            err,
            IdentityProviderError::Status { status: 503, .. }
        ));
    }

    #[actix_web::test]
    async fn resolve_principal_sends_bearer_token() {
        let stub = StubUpstream::start(200, r#"{"id":"user-1","email":"admin@example.com"}"#);
        let token = SessionToken::new("jwt-123").expect("token");

        let principal = adapter(stub.base_url())
            .resolve_principal(&token)
            .await
            .expect("lookup succeeds")
            .expect("principal");

        assert_eq!(principal.id.as_ref(), "user-1");
        let request = stub.only_request();
        assert_eq!(request.method, "GET");
        assert_eq!(request.path_and_query, "/auth/v1/user");
        assert_eq!(request.header("authorization"), Some("Bearer jwt-123"));
        assert_eq!(request.header("apikey"), Some("anon-key"));
    }

    #[actix_web::test]
    async fn expired_token_resolves_to_nobody() {
        let stub = StubUpstream::start(401, r#"{"msg":"invalid JWT"}"#);
        let token = SessionToken::new("expired").expect("token");

        let principal = adapter(stub.base_url())
            .resolve_principal(&token)
            .await
            .expect("no transport error");

        assert!(principal.is_none());
    }

    #[actix_web::test]
    async fn malformed_user_body_is_a_decode_error() {
        let stub = StubUpstream::start(200, r#"{"unexpected":true}"#);
        let token = SessionToken::new("jwt").expect("token");

        let err = adapter(stub.base_url())
            .resolve_principal(&token)
            .await
            .expect_err("decode error");

        assert!(matches!(err, IdentityProviderError::Decode { .. }));
    }

    #[actix_web::test]
    async fn unreachable_service_is_a_transport_error() {
        let token = SessionToken::new("jwt").expect("token");

        let err = adapter(&unreachable_base_url())
            .resolve_principal(&token)
            .await
            .expect_err("transport error");

        assert!(matches!(err, IdentityProviderError::Transport { .. }));
    }
}
