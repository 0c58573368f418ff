//! Client-credentials token cache
//!
//! Holds the single bearer token used for catalog calls and fetches a new one
//! from the auth endpoint only when the cached token is absent or expired.

use std::fmt;

use chrono::Utc;
use log::{debug, warn};
use reqwest::{Client as HttpClient, Url};
use tokio::sync::RwLock;

use super::AccessToken;
use crate::error::{ApiError, ApiResult};

/// Path of the OAuth2 token endpoint, relative to the API base URL
pub const TOKEN_PATH: &str = "/auth/token";

const TOKEN_REQUEST_FAILED: &str = "error getting a token";
const TOKEN_RESPONSE_INVALID: &str = "error reading token response";

/// OAuth2 client credentials
#[derive(Clone, PartialEq, Eq)]
pub struct ClientCredentials {
    pub client_id: String,
    pub client_secret: String,
}

impl ClientCredentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }
}

impl fmt::Debug for ClientCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientCredentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

/// Cache for the client-credentials access token.
///
/// Readers share the token under a read lock. A refresh takes the write lock
/// and re-checks before fetching, so concurrent callers that all observe an
/// expired token trigger a single auth request between them. The cached value
/// is only ever replaced whole, and only after a successful fetch.
pub struct TokenCache {
    http: HttpClient,
    token_url: Url,
    credentials: ClientCredentials,
    current: RwLock<Option<AccessToken>>,
}

impl TokenCache {
    /// Create an empty cache that fetches tokens from `token_url`
    pub fn new(http: HttpClient, token_url: Url, credentials: ClientCredentials) -> Self {
        Self {
            http,
            token_url,
            credentials,
            current: RwLock::new(None),
        }
    }

    /// Get a bearer token that is valid right now, fetching one if necessary
    pub async fn get_token(&self) -> ApiResult<String> {
        if let Some(token) = self.cached_token().await {
            debug!("Using cached access token");
            return Ok(token);
        }

        let mut current = self.current.write().await;

        // Another caller may have refreshed while we waited for the lock
        if let Some(token) = &*current {
            if token.is_valid_at(Utc::now()) {
                debug!("Using access token refreshed by a concurrent request");
                return Ok(token.token.clone());
            }
        }

        let fresh = self.fetch().await?;
        let token = fresh.token.clone();
        *current = Some(fresh);

        Ok(token)
    }

    /// Token string of the cached token, if it has not expired
    async fn cached_token(&self) -> Option<String> {
        let current = self.current.read().await;
        (*current)
            .as_ref()
            .filter(|t| t.is_valid_at(Utc::now()))
            .map(|t| t.token.clone())
    }

    /// Request a new token with the client-credentials grant
    async fn fetch(&self) -> ApiResult<AccessToken> {
        debug!("Requesting access token from {}", self.token_url);

        let params = [
            ("client_id", self.credentials.client_id.as_str()),
            ("client_secret", self.credentials.client_secret.as_str()),
            ("grant_type", "client_credentials"),
        ];

        let response = self
            .http
            .post(self.token_url.clone())
            .form(&params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!("Token endpoint returned {}", status);
            return Err(ApiError::authentication(TOKEN_REQUEST_FAILED));
        }

        let body = response.bytes().await?;
        let token: AccessToken =
            serde_json::from_slice(&body).map_err(|e| ApiError::Authentication {
                reason: TOKEN_RESPONSE_INVALID,
                source: Some(e),
            })?;

        debug!("Received access token expiring at {}", token.expiry);
        Ok(token)
    }
}
