//! OAuth2 access tokens for the wallet object API, obtained with a JWT-bearer assertion

use std::sync::Arc;

use serde::Deserialize;
use serde_json::json;
use thiserror::Error;
use time::{Duration, OffsetDateTime};
use tokio::sync::Mutex;

use super::http_client::{self, HttpClient};
use super::signing_key::{JwtSigner, SigningKeyError};
use crate::util::clock::Clock;


const JWT_BEARER_GRANT_TYPE: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
const ASSERTION_LIFETIME: Duration = Duration::hours(1);
const REFRESH_MARGIN: Duration = Duration::seconds(60);

#[derive(Debug, Error)]
pub enum AccessTokenError {
    #[error("Failed to sign token assertion: {0}")]
    Assertion(#[from] SigningKeyError),
    #[error("Token endpoint rejected request ({status}): {reason}")]
    Rejected { status: u16, reason: String },
    #[error("Token endpoint unavailable: {0}")]
    Unavailable(String),
    #[error("Token endpoint timed out")]
    Timeout,
}

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait AccessTokenProvider: Send + Sync {
    async fn access_token(&self) -> Result<String, AccessTokenError>;
}

#[derive(Debug, Deserialize)]
struct TokenResponseDTO {
    access_token: String,
    expires_in: i64,
}

#[derive(Debug, Deserialize)]
struct TokenErrorResponseDTO {
    error: String,
    error_description: Option<String>,
}

struct CachedToken {
    access_token: String,
    expires_at: OffsetDateTime,
}

pub struct ServiceAccountTokenProvider {
    client: Arc<dyn HttpClient>,
    signer: Arc<dyn JwtSigner>,
    clock: Arc<dyn Clock>,
    service_account_email: String,
    scope: String,
    token_uri: String,
    cached: Mutex<Option<CachedToken>>,
}

impl ServiceAccountTokenProvider {
    pub fn new(
        client: Arc<dyn HttpClient>,
        signer: Arc<dyn JwtSigner>,
        clock: Arc<dyn Clock>,
        service_account_email: String,
        scope: String,
        token_uri: String,
    ) -> Self {
        Self {
            client,
            signer,
            clock,
            service_account_email,
            scope,
            token_uri,
            cached: Mutex::new(None),
        }
    }

    async fn fetch_token(&self, now: OffsetDateTime) -> Result<CachedToken, AccessTokenError> {
        let issued_at = now.unix_timestamp();
        let assertion = self.signer.sign(&json!({
            "iss": self.service_account_email,
            "scope": self.scope,
            "aud": self.token_uri,
            "iat": issued_at,
            "exp": issued_at + ASSERTION_LIFETIME.whole_seconds(),
        }))?;

        let response = self
            .client
            .post(&self.token_uri)
            .form([
                ("grant_type", JWT_BEARER_GRANT_TYPE),
                ("assertion", assertion.as_str()),
            ])
            .map_err(|err| AccessTokenError::Unavailable(err.to_string()))?
            .send()
            .await
            .map_err(|err| match err {
                http_client::Error::Timeout(_) => AccessTokenError::Timeout,
                err => AccessTokenError::Unavailable(err.to_string()),
            })?;

        if !response.status.is_success() {
            let status = response.status;
            let reason = match serde_json::from_slice::<TokenErrorResponseDTO>(&response.body) {
                Ok(error) => match error.error_description {
                    Some(description) => format!("{}: {description}", error.error),
                    None => error.error,
                },
                Err(_) => response.text_lossy(),
            };

            return Err(
                if status.is_rejection() {
                    AccessTokenError::Rejected {
                        status: status.0,
                        reason,
                    }
                } else {
                    AccessTokenError::Unavailable(format!("status {status}: {reason}"))
                },
            );
        }

        let token: TokenResponseDTO = response
            .json()
            .map_err(|err| AccessTokenError::Unavailable(err.to_string()))?;

        let expires_at = Some(token.expires_in)
            .filter(|expires_in| *expires_in > 0)
            .and_then(|expires_in| now.checked_add(Duration::seconds(expires_in)))
            .ok_or_else(|| {
                AccessTokenError::Unavailable(format!(
                    "invalid expires_in `{}` in token response",
                    token.expires_in
                ))
            })?;

        Ok(CachedToken {
            access_token: token.access_token,
            expires_at,
        })
    }
}

#[async_trait::async_trait]
impl AccessTokenProvider for ServiceAccountTokenProvider {
    async fn access_token(&self) -> Result<String, AccessTokenError> {
        let mut cached = self.cached.lock().await;
        let now = self.clock.now_utc();

        if let Some(token) = cached.as_ref() {
            if token.expires_at - REFRESH_MARGIN > now {
                return Ok(token.access_token.clone());
            }
        }

        tracing::debug!("Requesting wallet API access token");
        let token = self.fetch_token(now).await?;
        let access_token = token.access_token.clone();
        *cached = Some(token);

        Ok(access_token)
    }
}
