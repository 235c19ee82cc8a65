//! Local verification of session tokens issued by the event platform

use std::collections::HashSet;

use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use secrecy::ExposeSecret;
use serde::Deserialize;
use thiserror::Error;

use crate::config::ConfigValidationError;
use crate::config::core_config::SessionConfig;


#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SessionClaims {
    pub sub: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Invalid session token: {0}")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),
}

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait SessionValidator: Send + Sync {
    fn validate(&self, token: &str) -> Result<SessionClaims, SessionError>;
}

/// HS256 session tokens signed with a shared secret
pub struct JwtSessionValidator {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtSessionValidator {
    pub fn new(config: &SessionConfig) -> Result<Self, ConfigValidationError> {
        let secret = config
            .secret
            .as_ref()
            .map(|secret| secret.expose_secret())
            .filter(|secret| !secret.is_empty())
            .ok_or(ConfigValidationError::MissingEntry("session.secret"))?;

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = config.leeway.as_secs();
        validation.required_spec_claims = HashSet::from(["exp".to_owned()]);

        if let Some(issuer) = &config.issuer {
            validation.set_issuer(&[issuer]);
        }

        match &config.audience {
            Some(audience) => validation.set_audience(&[audience]),
            None => validation.validate_aud = false,
        }

        Ok(Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        })
    }
}

impl SessionValidator for JwtSessionValidator {
    fn validate(&self, token: &str) -> Result<SessionClaims, SessionError> {
        let token_data =
            jsonwebtoken::decode::<SessionClaims>(token, &self.decoding_key, &self.validation)?;

        Ok(token_data.claims)
    }
}
