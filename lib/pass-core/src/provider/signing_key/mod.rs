//! RS256 signing with the issuer's service-account key

use std::path::Path;

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use thiserror::Error;


#[derive(Debug, Error)]
pub enum SigningKeyError {
    #[error("Signing key unavailable: {0}")]
    Unavailable(String),
    #[error("Signing failed: {0}")]
    Failed(String),
}

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait JwtSigner: Send + Sync {
    /// Produces a compact RS256 JWT with header `{"typ":"JWT","alg":"RS256"}`
    fn sign(&self, claims: &serde_json::Value) -> Result<String, SigningKeyError>;
}

/// Subset of a Google service-account key file
#[derive(Deserialize)]
struct ServiceAccountKeyFile {
    private_key: SecretString,
    client_email: Option<String>,
}

pub struct ServiceAccountKey {
    encoding_key: EncodingKey,
    client_email: Option<String>,
}

impl ServiceAccountKey {
    /// Accepts either a service-account JSON key file or a PEM encoded RSA private key
    pub fn load(path: &Path) -> Result<Self, SigningKeyError> {
        let content = std::fs::read(path).map_err(|err| {
            SigningKeyError::Unavailable(format!("cannot read `{}`: {err}", path.display()))
        })?;

        if content.trim_ascii_start().starts_with(b"{") {
            Self::from_service_account_json(&content)
        } else {
            Self::from_pem(&content)
        }
    }

    pub fn from_service_account_json(content: &[u8]) -> Result<Self, SigningKeyError> {
        let key_file: ServiceAccountKeyFile = serde_json::from_slice(content).map_err(|err| {
            SigningKeyError::Unavailable(format!("invalid service account key file: {err}"))
        })?;

        Ok(Self {
            client_email: key_file.client_email,
            ..Self::from_pem(key_file.private_key.expose_secret().as_bytes())?
        })
    }

    pub fn from_pem(pem: &[u8]) -> Result<Self, SigningKeyError> {
        let encoding_key = EncodingKey::from_rsa_pem(pem)
            .map_err(|err| SigningKeyError::Unavailable(format!("invalid RSA private key: {err}")))?;

        Ok(Self {
            encoding_key,
            client_email: None,
        })
    }

    /// Service-account email embedded in the key file, if it was loaded from JSON
    pub fn client_email(&self) -> Option<&str> {
        self.client_email.as_deref()
    }
}

impl JwtSigner for ServiceAccountKey {
    fn sign(&self, claims: &serde_json::Value) -> Result<String, SigningKeyError> {
        jsonwebtoken::encode(&Header::new(Algorithm::RS256), claims, &self.encoding_key).map_err(
            |err| match err.kind() {
                ErrorKind::InvalidKeyFormat | ErrorKind::InvalidRsaKey(_) => {
                    SigningKeyError::Unavailable(err.to_string())
                }
                _ => SigningKeyError::Failed(err.to_string()),
            },
        )
    }
}
