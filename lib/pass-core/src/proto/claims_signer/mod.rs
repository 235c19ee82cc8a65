use serde::Serialize;
use shared_types::{ClassId, ObjectId};
use thiserror::Error;

use crate::error::{ErrorCode, ErrorCodeMixin};
use crate::model::pass::PassRecord;
use crate::provider::signing_key::SigningKeyError;

pub mod signer;


#[derive(Debug, Error)]
pub enum ClaimsSignerError {
    #[error("Signing key unavailable: {0}")]
    SigningKeyUnavailable(String),
    #[error("Signing failed: {0}")]
    SigningFailed(String),
}

impl From<SigningKeyError> for ClaimsSignerError {
    fn from(value: SigningKeyError) -> Self {
        match value {
            SigningKeyError::Unavailable(reason) => Self::SigningKeyUnavailable(reason),
            SigningKeyError::Failed(reason) => Self::SigningFailed(reason),
        }
    }
}

impl ErrorCodeMixin for ClaimsSignerError {
    fn error_code(&self) -> ErrorCode {
        match self {
            Self::SigningKeyUnavailable(_) => ErrorCode::SigningKeyUnavailable,
            Self::SigningFailed(_) => ErrorCode::SigningFailed,
        }
    }
}

/// Save-to-wallet assertion, signed and handed out, never stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SaveToWalletClaims {
    pub iss: String,
    pub aud: &'static str,
    pub typ: &'static str,
    pub origins: Vec<String>,
    pub payload: SaveToWalletPayload,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveToWalletPayload {
    pub generic_objects: Vec<ObjectReference>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectReference {
    pub id: ObjectId,
    pub class_id: ClassId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedPass {
    pub token: String,
    pub save_url: String,
}

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait ClaimsSigner: Send + Sync {
    fn sign(&self, record: &PassRecord) -> Result<SignedPass, ClaimsSignerError>;
}
