//! Provider-side pass objects (Google Wallet generic objects)

use shared_types::ObjectId;
use thiserror::Error;

use super::access_token::AccessTokenError;
use crate::model::pass::{PassObjectRequest, PassRecord};

pub mod http_client;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertObjectOutcome {
    Created(PassRecord),
    /// An object with the requested id already exists (HTTP 409)
    AlreadyExists,
}

#[derive(Debug, Error)]
pub enum WalletObjectsError {
    #[error("Wallet API rejected request ({status}): {reason}")]
    Rejected { status: u16, reason: String },
    #[error("Wallet API unavailable: {0}")]
    Unavailable(String),
    #[error("Wallet API call timed out")]
    Timeout,
    /// Access token could not be obtained. `status` is the token endpoint's
    /// answer when it was reached.
    #[error("Wallet API authentication failed: {reason}")]
    Authentication { status: Option<u16>, reason: String },
}

impl From<AccessTokenError> for WalletObjectsError {
    fn from(value: AccessTokenError) -> Self {
        match value {
            AccessTokenError::Assertion(err) => Self::Authentication {
                status: None,
                reason: err.to_string(),
            },
            AccessTokenError::Rejected { status, reason } => Self::Authentication {
                status: Some(status),
                reason: format!("token endpoint returned {status}: {reason}"),
            },
            AccessTokenError::Unavailable(reason) => Self::Unavailable(reason),
            AccessTokenError::Timeout => Self::Timeout,
        }
    }
}

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait WalletObjectsClient: Send + Sync {
    async fn insert_object(
        &self,
        request: PassObjectRequest,
    ) -> Result<InsertObjectOutcome, WalletObjectsError>;

    async fn get_object(&self, id: &ObjectId) -> Result<PassRecord, WalletObjectsError>;
}
