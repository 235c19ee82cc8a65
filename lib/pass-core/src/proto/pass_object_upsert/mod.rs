use shared_types::ObjectId;
use thiserror::Error;

use crate::error::{ErrorCode, ErrorCodeMixin};
use crate::model::pass::PassRecord;
use crate::model::profile::Profile;
use crate::provider::wallet_objects::WalletObjectsError;

mod mapper;
pub mod upserter;


#[derive(Debug, Error)]
pub enum UpsertError {
    #[error("Wallet provider rejected pass object ({status}): {reason}")]
    UpstreamRejected { status: u16, reason: String },
    #[error("Wallet provider authentication failed: {reason}")]
    UpstreamAuthentication { status: Option<u16>, reason: String },
    #[error("Wallet provider unavailable: {0}")]
    UpstreamUnavailable(String),
    #[error("Wallet provider timed out")]
    UpstreamTimeout,
    #[error("Pass object `{object_id}` exists but could not be fetched: {source}")]
    ConflictResolutionFailed {
        object_id: ObjectId,
        source: WalletObjectsError,
    },
}

impl From<WalletObjectsError> for UpsertError {
    fn from(value: WalletObjectsError) -> Self {
        match value {
            WalletObjectsError::Rejected { status, reason } => {
                Self::UpstreamRejected { status, reason }
            }
            WalletObjectsError::Authentication { status, reason } => {
                Self::UpstreamAuthentication { status, reason }
            }
            WalletObjectsError::Unavailable(reason) => Self::UpstreamUnavailable(reason),
            WalletObjectsError::Timeout => Self::UpstreamTimeout,
        }
    }
}

impl ErrorCodeMixin for UpsertError {
    fn error_code(&self) -> ErrorCode {
        match self {
            Self::UpstreamRejected { .. } | Self::UpstreamAuthentication { .. } => {
                ErrorCode::UpstreamRejected
            }
            Self::UpstreamUnavailable(_) => ErrorCode::UpstreamUnavailable,
            Self::UpstreamTimeout => ErrorCode::UpstreamTimeout,
            Self::ConflictResolutionFailed { .. } => ErrorCode::ConflictResolutionFailed,
        }
    }
}

/// Creates the caller's pass object, falling back to fetching it when it already exists
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait PassObjectUpsert: Send + Sync {
    async fn upsert(&self, profile: &Profile) -> Result<PassRecord, UpsertError>;
}
