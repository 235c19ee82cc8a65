use shared_types::UserId;
use thiserror::Error;

use crate::error::{ErrorCode, ErrorCodeMixin};
use crate::model::profile::Profile;
use crate::repository::error::DataLayerError;

pub mod resolver;


#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("Unauthenticated: {0}")]
    Unauthenticated(String),
    #[error("No profile for user `{0}`")]
    ProfileNotFound(UserId),
    #[error("User store unavailable: {0}")]
    StoreUnavailable(#[from] DataLayerError),
}

impl ErrorCodeMixin for IdentityError {
    fn error_code(&self) -> ErrorCode {
        match self {
            Self::Unauthenticated(_) => ErrorCode::Unauthenticated,
            Self::ProfileNotFound(_) => ErrorCode::ProfileNotFound,
            Self::StoreUnavailable(_) => ErrorCode::IdentityStoreUnavailable,
        }
    }
}

/// Maps the caller's session credential to their canonical profile
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait IdentityResolver: Send + Sync {
    async fn resolve(&self, session_token: Option<String>) -> Result<Profile, IdentityError>;
}
