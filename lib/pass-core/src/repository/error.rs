use thiserror::Error;

use crate::error::{ErrorCode, ErrorCodeMixin};

#[derive(Debug, Error)]
pub enum DataLayerError {
    #[error("Already exists")]
    AlreadyExists,

    #[error("Database error: {0}")]
    Db(#[from] anyhow::Error),
}

impl ErrorCodeMixin for DataLayerError {
    fn error_code(&self) -> ErrorCode {
        ErrorCode::IdentityStoreUnavailable
    }
}
