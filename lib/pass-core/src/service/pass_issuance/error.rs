use strum::Display;
use thiserror::Error;

use crate::config::ConfigValidationError;
use crate::error::{ErrorCode, ErrorCodeMixin};
use crate::proto::claims_signer::ClaimsSignerError;
use crate::proto::identity_resolver::IdentityError;
use crate::proto::pass_object_upsert::UpsertError;

#[derive(Debug, Error)]
pub enum PassIssuanceError {
    #[error("Issuer configuration invalid: {0}")]
    Configuration(#[from] ConfigValidationError),
    #[error(transparent)]
    Identity(#[from] IdentityError),
    #[error(transparent)]
    Upsert(#[from] UpsertError),
    #[error(transparent)]
    Signing(#[from] ClaimsSignerError),
}

/// Step of the issuance flow an error originated from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum IssuanceStage {
    Start,
    Resolving,
    Upserting,
    Signing,
}

impl PassIssuanceError {
    pub fn stage(&self) -> IssuanceStage {
        match self {
            Self::Configuration(_) => IssuanceStage::Start,
            Self::Identity(_) => IssuanceStage::Resolving,
            Self::Upsert(_) => IssuanceStage::Upserting,
            Self::Signing(_) => IssuanceStage::Signing,
        }
    }
}

impl ErrorCodeMixin for PassIssuanceError {
    fn error_code(&self) -> ErrorCode {
        match self {
            Self::Configuration(error) => error.error_code(),
            Self::Identity(error) => error.error_code(),
            Self::Upsert(error) => error.error_code(),
            Self::Signing(error) => error.error_code(),
        }
    }
}
