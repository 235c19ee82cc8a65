use serde::Serialize;
use strum::{AsRefStr, Display};

/// Wire-level error codes returned to API callers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, AsRefStr)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    Unauthenticated,
    ProfileNotFound,
    ConfigurationError,
    UpstreamRejected,
    UpstreamUnavailable,
    UpstreamTimeout,
    ConflictResolutionFailed,
    SigningKeyUnavailable,
    SigningFailed,
    IdentityStoreUnavailable,
}

impl ErrorCode {
    pub const fn msg(&self) -> &'static str {
        match self {
            Self::Unauthenticated => "Missing or invalid session",
            Self::ProfileNotFound => "User profile not found",
            Self::ConfigurationError => "Pass issuer is not configured",
            Self::UpstreamRejected => "Wallet provider rejected the request",
            Self::UpstreamUnavailable => "Wallet provider unavailable",
            Self::UpstreamTimeout => "Wallet provider did not respond in time",
            Self::ConflictResolutionFailed => "Failed to fetch existing pass object",
            Self::SigningKeyUnavailable => "Signing key unavailable",
            Self::SigningFailed => "Failed to sign pass",
            Self::IdentityStoreUnavailable => "User store unavailable",
        }
    }
}

pub trait ErrorCodeMixin {
    fn error_code(&self) -> ErrorCode;
}
