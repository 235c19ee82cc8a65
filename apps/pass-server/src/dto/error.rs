use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[schema(example = "UNAUTHENTICATED")]
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
    MethodNotAllowed,
    InternalError,
}

impl From<pass_core::error::ErrorCode> for ErrorCode {
    fn from(value: pass_core::error::ErrorCode) -> Self {
        use pass_core::error::ErrorCode as Core;

        match value {
            Core::Unauthenticated => Self::Unauthenticated,
            Core::ProfileNotFound => Self::ProfileNotFound,
            Core::ConfigurationError => Self::ConfigurationError,
            Core::UpstreamRejected => Self::UpstreamRejected,
            Core::UpstreamUnavailable => Self::UpstreamUnavailable,
            Core::UpstreamTimeout => Self::UpstreamTimeout,
            Core::ConflictResolutionFailed => Self::ConflictResolutionFailed,
            Core::SigningKeyUnavailable => Self::SigningKeyUnavailable,
            Core::SigningFailed => Self::SigningFailed,
            Core::IdentityStoreUnavailable => Self::IdentityStoreUnavailable,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponseRestDTO {
    pub error: ErrorCode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorResponseRestDTO {
    pub fn hide_cause(mut self, hide: bool) -> ErrorResponseRestDTO {
        if hide {
            self.message = None;
        }

        self
    }
}
