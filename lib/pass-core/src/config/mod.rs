use thiserror::Error;

use crate::error::{ErrorCode, ErrorCodeMixin};

pub mod core_config;
pub mod validator;


#[derive(Debug, Error)]
pub enum ConfigParsingError {
    #[error("Config parsing error: `{0}`")]
    GeneralParsingError(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigValidationError {
    #[error("Missing config entry: `{0}`")]
    MissingEntry(&'static str),
    #[error("Invalid config entry `{entry}`: {reason}")]
    InvalidEntry { entry: &'static str, reason: String },
    #[error("Signing key could not be loaded: {0}")]
    SigningKey(String),
}

impl ErrorCodeMixin for ConfigValidationError {
    fn error_code(&self) -> ErrorCode {
        ErrorCode::ConfigurationError
    }
}
