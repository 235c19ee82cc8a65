use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::http::header::ALLOW;
use axum::response::IntoResponse;
use pass_core::error::{ErrorCode as CoreErrorCode, ErrorCodeMixin};
use pass_core::service::pass_issuance::error::PassIssuanceError;
use serde::Serialize;

use super::error::{ErrorCode, ErrorResponseRestDTO};
use crate::router::AppState;

#[derive(Debug)]
pub(crate) enum ErrorResponse {
    Unauthorized(ErrorResponseRestDTO),
    NotFound(ErrorResponseRestDTO),
    MethodNotAllowed {
        allow: &'static str,
        body: ErrorResponseRestDTO,
    },
    ServerError(ErrorResponseRestDTO),
}

impl ErrorResponse {
    pub fn for_panic(panic_msg: String, hide_cause: bool) -> Self {
        Self::ServerError(
            ErrorResponseRestDTO {
                error: ErrorCode::InternalError,
                message: Some(panic_msg),
            }
            .hide_cause(hide_cause),
        )
    }

    pub fn method_not_allowed(allow: &'static str, hide_cause: bool) -> Self {
        Self::MethodNotAllowed {
            allow,
            body: ErrorResponseRestDTO {
                error: ErrorCode::MethodNotAllowed,
                message: Some(format!("Only {allow} is supported")),
            }
            .hide_cause(hide_cause),
        }
    }

    fn from_issuance_error(error: &PassIssuanceError, hide_cause: bool) -> Self {
        let code = error.error_code();
        let response = ErrorResponseRestDTO {
            error: code.into(),
            message: Some(error.to_string()),
        }
        .hide_cause(hide_cause);

        match code {
            CoreErrorCode::Unauthenticated => Self::Unauthorized(response),
            CoreErrorCode::ProfileNotFound => Self::NotFound(response),
            _ => Self::ServerError(response),
        }
    }

    #[track_caller]
    fn from_issuance_error_with_trace(
        error: PassIssuanceError,
        state: State<AppState>,
        action_description: &str,
    ) -> Self {
        let location = std::panic::Location::caller();
        let response = Self::from_issuance_error(&error, state.config.hide_error_response_cause);

        if let Self::ServerError(_) = response {
            tracing::error!(%error, %location, "Error while {action_description}");
        } else {
            tracing::warn!(%error, %location, "Error while {action_description}");
        }

        response
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::Unauthorized(error) => (StatusCode::UNAUTHORIZED, Json(error)).into_response(),
            Self::NotFound(error) => (StatusCode::NOT_FOUND, Json(error)).into_response(),
            Self::MethodNotAllowed { allow, body } => (
                StatusCode::METHOD_NOT_ALLOWED,
                [(ALLOW, allow)],
                Json(body),
            )
                .into_response(),
            Self::ServerError(error) => {
                (StatusCode::INTERNAL_SERVER_ERROR, Json(error)).into_response()
            }
        }
    }
}

pub(crate) enum OkOrErrorResponse<T> {
    Ok(T),
    Error(ErrorResponse),
}

impl<T> OkOrErrorResponse<T> {
    pub fn ok(value: impl Into<T>) -> Self {
        Self::Ok(value.into())
    }

    #[track_caller]
    pub(crate) fn from_result(
        result: Result<impl Into<T>, PassIssuanceError>,
        state: State<AppState>,
        action_description: &str,
    ) -> Self {
        match result {
            Ok(value) => Self::ok(value),
            Err(error) => Self::Error(ErrorResponse::from_issuance_error_with_trace(
                error,
                state,
                action_description,
            )),
        }
    }
}

impl<T: Serialize> IntoResponse for OkOrErrorResponse<T> {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::Ok(body) => (StatusCode::OK, Json(body)).into_response(),
            Self::Error(error) => error.into_response(),
        }
    }
}
