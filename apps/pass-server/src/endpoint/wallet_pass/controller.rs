use axum::extract::State;
use axum::response::IntoResponse;

use super::dto::IssuePassResponseRestDTO;
use crate::dto::error::ErrorResponseRestDTO;
use crate::dto::response::{ErrorResponse, OkOrErrorResponse};
use crate::extractor::SessionToken;
use crate::router::AppState;

#[utoipa::path(
    post,
    path = "/api/wallet-pass/v1",
    responses(
        (status = 200, description = "OK", body = IssuePassResponseRestDTO),
        (status = 401, description = "Missing or invalid session", body = ErrorResponseRestDTO),
        (status = 404, description = "User profile not found", body = ErrorResponseRestDTO),
        (status = 405, description = "Method not allowed", body = ErrorResponseRestDTO),
        (status = 500, description = "Issuance failed", body = ErrorResponseRestDTO),
    ),
    tag = "wallet_pass",
    summary = "Issue wallet pass",
    description = indoc::formatdoc! {"
        Creates a new wallet pass object for the authenticated user and returns a signed
        save-to-wallet link. The session is read from a bearer `Authorization` header or the
        session cookie. Every call issues a new pass object.
    "},
)]
pub(crate) async fn post_wallet_pass(
    state: State<AppState>,
    SessionToken(session_token): SessionToken,
) -> OkOrErrorResponse<IssuePassResponseRestDTO> {
    let result = state
        .core
        .pass_issuance_service
        .issue_pass(session_token)
        .await;
    OkOrErrorResponse::from_result(result, state, "issuing wallet pass")
}

pub(crate) async fn wallet_pass_method_not_allowed(state: State<AppState>) -> impl IntoResponse {
    ErrorResponse::method_not_allowed("POST", state.config.hide_error_response_cause)
}
