use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::{Value, json};

use crate::build_info;
use crate::metrics::encode_metrics;

#[utoipa::path(
    get,
    path = "/build-info",
    responses(
        (status = 200, description = "Ok")
    ),
    tag = "other",
    summary = "Retrieve version",
    description = "Returns the package version and the git and toolchain details it was built from.",
)]
pub(crate) async fn get_build_info() -> Json<Value> {
    Json(json!({
        "version": build_info::PKG_VERSION,
        "target": build_info::BUILD_RUST_CHANNEL,
        "build_time": build_info::BUILD_TIME,
        "branch": build_info::BRANCH,
        "commit": build_info::COMMIT_HASH,
        "rust_version": build_info::RUST_VERSION,
    }))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 204, description = "No content")
    ),
    tag = "other",
    summary = "Health check",
    description = "Returns a `204` response when the system is healthy.",
)]
pub(crate) async fn health_check() -> impl IntoResponse {
    StatusCode::NO_CONTENT
}

#[utoipa::path(
    get,
    path = "/metrics",
    responses(
        (status = 200, description = "OK"),
        (status = 500, description = "Internal error")
    ),
    tag = "other",
    summary = "Retrieve metrics",
    description = "Returns system metrics.",
)]
pub(crate) async fn get_metrics() -> Response {
    encode_metrics()
        .map(|metrics| (StatusCode::OK, metrics).into_response())
        .unwrap_or_else(|error| {
            tracing::error!("Failed encoding metrics: {error}");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        })
}
