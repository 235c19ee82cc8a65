use std::time::Instant;

use axum::body::Body;
use axum::extract::MatchedPath;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;
use sentry::{Hub, SentryFutureExt};

use crate::metrics;

pub struct HttpRequestContext<'a> {
    pub path: &'a str,
    pub method: &'a str,
    pub request_id: Option<&'a str>,
    pub session_id: Option<&'a str>,
}

// create new sentry hub per request
pub async fn sentry_layer(request: Request<Body>, next: Next) -> Response {
    async {
        let HttpRequestContext {
            method,
            path,
            request_id,
            session_id,
        } = get_http_request_context(&request);

        let method_path = format!("{method} {path}");

        sentry::configure_scope(|scope| {
            scope.set_tag("http-request", method_path);

            if let Some(request_id) = request_id {
                scope.set_tag("request-id", request_id);
            }

            if let Some(session_id) = session_id {
                scope.set_tag("session-id", session_id);
            }
        });

        next.run(request).await
    }
    // make sure that the future is run in the new hub
    .bind_hub(Hub::new_from_top(Hub::main()))
    .await
}

pub async fn metrics_counter(request: Request<Body>, next: Next) -> Response {
    let path = request
        .extensions()
        .get::<MatchedPath>()
        .map(|path| path.as_str().to_owned())
        .unwrap_or_else(|| "unmatched".to_owned());

    let start = Instant::now();
    let response = next.run(request).await;

    metrics::track_request_count_and_time(
        &path,
        response.status().as_u16(),
        start.elapsed().as_secs_f64(),
    );

    response
}

pub fn get_http_request_context<T>(request: &Request<T>) -> HttpRequestContext<'_> {
    let headers = request.headers();
    let request_id = headers
        .get("x-request-id")
        .and_then(|header| header.to_str().ok())
        .filter(|value| !value.is_empty());

    let session_id = headers
        .get("x-session-id")
        .and_then(|header| header.to_str().ok())
        .filter(|value| !value.is_empty());

    HttpRequestContext {
        path: request.uri().path(),
        method: request.method().as_str(),
        request_id,
        session_id,
    }
}
