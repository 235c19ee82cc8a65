use std::any::Any;
use std::net::TcpListener;
use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router, middleware};
use pass_core::PassCore;
use pass_core::config::core_config::AppConfig;
use pass_core::provider::http_client::reqwest_client::ReqwestClient;
use sql_data_provider::{DataLayer, DbConn};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;
use tracing::{Span, info, info_span};
use utoipa::OpenApi;

use crate::ServerConfig;
use crate::dto::response::ErrorResponse;
use crate::endpoint::{self, misc, wallet_pass};
use crate::middleware::get_http_request_context;

pub(crate) struct InternalAppState {
    pub core: PassCore,
    pub config: Arc<ServerConfig>,
    pub session_cookie_name: String,
}

pub(crate) type AppState = Arc<InternalAppState>;

pub async fn start_server(listener: TcpListener, config: AppConfig<ServerConfig>, db_conn: DbConn) {
    listener
        .set_nonblocking(true)
        .expect("Failed to set listener non-blocking");

    let http_client = ReqwestClient::with_timeout(config.core.wallet_api.timeout)
        .expect("Failed to create HTTP client");
    let session_cookie_name = config.core.session.cookie_name.to_owned();

    let core = PassCore::new(
        config.core,
        Arc::new(DataLayer::build(db_conn)),
        Arc::new(http_client),
        None,
    );

    let config = Arc::new(config.app);
    let state: AppState = Arc::new(InternalAppState {
        core,
        config: config.to_owned(),
        session_cookie_name,
    });

    let addr = listener.local_addr().expect("Invalid TCP listener");
    info!("Starting server at http://{addr}");

    let router = router(state, config);

    axum::serve(
        tokio::net::TcpListener::from_std(listener)
            .expect("failed to convert to tokio TcpListener"),
        router.into_make_service(),
    )
    .await
    .expect("Failed to start axum server");
}

fn router(state: AppState, config: Arc<ServerConfig>) -> Router {
    let hide_cause = config.hide_error_response_cause;
    let api = Router::new().route(
        "/api/wallet-pass/v1",
        post(wallet_pass::controller::post_wallet_pass)
            .fallback(wallet_pass::controller::wallet_pass_method_not_allowed),
    );

    let mut technical_endpoints = Router::new();
    if config.enable_server_info {
        technical_endpoints = technical_endpoints
            .route("/build-info", get(misc::get_build_info))
            .route("/health", get(misc::health_check));
    }
    if config.enable_metrics {
        technical_endpoints = technical_endpoints.route("/metrics", get(misc::get_metrics));
    }
    if config.enable_open_api {
        let openapi_documentation = gen_openapi_documentation();
        technical_endpoints = technical_endpoints.route(
            "/api-docs/openapi.json",
            get(move || async move { Json(openapi_documentation) }),
        );
    }

    Router::new()
        .merge(api)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<_>| {
                    let context = get_http_request_context(request);
                    info_span!(
                        "http_request",
                        method = context.method,
                        path = context.path,
                        service = "pass-server",
                        RequestId = context.request_id,
                        SessionId = context.session_id,
                    )
                })
                .on_request(|request: &Request<_>, _span: &Span| {
                    tracing::debug!(
                        "SERVICE CALL START {} {}",
                        request.method(),
                        request.uri().path()
                    )
                })
                .on_failure(|_, _, _: &_| {}) // override default on_failure handler
                .on_response(|response: &Response<_>, _: Duration, _span: &Span| {
                    tracing::debug!("SERVICE CALL END {}", response.status())
                }),
        )
        .layer(middleware::from_fn(crate::middleware::sentry_layer))
        .layer(middleware::from_fn(crate::middleware::metrics_counter))
        .merge(technical_endpoints)
        .layer(CatchPanicLayer::custom(move |err| handle_panic(err, hide_cause)))
        .with_state(state)
}

fn handle_panic(err: Box<dyn Any + Send + 'static>, hide_cause: bool) -> Response<Body> {
    let details = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic message".to_string()
    };

    tracing::error!("Request handler panicked: {details}");

    ErrorResponse::for_panic(details, hide_cause).into_response()
}

fn gen_openapi_documentation() -> utoipa::openapi::OpenApi {
    #[derive(OpenApi)]
    #[openapi(
        paths(
            endpoint::wallet_pass::controller::post_wallet_pass,

            endpoint::misc::get_build_info,
            endpoint::misc::health_check,
            endpoint::misc::get_metrics,
        ),
        components(
            schemas(
                endpoint::wallet_pass::dto::IssuePassResponseRestDTO,

                crate::dto::error::ErrorResponseRestDTO,
                crate::dto::error::ErrorCode,
            )
        ),
        tags(
            (name = "other", description = "Other utility endpoints"),
            (name = "wallet_pass", description = "Wallet pass issuance"),
        )
    )]
    struct ApiDoc;

    let mut docs = ApiDoc::openapi();
    docs.info.title = "Hack Western wallet pass server".to_string();
    docs.info.version = crate::build_info::PKG_VERSION.to_string();
    docs
}
