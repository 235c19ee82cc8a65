use std::net::TcpListener;
use std::path::PathBuf;

use clap::Parser;
use pass_core::config::core_config::AppConfig;
use pass_server::router::start_server;
use pass_server::{ServerConfig, build_info, metrics};
use sentry::integrations::tracing::EventFilter;
use tracing_subscriber::prelude::*;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, value_name = "FILE")]
    config: Option<Vec<PathBuf>>,
}

fn main() {
    let cli = Cli::parse();

    let mut config_files = cli.config.unwrap_or_default();
    config_files.insert(0, "config/config.yml".into());

    let app_config: AppConfig<ServerConfig> =
        AppConfig::from_files(&config_files).expect("Failed creating config");

    let _sentry_init_guard = initialize_sentry(&app_config.app);

    initialize_tracing(&app_config.app);
    metrics::setup();

    tracing::info!(
        version = build_info::PKG_VERSION,
        commit = build_info::SHORT_COMMIT,
        "Starting wallet pass server"
    );

    let listener =
        TcpListener::bind(app_config.app.socket_addr()).expect("Failed to bind to address");

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .expect("Failed to build tokio runtime")
        .block_on(async {
            let db_conn = sql_data_provider::db_conn(&app_config.app.database_url)
                .await
                .expect("Failed to connect to database");

            start_server(listener, app_config, db_conn).await
        })
}

fn initialize_sentry(config: &ServerConfig) -> Option<sentry::ClientInitGuard> {
    let (Some(dsn), Some(environment)) = (&config.sentry_dsn, &config.sentry_environment) else {
        return None;
    };
    if dsn.is_empty() {
        return None;
    }

    let guard = sentry::init((
        dsn.to_owned(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: Some(environment.to_owned().into()),
            max_breadcrumbs: 50,
            traces_sample_rate: 1.0,
            ..Default::default()
        },
    ));

    // inherited by the per-request hubs
    sentry::configure_scope(|scope| {
        for (key, value) in [
            ("build-target", build_info::BUILD_RUST_CHANNEL),
            ("build-time", build_info::BUILD_TIME),
            ("branch", build_info::BRANCH),
            ("commit", build_info::COMMIT_HASH),
            ("rust-version", build_info::RUST_VERSION),
        ] {
            scope.set_tag(key, value);
        }
    });

    Some(guard)
}

fn initialize_tracing(config: &ServerConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| {
            tracing_subscriber::EnvFilter::try_new(config.trace_level.as_deref().unwrap_or("debug"))
        })
        .expect("Failed to create env filter");

    let sentry_layer = sentry::integrations::tracing::layer().event_filter(|md| {
        match *md.level() {
            // error traces report directly to Sentry
            tracing::Level::ERROR => EventFilter::Event,
            // info/warn traces log as sentry breadcrumb
            tracing::Level::INFO | tracing::Level::WARN => EventFilter::Breadcrumb,
            // lower level traces are ignored by sentry
            _ => EventFilter::Ignore,
        }
    });

    let registry = tracing_subscriber::registry()
        .with(filter)
        .with(sentry_layer);

    match config.trace_json {
        Some(true) => registry
            .with(tracing_subscriber::fmt::layer().json().flatten_event(true))
            .init(),
        _ => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}
