use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use serde::{Deserialize, Serialize};

pub mod dto;
pub mod endpoint;
pub mod extractor;
pub mod metrics;
pub mod router;
pub mod build_info {
    use shadow_rs::shadow;

    shadow!(build);

    pub use build::*;
}
mod middleware;

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct ServerConfig {
    pub database_url: String,
    pub server_ip: Option<IpAddr>,
    pub server_port: Option<u16>,
    pub trace_json: Option<bool>,
    pub sentry_dsn: Option<String>,
    pub sentry_environment: Option<String>,
    pub trace_level: Option<String>,
    // when set to true hides the `message` field in the error response
    pub hide_error_response_cause: bool,
    /// whether endpoint metrics are available
    pub enable_metrics: bool,
    /// whether build-info and health endpoints are available
    pub enable_server_info: bool,
    /// whether the openapi document is served
    pub enable_open_api: bool,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(
            self.server_ip.unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED)),
            self.server_port.unwrap_or(3000),
        )
    }
}
