//! Outbound HTTP seam. The wallet and token clients talk to Google through
//! [`HttpClient`] so they can be exercised against a mock or a local server.

pub mod reqwest_client;

use std::collections::HashMap;
use std::fmt::Display;
use std::panic::Location;
use std::sync::Arc;

use itertools::Itertools;
use serde::Serialize;
use serde::de::DeserializeOwned;
use strum::Display;
use thiserror::Error;

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait HttpClient: Send + Sync {
    fn get(&self, url: &str) -> RequestBuilder;
    fn post(&self, url: &str) -> RequestBuilder;

    async fn send(&self, request: Request) -> Result<Response, Error>;
}

pub type Headers = HashMap<String, String>;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct StatusCode(pub u16);

impl StatusCode {
    pub const OK: StatusCode = StatusCode(200);
    pub const CONFLICT: StatusCode = StatusCode(409);
    pub const TOO_MANY_REQUESTS: StatusCode = StatusCode(429);

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.0)
    }

    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.0)
    }

    /// Client errors that will fail again if repeated as-is. Rate limiting is
    /// the exception, it says nothing about the request itself.
    pub fn is_rejection(&self) -> bool {
        self.is_client_error() && *self != Self::TOO_MANY_REQUESTS
    }
}

impl Display for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
}

#[derive(Clone, Debug)]
pub struct Request {
    pub method: Method,
    pub url: String,
    pub headers: Headers,
    pub body: Option<Vec<u8>>,
}

#[derive(Debug)]
pub struct Response {
    pub status: StatusCode,
    pub headers: Headers,
    pub body: Vec<u8>,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Transport error: {0}")]
    Transport(String),
    #[error("Request timed out: {0}")]
    Timeout(String),
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Form encoding error: {0}")]
    FormEncoding(#[from] serde_urlencoded::ser::Error),
}

impl Response {
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, Error> {
        Ok(serde_json::from_slice(&self.body)?)
    }

    /// Body as text, for error reasons when the provider sends no structured error
    pub fn text_lossy(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

pub struct RequestBuilder {
    client: Arc<dyn HttpClient>,
    request: Request,
}

impl RequestBuilder {
    pub fn new(client: Arc<dyn HttpClient>, method: Method, url: &str) -> Self {
        Self {
            client,
            request: Request {
                method,
                url: url.to_owned(),
                headers: Headers::default(),
                body: None,
            },
        }
    }

    pub fn bearer_auth(mut self, token: &str) -> Self {
        self.request
            .headers
            .insert("Authorization".to_owned(), format!("Bearer {token}"));
        self
    }

    pub fn form<T: Serialize>(self, value: T) -> Result<Self, Error> {
        let body = serde_urlencoded::to_string(value)?.into_bytes();
        Ok(self.with_body("application/x-www-form-urlencoded", body))
    }

    pub fn json<T: Serialize>(self, value: T) -> Result<Self, Error> {
        let body = serde_json::to_vec(&value)?;
        Ok(self.with_body("application/json", body))
    }

    fn with_body(mut self, content_type: &str, body: Vec<u8>) -> Self {
        self.request
            .headers
            .insert("Content-Type".to_owned(), content_type.to_owned());
        self.request.body = Some(body);
        self
    }

    /// Sends the request. Non-2xx statuses are returned as responses, callers
    /// decide what a status means for them.
    #[track_caller]
    pub fn send(self) -> impl Future<Output = Result<Response, Error>> + Send {
        let location = Location::caller();

        async move {
            let Self { client, request } = self;
            let summary = format!("{} {}", request.method, request.url);

            trace_request(location, &request);

            match client.send(request).await {
                Ok(response) => {
                    tracing::debug!(%location, "{summary} - {}", response.status);
                    trace_response(location, &response);
                    Ok(response)
                }
                Err(error) => {
                    tracing::warn!(%location, "{summary} failed: {error}");
                    Err(error)
                }
            }
        }
    }
}

fn trace_request(location: &Location, request: &Request) {
    tracing::trace!(
        %location,
        "Request\nHeaders:\n{}\nBody:\n{}",
        format_headers(&request.headers),
        format_body(request.body.as_deref()),
    );
}

fn trace_response(location: &Location, response: &Response) {
    tracing::trace!(
        %location,
        "Response\nHeaders:\n{}\nBody:\n{}",
        format_headers(&response.headers),
        format_body(Some(response.body.as_slice())),
    );
}

fn format_headers(headers: &Headers) -> String {
    if headers.is_empty() {
        return "<None>".to_owned();
    }

    headers
        .iter()
        .sorted_by(|(a, _), (b, _)| a.cmp(b))
        .map(|(name, value)| {
            if name.eq_ignore_ascii_case("authorization") {
                format!("{name}: <redacted>")
            } else {
                format!("{name}: {value}")
            }
        })
        .join("\n")
}

// Token exchange bodies carry bearer material in both directions
fn format_body(body: Option<&[u8]>) -> String {
    match body {
        None => "<None>".to_owned(),
        Some(body) => {
            let text = String::from_utf8_lossy(body);
            if text.contains("assertion=") || text.contains("\"access_token\"") {
                "<redacted>".to_owned()
            } else {
                text.into_owned()
            }
        }
    }
}
