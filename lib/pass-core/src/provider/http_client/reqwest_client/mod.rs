use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use super::{Error, Headers, HttpClient, Method, Request, RequestBuilder, Response, StatusCode};

#[derive(Clone)]
pub struct ReqwestClient {
    pub client: reqwest::Client,
}

impl ReqwestClient {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Client whose every call, connect and body read included, is bounded by `timeout`
    pub fn with_timeout(timeout: Duration) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Transport(e.to_string()))?;

        Ok(Self::new(client))
    }
}

impl Default for ReqwestClient {
    fn default() -> Self {
        Self::new(Default::default())
    }
}

#[async_trait::async_trait]
impl HttpClient for ReqwestClient {
    fn get(&self, url: &str) -> RequestBuilder {
        RequestBuilder::new(Arc::new(self.clone()), Method::Get, url)
    }

    fn post(&self, url: &str) -> RequestBuilder {
        RequestBuilder::new(Arc::new(self.clone()), Method::Post, url)
    }

    async fn send(&self, request: Request) -> Result<Response, Error> {
        let builder = match request.method {
            Method::Get => self.client.get(&request.url),
            Method::Post => self.client.post(&request.url),
        }
        .headers(to_header_map(&request.headers)?);

        let builder = match request.body {
            Some(body) => builder.body(body),
            None => builder,
        };

        let response = builder.send().await.map_err(to_transport_error)?;

        let status = StatusCode(response.status().as_u16());
        // non-visible-ASCII header values are of no interest to the callers
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|value| (name.to_string(), value.to_owned()))
            })
            .collect();
        let body = response.bytes().await.map_err(to_transport_error)?;

        Ok(Response {
            status,
            headers,
            body: body.to_vec(),
        })
    }
}

fn to_transport_error(error: reqwest::Error) -> Error {
    if error.is_timeout() {
        Error::Timeout(error.to_string())
    } else {
        Error::Transport(error.to_string())
    }
}

fn to_header_map(headers: &Headers) -> Result<HeaderMap, Error> {
    headers
        .iter()
        .map(|(name, value)| {
            let name = HeaderName::from_str(name)
                .map_err(|e| Error::InvalidRequest(format!("header name `{name}`: {e}")))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| Error::InvalidRequest(format!("header `{name}` value: {e}")))?;

            Ok((name, value))
        })
        .collect()
}
