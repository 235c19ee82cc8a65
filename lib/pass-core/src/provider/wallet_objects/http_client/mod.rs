use std::sync::Arc;

use url::Url;

use crate::provider::access_token::AccessTokenProvider;
use crate::provider::http_client::HttpClient;

mod dto;
mod provider;


pub struct HTTPWalletObjectsClient {
    base_url: Url,
    http_client: Arc<dyn HttpClient>,
    access_token_provider: Arc<dyn AccessTokenProvider>,
}

impl HTTPWalletObjectsClient {
    pub fn new(
        base_url: Url,
        http_client: Arc<dyn HttpClient>,
        access_token_provider: Arc<dyn AccessTokenProvider>,
    ) -> Self {
        Self {
            base_url,
            http_client,
            access_token_provider,
        }
    }
}
