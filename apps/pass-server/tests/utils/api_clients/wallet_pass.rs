use super::Session;
use crate::utils::api_clients::{HttpClient, Response};

pub struct WalletPassApi {
    client: HttpClient,
}

impl WalletPassApi {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    pub async fn issue(&self, session: Session<'_>) -> Response {
        self.client.post("/api/wallet-pass/v1", session).await
    }

    pub async fn get(&self) -> Response {
        self.client.get("/api/wallet-pass/v1").await
    }
}
