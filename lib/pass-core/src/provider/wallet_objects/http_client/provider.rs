use shared_types::ObjectId;
use url::Url;

use super::HTTPWalletObjectsClient;
use super::dto::{
    GenericObjectRequestRestDTO, GenericObjectResponseRestDTO, GoogleErrorResponseRestDTO,
};
use crate::model::pass::{PassObjectRequest, PassRecord};
use crate::provider::http_client::{self, Response, StatusCode};
use crate::provider::wallet_objects::{
    InsertObjectOutcome, WalletObjectsClient, WalletObjectsError,
};

#[async_trait::async_trait]
impl WalletObjectsClient for HTTPWalletObjectsClient {
    async fn insert_object(
        &self,
        request: PassObjectRequest,
    ) -> Result<InsertObjectOutcome, WalletObjectsError> {
        let url = self.generic_object_url(None)?;
        let access_token = self.access_token_provider.access_token().await?;

        let response = self
            .http_client
            .post(url.as_str())
            .bearer_auth(&access_token)
            .json(GenericObjectRequestRestDTO::from(request))
            .map_err(to_transport_error)?
            .send()
            .await
            .map_err(to_transport_error)?;

        if response.status == StatusCode::CONFLICT {
            return Ok(InsertObjectOutcome::AlreadyExists);
        }

        parse_object(response).map(InsertObjectOutcome::Created)
    }

    async fn get_object(&self, id: &ObjectId) -> Result<PassRecord, WalletObjectsError> {
        let url = self.generic_object_url(Some(id))?;
        let access_token = self.access_token_provider.access_token().await?;

        let response = self
            .http_client
            .get(url.as_str())
            .bearer_auth(&access_token)
            .send()
            .await
            .map_err(to_transport_error)?;

        parse_object(response)
    }
}

impl HTTPWalletObjectsClient {
    fn generic_object_url(&self, id: Option<&ObjectId>) -> Result<Url, WalletObjectsError> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                WalletObjectsError::Unavailable(format!(
                    "wallet API base URL `{}` cannot be a base",
                    self.base_url
                ))
            })?;
            segments.pop_if_empty().push("genericObject");
            if let Some(id) = id {
                segments.push(id.as_ref());
            }
        }

        Ok(url)
    }
}

fn parse_object(response: Response) -> Result<PassRecord, WalletObjectsError> {
    if !response.status.is_success() {
        return Err(to_status_error(&response));
    }

    response
        .json::<GenericObjectResponseRestDTO>()
        .map(Into::into)
        .map_err(|err| WalletObjectsError::Unavailable(format!("unexpected response: {err}")))
}

fn to_status_error(response: &Response) -> WalletObjectsError {
    let status = response.status;
    let reason = serde_json::from_slice::<GoogleErrorResponseRestDTO>(&response.body)
        .ok()
        .and_then(|body| body.error.message.or(body.error.status))
        .unwrap_or_else(|| response.text_lossy());

    if status.is_rejection() {
        WalletObjectsError::Rejected {
            status: status.0,
            reason,
        }
    } else {
        WalletObjectsError::Unavailable(format!("status {status}: {reason}"))
    }
}

fn to_transport_error(error: http_client::Error) -> WalletObjectsError {
    match error {
        http_client::Error::Timeout(_) => WalletObjectsError::Timeout,
        error => WalletObjectsError::Unavailable(error.to_string()),
    }
}
