use one_dto_mapper::From;
use pass_core::service::pass_issuance::dto::IssuePassResponseDTO;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Clone, Debug, Serialize, ToSchema, From)]
#[serde(rename_all = "camelCase")]
#[from(IssuePassResponseDTO)]
pub(crate) struct IssuePassResponseRestDTO {
    /// Link that adds the pass to the caller's wallet
    #[schema(example = "https://pay.google.com/gp/v/save/eyJhbGciOiJSUzI1NiJ9...")]
    pub save_to_wallet_url: String,
}
