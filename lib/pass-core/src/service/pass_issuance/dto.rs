use shared_types::ObjectId;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IssuePassResponseDTO {
    pub save_to_wallet_url: String,
    pub object_id: ObjectId,
}
