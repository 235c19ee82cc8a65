use super::PassIssuanceService;
use super::dto::IssuePassResponseDTO;
use super::error::PassIssuanceError;

impl PassIssuanceService {
    /// Resolves the caller, creates their pass object and returns the signed save link.
    ///
    /// Every call is a fresh issuance with a new object id.
    pub async fn issue_pass(
        &self,
        session_token: Option<String>,
    ) -> Result<IssuePassResponseDTO, PassIssuanceError> {
        let result = self.run_issuance(session_token).await;

        if let Err(error) = &result {
            tracing::warn!(stage = %error.stage(), "Pass issuance failed: {error}");
        }

        result
    }

    async fn run_issuance(
        &self,
        session_token: Option<String>,
    ) -> Result<IssuePassResponseDTO, PassIssuanceError> {
        let pipeline = self.pipeline.as_ref().map_err(|error| error.clone())?;

        let profile = pipeline.identity_resolver.resolve(session_token).await?;
        let record = pipeline.pass_object_upsert.upsert(&profile).await?;
        let signed = pipeline.claims_signer.sign(&record)?;

        tracing::info!(user_id = %profile.id, object_id = %record.id, "Issued wallet pass");

        Ok(IssuePassResponseDTO {
            save_to_wallet_url: signed.save_url,
            object_id: record.id,
        })
    }
}
