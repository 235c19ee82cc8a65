use std::sync::Arc;

use super::{
    ClaimsSigner, ClaimsSignerError, ObjectReference, SaveToWalletClaims, SaveToWalletPayload,
    SignedPass,
};
use crate::model::pass::PassRecord;
use crate::provider::signing_key::JwtSigner;

const AUDIENCE: &str = "google";
const TOKEN_TYPE: &str = "savetowallet";

pub struct SaveToWalletClaimsSigner {
    signer: Arc<dyn JwtSigner>,
    service_account_email: String,
    origins: Vec<String>,
    save_url_base: String,
}

impl SaveToWalletClaimsSigner {
    pub fn new(
        signer: Arc<dyn JwtSigner>,
        service_account_email: String,
        origins: Vec<String>,
        save_url_base: String,
    ) -> Self {
        Self {
            signer,
            service_account_email,
            origins,
            save_url_base,
        }
    }

    fn claims(&self, record: &PassRecord) -> SaveToWalletClaims {
        SaveToWalletClaims {
            iss: self.service_account_email.clone(),
            aud: AUDIENCE,
            typ: TOKEN_TYPE,
            origins: self.origins.clone(),
            payload: SaveToWalletPayload {
                generic_objects: vec![ObjectReference {
                    id: record.id.clone(),
                    class_id: record.class_id.clone(),
                }],
            },
        }
    }
}

impl ClaimsSigner for SaveToWalletClaimsSigner {
    fn sign(&self, record: &PassRecord) -> Result<SignedPass, ClaimsSignerError> {
        let claims = serde_json::to_value(self.claims(record))
            .map_err(|err| ClaimsSignerError::SigningFailed(err.to_string()))?;

        let token = self.signer.sign(&claims)?;

        Ok(SignedPass {
            save_url: format!("{}{token}", self.save_url_base),
            token,
        })
    }
}
