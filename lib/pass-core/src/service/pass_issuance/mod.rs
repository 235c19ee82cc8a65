use std::sync::Arc;

use crate::config::ConfigValidationError;
use crate::proto::claims_signer::ClaimsSigner;
use crate::proto::identity_resolver::IdentityResolver;
use crate::proto::pass_object_upsert::PassObjectUpsert;

pub mod dto;
pub mod error;
pub mod service;


#[derive(Clone)]
pub struct PassIssuanceService {
    pipeline: Result<IssuancePipeline, ConfigValidationError>,
}

#[derive(Clone)]
struct IssuancePipeline {
    identity_resolver: Arc<dyn IdentityResolver>,
    pass_object_upsert: Arc<dyn PassObjectUpsert>,
    claims_signer: Arc<dyn ClaimsSigner>,
}

impl PassIssuanceService {
    pub(crate) fn new(
        identity_resolver: Arc<dyn IdentityResolver>,
        pass_object_upsert: Arc<dyn PassObjectUpsert>,
        claims_signer: Arc<dyn ClaimsSigner>,
    ) -> Self {
        Self {
            pipeline: Ok(IssuancePipeline {
                identity_resolver,
                pass_object_upsert,
                claims_signer,
            }),
        }
    }

    /// Every issuance fails with `error` before reaching any collaborator
    pub(crate) fn misconfigured(error: ConfigValidationError) -> Self {
        Self {
            pipeline: Err(error),
        }
    }
}
