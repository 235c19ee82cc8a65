use std::sync::Arc;

use config::ConfigValidationError;
use config::core_config::CoreConfig;
use config::validator::{
    validate_issuer_config, validate_session_config, validate_wallet_api_config,
};
use proto::claims_signer::signer::SaveToWalletClaimsSigner;
use proto::identity_resolver::resolver::SessionIdentityResolver;
use proto::pass_object_upsert::upserter::PassObjectUpserter;
use provider::access_token::ServiceAccountTokenProvider;
use provider::http_client::HttpClient;
use provider::session::JwtSessionValidator;
use provider::signing_key::ServiceAccountKey;
use provider::wallet_objects::http_client::HTTPWalletObjectsClient;
use repository::DataRepository;
use service::pass_issuance::PassIssuanceService;
use util::clock::{Clock, DefaultClock};

pub mod config;
pub mod error;
pub mod model;
pub mod proto;
pub mod provider;
pub mod repository;
pub mod service;
pub mod util;


#[derive(Clone)]
pub struct PassCore {
    pub pass_issuance_service: PassIssuanceService,
}

impl PassCore {
    /// Wires the issuance pipeline.
    ///
    /// Invalid configuration does not prevent startup: the service is built in a
    /// failing state and reports `CONFIGURATION_ERROR` for every request.
    pub fn new(
        config: CoreConfig,
        data_repository: Arc<dyn DataRepository>,
        http_client: Arc<dyn HttpClient>,
        clock: Option<Arc<dyn Clock>>,
    ) -> Self {
        let clock = clock.unwrap_or_else(|| Arc::new(DefaultClock));

        let pass_issuance_service =
            match Self::build_issuance_service(config, data_repository, http_client, clock) {
                Ok(service) => service,
                Err(error) => {
                    tracing::error!("Pass issuance is misconfigured: {error}");
                    PassIssuanceService::misconfigured(error)
                }
            };

        Self {
            pass_issuance_service,
        }
    }

    fn build_issuance_service(
        config: CoreConfig,
        data_repository: Arc<dyn DataRepository>,
        http_client: Arc<dyn HttpClient>,
        clock: Arc<dyn Clock>,
    ) -> Result<PassIssuanceService, ConfigValidationError> {
        let issuer = validate_issuer_config(&config.issuer)?;
        validate_session_config(&config.session)?;
        validate_wallet_api_config(&config.wallet_api)?;

        let signing_key = ServiceAccountKey::load(&issuer.service_account_key_path)
            .map_err(|err| ConfigValidationError::SigningKey(err.to_string()))?;
        if let Some(key_email) = signing_key.client_email() {
            if key_email != issuer.service_account_email {
                tracing::warn!(
                    configured = %issuer.service_account_email,
                    key_file = %key_email,
                    "Service account email differs from the key file"
                );
            }
        }
        let signing_key = Arc::new(signing_key);

        let session_validator = Arc::new(JwtSessionValidator::new(&config.session)?);
        let identity_resolver = Arc::new(SessionIdentityResolver::new(
            session_validator,
            data_repository.get_user_repository(),
        ));

        let access_token_provider = Arc::new(ServiceAccountTokenProvider::new(
            http_client.clone(),
            signing_key.clone(),
            clock.clone(),
            issuer.service_account_email.clone(),
            config.wallet_api.scope,
            config.wallet_api.token_uri.to_string(),
        ));
        let wallet_objects = Arc::new(HTTPWalletObjectsClient::new(
            config.wallet_api.base_url,
            http_client,
            access_token_provider,
        ));
        let pass_object_upsert = Arc::new(PassObjectUpserter::new(
            wallet_objects,
            clock,
            issuer.class,
            config.pass,
        ));

        let claims_signer = Arc::new(SaveToWalletClaimsSigner::new(
            signing_key,
            issuer.service_account_email,
            issuer.origins,
            issuer.save_url_base,
        ));

        Ok(PassIssuanceService::new(
            identity_resolver,
            pass_object_upsert,
            claims_signer,
        ))
    }
}
