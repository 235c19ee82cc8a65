use std::sync::Arc;

use shared_types::ObjectId;

use super::mapper::pass_object_request;
use super::{PassObjectUpsert, UpsertError};
use crate::config::core_config::PassTemplateConfig;
use crate::model::pass::{PassClassRef, PassObjectRequest, PassRecord};
use crate::model::profile::Profile;
use crate::provider::wallet_objects::{InsertObjectOutcome, WalletObjectsClient};
use crate::util::clock::Clock;

pub struct PassObjectUpserter {
    wallet_objects: Arc<dyn WalletObjectsClient>,
    clock: Arc<dyn Clock>,
    class: PassClassRef,
    template: PassTemplateConfig,
}

impl PassObjectUpserter {
    pub fn new(
        wallet_objects: Arc<dyn WalletObjectsClient>,
        clock: Arc<dyn Clock>,
        class: PassClassRef,
        template: PassTemplateConfig,
    ) -> Self {
        Self {
            wallet_objects,
            clock,
            class,
            template,
        }
    }
}

enum UpsertState {
    Creating(PassObjectRequest),
    ConflictDetected(ObjectId),
    Fetching(ObjectId),
    Resolved(PassRecord),
}

#[async_trait::async_trait]
impl PassObjectUpsert for PassObjectUpserter {
    async fn upsert(&self, profile: &Profile) -> Result<PassRecord, UpsertError> {
        let object_id = self.class.object_id(&profile.id, self.clock.now_utc());
        let request = pass_object_request(object_id, &self.class, profile, &self.template);

        let mut state = UpsertState::Creating(request);
        loop {
            state = match state {
                UpsertState::Creating(request) => {
                    let object_id = request.id.clone();
                    match self.wallet_objects.insert_object(request).await? {
                        InsertObjectOutcome::Created(record) => UpsertState::Resolved(record),
                        InsertObjectOutcome::AlreadyExists => {
                            UpsertState::ConflictDetected(object_id)
                        }
                    }
                }
                UpsertState::ConflictDetected(object_id) => {
                    tracing::info!(%object_id, "Pass object already exists, fetching it");
                    UpsertState::Fetching(object_id)
                }
                UpsertState::Fetching(object_id) => {
                    match self.wallet_objects.get_object(&object_id).await {
                        Ok(record) => UpsertState::Resolved(record),
                        Err(source) => {
                            return Err(UpsertError::ConflictResolutionFailed {
                                object_id,
                                source,
                            });
                        }
                    }
                }
                UpsertState::Resolved(record) => return Ok(record),
            };
        }
    }
}
