use shared_types::UserId;

use super::error::DataLayerError;
use crate::model::user::User;

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_user(&self, request: User) -> Result<UserId, DataLayerError>;

    async fn get_user(&self, id: &UserId) -> Result<Option<User>, DataLayerError>;
}
