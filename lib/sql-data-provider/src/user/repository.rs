use one_dto_mapper::convert_inner;
use pass_core::model::user::User;
use pass_core::repository::error::DataLayerError;
use pass_core::repository::user_repository::UserRepository;
use sea_orm::EntityTrait;
use shared_types::UserId;

use super::UserProvider;
use crate::entity::user;
use crate::mapper::to_data_layer_error;

#[async_trait::async_trait]
impl UserRepository for UserProvider {
    async fn create_user(&self, request: User) -> Result<UserId, DataLayerError> {
        let result = user::Entity::insert(user::ActiveModel::from(request))
            .exec(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(result.last_insert_id)
    }

    async fn get_user(&self, id: &UserId) -> Result<Option<User>, DataLayerError> {
        let user = user::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(convert_inner(user))
    }
}
