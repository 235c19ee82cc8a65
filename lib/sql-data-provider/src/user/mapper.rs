use pass_core::model::user::User;
use sea_orm::Set;

use crate::entity::user;

impl From<User> for user::ActiveModel {
    fn from(value: User) -> Self {
        Self {
            id: Set(value.id),
            created_date: Set(value.created_date),
            last_modified: Set(value.last_modified),
            name: Set(value.name),
            email: Set(value.email),
            role: Set(value.role.into()),
        }
    }
}
