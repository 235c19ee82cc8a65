use one_dto_mapper::{From, Into};
use pass_core::model::user::User;
use sea_orm::entity::prelude::*;
use shared_types::UserId;
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Into)]
#[into(User)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: UserId,
    pub created_date: OffsetDateTime,
    pub last_modified: OffsetDateTime,
    pub name: String,
    pub email: String,
    pub role: UserRole,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, From, Into)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[from(pass_core::model::profile::Role)]
#[into(pass_core::model::profile::Role)]
pub enum UserRole {
    #[sea_orm(string_value = "attendee")]
    Attendee,
    #[sea_orm(string_value = "hacker")]
    Hacker,
    #[sea_orm(string_value = "organizer")]
    Organizer,
    #[sea_orm(string_value = "mentor")]
    Mentor,
    #[sea_orm(string_value = "sponsor")]
    Sponsor,
    #[sea_orm(string_value = "volunteer")]
    Volunteer,
}
