use shared_types::UserId;
use time::OffsetDateTime;

use super::profile::Role;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub created_date: OffsetDateTime,
    pub last_modified: OffsetDateTime,
    pub name: String,
    pub email: String,
    pub role: Role,
}
