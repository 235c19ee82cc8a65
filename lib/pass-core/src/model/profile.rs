use serde::{Deserialize, Serialize};
use shared_types::UserId;
use strum::{AsRefStr, Display, EnumString};

/// Canonical view of the authenticated caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub id: UserId,
    pub display_name: String,
    pub email: String,
    pub role: Role,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, AsRefStr, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Attendee,
    Hacker,
    Organizer,
    Mentor,
    Sponsor,
    Volunteer,
}

impl Role {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Attendee => "Attendee",
            Self::Hacker => "Hacker",
            Self::Organizer => "Organizer",
            Self::Mentor => "Mentor",
            Self::Sponsor => "Sponsor",
            Self::Volunteer => "Volunteer",
        }
    }
}
