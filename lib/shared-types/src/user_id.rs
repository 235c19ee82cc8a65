use serde::{Deserialize, Serialize};

#[cfg(feature = "sea-orm")]
use crate::macros::impls_for_seaorm_newtype;
use crate::macros::impls_for_string_newtype;

/// Opaque subject identifier of a user, as carried in the session token
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema), schema(value_type = String))]
#[serde(transparent)]
pub struct UserId(String);

impls_for_string_newtype!(UserId);

#[cfg(feature = "sea-orm")]
impls_for_seaorm_newtype!(UserId);
