use serde::{Deserialize, Serialize};

use crate::macros::impls_for_string_newtype;

/// Provider-side pass class identifier: `{issuer_id}.{class_suffix}`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema), schema(value_type = String))]
#[serde(transparent)]
pub struct ClassId(String);

impls_for_string_newtype!(ClassId);

/// Provider-side pass object identifier: `{issuer_id}.{unique_suffix}`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema), schema(value_type = String))]
#[serde(transparent)]
pub struct ObjectId(String);

impls_for_string_newtype!(ObjectId);
