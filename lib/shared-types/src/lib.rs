//! Identifier newtypes shared between the wallet pass crates

mod macros;
mod pass_ids;
mod user_id;

pub use pass_ids::{ClassId, ObjectId};
pub use user_id::UserId;
