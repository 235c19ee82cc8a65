pub mod claims_signer;
pub mod identity_resolver;
pub mod pass_object_upsert;
