pub mod pass;
pub mod profile;
pub mod user;
