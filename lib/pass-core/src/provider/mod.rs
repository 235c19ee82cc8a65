pub mod access_token;
pub mod http_client;
pub mod session;
pub mod signing_key;
pub mod wallet_objects;
