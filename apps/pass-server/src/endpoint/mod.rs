pub mod misc;
pub mod wallet_pass;
