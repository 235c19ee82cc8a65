use std::sync::Arc;

use user_repository::UserRepository;

pub mod error;
pub mod user_repository;

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait DataRepository: Send + Sync {
    fn get_user_repository(&self) -> Arc<dyn UserRepository>;
}
