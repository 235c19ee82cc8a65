use std::sync::Arc;

use migration::{Migrator, MigratorTrait};
use pass_core::repository::DataRepository;
use pass_core::repository::error::DataLayerError;
use pass_core::repository::user_repository::UserRepository;
use sea_orm::{ConnectOptions, DatabaseConnection};

use crate::mapper::to_data_layer_error;
use crate::user::UserProvider;

mod entity;
mod mapper;
pub mod user;


pub type DbConn = DatabaseConnection;

/// Connects to the database and brings the schema up to date
pub async fn db_conn(database_url: impl Into<String>) -> Result<DbConn, DataLayerError> {
    let mut options = ConnectOptions::new(database_url);
    options.sqlx_logging(false);

    let db = sea_orm::Database::connect(options)
        .await
        .map_err(to_data_layer_error)?;

    Migrator::up(&db, None).await.map_err(to_data_layer_error)?;
    tracing::debug!("Database migrations applied");

    Ok(db)
}

#[derive(Clone)]
pub struct DataLayer {
    // Used for tests for now
    #[allow(unused)]
    db: DatabaseConnection,
    user_repository: Arc<dyn UserRepository>,
}

impl DataLayer {
    pub fn build(db: DbConn) -> Self {
        Self {
            user_repository: Arc::new(UserProvider { db: db.clone() }),
            db,
        }
    }
}

impl DataRepository for DataLayer {
    fn get_user_repository(&self) -> Arc<dyn UserRepository> {
        self.user_repository.clone()
    }
}
