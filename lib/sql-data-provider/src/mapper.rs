use pass_core::repository::error::DataLayerError;
use sea_orm::{DbErr, SqlErr};

pub(crate) fn to_data_layer_error(e: DbErr) -> DataLayerError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => DataLayerError::AlreadyExists,
        Some(_) | None => DataLayerError::Db(e.into()),
    }
}
