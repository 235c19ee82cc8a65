use sea_orm::DatabaseBackend;
use sea_orm_migration::prelude::*;

/// Non-null timestamp column keeping millisecond precision on every backend
pub(crate) fn timestamp_column(manager: &SchemaManager, column: impl IntoIden) -> ColumnDef {
    let column_type = match manager.get_database_backend() {
        DatabaseBackend::MySql => "datetime(3)",
        DatabaseBackend::Postgres => "timestamp(3)",
        DatabaseBackend::Sqlite => "datetime",
    };

    ColumnDef::new(column)
        .custom(Alias::new(column_type))
        .not_null()
        .to_owned()
}
