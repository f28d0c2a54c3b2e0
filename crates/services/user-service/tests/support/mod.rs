//! Shared test setup: in-memory SQLite database with the schema applied.

use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;

use user_service_lib::infra::Migrator;

/// Connect a fresh in-memory database and run all migrations.
///
/// Every caller gets its own database, so tests stay independent and
/// identifiers start at 1 in each test.
pub async fn setup_db() -> DatabaseConnection {
    let db = sea_orm::Database::connect("sqlite::memory:")
        .await
        .expect("failed to connect to the test database");

    Migrator::up(&db, None)
        .await
        .expect("failed to migrate the test database");

    db
}
