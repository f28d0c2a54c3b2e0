//! Database wrapper integration tests: connecting and managing migrations.

use user_service_lib::infra::Database;

#[tokio::test]
async fn test_connect_applies_migrations() {
    let db = Database::connect("sqlite::memory:").await.unwrap();

    let status = db.migration_status().await.unwrap();
    assert!(!status.is_empty());
    assert!(status.iter().all(|(_, applied)| *applied));
}

#[tokio::test]
async fn test_connect_without_migrations_then_apply() {
    let db = Database::connect_without_migrations("sqlite::memory:")
        .await
        .unwrap();

    db.run_migrations().await.unwrap();
    let status = db.migration_status().await.unwrap();
    assert!(status.iter().all(|(_, applied)| *applied));
}

#[tokio::test]
async fn test_rollback_and_reapply() {
    let db = Database::connect("sqlite::memory:").await.unwrap();

    db.rollback_migration().await.unwrap();
    let status = db.migration_status().await.unwrap();
    assert!(status.iter().all(|(_, applied)| !*applied));

    db.run_migrations().await.unwrap();
    let status = db.migration_status().await.unwrap();
    assert!(status.iter().all(|(_, applied)| *applied));
}

#[tokio::test]
async fn test_fresh_migrations_reset_schema() {
    let db = Database::connect("sqlite::memory:").await.unwrap();

    db.fresh_migrations().await.unwrap();
    let status = db.migration_status().await.unwrap();
    assert!(status.iter().all(|(_, applied)| *applied));
}
