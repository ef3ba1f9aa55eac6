//! Tests for schema initialization
//!
//! - Creating the album table is idempotent
//! - Seeding swallows failures instead of aborting startup

use albums_common::db::{connect_in_memory, connect_lazy, count_albums, ensure_schema, ping, seed};

#[tokio::test]
async fn test_schema_creation_is_idempotent() {
    let pool = connect_in_memory().await.unwrap();

    ensure_schema(&pool).await.expect("First initialization failed");
    ensure_schema(&pool).await.expect("Second initialization failed");

    let count = count_albums(&pool).await.unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn test_schema_on_disk_store() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("albums.db");
    let url = format!("sqlite://{}?mode=rwc", db_path.display());

    let pool = connect_lazy(&url).unwrap();
    assert!(seed(&pool).await);
    assert!(db_path.exists(), "Database file was not created");

    // Second process start against the same store
    let pool2 = connect_lazy(&url).unwrap();
    assert!(seed(&pool2).await);
}

#[tokio::test]
async fn test_seed_swallows_unreachable_store() {
    // Read-only open of a file that does not exist fails on first use
    let url = "sqlite:///nonexistent-dir/albums.db?mode=ro";

    let pool = connect_lazy(url).expect("Pool construction should not touch the store");
    assert!(!seed(&pool).await);
}

#[tokio::test]
async fn test_ping_reports_reachability() {
    let pool = connect_in_memory().await.unwrap();
    assert!(ping(&pool).await.is_ok());

    let unreachable = connect_lazy("sqlite:///nonexistent-dir/albums.db?mode=ro").unwrap();
    assert!(ping(&unreachable).await.is_err());
}
