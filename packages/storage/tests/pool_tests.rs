// ABOUTME: Integration tests for pool setup and schema migrations
// ABOUTME: Covers file-backed databases, constraint enforcement, and error classification

use sqlx::Row;
use tagdeck_storage::{open_in_memory, open_pool, StorageConfig, StorageError};
use tempfile::TempDir;

#[tokio::test]
async fn test_open_pool_creates_database_file() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("nested").join("tagdeck.db");

    let config = StorageConfig {
        path: db_path.clone(),
        enable_wal: true,
        max_connections: 2,
        busy_timeout_seconds: 5,
    };

    let pool = open_pool(&config).await.unwrap();
    assert!(db_path.exists());

    let row = sqlx::query("SELECT COUNT(*) AS count FROM tags")
        .fetch_one(&pool)
        .await
        .unwrap();
    let count: i64 = row.try_get("count").unwrap();
    assert_eq!(count, 0);

    pool.close().await;

    // Reopening runs migrations again without error
    let pool = open_pool(&config).await.unwrap();
    pool.close().await;
}

#[tokio::test]
async fn test_in_memory_pool_keeps_schema() {
    let pool = open_in_memory().await.unwrap();

    sqlx::query("INSERT INTO users (uid, email, nickname) VALUES ('u1', 'a@example.com', 'alice')")
        .execute(&pool)
        .await
        .unwrap();

    // A second query sees the same database
    let row = sqlx::query("SELECT nickname FROM users WHERE uid = 'u1'")
        .fetch_one(&pool)
        .await
        .unwrap();
    let nickname: String = row.try_get("nickname").unwrap();
    assert_eq!(nickname, "alice");
}

#[tokio::test]
async fn test_unique_tag_name_is_classified() {
    let pool = open_in_memory().await.unwrap();

    sqlx::query("INSERT INTO users (uid, email, nickname) VALUES ('u1', 'a@example.com', 'alice')")
        .execute(&pool)
        .await
        .unwrap();
    sqlx::query("INSERT INTO tags (creator, name, sort_order) VALUES ('u1', 'red', 1)")
        .execute(&pool)
        .await
        .unwrap();

    let err = sqlx::query("INSERT INTO tags (creator, name, sort_order) VALUES ('u1', 'red', 2)")
        .execute(&pool)
        .await
        .unwrap_err();

    match StorageError::from_sqlx(err, "red") {
        StorageError::DuplicateName(name) => assert_eq!(name, "red"),
        other => panic!("Expected DuplicateName, got {:?}", other),
    }
}

#[tokio::test]
async fn test_foreign_keys_are_enforced() {
    let pool = open_in_memory().await.unwrap();

    sqlx::query("INSERT INTO users (uid, email, nickname) VALUES ('u1', 'a@example.com', 'alice')")
        .execute(&pool)
        .await
        .unwrap();

    let err = sqlx::query("INSERT INTO user_tags (uid, tag_id) VALUES ('u1', 42)")
        .execute(&pool)
        .await
        .unwrap_err();

    let classified = StorageError::from_sqlx(err, "tag 42");
    assert!(matches!(classified, StorageError::InvalidInput(_)));
    assert!(classified.is_caller_error());
}
