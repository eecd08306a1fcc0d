// ABOUTME: User storage layer using SQLite
// ABOUTME: Handles user records and reads of the user to tag association

use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::debug;

use tagdeck_storage::{StorageError, StorageResult};

use crate::service::UserService;
use crate::types::{AddedTags, TagSummary, User, UserCreateInput};

pub struct UserStorage {
    pool: SqlitePool,
}

impl UserStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a user with a generated uid
    pub async fn create_user(&self, input: UserCreateInput) -> StorageResult<User> {
        let uid = tagdeck_core::generate_uid();

        debug!("Creating user: {} (nickname: {})", uid, input.nickname);

        sqlx::query("INSERT INTO users (uid, email, nickname) VALUES (?, ?, ?)")
            .bind(&uid)
            .bind(&input.email)
            .bind(&input.nickname)
            .execute(&self.pool)
            .await
            .map_err(|e| StorageError::from_sqlx(e, &input.nickname))?;

        self.get_user(&uid).await?.ok_or(StorageError::NotFound)
    }

    pub async fn get_user(&self, uid: &str) -> StorageResult<Option<User>> {
        debug!("Fetching user: {}", uid);

        let user = sqlx::query_as::<_, User>("SELECT uid, email, nickname FROM users WHERE uid = ?")
            .bind(uid)
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        Ok(user)
    }
}

#[async_trait]
impl UserService for UserStorage {
    async fn get_added_tags(&self, uid: &str) -> StorageResult<AddedTags> {
        debug!("Fetching added tags for user: {}", uid);

        let tags = sqlx::query_as::<_, TagSummary>(
            r#"
            SELECT t.id, t.name, t.sort_order
            FROM user_tags ut
            JOIN tags t ON t.id = ut.tag_id
            WHERE ut.uid = ?
            ORDER BY t.id
            "#,
        )
        .bind(uid)
        .fetch_all(&self.pool)
        .await
        .map_err(StorageError::Sqlx)?;

        Ok(AddedTags { tags })
    }
}
