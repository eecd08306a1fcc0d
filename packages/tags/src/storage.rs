// ABOUTME: Tag storage layer using SQLite
// ABOUTME: Implements TagRepository over the tags and user_tags tables

use async_trait::async_trait;
use sqlx::{Row, SqlitePool};
use tracing::debug;

use tagdeck_storage::{StorageError, StorageResult};

use crate::repository::TagRepository;
use crate::types::{
    AddTagsInput, Tag, TagCreateInput, TagCreator, TagInfo, TagPage, TagPageMeta, TagQuery,
    TagUpdateInput,
};

const TAG_COLUMNS: &str = "id, name, sort_order, creator";

pub struct TagStorage {
    pool: SqlitePool,
}

impl TagStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Convert a joined tag/user row to a TagInfo
    fn row_to_info(row: &sqlx::sqlite::SqliteRow) -> StorageResult<TagInfo> {
        Ok(TagInfo {
            creator: TagCreator {
                nickname: row.try_get("nickname")?,
                uid: row.try_get("uid")?,
            },
            name: row.try_get("name")?,
            sort_order: row.try_get("sort_order")?,
        })
    }
}

#[async_trait]
impl TagRepository for TagStorage {
    async fn get_by_name(&self, name: &str) -> StorageResult<Option<Tag>> {
        debug!("Fetching tag by name: {}", name);

        let tag = sqlx::query_as::<_, Tag>(&format!("SELECT {} FROM tags WHERE name = ?", TAG_COLUMNS))
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        Ok(tag)
    }

    async fn create(&self, creator: &str, input: TagCreateInput) -> StorageResult<Tag> {
        debug!("Creating tag: {} (creator: {})", input.name, creator);

        let tag = sqlx::query_as::<_, Tag>(&format!(
            "INSERT INTO tags (creator, name, sort_order) VALUES (?, ?, ?) RETURNING {}",
            TAG_COLUMNS
        ))
        .bind(creator)
        .bind(&input.name)
        .bind(input.sort_order)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| StorageError::from_sqlx(e, &input.name))?;

        Ok(tag)
    }

    async fn find_by_id(&self, id: i64) -> StorageResult<Option<Tag>> {
        debug!("Fetching tag: {}", id);

        let tag = sqlx::query_as::<_, Tag>(&format!("SELECT {} FROM tags WHERE id = ?", TAG_COLUMNS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        Ok(tag)
    }

    async fn find_info_by_id(&self, id: i64) -> StorageResult<Option<TagInfo>> {
        debug!("Fetching tag info: {}", id);

        let row = sqlx::query(
            r#"
            SELECT t.name, t.sort_order, u.uid, u.nickname
            FROM tags t
            JOIN users u ON u.uid = t.creator
            WHERE t.id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(StorageError::Sqlx)?;

        match row {
            Some(r) => Ok(Some(Self::row_to_info(&r)?)),
            None => Ok(None),
        }
    }

    async fn find_with_params(&self, query: &TagQuery) -> StorageResult<TagPage> {
        let offset = query.offset.unwrap_or(0).max(0);
        // SQLite treats a negative LIMIT as no limit
        let limit = query.length.map(|l| l.max(0)).unwrap_or(-1);

        debug!(
            "Fetching tags (order: {}, offset: {}, limit: {})",
            query.order_clause(),
            offset,
            limit
        );

        let quantity: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tags")
            .fetch_one(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        let sql = format!(
            r#"
            SELECT t.name, t.sort_order, u.uid, u.nickname
            FROM tags t
            JOIN users u ON u.uid = t.creator
            ORDER BY {}
            LIMIT ? OFFSET ?
            "#,
            query.order_clause()
        );

        let rows = sqlx::query(&sql)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        let data = rows
            .iter()
            .map(Self::row_to_info)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(TagPage {
            meta: TagPageMeta {
                offset,
                length: data.len() as i64,
                quantity,
            },
            data,
        })
    }

    async fn update(&self, id: i64, input: TagUpdateInput) -> StorageResult<()> {
        debug!("Updating tag: {}", id);

        if input.is_empty() {
            return match self.find_by_id(id).await? {
                Some(_) => Ok(()),
                None => Err(StorageError::NotFound),
            };
        }

        // Build update query dynamically based on provided fields
        let mut query_parts = Vec::new();

        if input.name.is_some() {
            query_parts.push("name = ?");
        }
        if input.sort_order.is_some() {
            query_parts.push("sort_order = ?");
        }

        let query_str = format!("UPDATE tags SET {} WHERE id = ?", query_parts.join(", "));
        let mut query = sqlx::query(&query_str);

        // Bind parameters in the same order
        let context = input.name.clone().unwrap_or_default();
        if let Some(name) = input.name {
            query = query.bind(name);
        }
        if let Some(sort_order) = input.sort_order {
            query = query.bind(sort_order);
        }

        let result = query
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| StorageError::from_sqlx(e, &context))?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }

    async fn find_many_by_creator(&self, creator: &str) -> StorageResult<Vec<Tag>> {
        debug!("Fetching tags created by: {}", creator);

        let tags = sqlx::query_as::<_, Tag>(&format!(
            "SELECT {} FROM tags WHERE creator = ? ORDER BY id",
            TAG_COLUMNS
        ))
        .bind(creator)
        .fetch_all(&self.pool)
        .await
        .map_err(StorageError::Sqlx)?;

        Ok(tags)
    }

    async fn add_tags_to_user(&self, uid: &str, input: &AddTagsInput) -> StorageResult<()> {
        debug!("Adding tags {:?} to user: {}", input.tags, uid);

        if input.tags.is_empty() {
            return Err(StorageError::InvalidInput("no tag ids given".to_string()));
        }

        let mut tx = self.pool.begin().await.map_err(StorageError::Sqlx)?;

        for &tag_id in &input.tags {
            sqlx::query("INSERT INTO user_tags (uid, tag_id) VALUES (?, ?)")
                .bind(uid)
                .bind(tag_id)
                .execute(&mut *tx)
                .await
                .map_err(|e| StorageError::from_sqlx(e, &format!("tag {}", tag_id)))?;
        }

        tx.commit().await.map_err(StorageError::Sqlx)?;
        Ok(())
    }

    async fn is_tag_added(&self, uid: &str, tag_id: i64) -> StorageResult<bool> {
        debug!("Checking tag {} for user: {}", tag_id, uid);

        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM user_tags WHERE uid = ? AND tag_id = ?",
        )
        .bind(uid)
        .bind(tag_id)
        .fetch_one(&self.pool)
        .await
        .map_err(StorageError::Sqlx)?;

        Ok(count > 0)
    }

    async fn remove_tag_from_user(&self, uid: &str, tag_id: i64) -> StorageResult<u64> {
        debug!("Removing tag {} from user: {}", tag_id, uid);

        let result = sqlx::query("DELETE FROM user_tags WHERE uid = ? AND tag_id = ?")
            .bind(uid)
            .bind(tag_id)
            .execute(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        Ok(result.rows_affected())
    }
}
