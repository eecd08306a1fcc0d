// ABOUTME: TagRepository seam between the tag rules and persistence
// ABOUTME: Tag records, their projection, and writes to the user to tag association

use async_trait::async_trait;
use tagdeck_storage::StorageResult;

use crate::types::{AddTagsInput, Tag, TagCreateInput, TagInfo, TagPage, TagQuery, TagUpdateInput};

/// Persistence for tags and the user to tag association.
///
/// Implementations must enforce name uniqueness and association uniqueness
/// atomically in the store. `TagService` checks both before writing, but the
/// check is not race-free; a violation detected by the store has to come back
/// as `StorageError::DuplicateName`.
#[async_trait]
pub trait TagRepository: Send + Sync {
    async fn get_by_name(&self, name: &str) -> StorageResult<Option<Tag>>;

    async fn create(&self, creator: &str, input: TagCreateInput) -> StorageResult<Tag>;

    async fn find_by_id(&self, id: i64) -> StorageResult<Option<Tag>>;

    async fn find_info_by_id(&self, id: i64) -> StorageResult<Option<TagInfo>>;

    async fn find_with_params(&self, query: &TagQuery) -> StorageResult<TagPage>;

    /// Apply the set fields. Fails with `StorageError::NotFound` for an unknown id.
    async fn update(&self, id: i64, input: TagUpdateInput) -> StorageResult<()>;

    async fn find_many_by_creator(&self, creator: &str) -> StorageResult<Vec<Tag>>;

    /// Associate every id with the user, all or nothing
    async fn add_tags_to_user(&self, uid: &str, input: &AddTagsInput) -> StorageResult<()>;

    async fn is_tag_added(&self, uid: &str, tag_id: i64) -> StorageResult<bool>;

    /// Returns the number of association rows deleted
    async fn remove_tag_from_user(&self, uid: &str, tag_id: i64) -> StorageResult<u64>;
}
