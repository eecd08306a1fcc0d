// ABOUTME: UserService seam consumed by the tags package
// ABOUTME: Exposes the read path for a user's added tags

use async_trait::async_trait;
use tagdeck_storage::StorageResult;

use crate::types::AddedTags;

/// Read access to the tags a user has added to their collection
#[async_trait]
pub trait UserService: Send + Sync {
    /// Snapshot of the user's associated tags. Unknown users have no tags.
    async fn get_added_tags(&self, uid: &str) -> StorageResult<AddedTags>;
}
