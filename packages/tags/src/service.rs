// ABOUTME: TagService enforcing tag ownership and uniqueness rules
// ABOUTME: Validates preconditions against the collaborators, then performs a single write

use std::sync::Arc;

use tagdeck_storage::StorageError;
use tagdeck_users::{AddedTags, UserService};
use tracing::{error, info, warn};

use crate::error::{ErrorKind, TagServiceError, TagServiceResult};
use crate::repository::TagRepository;
use crate::types::{AddTagsInput, Tag, TagCreateInput, TagInfo, TagPage, TagQuery, TagUpdateInput};

/// Tag lifecycle and the user to tag association.
///
/// Each operation reads what it needs to check its preconditions, then issues
/// at most one mutating call. The checks are not atomic with the write; the
/// repository's store constraints are what actually guarantee uniqueness.
#[derive(Clone)]
pub struct TagService {
    tags: Arc<dyn TagRepository>,
    users: Arc<dyn UserService>,
}

impl TagService {
    pub fn new(tags: Arc<dyn TagRepository>, users: Arc<dyn UserService>) -> Self {
        Self { tags, users }
    }

    /// Create a tag owned by `creator`. Fails with `DuplicateName` if the
    /// name is taken, without writing anything.
    pub async fn create_tag(&self, input: TagCreateInput, creator: &str) -> TagServiceResult<Tag> {
        let existing = self
            .tags
            .get_by_name(&input.name)
            .await
            .map_err(TagServiceError::internal)?;

        if existing.is_some() {
            warn!("Rejected tag creation, name already taken: {}", input.name);
            return Err(ErrorKind::DuplicateName.into());
        }

        match self.tags.create(creator, input).await {
            Ok(tag) => {
                info!("Created tag {} ({}) for {}", tag.id, tag.name, creator);
                Ok(tag)
            }
            // Lost a race against a concurrent create
            Err(StorageError::DuplicateName(name)) => {
                warn!("Rejected tag creation, store reported duplicate name: {}", name);
                Err(ErrorKind::DuplicateName.into())
            }
            // Unknown creator uid
            Err(e) if e.is_caller_error() => {
                warn!("Rejected tag creation for {}: {}", creator, e);
                Err(ErrorKind::InvalidArguments.into())
            }
            Err(e) => Err(TagServiceError::internal(e)),
        }
    }

    pub async fn get_tag_info_by_id(&self, id: i64) -> TagServiceResult<TagInfo> {
        self.tags
            .find_info_by_id(id)
            .await
            .map_err(TagServiceError::internal)?
            .ok_or_else(|| ErrorKind::NotFound.into())
    }

    pub async fn get_tags_by_query_params(&self, query: &TagQuery) -> TagServiceResult<TagPage> {
        self.tags
            .find_with_params(query)
            .await
            .map_err(TagServiceError::internal)
    }

    /// Update a tag on behalf of `requester`.
    ///
    /// Ownership is checked before anything about the new values, so a
    /// non-owner always gets `InsufficientRights`.
    pub async fn change_tag(
        &self,
        id: i64,
        input: TagUpdateInput,
        requester: &str,
    ) -> TagServiceResult<TagInfo> {
        let tag = self
            .tags
            .find_by_id(id)
            .await
            .map_err(TagServiceError::internal)?
            .ok_or_else(|| TagServiceError::from(ErrorKind::NotFound))?;

        if tag.creator != requester {
            warn!("User {} tried to change tag {} owned by {}", requester, id, tag.creator);
            return Err(ErrorKind::InsufficientRights.into());
        }

        if let Some(name) = &input.name {
            let holder = self
                .tags
                .get_by_name(name)
                .await
                .map_err(TagServiceError::internal)?;

            if holder.is_some_and(|other| other.id != id) {
                warn!("Rejected rename of tag {}, name already taken: {}", id, name);
                return Err(ErrorKind::DuplicateName.into());
            }
        }

        match self.tags.update(id, input).await {
            Ok(()) => {}
            Err(StorageError::DuplicateName(_)) => return Err(ErrorKind::DuplicateName.into()),
            Err(StorageError::NotFound) => return Err(ErrorKind::NotFound.into()),
            Err(e) => return Err(TagServiceError::internal(e)),
        }

        info!("Updated tag {} for {}", id, requester);
        self.get_tag_info_by_id(id).await
    }

    /// Tags created by `uid`, regardless of what the user has added
    pub async fn get_user_tags(&self, uid: &str) -> TagServiceResult<Vec<Tag>> {
        self.tags
            .find_many_by_creator(uid)
            .await
            .map_err(TagServiceError::internal)
    }

    /// Add every id in `input` to the user's collection, or none of them.
    ///
    /// Ids already in the collection fail the whole request with
    /// `AlreadyAdded` before any write. Ids the store rejects (unknown tags,
    /// repeats within the request) fail with `InvalidArguments`.
    pub async fn add_tags_by_ids(&self, uid: &str, input: AddTagsInput) -> TagServiceResult<AddedTags> {
        let current = self.added_tags(uid).await?;

        if let Some(&duplicate) = input.tags.iter().find(|&&id| current.contains(id)) {
            warn!("Tag {} is already added to user {}", duplicate, uid);
            return Err(TagServiceError::with_message(
                ErrorKind::AlreadyAdded,
                format!("Tag {} is already added to this user", duplicate),
            ));
        }

        match self.tags.add_tags_to_user(uid, &input).await {
            Ok(()) => {}
            Err(e) if e.is_caller_error() => {
                warn!("Rejected tags {:?} for user {}: {}", input.tags, uid, e);
                return Err(ErrorKind::InvalidArguments.into());
            }
            Err(e) => return Err(TagServiceError::internal(e)),
        }

        info!("Added tags {:?} to user {}", input.tags, uid);
        self.added_tags(uid).await
    }

    /// Remove one tag from the user's collection. Fails with
    /// `AlreadyRemoved` when the association does not exist.
    pub async fn remove_added_tag_by_id(&self, uid: &str, id: i64) -> TagServiceResult<AddedTags> {
        let is_added = self
            .tags
            .is_tag_added(uid, id)
            .await
            .map_err(TagServiceError::internal)?;

        if !is_added {
            warn!("Tag {} is not added to user {}", id, uid);
            return Err(ErrorKind::AlreadyRemoved.into());
        }

        let removed = self
            .tags
            .remove_tag_from_user(uid, id)
            .await
            .map_err(TagServiceError::internal)?;

        if removed != 1 {
            error!(
                "Removing tag {} from user {} affected {} rows, expected 1",
                id, uid, removed
            );
            return Err(ErrorKind::Internal.into());
        }

        info!("Removed tag {} from user {}", id, uid);
        self.added_tags(uid).await
    }

    async fn added_tags(&self, uid: &str) -> TagServiceResult<AddedTags> {
        self.users
            .get_added_tags(uid)
            .await
            .map_err(TagServiceError::internal)
    }
}
