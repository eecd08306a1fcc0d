// ABOUTME: Tag management for Tagdeck
// ABOUTME: Tag types, the repository seam and its SQLite storage, and the TagService rules

pub mod error;
pub mod repository;
pub mod service;
pub mod storage;
pub mod types;

// Re-export main types
pub use error::{ErrorKind, TagServiceError, TagServiceResult};
pub use repository::TagRepository;
pub use service::TagService;
pub use storage::TagStorage;
pub use types::{
    AddTagsInput, Tag, TagCreateInput, TagCreator, TagInfo, TagPage, TagPageMeta, TagQuery,
    TagUpdateInput,
};

// Association snapshot types are owned by the users package
pub use tagdeck_users::{AddedTags, TagSummary, UserService};
