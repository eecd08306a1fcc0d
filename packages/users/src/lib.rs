// ABOUTME: User management for Tagdeck
// ABOUTME: Provides user types, the UserService seam, and its SQLite storage

pub mod service;
pub mod storage;
pub mod types;

// Re-export main types
pub use service::UserService;
pub use storage::UserStorage;
pub use types::{AddedTags, TagSummary, User, UserCreateInput};
