// ABOUTME: Core constants and utilities for Tagdeck
// ABOUTME: Foundational package shared by the storage, users, and tags packages

pub mod constants;
pub mod env;
pub mod utils;

// Re-export constants
pub use constants::{database_file, tagdeck_dir};

// Re-export utilities
pub use utils::generate_uid;
