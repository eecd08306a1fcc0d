// ABOUTME: Environment variable name constants
// ABOUTME: Centralized definitions of all environment variable names used across Tagdeck

// Database Configuration
pub const TAGDECK_DB_PATH: &str = "TAGDECK_DB_PATH";
pub const TAGDECK_DB_MAX_CONNECTIONS: &str = "TAGDECK_DB_MAX_CONNECTIONS";
pub const TAGDECK_DB_BUSY_TIMEOUT_SECS: &str = "TAGDECK_DB_BUSY_TIMEOUT_SECS";
pub const TAGDECK_DB_WAL: &str = "TAGDECK_DB_WAL";

// System Environment Variables
pub const HOME: &str = "HOME";
