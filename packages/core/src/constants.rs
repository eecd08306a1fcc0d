use std::env;
use std::path::PathBuf;

/// Name of the SQLite database file inside the Tagdeck directory
pub const DATABASE_FILE_NAME: &str = "tagdeck.db";

/// Get the path to the Tagdeck directory (~/.tagdeck)
pub fn tagdeck_dir() -> PathBuf {
    // First try HOME environment variable (useful for tests)
    if let Ok(home) = env::var(crate::env::HOME) {
        PathBuf::from(home).join(".tagdeck")
    } else {
        // Fall back to dirs crate, then the working directory
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".tagdeck")
    }
}

/// Get the path to the default database file (~/.tagdeck/tagdeck.db)
pub fn database_file() -> PathBuf {
    tagdeck_dir().join(DATABASE_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_file_lives_in_tagdeck_dir() {
        let file = database_file();
        assert_eq!(file.file_name().unwrap(), DATABASE_FILE_NAME);
        assert_eq!(file.parent().unwrap(), tagdeck_dir());
        assert!(tagdeck_dir().ends_with(".tagdeck"));
    }
}
