//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

/// Default base URL of the InStadium API
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:5000/api/";

/// Environment variable overriding the API base URL
pub const API_BASE_ENV: &str = "STADIUM_API_URL";

/// Directory under the home directory holding the config file
pub const CONFIG_DIR_NAME: &str = ".stadium-view";

/// Config file name inside [`CONFIG_DIR_NAME`]
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Log file written next to the working directory
pub const LOG_FILE_NAME: &str = "stadium-view.log";

/// Maximum number of activity log entries kept in memory
pub const MAX_ACTIVITY: usize = 50;

/// Application name
pub const APP_NAME: &str = "Stadium View";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Element ids of the page
pub mod ids {
    pub const CHORE_NAME: &str = "chore_name";
    pub const CHORE_DESCRIPTION: &str = "chore_description";
    pub const CHORE_NAME_OLD: &str = "chore_name_old";
    pub const ARTIST_NAME_OLD: &str = "artist_name_old";
    pub const ARTIST_NAME: &str = "artist_name";
    pub const ARTIST_UNIQUE: &str = "artist_unique";

    pub const ARTISTS: &str = "artists";
    pub const CHOREOGRAPHIES: &str = "choreographies";
    pub const ERROR: &str = "error";
}
