//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

/// Base URL of the users API
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Path of the users collection, relative to the base URL
pub const USERS_PATH: &str = "users";

/// Default HTTP timeout in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Delay before a detail load resolves
pub const DEFAULT_DETAIL_DELAY_MS: u64 = 500;

/// Message attached to a failed detail load
pub const DETAIL_ERROR_MESSAGE: &str = "Failed to fetch user details. Please try again later.";

/// Directory (under the home directory) holding the config file
pub const CONFIG_DIR_NAME: &str = ".contacts-browser";

/// Config file name inside [`CONFIG_DIR_NAME`]
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Environment variable overriding the config file location
pub const CONFIG_PATH_ENV: &str = "CONTACTS_BROWSER_CONFIG";

/// Default log file, relative to the working directory
pub const DEFAULT_LOG_FILE: &str = "contacts-browser.log";

/// Application name
pub const APP_NAME: &str = "Contacts Browser";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
