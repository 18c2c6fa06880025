use std::path::PathBuf;

use crate::error::AppError;

/// Chrome config directory inside the home directory
const CHROME_CONFIG_DIR: &str = ".config/google-chrome";
/// Shell startup file aliases are appended to
const STARTUP_FILE: &str = ".zshrc";
/// Binary the generated aliases invoke
const CHROME_BINARY: &str = "google-chrome";

/// Paths and binary name used by the scanner and alias manager.
///
/// Tests construct this directly with temporary directories instead of
/// touching the real user configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory containing Chrome profile subdirectories
    pub chrome_config_path: PathBuf,
    /// Shell startup file aliases are persisted to
    pub startup_file_path: PathBuf,
    /// Name of the Chrome binary used in alias commands
    pub chrome_binary: String,
}

impl Config {
    /// Builds the default configuration rooted at the user's home directory
    pub fn from_home() -> Result<Self, AppError> {
        let home_dir: PathBuf = dirs::home_dir().ok_or_else(|| {
            AppError::Validation("failed to find the home directory".to_string())
        })?;

        Ok(Config {
            chrome_config_path: home_dir.join(CHROME_CONFIG_DIR),
            startup_file_path: home_dir.join(STARTUP_FILE),
            chrome_binary: CHROME_BINARY.to_string(),
        })
    }
}
