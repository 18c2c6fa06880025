use std::{fs, path::Path};

use serde::Deserialize;

use crate::{config::Config, error::AppError};

/// Prefix Chrome gives secondary profile directories
const PROFILE_DIR_PREFIX: &str = "Profile ";
/// Per-profile JSON file holding account metadata
const PREFERENCES_FILE: &str = "Preferences";

/// A Chrome profile mapped to its signed-in account email
#[derive(Debug, Clone, PartialEq)]
pub struct ChromeProfile {
    /// Profile directory name (e.g. "Profile 1")
    pub name: String,
    /// Email of the signed-in account
    pub email: String,
}

/// Shape of the parts of the Preferences file we read
#[derive(Deserialize)]
struct Preferences {
    #[serde(default)]
    account_info: Vec<AccountEntry>,
}

#[derive(Deserialize)]
struct AccountEntry {
    email: Option<String>,
}

/// Lists Chrome profile directory names under the configured config root
///
/// A missing config root is not an error and yields an empty list. Order
/// follows filesystem enumeration and is not stable across platforms.
pub fn get_chrome_profiles(config: &Config) -> Result<Vec<String>, AppError> {
    let mut profiles: Vec<String> = Vec::new();

    if !config.chrome_config_path.exists() {
        return Ok(profiles);
    }

    for entry in fs::read_dir(&config.chrome_config_path)? {
        let entry = entry?;
        let name: String = entry.file_name().to_string_lossy().into_owned();
        if entry.path().is_dir() && name.starts_with(PROFILE_DIR_PREFIX) {
            profiles.push(name);
        }
    }

    Ok(profiles)
}

/// Extracts the signed-in account email from a Preferences file
///
/// Returns `None` when the file is missing, is not valid JSON, or carries
/// no account entry. Unreadable profile data never aborts a scan.
pub fn extract_user_email(preferences_path: &Path) -> Option<String> {
    let contents: String = fs::read_to_string(preferences_path).ok()?;
    let preferences: Preferences = serde_json::from_str(&contents).ok()?;
    preferences.account_info.into_iter().next()?.email
}

/// Maps Chrome profiles to their signed-in account emails
///
/// Profiles without a Preferences file or without a resolvable email are
/// excluded; they still show up in `get_chrome_profiles`.
pub fn get_profile_users(config: &Config) -> Result<Vec<ChromeProfile>, AppError> {
    let mut profile_users: Vec<ChromeProfile> = Vec::new();

    for profile in get_chrome_profiles(config)? {
        let preferences_path = config.chrome_config_path.join(&profile).join(PREFERENCES_FILE);
        if !preferences_path.exists() {
            continue;
        }
        if let Some(email) = extract_user_email(&preferences_path) {
            profile_users.push(ChromeProfile { name: profile, email });
        }
    }

    Ok(profile_users)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn test_config(chrome_config_path: PathBuf) -> Config {
        Config {
            chrome_config_path,
            startup_file_path: PathBuf::from("/dev/null"),
            chrome_binary: "google-chrome".to_string(),
        }
    }

    fn write_preferences(config: &Config, profile: &str, contents: &str) {
        let profile_dir = config.chrome_config_path.join(profile);
        fs::create_dir_all(&profile_dir).unwrap();
        fs::write(profile_dir.join(PREFERENCES_FILE), contents).unwrap();
    }

    #[test]
    fn missing_config_root_yields_no_profiles() {
        let config = test_config(PathBuf::from("/nonexistent/google-chrome"));
        assert!(get_chrome_profiles(&config).unwrap().is_empty());
        assert!(get_profile_users(&config).unwrap().is_empty());
    }

    #[test]
    fn empty_config_root_yields_no_profiles() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path().to_path_buf());
        assert!(get_chrome_profiles(&config).unwrap().is_empty());
        assert!(get_profile_users(&config).unwrap().is_empty());
    }

    #[test]
    fn only_prefixed_directories_are_listed() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path().to_path_buf());
        fs::create_dir(dir.path().join("Profile 1")).unwrap();
        fs::create_dir(dir.path().join("Default")).unwrap();
        fs::create_dir(dir.path().join("Crash Reports")).unwrap();
        fs::write(dir.path().join("Profile 2"), "a file, not a directory").unwrap();

        let profiles = get_chrome_profiles(&config).unwrap();
        assert_eq!(profiles, vec!["Profile 1".to_string()]);
    }

    #[test]
    fn profile_with_signed_in_account_maps_to_email() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path().to_path_buf());
        write_preferences(&config, "Profile 1", r#"{"account_info":[{"email":"a@b.com"}]}"#);

        let users = get_profile_users(&config).unwrap();
        assert_eq!(
            users,
            vec![ChromeProfile { name: "Profile 1".to_string(), email: "a@b.com".to_string() }]
        );
    }

    #[test]
    fn empty_account_info_excludes_profile() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path().to_path_buf());
        write_preferences(&config, "Profile 1", r#"{"account_info":[]}"#);

        assert!(get_profile_users(&config).unwrap().is_empty());
    }

    #[test]
    fn empty_json_object_excludes_profile() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path().to_path_buf());
        write_preferences(&config, "Profile 1", "{}");

        assert!(get_profile_users(&config).unwrap().is_empty());
    }

    #[test]
    fn invalid_json_excludes_profile() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path().to_path_buf());
        write_preferences(&config, "Profile 1", "not json at all");

        assert!(get_profile_users(&config).unwrap().is_empty());
    }

    #[test]
    fn profile_without_preferences_is_listed_but_not_mapped() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path().to_path_buf());
        fs::create_dir(dir.path().join("Profile 7")).unwrap();

        assert_eq!(get_chrome_profiles(&config).unwrap(), vec!["Profile 7".to_string()]);
        assert!(get_profile_users(&config).unwrap().is_empty());
    }

    #[test]
    fn first_account_entry_wins() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path().to_path_buf());
        write_preferences(
            &config,
            "Profile 1",
            r#"{"account_info":[{"email":"first@b.com"},{"email":"second@b.com"}]}"#,
        );

        let users = get_profile_users(&config).unwrap();
        assert_eq!(users[0].email, "first@b.com");
    }

    #[test]
    fn account_entry_without_email_excludes_profile() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path().to_path_buf());
        write_preferences(&config, "Profile 1", r#"{"account_info":[{"full_name":"A B"}]}"#);

        assert!(get_profile_users(&config).unwrap().is_empty());
    }
}
