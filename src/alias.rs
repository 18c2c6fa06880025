use std::{fs, fs::OpenOptions, io::Write};

use crate::{config::Config, error::AppError};

/// Comment line written above each persisted alias
const ALIAS_COMMENT: &str = "# Chrome Profile Alias";

/// Builds a shell alias command launching Chrome with the given profile
///
/// # Arguments
/// * `alias_name` - Name for the new alias
/// * `profile` - Chrome profile directory name
/// * `url` - Optional URL to open
///
/// No shell escaping is performed beyond the literal quoting; callers are
/// responsible for supplying shell-safe values.
pub fn build_alias_command(
    config: &Config,
    alias_name: &str,
    profile: &str,
    url: Option<&str>,
) -> String {
    let mut chrome_cmd: String =
        format!("{} --profile-directory=\"{}\"", config.chrome_binary, profile);
    if let Some(url) = url {
        chrome_cmd.push_str(&format!(" \"{}\"", url));
    }
    format!("alias {}=\"{}\"", alias_name, chrome_cmd)
}

/// Appends an alias command to the shell startup file, skipping duplicates
///
/// Returns `Ok(false)` without writing when the exact command string already
/// occurs in the file. The existence check and the append are two separate
/// operations; concurrent invocations are not coordinated.
pub fn persist_alias(config: &Config, alias_cmd: &str) -> Result<bool, AppError> {
    if config.startup_file_path.exists() {
        let contents: String = fs::read_to_string(&config.startup_file_path)?;
        if contents.contains(alias_cmd) {
            return Ok(false);
        }
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.startup_file_path)?;
    writeln!(file, "\n{}\n{}", ALIAS_COMMENT, alias_cmd)?;

    Ok(true)
}
