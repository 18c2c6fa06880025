use colored::Colorize;
use inquire::Text;
use validator::ValidateUrl;

use crate::{error::AppError, BACK_OPTION};

/// Maximum length for an alias name
const MAX_ALIAS_LENGTH: usize = 30;

/// Prompts user for input until valid input is provided
pub fn prompt_until_valid<F>(prompt_message: &str, input_validation: F) -> Result<String, AppError>
where
    F: Fn(&str) -> Result<(), AppError>,
{
    loop {
        let input: String = Text::new(prompt_message).prompt()?;
        match input_validation(&input) {
            Ok(_) => break Ok(input),
            Err(AppError::Validation(msg)) => println!("{}", msg.red()),
            Err(e) => return Err(e),
        }
    }
}

// Validate input helper functions

/// Validates an alias name input (letters, digits and hyphens only)
pub fn validate_input_alias_name(alias_name: &str) -> Result<(), AppError> {
    if alias_name.is_empty() {
        Err(AppError::Validation("alias name cannot be empty".to_string()))
    } else if alias_name.len() > MAX_ALIAS_LENGTH {
        Err(AppError::Validation(format!(
            "alias name too long, max {} characters",
            MAX_ALIAS_LENGTH
        )))
    } else if alias_name == BACK_OPTION {
        Err(AppError::Validation(format!("alias name cannot be '{}'", BACK_OPTION)))
    } else if !alias_name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        Err(AppError::Validation(
            "invalid alias name, use letters, digits and hyphens only".to_string(),
        ))
    } else {
        Ok(())
    }
}

/// Validates a URL input
pub fn validate_input_url(url: &str) -> Result<(), AppError> {
    if url.is_empty() {
        Err(AppError::Validation("URL cannot be empty".to_string()))
    } else if !url.validate_url() {
        Err(AppError::Validation("invalid URL format".to_string()))
    } else {
        Ok(())
    }
}
