use colored::Colorize;
use inquire::Select;

use crate::{add_alias, config::Config, display_profiles, error::AppError, scanner::{self, ChromeProfile}, show_debug_info, validation::{prompt_until_valid, validate_input_alias_name, validate_input_url}, BACK_OPTION};

/// Runs interactive menu interface
pub fn run_menu(config: &Config) -> Result<(), AppError> {
    loop {
        let actions: Vec<&'static str> = vec![
            "create alias with url",
            "create homepage alias",
            "list profiles",
            "debug info",
            "quit"
        ];

        let action_selected: &'static str = Select::new(&format!("{}", "select action".blue()), actions)
            .prompt()?;

        match action_selected {
            "create alias with url" => menu_create_alias(config, true)?,
            "create homepage alias" => menu_create_alias(config, false)?,
            "list profiles" => {
                let profile_users: Vec<ChromeProfile> = scanner::get_profile_users(config)?;
                display_profiles(&profile_users);
            },
            "debug info" => show_debug_info(config)?,
            "quit" => {
                println!("{}", "quitting".yellow());
                break Ok(());
            },
            _ => unreachable!("unexpected input"),
        }
    }
}

/// Menu for creating a profile alias, with or without a URL
fn menu_create_alias(config: &Config, with_url: bool) -> Result<(), AppError> {
    let profile_users: Vec<ChromeProfile> = scanner::get_profile_users(config)?;
    if !display_profiles(&profile_users) {
        return Ok(());
    }

    let Some(profile) = select_profile(&profile_users)? else {
        return Ok(());
    };

    let alias_name: String = prompt_until_valid(
        &format!("{}", "enter alias name (e.g. work-chrome):".blue()),
        validate_input_alias_name,
    )?;

    let url: Option<String> = if with_url {
        Some(prompt_until_valid(
            &format!("{}", "enter URL (e.g. https://example.com):".blue()),
            validate_input_url,
        )?)
    } else {
        None
    };

    add_alias(config, &alias_name, &profile, url.as_deref())
}

/// Menu for picking a profile; selecting `back` yields None
fn select_profile(profile_users: &[ChromeProfile]) -> Result<Option<String>, AppError> {
    let mut options: Vec<String> = profile_users.iter()
        .map(|profile| format!("{}: {}", profile.name, profile.email))
        .collect();
    options.push(BACK_OPTION.to_string());

    let selected: String = Select::new(&format!("{}", "select profile:".blue()), options)
        .prompt()?;

    if selected == BACK_OPTION {
        return Ok(None);
    }

    Ok(profile_users.iter()
        .find(|profile| format!("{}: {}", profile.name, profile.email) == selected)
        .map(|profile| profile.name.clone()))
}
