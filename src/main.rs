use clap::Parser;
use colored::Colorize;

mod alias;
mod cli;
mod config;
mod error;
mod menu;
mod scanner;
mod validation;

use cli::{Cli, Commands};
use config::Config;
use error::AppError;
use scanner::ChromeProfile;

/// Menu entry for returning without selecting
pub const BACK_OPTION: &str = "back";

// Main
fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        println!("{} {}", "error:".red(), err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let config: Config = Config::from_home()?;

    match cli.command {
        Some(Commands::Add { alias_name, profile, url }) =>
            add_alias(&config, &alias_name, &profile, url.as_deref()),
        Some(Commands::List) => list_profiles(&config),
        Some(Commands::Debug) => show_debug_info(&config),
        None => menu::run_menu(&config),
    }
}

/// Builds an alias for the given profile and appends it to the startup file
pub fn add_alias(
    config: &Config,
    alias_name: &str,
    profile: &str,
    url: Option<&str>,
) -> Result<(), AppError> {
    validation::validate_input_alias_name(alias_name)?;
    if let Some(url) = url {
        validation::validate_input_url(url)?;
    }

    let alias_cmd: String = alias::build_alias_command(config, alias_name, profile, url);
    if alias::persist_alias(config, &alias_cmd)? {
        println!("{}", "alias added".green());
        println!("{}", "reload your shell or run 'source ~/.zshrc'".italic());
    } else {
        println!("{}", "alias already exists".yellow());
    }

    Ok(())
}

// Lists profiles with their signed-in emails
pub fn list_profiles(config: &Config) -> Result<(), AppError> {
    let profile_users: Vec<ChromeProfile> = scanner::get_profile_users(config)?;
    display_profiles(&profile_users);
    Ok(())
}

/// Displays a numbered profile-to-email listing, returns false when empty
pub fn display_profiles(profile_users: &[ChromeProfile]) -> bool {
    if profile_users.is_empty() {
        println!("{}", "no Chrome profiles found".red());
        return false;
    }

    println!("{}", "available profiles:".blue());
    for (i, profile) in profile_users.iter().enumerate() {
        println!("{}. {}: {}", i + 1, profile.name, profile.email);
    }
    true
}

// Shows configured paths and raw profile directories
pub fn show_debug_info(config: &Config) -> Result<(), AppError> {
    println!("{}", "configuration:".blue());
    println!("  chrome config: {}", config.chrome_config_path.display());
    println!("  startup file: {}", config.startup_file_path.display());
    println!("  chrome binary: {}", config.chrome_binary);

    println!("{}", "profile directories:".blue());
    let profiles: Vec<String> = scanner::get_chrome_profiles(config)?;
    if profiles.is_empty() {
        println!("  {}", "none found".yellow());
    }
    for profile in profiles {
        println!("  - {}", profile);
    }

    Ok(())
}
