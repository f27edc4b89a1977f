//! Configure command handler for editing default settings.

use anyhow::Result;
use inquire::{Select, Text};

use crate::backend::{DEFAULT_ENDPOINT, parse_endpoint};
use crate::config::{ConfigFile, ConfigManager, NeochatConfig};
use crate::i18n::LanguageCode;
use crate::ui::{Style, Theme, answered};

/// Runs the configure command.
///
/// With `show`, prints the saved defaults. Otherwise asks for the default
/// endpoint, language and theme and saves them.
pub fn run_configure(show: bool) -> Result<()> {
    let manager = ConfigManager::new()?;
    let mut config = manager.load_or_default()?;

    print_current_defaults(&config);
    if show {
        return Ok(());
    }

    let Some(endpoint) = prompt_endpoint(config.neochat.endpoint.as_deref())? else {
        cancelled();
        return Ok(());
    };
    let Some(language) = select_language(config.neochat.language.as_deref())? else {
        cancelled();
        return Ok(());
    };
    let Some(theme) = select_theme(config.neochat.theme.as_deref())? else {
        cancelled();
        return Ok(());
    };

    config.neochat = NeochatConfig {
        endpoint: Some(endpoint),
        language: Some(language.code().to_string()),
        theme: Some(theme.name().to_string()),
    };

    manager.save(&config)?;

    println!();
    println!(
        "{} Configuration saved to {}",
        Style::success("✓"),
        Style::secondary(manager.config_path().display())
    );

    Ok(())
}

/// Leaves the wizard without saving; the newline clears the prompt line.
fn cancelled() {
    println!();
}

fn print_current_defaults(config: &ConfigFile) {
    let not_set = || Style::secondary("(not set)");

    println!("{}", Style::header("Current defaults"));
    println!(
        "  {}  {}",
        Style::label("endpoint"),
        config
            .neochat
            .endpoint
            .as_deref()
            .map_or_else(not_set, Style::value)
    );
    println!(
        "  {}  {}",
        Style::label("language"),
        config
            .neochat
            .language
            .as_deref()
            .map_or_else(not_set, Style::value)
    );
    println!(
        "  {}     {}",
        Style::label("theme"),
        config
            .neochat
            .theme
            .as_deref()
            .map_or_else(not_set, Style::value)
    );
    println!();
}

fn prompt_endpoint(default: Option<&str>) -> Result<Option<String>> {
    let endpoint = Text::new("Default endpoint:")
        .with_default(default.unwrap_or(DEFAULT_ENDPOINT))
        .with_help_message("URL that receives {\"message\": ...} POST requests")
        .with_validator(|input: &str| {
            Ok(match parse_endpoint(input.trim()) {
                Ok(_) => inquire::validator::Validation::Valid,
                Err(e) => inquire::validator::Validation::Invalid(e.to_string().into()),
            })
        })
        .prompt();

    Ok(answered(endpoint)?.map(|endpoint| endpoint.trim().to_string()))
}

fn select_language(default: Option<&str>) -> Result<Option<LanguageCode>> {
    let options: Vec<String> = LanguageCode::ALL
        .iter()
        .map(|lang| format!("{} - {}", lang.code(), lang.name()))
        .collect();

    let default_index = default
        .and_then(|d| LanguageCode::ALL.iter().position(|lang| lang.code() == d))
        .unwrap_or(0);

    let selection = Select::new("Default language:", options)
        .with_starting_cursor(default_index)
        .raw_prompt();

    Ok(answered(selection)?.map(|selection| LanguageCode::ALL[selection.index]))
}

fn select_theme(default: Option<&str>) -> Result<Option<Theme>> {
    let default_index = default
        .and_then(|d| Theme::ALL.iter().position(|theme| theme.name() == d))
        .unwrap_or(0);

    answered(
        Select::new("Default theme:", Theme::ALL.to_vec())
            .with_starting_cursor(default_index)
            .prompt(),
    )
}
