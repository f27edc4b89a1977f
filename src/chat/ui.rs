//! Chat mode UI components.

use crate::i18n::{LanguageCode, UiStrings};
use crate::ui::{Style, Theme};

use super::session::SessionConfig;

pub fn print_goodbye(strings: &UiStrings) {
    println!("{}", Style::success("Goodbye!"));
    println!("{}", Style::secondary(strings.footer));
}

pub fn print_config(config: &SessionConfig, language: LanguageCode, theme: Theme) {
    println!("{}", Style::header("Configuration"));
    println!(
        "  {}   {}",
        Style::label("endpoint"),
        Style::secondary(&config.endpoint)
    );
    println!(
        "  {}   {} {}",
        Style::label("language"),
        Style::value(language),
        Style::secondary(language.name())
    );
    println!(
        "  {}      {} {}",
        Style::label("theme"),
        Style::value(theme),
        theme.icon()
    );
    println!();
}

pub fn print_help(strings: &UiStrings) {
    println!("{}", Style::header(strings.help));
    let rows = [
        ("/new", strings.new_chat),
        ("/lang <code>", "Switch interface language (en, hi)"),
        ("/theme [name]", "Toggle or set the theme (light, dark)"),
        ("/config", "Show current settings"),
        ("/help", "Show this help"),
        ("/quit", "Exit neochat"),
    ];
    for (command, description) in rows {
        println!(
            "  {}  {}",
            Style::command(format!("{command:<14}")),
            Style::secondary(description)
        );
    }
    println!();
}

pub fn print_success(message: &str) {
    println!("{} {message}", Style::success("✓"));
    println!();
}

pub fn print_error(message: &str) {
    eprintln!("{} {message}", Style::error("Error:"));
    eprintln!();
}
