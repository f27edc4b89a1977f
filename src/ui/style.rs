//! Consistent styling utilities for CLI output.
//!
//! Provides color and formatting helpers using owo-colors. Every helper
//! falls back to plain text when colors are disabled.

use owo_colors::OwoColorize;
use std::fmt::Display;

use crate::output;

/// Applies `paint` unless colors are disabled.
pub(super) fn styled<T: Display>(text: T, paint: impl FnOnce(&T) -> String) -> String {
    if output::is_no_color() {
        text.to_string()
    } else {
        paint(&text)
    }
}

/// Styles for different semantic elements.
pub struct Style;

impl Style {
    /// Style for section headers (e.g., "Configuration", "Available commands")
    pub fn header<T: Display>(text: T) -> String {
        styled(text, |t| t.bold().to_string())
    }

    /// Style for labels/keys (e.g., "endpoint", "language")
    pub fn label<T: Display>(text: T) -> String {
        styled(text, |t| t.dimmed().to_string())
    }

    /// Style for primary values
    pub fn value<T: Display>(text: T) -> String {
        styled(text, |t| t.cyan().to_string())
    }

    /// Style for secondary/supplementary info (e.g., endpoints, descriptions)
    pub fn secondary<T: Display>(text: T) -> String {
        styled(text, |t| t.dimmed().to_string())
    }

    pub fn success<T: Display>(text: T) -> String {
        styled(text, |t| t.green().to_string())
    }

    pub fn error<T: Display>(text: T) -> String {
        styled(text, |t| t.red().bold().to_string())
    }

    /// Style for commands (e.g., "/new", "/help")
    pub fn command<T: Display>(text: T) -> String {
        styled(text, |t| t.green().to_string())
    }

    /// Style for language codes
    pub fn code<T: Display>(text: T) -> String {
        styled(text, |t| t.yellow().to_string())
    }

    pub fn version<T: Display>(text: T) -> String {
        styled(text, |t| t.dimmed().to_string())
    }
}
