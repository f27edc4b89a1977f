//! Light and dark color palettes for chat bubbles.

use anyhow::Result;
use owo_colors::OwoColorize;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::style::styled;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub const ALL: [Self; 2] = [Self::Light, Self::Dark];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The other theme.
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Icon of the theme toggle while this theme is active.
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Light => "🌙",
            Self::Dark => "☀️",
        }
    }

    pub fn user_label<T: fmt::Display>(self, text: T) -> String {
        match self {
            Self::Light => styled(text, |t| t.blue().bold().to_string()),
            Self::Dark => styled(text, |t| t.bright_cyan().bold().to_string()),
        }
    }

    pub fn bot_label<T: fmt::Display>(self, text: T) -> String {
        match self {
            Self::Light => styled(text, |t| t.magenta().bold().to_string()),
            Self::Dark => styled(text, |t| t.bright_magenta().bold().to_string()),
        }
    }

    pub fn bot_text<T: fmt::Display>(self, text: T) -> String {
        match self {
            Self::Light => styled(text, ToString::to_string),
            Self::Dark => styled(text, |t| t.bright_white().to_string()),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Theme {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|theme| theme.name() == s)
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "Invalid theme: '{s}'\n\n\
                     Valid themes: light, dark"
                )
            })
    }
}
