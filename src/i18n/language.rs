//! Interface language codes.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::strings::{ENGLISH, HINDI, UiStrings};
use crate::ui::Style;

/// A supported interface language (ISO 639-1 code).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageCode {
    /// English.
    #[default]
    En,
    /// Hindi.
    Hi,
}

impl LanguageCode {
    /// All supported languages, in display order.
    pub const ALL: [Self; 2] = [Self::En, Self::Hi];

    /// The ISO 639-1 code.
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Hi => "hi",
        }
    }

    /// The English name of the language.
    pub const fn name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Hi => "Hindi",
        }
    }

    /// The static string table for this language.
    pub const fn strings(self) -> &'static UiStrings {
        match self {
            Self::En => &ENGLISH,
            Self::Hi => &HINDI,
        }
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for LanguageCode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|lang| lang.code() == s)
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "Invalid language code: '{s}'\n\n\
                     Valid language codes: en, hi\n\
                     Run 'neochat languages' to see all supported codes."
                )
            })
    }
}

/// Prints all supported language codes to stdout.
pub fn print_languages() {
    println!("{}", Style::header("Supported language codes (ISO 639-1)"));
    for lang in LanguageCode::ALL {
        println!(
            "  {:5} {}",
            Style::code(lang.code()),
            Style::secondary(lang.name())
        );
    }
}
