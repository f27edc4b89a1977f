//! Interface languages and their static string tables.

mod language;
mod strings;

pub use language::{LanguageCode, print_languages};
pub use strings::UiStrings;
