//! Terminal implementation of the chat renderer.

use std::io::{self, IsTerminal, Stdout, Write};

use super::{Spinner, Style, Theme};
use crate::chat::{Renderer, Sender};
use crate::i18n::LanguageCode;

const PRODUCT_NAME: &str = "Neo Support";
const VERSION: &str = env!("CARGO_PKG_VERSION");

// Erase screen and move the cursor home.
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Prints chat bubbles to `out` (stdout by default) and the typing indicator
/// to stderr.
///
/// Write errors are ignored: a closed stdout must not take the conversation
/// down with it.
pub struct TerminalRenderer<W = Stdout> {
    out: W,
    /// Whether `clear_messages` may erase the screen.
    interactive: bool,
    language: LanguageCode,
    theme: Theme,
    typing: Option<Spinner>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        let stdout = io::stdout();
        let interactive = stdout.is_terminal();
        Self::with_writer(stdout, interactive)
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalRenderer<W> {
    /// Renders into `out`. Without `interactive`, clearing prints a separator
    /// instead of erasing the screen.
    pub const fn with_writer(out: W, interactive: bool) -> Self {
        Self {
            out,
            interactive,
            language: LanguageCode::En,
            theme: Theme::Light,
            typing: None,
        }
    }

    /// Header and welcome message. Always shown above the conversation.
    fn print_banner(&mut self) {
        let _ = writeln!(
            self.out,
            "{} {}\n",
            Style::header(PRODUCT_NAME),
            Style::version(format!("v{VERSION}"))
        );
        self.print_bubble(self.language.strings().welcome, Sender::Bot);
    }

    fn print_bubble(&mut self, text: &str, sender: Sender) {
        let _ = match sender {
            Sender::User => writeln!(self.out, "{} {text}\n", self.theme.user_label("You ❯")),
            Sender::Bot => writeln!(
                self.out,
                "{} {}\n",
                self.theme.bot_label("Neo ❯"),
                self.theme.bot_text(text)
            ),
        };
        let _ = self.out.flush();
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn append_message(&mut self, text: &str, sender: Sender) {
        self.print_bubble(text, sender);
    }

    fn show_busy_indicator(&mut self) {
        if self.typing.is_none() {
            self.typing = Some(Spinner::typing(&self.theme.bot_label("Neo ❯")));
        }
    }

    fn hide_busy_indicator(&mut self) {
        // Dropping the spinner clears it.
        self.typing = None;
    }

    fn clear_messages(&mut self) {
        let _ = if self.interactive {
            write!(self.out, "{CLEAR_SCREEN}")
        } else {
            writeln!(self.out, "{}", Style::secondary("────────"))
        };
        self.print_banner();
    }

    fn apply_language(&mut self, language: LanguageCode) {
        self.language = language;
        self.print_banner();
    }

    fn apply_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }
}
