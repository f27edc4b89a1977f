use anyhow::Result;
use inquire::Text;
use inquire::ui::{Attributes, Color, RenderConfig, StyleSheet, Styled};

use super::command::{Input, SlashCommand, SlashCommandCompleter, parse_input};
use super::controller::ChatController;
use super::ui;
use crate::backend::BackendClient;
use crate::i18n::LanguageCode;
use crate::ui::{TerminalRenderer, Theme, answered};

/// Configuration for a chat session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Where messages are sent (for display).
    pub endpoint: String,
    /// Initial interface language.
    pub language: LanguageCode,
    /// Initial theme.
    pub theme: Theme,
}

impl SessionConfig {
    pub const fn new(endpoint: String, language: LanguageCode, theme: Theme) -> Self {
        Self {
            endpoint,
            language,
            theme,
        }
    }
}

/// An interactive chat session.
///
/// Reads lines from the terminal and drives a [`ChatController`]. Each reply is
/// awaited before the next line is read.
pub struct ChatSession<B> {
    config: SessionConfig,
    controller: ChatController<B, TerminalRenderer>,
}

impl<B: BackendClient> ChatSession<B> {
    /// Creates a new chat session talking to `backend`.
    pub fn new(config: SessionConfig, backend: B) -> Self {
        let controller = ChatController::new(
            backend,
            TerminalRenderer::new(),
            config.language,
            config.theme,
        );
        Self { config, controller }
    }

    pub async fn run(&mut self) -> Result<()> {
        self.controller.start();

        let prompt_style = Styled::new("❯")
            .with_fg(Color::LightBlue)
            .with_attr(Attributes::BOLD);
        let mut render_config = RenderConfig::default()
            .with_prompt_prefix(prompt_style)
            .with_answered_prompt_prefix(prompt_style);

        // Non-highlighted suggestions: gray
        render_config.option = StyleSheet::new().with_fg(Color::Grey);
        // Highlighted suggestion: purple
        render_config.selected_option = Some(StyleSheet::new().with_fg(Color::DarkMagenta));

        loop {
            let strings = self.controller.state().language().strings();
            let help = format!(
                "Enter to {}, /help for commands, Ctrl+C to quit",
                strings.send.to_lowercase()
            );

            let input = answered(
                Text::new("")
                    .with_render_config(render_config)
                    .with_placeholder(strings.input_placeholder)
                    .with_autocomplete(SlashCommandCompleter)
                    .with_help_message(&help)
                    .prompt(),
            )?;

            let Some(line) = input else {
                println!(); // Clear line before goodbye message
                break;
            };

            match parse_input(&line) {
                Input::Empty => {}
                Input::Command(cmd) => {
                    if !self.handle_command(cmd) {
                        break;
                    }
                }
                Input::Text(text) => {
                    self.controller.exchange(&text).await;
                }
            }
        }

        ui::print_goodbye(self.controller.state().language().strings());
        Ok(())
    }

    fn handle_command(&mut self, cmd: SlashCommand) -> bool {
        match cmd {
            SlashCommand::Config => {
                let state = self.controller.state();
                ui::print_config(&self.config, state.language(), state.theme());
            }
            SlashCommand::Help => {
                ui::print_help(self.controller.state().language().strings());
            }
            SlashCommand::New => self.controller.reset_conversation(),
            SlashCommand::Language(code) => self.set_language(code.as_deref()),
            SlashCommand::Theme(name) => self.set_theme(name.as_deref()),
            SlashCommand::Quit => return false,
            SlashCommand::Unknown(cmd) => {
                ui::print_error(&format!("Unknown command: /{cmd}"));
            }
        }
        true
    }

    fn set_language(&mut self, value: Option<&str>) {
        let Some(code) = value else {
            ui::print_error("Usage: /lang <code>  (en, hi)");
            return;
        };

        match code.parse::<LanguageCode>() {
            Ok(language) => self.controller.set_language(language),
            Err(e) => ui::print_error(&e.to_string()),
        }
    }

    fn set_theme(&mut self, value: Option<&str>) {
        let theme = match value {
            None => self.controller.toggle_theme(),
            Some(name) => match name.parse::<Theme>() {
                Ok(theme) => {
                    self.controller.set_theme(theme);
                    theme
                }
                Err(e) => {
                    ui::print_error(&e.to_string());
                    return;
                }
            },
        };

        ui::print_success(&format!("Theme set to {theme} {}", theme.icon()));
    }
}
