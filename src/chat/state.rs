//! Conversation state owned by the chat controller.

use std::sync::{Arc, Weak};

use crate::i18n::LanguageCode;
use crate::ui::Theme;

/// Who wrote a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

/// One chat message. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    text: String,
    sender: Sender,
}

impl Message {
    pub fn new(text: impl Into<String>, sender: Sender) -> Self {
        Self {
            text: text.into(),
            sender,
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(text, Sender::User)
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self::new(text, Sender::Bot)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub const fn sender(&self) -> Sender {
        self.sender
    }
}

/// Proof that a backend request is outstanding.
///
/// The conversation counts as busy for as long as the ticket (or a clone of
/// it) is alive, so dropping an undelivered reply releases it.
#[derive(Debug, Clone)]
pub(super) struct FlightTicket(Arc<()>);

/// The conversation log plus the interface flags.
///
/// `messages` only ever grows by appending or is cleared as a whole.
/// The state is busy exactly while the ticket of the current request lives.
#[derive(Debug, Clone, Default)]
pub struct ConversationState {
    messages: Vec<Message>,
    flight: Option<Weak<()>>,
    language: LanguageCode,
    theme: Theme,
}

impl ConversationState {
    pub const fn new(language: LanguageCode, theme: Theme) -> Self {
        Self {
            messages: Vec::new(),
            flight: None,
            language,
            theme,
        }
    }

    /// Messages in display order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn is_busy(&self) -> bool {
        self.flight
            .as_ref()
            .is_some_and(|flight| flight.strong_count() > 0)
    }

    pub const fn language(&self) -> LanguageCode {
        self.language
    }

    pub const fn theme(&self) -> Theme {
        self.theme
    }

    pub(super) fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub(super) fn clear(&mut self) {
        self.messages.clear();
    }

    pub(super) fn begin_flight(&mut self) -> FlightTicket {
        let ticket = Arc::new(());
        self.flight = Some(Arc::downgrade(&ticket));
        FlightTicket(ticket)
    }

    pub(super) fn is_current_flight(&self, ticket: &FlightTicket) -> bool {
        self.flight
            .as_ref()
            .is_some_and(|flight| Weak::ptr_eq(flight, &Arc::downgrade(&ticket.0)))
    }

    pub(super) fn end_flight(&mut self) {
        self.flight = None;
    }

    /// Forgets a request whose ticket was dropped without being delivered.
    ///
    /// Returns `true` if there was one.
    pub(super) fn take_abandoned_flight(&mut self) -> bool {
        if self.flight.is_some() && !self.is_busy() {
            self.flight = None;
            return true;
        }
        false
    }

    pub(super) const fn set_language(&mut self, language: LanguageCode) {
        self.language = language;
    }

    pub(super) const fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }
}
