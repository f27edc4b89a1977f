//! Interactive chat.
//!
//! [`ChatController`] owns the conversation; [`ChatSession`] is the REPL that
//! feeds it user input and slash commands.

/// Slash command parsing and autocomplete.
pub mod command;
mod controller;
mod session;
mod state;
mod ui;

pub use controller::{BotReply, ChatController, FALLBACK_REPLY, PendingReply, Renderer};
pub use session::{ChatSession, SessionConfig};
pub use state::{ConversationState, Message, Sender};
