//! # neochat - Neo Support terminal chat client
//!
//! `neochat` is a small interactive chat client. Each message you type is sent
//! to a remote HTTP endpoint and the returned text is shown as the bot's reply.
//!
//! ## Features
//!
//! - **Single in-flight request**: a typing indicator is shown while the
//!   backend answers, and a fallback reply is shown if it cannot be reached
//! - **Localization**: English and Hindi interface strings
//! - **Themes**: light and dark color palettes
//! - **New chat**: clear the conversation with `/new`
//! - **Offline mode**: canned replies without any backend
//!
//! ## Quick Start
//!
//! ```bash
//! # Chat with the default backend (http://localhost:5000/predict)
//! neochat
//!
//! # Point at another backend, in Hindi, with the dark theme
//! neochat chat --endpoint http://chat.example.com/predict --language hi --theme dark
//! ```
//!
//! ## Configuration
//!
//! Settings are stored in `~/.config/neochat/config.toml`:
//!
//! ```toml
//! [neochat]
//! endpoint = "http://localhost:5000/predict"
//! language = "en"
//! theme = "light"
//! ```
//!
//! ## Wire protocol
//!
//! Requests are `POST {"message": "..."}`; a successful reply is
//! `{"response": "..."}`.

/// Backend clients that turn a user message into a bot reply.
pub mod backend;

/// Conversation state, the chat controller and the interactive session.
pub mod chat;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management.
pub mod config;

/// File system utilities.
pub mod fs;

/// Interface languages and their string tables.
pub mod i18n;

/// Tracing subscriber setup.
pub mod logging;

/// Global output configuration (colors).
pub mod output;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Terminal UI components (renderer, spinner, colors, themes).
pub mod ui;
