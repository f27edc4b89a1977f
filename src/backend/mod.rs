//! Backend clients.
//!
//! A backend turns one user message into one bot reply. The chat controller
//! only sees the [`BackendClient`] trait, so the HTTP client can be swapped for
//! the offline [`CannedBackend`] or a scripted client in tests.

mod canned;
mod error;
mod http;

pub use canned::CannedBackend;
pub use error::{BackendUnavailable, FailureCause};
pub use http::{DEFAULT_ENDPOINT, HttpBackend, parse_endpoint};

use std::future::Future;

use crate::i18n::LanguageCode;

/// Sends a user message and resolves to the bot's reply.
pub trait BackendClient: Send + Sync + 'static {
    /// Performs one round-trip for `message`.
    fn send(
        &self,
        message: &str,
    ) -> impl Future<Output = Result<String, BackendUnavailable>> + Send;

    /// Called when the interface language changes.
    fn language_changed(&self, _language: LanguageCode) {}
}
